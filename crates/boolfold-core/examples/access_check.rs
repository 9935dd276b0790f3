//! Access Check Example
//!
//! Composes a permission check out of cheap and expensive conditions.
//! Run with `RUST_LOG=boolfold_core=trace` to see each fold terminate.

use boolfold_core::{
    all, any, any_of_or_identity, either, try_all, try_evaluate, BoxedTryCondition, Inverted, Or,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
enum LookupError {
    DirectoryUnavailable,
}

struct User {
    name: &'static str,
    is_admin: bool,
    suspended: bool,
    groups: Vec<&'static str>,
}

fn directory_lookup(user: &User, group: &str) -> Result<bool, LookupError> {
    println!("   (directory lookup: {} in {})", user.name, group);
    if group == "offline" {
        return Err(LookupError::DirectoryUnavailable);
    }
    Ok(user.groups.contains(&group))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== BoolFold Access Check Example ===\n");

    let alice = User {
        name: "alice",
        is_admin: true,
        suspended: false,
        groups: vec!["ops"],
    };
    let bob = User {
        name: "bob",
        is_admin: false,
        suspended: false,
        groups: vec!["dev"],
    };

    // 1. Macros: admins never reach the directory lookup
    println!("1. Macro composition");
    for user in [&alice, &bob] {
        let allowed = try_all!(
            Ok(user.suspended.inverted()),
            if any!(user.is_admin, user.name == "root") {
                Ok(true)
            } else {
                directory_lookup(user, "dev")
            },
        );
        println!("   {} allowed: {:?}", user.name, allowed);
    }

    // 2. Failures come back unchanged
    println!("\n2. Failure propagation");
    let outcome = try_all!(Ok(true), directory_lookup(&bob, "offline"));
    println!("   lookup against offline directory: {:?}", outcome);

    // 3. Diagnostic fold over a runtime list
    println!("\n3. Diagnostic fold");
    let checks: Vec<BoxedTryCondition<'_, LookupError>> = vec![
        Box::new(|| directory_lookup(&bob, "ops")),
        Box::new(|| directory_lookup(&bob, "dev")),
        Box::new(|| directory_lookup(&bob, "offline")),
    ];
    match try_evaluate::<Or, _, _>(checks) {
        Ok(evaluation) => println!(
            "   outcome={:?} evaluated={} termination={}",
            evaluation.outcome, evaluation.evaluated, evaluation.termination
        ),
        Err(err) => println!("   {}", err),
    }

    // 4. Exclusive OR and explicit identity fallback
    println!("\n4. Either / identity");
    println!("   exactly one admin: {}", either!(alice.is_admin, bob.is_admin));
    let no_checks: Vec<fn() -> bool> = Vec::new();
    println!("   any of no checks: {}", any_of_or_identity(no_checks));
    println!("   all of one check: {}", all!(alice.groups.is_empty().inverted()));

    println!("\n=== Example Complete ===");
}
