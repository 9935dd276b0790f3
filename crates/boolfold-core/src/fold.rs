//! Short-circuiting folds over lazy conditions
//!
//! Conditions are zero-argument closures invoked strictly left to right.
//! A fold stops as soon as its connective's decisive value is reached or a
//! condition fails; nothing after that point is ever invoked.
//!
//! Empty input has no silent default: [`all_of`] and [`any_of`] return
//! `None`, and the identity value is only available through the explicitly
//! named `_or_identity` operations.

use std::convert::Infallible;

use tracing::{debug, trace};

use crate::{And, Connective, FoldError, FoldResult, Or, Termination};

/// A boxed condition, for lists mixing different closure types
pub type BoxedCondition<'a> = Box<dyn FnOnce() -> bool + 'a>;

/// A boxed fallible condition
pub type BoxedTryCondition<'a, E> = Box<dyn FnOnce() -> Result<bool, E> + 'a>;

/// Record of a single fold
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Evaluation<E = Infallible> {
    /// Final value, or the failure raised by the first failing condition
    pub outcome: Result<bool, E>,
    /// Number of conditions actually invoked
    pub evaluated: usize,
    /// How the fold ended
    pub termination: Termination,
}

impl<E> Evaluation<E> {
    /// Unwrap into the caller-facing result
    pub fn into_result(self) -> Result<bool, E> {
        self.outcome
    }

    /// Whether a condition raised a failure
    pub fn is_failed(&self) -> bool {
        self.termination == Termination::Failed
    }
}

impl Evaluation<Infallible> {
    /// Final value of an infallible fold
    pub fn value(&self) -> bool {
        match &self.outcome {
            Ok(value) => *value,
            Err(never) => match *never {},
        }
    }
}

/// Fold fallible conditions with the connective `C`.
///
/// The first failure is returned inside the [`Evaluation`] exactly as the
/// condition raised it. Fails with [`FoldError::NoConditions`] only when
/// `conditions` is empty.
pub fn try_evaluate<C, I, E>(conditions: I) -> FoldResult<Evaluation<E>>
where
    C: Connective,
    I: IntoIterator,
    I::Item: FnOnce() -> Result<bool, E>,
{
    let mut accumulated = C::IDENTITY;
    let mut evaluated = 0usize;

    for condition in conditions {
        evaluated += 1;

        match condition() {
            Ok(next) => accumulated = C::combine(accumulated, next),
            Err(err) => {
                trace!(connective = C::NAME, evaluated, "condition failed, fold stopped");
                return Ok(Evaluation {
                    outcome: Err(err),
                    evaluated,
                    termination: Termination::Failed,
                });
            }
        }

        if C::is_decided(accumulated) {
            trace!(connective = C::NAME, evaluated, "fold short-circuited");
            return Ok(Evaluation {
                outcome: Ok(accumulated),
                evaluated,
                termination: Termination::ShortCircuited,
            });
        }
    }

    if evaluated == 0 {
        return Err(FoldError::NoConditions(C::NAME));
    }

    trace!(connective = C::NAME, evaluated, "fold exhausted");
    Ok(Evaluation {
        outcome: Ok(accumulated),
        evaluated,
        termination: Termination::Exhausted,
    })
}

/// Fold infallible conditions with the connective `C`.
pub fn evaluate<C, I>(conditions: I) -> FoldResult<Evaluation>
where
    C: Connective,
    I: IntoIterator,
    I::Item: FnOnce() -> bool,
{
    try_evaluate::<C, _, Infallible>(
        conditions
            .into_iter()
            .map(|condition| move || Ok::<bool, Infallible>(condition())),
    )
}

fn or_identity<C: Connective>(result: Option<bool>) -> bool {
    result.unwrap_or_else(|| {
        debug!(
            connective = C::NAME,
            identity = C::IDENTITY,
            "empty condition list, falling back to identity value"
        );
        C::IDENTITY
    })
}

/// `true` if every condition holds, stopping at the first `false`.
///
/// Returns `None` for an empty list.
pub fn all_of<I>(conditions: I) -> Option<bool>
where
    I: IntoIterator,
    I::Item: FnOnce() -> bool,
{
    evaluate::<And, _>(conditions)
        .ok()
        .map(|evaluation| evaluation.value())
}

/// `true` if any condition holds, stopping at the first `true`.
///
/// Returns `None` for an empty list.
pub fn any_of<I>(conditions: I) -> Option<bool>
where
    I: IntoIterator,
    I::Item: FnOnce() -> bool,
{
    evaluate::<Or, _>(conditions)
        .ok()
        .map(|evaluation| evaluation.value())
}

/// Like [`all_of`], but an empty list evaluates to `true`.
pub fn all_of_or_identity<I>(conditions: I) -> bool
where
    I: IntoIterator,
    I::Item: FnOnce() -> bool,
{
    or_identity::<And>(all_of(conditions))
}

/// Like [`any_of`], but an empty list evaluates to `false`.
pub fn any_of_or_identity<I>(conditions: I) -> bool
where
    I: IntoIterator,
    I::Item: FnOnce() -> bool,
{
    or_identity::<Or>(any_of(conditions))
}

/// Fallible [`all_of`]: re-raises the first failure unchanged.
///
/// A `false` reached before any failure ends the fold, so failures from
/// later conditions can never surface.
pub fn try_all_of<I, E>(conditions: I) -> Result<Option<bool>, E>
where
    I: IntoIterator,
    I::Item: FnOnce() -> Result<bool, E>,
{
    try_evaluate::<And, _, E>(conditions)
        .ok()
        .map(Evaluation::into_result)
        .transpose()
}

/// Fallible [`any_of`]: re-raises the first failure unchanged.
pub fn try_any_of<I, E>(conditions: I) -> Result<Option<bool>, E>
where
    I: IntoIterator,
    I::Item: FnOnce() -> Result<bool, E>,
{
    try_evaluate::<Or, _, E>(conditions)
        .ok()
        .map(Evaluation::into_result)
        .transpose()
}

/// Like [`try_all_of`], but an empty list evaluates to `Ok(true)`.
pub fn try_all_of_or_identity<I, E>(conditions: I) -> Result<bool, E>
where
    I: IntoIterator,
    I::Item: FnOnce() -> Result<bool, E>,
{
    try_all_of(conditions).map(or_identity::<And>)
}

/// Like [`try_any_of`], but an empty list evaluates to `Ok(false)`.
pub fn try_any_of_or_identity<I, E>(conditions: I) -> Result<bool, E>
where
    I: IntoIterator,
    I::Item: FnOnce() -> Result<bool, E>,
{
    try_any_of(conditions).map(or_identity::<Or>)
}
