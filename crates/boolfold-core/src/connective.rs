//! Connectives and fold termination states
//!
//! A connective is the binary operator a fold applies between conditions:
//! - And: identity `true`, decided by the first `false`
//! - Or: identity `false`, decided by the first `true`

use std::fmt;

/// A short-circuiting boolean operator.
///
/// The decisive value is always the negation of the identity: once the
/// accumulator leaves the identity it can never change again.
pub trait Connective {
    /// Value an empty fold would produce
    const IDENTITY: bool;

    /// Value at which evaluation stops
    const DECISIVE: bool = !Self::IDENTITY;

    /// Name used in diagnostics and log events
    const NAME: &'static str;

    /// Combine the accumulator with the next evaluated condition
    fn combine(accumulated: bool, next: bool) -> bool;

    /// Whether the accumulator already determines the result
    #[inline]
    fn is_decided(accumulated: bool) -> bool {
        accumulated == Self::DECISIVE
    }
}

/// Logical AND
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct And;

impl Connective for And {
    const IDENTITY: bool = true;
    const NAME: &'static str = "all";

    #[inline]
    fn combine(accumulated: bool, next: bool) -> bool {
        accumulated && next
    }
}

/// Logical OR
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Or;

impl Connective for Or {
    const IDENTITY: bool = false;
    const NAME: &'static str = "any";

    #[inline]
    fn combine(accumulated: bool, next: bool) -> bool {
        accumulated || next
    }
}

/// How a fold came to an end
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Termination {
    /// The decisive value was reached; any remaining conditions were skipped
    ShortCircuited,
    /// Every condition was evaluated without reaching the decisive value
    Exhausted,
    /// A condition raised a failure; remaining conditions were skipped
    Failed,
}

impl Termination {
    /// Whether any conditions may have been left unevaluated
    pub fn stopped_early(self) -> bool {
        !matches!(self, Termination::Exhausted)
    }

    /// Short name for log events
    pub fn name(self) -> &'static str {
        match self {
            Termination::ShortCircuited => "short-circuited",
            Termination::Exhausted => "exhausted",
            Termination::Failed => "failed",
        }
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
