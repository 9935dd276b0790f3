//! Reference model for fold results
//!
//! Computes what a fold must produce by locating the first step that ends
//! it, independently of how the folds themselves are written.

use boolfold_core::{Connective, Termination};

/// One condition in a generated sequence
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Step {
    /// Condition yields this value
    Value(bool),
    /// Condition fails with this code
    Fail(u32),
}

impl Step {
    /// Run the step as a condition would
    pub fn run(self) -> Result<bool, u32> {
        match self {
            Step::Value(value) => Ok(value),
            Step::Fail(code) => Err(code),
        }
    }
}

/// Expected observation for one fold
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expected {
    pub outcome: Result<bool, u32>,
    pub evaluated: usize,
    pub termination: Termination,
}

/// Expected result of folding `steps` with `C`.
///
/// Returns `None` for an empty sequence, which has no defined value.
pub fn expected<C: Connective>(steps: &[Step]) -> Option<Expected> {
    if steps.is_empty() {
        return None;
    }

    let stop = steps.iter().position(|step| match *step {
        Step::Value(value) => value == C::DECISIVE,
        Step::Fail(_) => true,
    });

    let expected = match stop {
        Some(index) => match steps[index] {
            Step::Value(value) => Expected {
                outcome: Ok(value),
                evaluated: index + 1,
                termination: Termination::ShortCircuited,
            },
            Step::Fail(code) => Expected {
                outcome: Err(code),
                evaluated: index + 1,
                termination: Termination::Failed,
            },
        },
        None => {
            let value = steps.iter().fold(C::IDENTITY, |acc, step| match *step {
                Step::Value(value) => C::combine(acc, value),
                Step::Fail(_) => acc,
            });
            Expected {
                outcome: Ok(value),
                evaluated: steps.len(),
                termination: Termination::Exhausted,
            }
        }
    };

    Some(expected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use boolfold_core::{And, Or};

    #[test]
    fn test_empty() {
        assert_eq!(expected::<And>(&[]), None);
        assert_eq!(expected::<Or>(&[]), None);
    }

    #[test]
    fn test_and_short_circuit_hides_failure() {
        let steps = [Step::Value(false), Step::Fail(7)];
        assert_eq!(
            expected::<And>(&steps),
            Some(Expected {
                outcome: Ok(false),
                evaluated: 1,
                termination: Termination::ShortCircuited,
            })
        );
    }

    #[test]
    fn test_or_reaches_failure() {
        let steps = [Step::Value(false), Step::Fail(7), Step::Fail(8)];
        assert_eq!(
            expected::<Or>(&steps),
            Some(Expected {
                outcome: Err(7),
                evaluated: 2,
                termination: Termination::Failed,
            })
        );
    }

    #[test]
    fn test_exhausted() {
        let steps = [Step::Value(true); 5];
        assert_eq!(
            expected::<And>(&steps),
            Some(Expected {
                outcome: Ok(true),
                evaluated: 5,
                termination: Termination::Exhausted,
            })
        );
    }

    #[test]
    fn test_step_run() {
        assert_eq!(Step::Value(true).run(), Ok(true));
        assert_eq!(Step::Fail(3).run(), Err(3));
    }
}
