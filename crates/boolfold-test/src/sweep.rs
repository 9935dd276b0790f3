//! Randomized Sweeps - Seeded checks of the folds against the reference model
//!
//! Each round generates a random step sequence and folds it with both
//! connectives, checking:
//! - Outcome, including which failure surfaced
//! - Number of conditions invoked
//! - Strict left-to-right invocation order
//! - Terminal state

use boolfold_core::{try_evaluate, And, Connective, FoldError, Or, Termination};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::probe::Probe;
use crate::reference::{expected, Step};

/// Sweep configuration
#[derive(Clone, Debug)]
pub struct SweepConfig {
    /// Number of generated sequences
    pub rounds: usize,
    /// Longest generated sequence (empty sequences are included)
    pub max_len: usize,
    /// Probability that a step fails (0.0 - 1.0)
    pub fail_prob: f64,
    /// Probability that a non-failing step yields `true` (0.0 - 1.0)
    pub true_prob: f64,
    /// Random seed
    pub seed: u64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        SweepConfig {
            rounds: 1000,
            max_len: 16,
            fail_prob: 0.1,
            true_prob: 0.5,
            seed: 42,
        }
    }
}

impl SweepConfig {
    /// Quick sweep for unit tests
    pub fn light() -> Self {
        SweepConfig {
            rounds: 100,
            max_len: 8,
            ..Default::default()
        }
    }

    /// Long sequences biased toward the identity of each connective
    pub fn heavy() -> Self {
        SweepConfig {
            rounds: 10_000,
            max_len: 64,
            fail_prob: 0.02,
            true_prob: 0.5,
            seed: 42,
        }
    }

    /// Use a different seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// A disagreement between a fold and the reference model
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SweepError {
    #[error("round {round} ({connective}): expected outcome {expected:?}, got {actual:?}")]
    OutcomeMismatch {
        round: usize,
        connective: &'static str,
        expected: Result<bool, u32>,
        actual: Result<bool, u32>,
    },

    #[error("round {round} ({connective}): expected {expected} conditions invoked, got {actual}")]
    EvaluatedMismatch {
        round: usize,
        connective: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("round {round} ({connective}): invocation order {order:?} is not left to right")]
    OrderViolation {
        round: usize,
        connective: &'static str,
        order: Vec<usize>,
    },

    #[error("round {round} ({connective}): expected {expected} termination, got {actual}")]
    TerminationMismatch {
        round: usize,
        connective: &'static str,
        expected: Termination,
        actual: Termination,
    },

    #[error("round {round} ({connective}): {source}")]
    Fold {
        round: usize,
        connective: &'static str,
        #[source]
        source: FoldError,
    },
}

/// Result type for sweeps
pub type SweepResult<T> = Result<T, SweepError>;

/// Tally of what a sweep exercised
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SweepReport {
    pub folds: usize,
    pub empty: usize,
    pub short_circuited: usize,
    pub exhausted: usize,
    pub failed: usize,
    pub conditions_invoked: usize,
    pub conditions_skipped: usize,
}

impl SweepReport {
    fn record(&mut self, termination: Termination, invoked: usize, total: usize) {
        self.folds += 1;
        self.conditions_invoked += invoked;
        self.conditions_skipped += total - invoked;
        match termination {
            Termination::ShortCircuited => self.short_circuited += 1,
            Termination::Exhausted => self.exhausted += 1,
            Termination::Failed => self.failed += 1,
        }
    }

    /// Fraction of conditions that short-circuiting avoided
    pub fn skip_rate(&self) -> f64 {
        let total = self.conditions_invoked + self.conditions_skipped;
        if total == 0 {
            0.0
        } else {
            self.conditions_skipped as f64 / total as f64
        }
    }
}

/// Seeded sweep runner
pub struct Sweep {
    config: SweepConfig,
    rng: StdRng,
    report: SweepReport,
}

impl Sweep {
    pub fn new(config: SweepConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Sweep {
            config,
            rng,
            report: SweepReport::default(),
        }
    }

    /// Generate one step sequence
    pub fn generate(&mut self) -> Vec<Step> {
        let len = self.rng.gen_range(0..=self.config.max_len);
        let mut steps = Vec::with_capacity(len);
        for index in 0..len {
            let step = if self.rng.gen_bool(self.config.fail_prob) {
                Step::Fail(index as u32)
            } else {
                Step::Value(self.rng.gen_bool(self.config.true_prob))
            };
            steps.push(step);
        }
        steps
    }

    /// Run every round with both connectives, stopping at the first mismatch
    pub fn run(&mut self) -> SweepResult<SweepReport> {
        for round in 0..self.config.rounds {
            let steps = self.generate();
            self.check::<And>(round, &steps)?;
            self.check::<Or>(round, &steps)?;
        }
        Ok(self.report.clone())
    }

    /// Fold `steps` with `C` and compare against the reference model
    pub fn check<C: Connective>(&mut self, round: usize, steps: &[Step]) -> SweepResult<()> {
        let connective = C::NAME;
        let probe = Probe::new();
        let result = try_evaluate::<C, _, _>(probe.conditions(steps));

        let (expected, evaluation) = match (expected::<C>(steps), result) {
            (None, Err(_)) => {
                if probe.calls() != 0 {
                    return Err(SweepError::EvaluatedMismatch {
                        round,
                        connective,
                        expected: 0,
                        actual: probe.calls(),
                    });
                }
                self.report.empty += 1;
                return Ok(());
            }
            (None, Ok(evaluation)) => {
                return Err(SweepError::EvaluatedMismatch {
                    round,
                    connective,
                    expected: 0,
                    actual: evaluation.evaluated,
                });
            }
            (Some(_), Err(source)) => {
                return Err(SweepError::Fold {
                    round,
                    connective,
                    source,
                });
            }
            (Some(expected), Ok(evaluation)) => (expected, evaluation),
        };

        if evaluation.outcome != expected.outcome {
            return Err(SweepError::OutcomeMismatch {
                round,
                connective,
                expected: expected.outcome,
                actual: evaluation.outcome,
            });
        }

        for actual in [evaluation.evaluated, probe.calls()] {
            if actual != expected.evaluated {
                return Err(SweepError::EvaluatedMismatch {
                    round,
                    connective,
                    expected: expected.evaluated,
                    actual,
                });
            }
        }

        let order = probe.order();
        if !order.iter().copied().eq(0..expected.evaluated) {
            return Err(SweepError::OrderViolation {
                round,
                connective,
                order,
            });
        }

        if evaluation.termination != expected.termination {
            return Err(SweepError::TerminationMismatch {
                round,
                connective,
                expected: expected.termination,
                actual: evaluation.termination,
            });
        }

        self.report
            .record(evaluation.termination, evaluation.evaluated, steps.len());
        Ok(())
    }

    /// Tally so far
    pub fn report(&self) -> &SweepReport {
        &self.report
    }
}

/// Run a sweep with the given configuration
pub fn run_sweep(config: SweepConfig) -> SweepResult<SweepReport> {
    Sweep::new(config).run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_sweep_passes() {
        let report = run_sweep(SweepConfig::light()).unwrap();
        assert_eq!(report.folds + report.empty, 200);
        assert!(report.short_circuited > 0);
        assert!(report.failed > 0);
    }

    #[test]
    fn test_generate_is_deterministic() {
        let mut a = Sweep::new(SweepConfig::default().with_seed(7));
        let mut b = Sweep::new(SweepConfig::default().with_seed(7));
        for _ in 0..20 {
            assert_eq!(a.generate(), b.generate());
        }
    }

    #[test]
    fn test_generate_respects_max_len() {
        let mut sweep = Sweep::new(SweepConfig::light());
        for _ in 0..100 {
            assert!(sweep.generate().len() <= 8);
        }
    }

    #[test]
    fn test_check_counts_empty() {
        let mut sweep = Sweep::new(SweepConfig::light());
        sweep.check::<And>(0, &[]).unwrap();
        sweep.check::<Or>(0, &[]).unwrap();
        assert_eq!(sweep.report().empty, 2);
        assert_eq!(sweep.report().folds, 0);
    }

    #[test]
    fn test_skip_rate() {
        let mut sweep = Sweep::new(SweepConfig::light());
        sweep
            .check::<And>(0, &[Step::Value(false), Step::Value(true), Step::Value(true)])
            .unwrap();
        let report = sweep.report();
        assert_eq!(report.conditions_invoked, 1);
        assert_eq!(report.conditions_skipped, 2);
        assert!((report.skip_rate() - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_error_display() {
        let err = SweepError::TerminationMismatch {
            round: 3,
            connective: "all",
            expected: Termination::Exhausted,
            actual: Termination::ShortCircuited,
        };
        assert_eq!(
            err.to_string(),
            "round 3 (all): expected exhausted termination, got short-circuited"
        );
    }
}
