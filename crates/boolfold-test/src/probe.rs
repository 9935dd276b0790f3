//! Counting probes
//!
//! A probe hands out conditions that record their own invocation, so a test
//! can assert exactly which conditions a fold ran and in what order.

use std::cell::{Cell, RefCell};

use boolfold_core::BoxedTryCondition;

use crate::reference::Step;

/// Records invocations of the conditions it creates
#[derive(Debug, Default)]
pub struct Probe {
    calls: Cell<usize>,
    order: RefCell<Vec<usize>>,
}

impl Probe {
    pub fn new() -> Self {
        Probe::default()
    }

    fn record(&self, index: usize) {
        self.calls.set(self.calls.get() + 1);
        self.order.borrow_mut().push(index);
    }

    /// Condition yielding `value`
    pub fn yields(&self, index: usize, value: bool) -> impl FnOnce() -> bool + '_ {
        move || {
            self.record(index);
            value
        }
    }

    /// Fallible condition yielding `Ok(value)`
    pub fn succeeds<'a, E: 'a>(
        &'a self,
        index: usize,
        value: bool,
    ) -> impl FnOnce() -> Result<bool, E> + 'a {
        move || {
            self.record(index);
            Ok(value)
        }
    }

    /// Fallible condition failing with `err`
    pub fn fails<'a, E: 'a>(&'a self, index: usize, err: E) -> impl FnOnce() -> Result<bool, E> + 'a {
        move || {
            self.record(index);
            Err(err)
        }
    }

    /// One boxed condition per step, indexed by position
    pub fn conditions(&self, steps: &[Step]) -> Vec<BoxedTryCondition<'_, u32>> {
        let mut conditions: Vec<BoxedTryCondition<'_, u32>> = Vec::with_capacity(steps.len());
        for (index, &step) in steps.iter().enumerate() {
            conditions.push(Box::new(move || {
                self.record(index);
                step.run()
            }));
        }
        conditions
    }

    /// Number of conditions invoked so far
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    /// Indices of invoked conditions, in invocation order
    pub fn order(&self) -> Vec<usize> {
        self.order.borrow().clone()
    }

    /// Whether the condition at `index` ran
    pub fn was_invoked(&self, index: usize) -> bool {
        self.order.borrow().contains(&index)
    }

    /// Forget all recorded invocations
    pub fn reset(&self) {
        self.calls.set(0);
        self.order.borrow_mut().clear();
    }
}
