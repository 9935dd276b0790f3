//! BoolFold Test Harness - Probes, reference model and randomized sweeps
//!
//! This crate provides:
//! - Counting probes that record which conditions were invoked
//! - A reference model of the expected fold results
//! - Truth-table enumeration
//! - Seeded randomized sweeps checked against the reference model

pub mod probe;
pub mod reference;
pub mod sweep;
pub mod truth;

pub use probe::*;
pub use reference::*;
pub use sweep::*;
pub use truth::*;
