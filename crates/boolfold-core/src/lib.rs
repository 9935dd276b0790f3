//! BoolFold Core - Short-circuiting boolean combinators
//!
//! This crate folds ordered sequences of lazy conditions:
//! - Connectives (`And`, `Or`) with identity and decisive values
//! - Folds that stop at the first decisive value or the first failure
//! - Exclusive OR and inversion
//! - `all!` / `any!` / `either!` macros and their fallible `try_` forms
//!
//! ```rust
//! use boolfold_core::{all, any, either, Inverted};
//!
//! let (a, b, c, d, e) = (false, true, true, false, true);
//! assert!(all!(any!(a, b.inverted(), either!(c, d)), e));
//! ```

pub mod connective;
pub mod error;
pub mod fold;
pub mod logic;
mod macros;

pub use connective::*;
pub use error::*;
pub use fold::*;
pub use logic::*;
