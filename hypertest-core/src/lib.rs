//! Shared primitives for the hypertest exact-testing crates.
//!
//! `hypertest-core` provides the foundation the other hypertest crates build
//! on:
//!
//! - **Error types** — [`HypertestError`] and [`Result`] for structured error
//!   handling
//! - **Traits** — [`Scored`] and [`Summarizable`] for result types
//! - **Probability primitives** — the hypergeometric point-mass function and
//!   the combinatorial helpers behind it

pub mod error;
pub mod prob;
pub mod traits;

pub use error::{HypertestError, Result};
pub use traits::*;
