//! Structured error types for the hypertest crates.

use thiserror::Error;

/// Unified error type for all hypertest operations.
///
/// Every failure is a deterministic function of the inputs; there is no
/// transient or retryable category.
#[derive(Debug, Error)]
pub enum HypertestError {
    /// Invalid parameter relationship (e.g. more "good" items than the
    /// population holds, or a significance level outside (0, 1)).
    #[error("domain error: {0}")]
    Domain(String),

    /// The iterative region construction exhausted the outcome space before
    /// accumulating the requested tail probability.
    #[error("construction error: {0}")]
    Construction(String),

    /// A numeric quantity came out zero or non-finite where a strictly
    /// positive value is required.
    #[error("numeric error: {0}")]
    Numeric(String),
}

/// Convenience alias used throughout the hypertest crates.
pub type Result<T> = std::result::Result<T, HypertestError>;
