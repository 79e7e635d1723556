//! Exact statistical tests on small discrete outcome spaces.
//!
//! - **Acceptance regions** ([`accept`]) — randomized, exact-level acceptance
//!   regions for the one-sample hypergeometric test underlying Fisher's
//!   exact test
//! - **Two-sample chi-square** ([`chisq`]) — pooled-frequency chi-square
//!   statistic for two samples

pub mod accept;
pub mod chisq;

pub use accept::{acceptance_region, fisher_accept, AcceptanceRegion};
pub use chisq::chisq_two_sample;
