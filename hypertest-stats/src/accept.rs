//! Acceptance regions for the randomized exact hypergeometric test.
//!
//! For X ~ Hypergeometric(N, G, n) and a significance level alpha, the region
//! builder partitions the outcome space {0, ..., n} into an always-accept set
//! I, a boundary set J of one or two outcomes where rejection is randomized,
//! and the randomization probability gamma that makes the test's rejection
//! probability equal alpha exactly rather than merely bounding it. The region
//! is the smallest achievable by greedy endpoint removal and is generally not
//! symmetric around the mode.
//!
//! For a non-randomized, conservative test, use the union of I and J as the
//! acceptance region.

use hypertest_core::prob::hypergeometric_pmf_vec;
use hypertest_core::{HypertestError, Result, Scored, Summarizable};

/// A randomized acceptance region at exact level alpha.
#[derive(Debug, Clone, PartialEq)]
pub struct AcceptanceRegion {
    /// Outcomes for which the test never rejects (I), ascending.
    pub accept: Vec<u64>,
    /// Outcomes for which rejection is randomized (J), ascending; always one
    /// or two values, and always extremes of the space remaining when they
    /// were selected.
    pub boundary: Vec<u64>,
    /// Probability that the test accepts when the outcome falls in the
    /// boundary set. Rejecting boundary outcomes with probability
    /// `1 - gamma` gives a total rejection probability of exactly alpha.
    pub gamma: f64,
}

impl Scored for AcceptanceRegion {
    fn score(&self) -> f64 {
        self.gamma
    }
}

impl Summarizable for AcceptanceRegion {
    fn summary(&self) -> String {
        format!(
            "|I|={}, J={:?}, gamma={:.6}",
            self.accept.len(),
            self.boundary,
            self.gamma,
        )
    }
}

fn check_alpha(alpha: f64) -> Result<()> {
    // The negated comparison also rejects NaN.
    if !(alpha > 0.0 && alpha < 1.0) {
        return Err(HypertestError::Domain(format!(
            "significance level must lie in (0, 1), got {}",
            alpha,
        )));
    }
    Ok(())
}

/// Acceptance region for the randomized hypergeometric test.
///
/// Finds the smallest acceptance region for a randomized, exact level
/// `alpha` test of the null hypothesis X ~ Hypergeometric(`population`,
/// `good`, `draws`).
///
/// # Errors
///
/// Returns a domain error if `good > population`, `draws > population`, or
/// `alpha` is outside (0, 1).
///
/// # Example
///
/// ```
/// use hypertest_stats::accept::fisher_accept;
///
/// let region = fisher_accept(10, 2, 5, 0.05).unwrap();
/// assert_eq!(region.accept, vec![1]);
/// assert_eq!(region.boundary, vec![0, 2]);
/// assert!((region.gamma - 0.8875).abs() < 1e-12);
/// ```
pub fn fisher_accept(population: u64, good: u64, draws: u64, alpha: f64) -> Result<AcceptanceRegion> {
    check_alpha(alpha)?;
    let pmf = hypergeometric_pmf_vec(population, good, draws)?;
    acceptance_region(&pmf, alpha)
}

/// Build the acceptance region for an arbitrary discrete point-mass vector.
///
/// `pmf[k]` is the probability of outcome `k`; the outcome space is
/// `0..pmf.len()`. Starting from the full space, the builder greedily removes
/// whichever endpoint currently carries less mass (both on an exact tie)
/// until the removed mass reaches `alpha`, then computes gamma from the
/// final removal. Mass comparisons use exact floating-point equality; point
/// masses that should tie must compare bit-equal.
///
/// # Errors
///
/// - domain error if `pmf` is empty or `alpha` is outside (0, 1)
/// - construction error if the space is exhausted before the removed mass
///   reaches `alpha` (total mass below alpha, e.g. a degenerate supplier)
/// - numeric error if the final boundary mass is zero or non-finite, which
///   leaves gamma undefined
pub fn acceptance_region(pmf: &[f64], alpha: f64) -> Result<AcceptanceRegion> {
    check_alpha(alpha)?;
    if pmf.is_empty() {
        return Err(HypertestError::Domain(
            "acceptance_region: point-mass vector is empty".into(),
        ));
    }

    let mut bottom = 0usize; // smallest outcome still in I
    let mut top = pmf.len() - 1; // largest outcome still in I
    let mut boundary: Vec<usize> = Vec::new();
    let mut p_boundary = 0.0; // mass of the current boundary set
    let mut p_tail = 0.0; // mass removed from I so far

    while p_tail < alpha {
        if bottom > top {
            return Err(HypertestError::Construction(format!(
                "outcome space exhausted at removed mass {} before reaching alpha {}",
                p_tail, alpha,
            )));
        }
        let pb = pmf[bottom];
        let pt = pmf[top];
        if pb < pt {
            // the lower endpoint has smaller mass
            boundary = vec![bottom];
            p_boundary = pb;
            bottom += 1;
        } else if pb > pt {
            // the upper endpoint has smaller mass; pb != pt implies
            // bottom < top, so top >= 1 here
            boundary = vec![top];
            p_boundary = pt;
            top -= 1;
        } else if bottom < top {
            // exact tie: remove both endpoints
            boundary = vec![bottom, top];
            p_boundary = pb + pt;
            bottom += 1;
            top -= 1;
        } else {
            // single outcome left
            boundary = vec![bottom];
            p_boundary = pb;
            bottom += 1;
        }
        p_tail += p_boundary;
    }

    if !(p_boundary.is_finite() && p_boundary > 0.0) {
        return Err(HypertestError::Numeric(format!(
            "boundary mass {} leaves the randomization probability undefined",
            p_boundary,
        )));
    }

    // Only endpoints are ever removed, so the survivors are exactly the
    // contiguous block bottom..=top.
    let accept = (bottom..=top).map(|k| k as u64).collect();
    let boundary = boundary.into_iter().map(|k| k as u64).collect();
    let gamma = (p_tail - alpha) / p_boundary;

    Ok(AcceptanceRegion {
        accept,
        boundary,
        gamma,
    })
}
