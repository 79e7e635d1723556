//! Two-sample chi-square statistic.
//!
//! Compares the empirical frequency table of one sample against the
//! frequencies expected from the pooled distribution of both samples. This is
//! a standalone descriptive statistic; it shares no machinery with the
//! acceptance-region builder in [`crate::accept`].

use hypertest_core::{HypertestError, Result};

/// Chi-square statistic for two samples.
///
/// Pools `x` and `y`, and for each distinct pooled value compares the count
/// observed in `x` against the count expected under the pooled frequencies:
///
/// ```text
/// χ² = Σ_v (O_v - E_v)² / E_v,   E_v = |x| · count_pooled(v) / (|x| + |y|)
/// ```
///
/// Identical samples give exactly 0.
///
/// # Errors
///
/// Returns a domain error if either sample is empty or contains a non-finite
/// value.
pub fn chisq_two_sample(x: &[f64], y: &[f64]) -> Result<f64> {
    if x.is_empty() || y.is_empty() {
        return Err(HypertestError::Domain(
            "chisq_two_sample: both samples must be non-empty".into(),
        ));
    }
    if x.iter().chain(y.iter()).any(|v| !v.is_finite()) {
        return Err(HypertestError::Domain(
            "chisq_two_sample: samples must be finite".into(),
        ));
    }

    let n = x.len() as f64;
    let total = (x.len() + y.len()) as f64;

    // Pool both samples, tagging values from x, and walk runs of equal
    // values in sorted order.
    let mut pooled: Vec<(f64, bool)> = x
        .iter()
        .map(|&v| (v, true))
        .chain(y.iter().map(|&v| (v, false)))
        .collect();
    pooled.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut chi = 0.0;
    let mut i = 0;
    while i < pooled.len() {
        let v = pooled[i].0;
        let mut count_pooled = 0.0;
        let mut count_x = 0.0;
        while i < pooled.len() && pooled[i].0 == v {
            count_pooled += 1.0;
            if pooled[i].1 {
                count_x += 1.0;
            }
            i += 1;
        }
        let expected = n * (count_pooled / total);
        let diff = count_x - expected;
        chi += diff * diff / expected;
    }

    Ok(chi)
}
