//! Hypergeometric probability primitives.
//!
//! Provides the point-mass function of the hypergeometric distribution
//! ([`hypergeometric_pmf`], [`hypergeometric_pmf_vec`]) together with the
//! combinatorial helpers behind it ([`binomial`], [`ln_choose`],
//! [`ln_gamma`]).
//!
//! Point masses are computed as exact-integer binomial ratios whenever every
//! required coefficient fits in a `u64`, falling back to log-space otherwise.
//! The exact path evaluates every mass in one fixed order, so symmetric
//! outcomes produce bit-identical values; downstream consumers rely on exact
//! floating-point equality between tied masses.

use crate::{HypertestError, Result};

use core::f64::consts::PI;

/// Natural log of the gamma function via the Lanczos approximation (g=7).
pub fn ln_gamma(x: f64) -> f64 {
    const COEFFS: [f64; 8] = [
        676.5203681218851,
        -1259.1392167224028,
        771.32342877765313,
        -176.61502916214059,
        12.507343278686905,
        -0.13857109526572012,
        9.9843695780195716e-6,
        1.5056327351493116e-7,
    ];

    if x < 0.5 {
        // Reflection formula: Γ(x) = π / (sin(πx) · Γ(1-x))
        let log_pi_over_sin = (PI / (PI * x).sin()).ln();
        log_pi_over_sin - ln_gamma(1.0 - x)
    } else {
        let x = x - 1.0;
        let mut ag = 0.99999999999980993_f64;
        for (i, &c) in COEFFS.iter().enumerate() {
            ag += c / (x + i as f64 + 1.0);
        }
        let t = x + 7.5; // g + 0.5
        0.5 * (2.0 * PI).ln() + (x + 0.5) * t.ln() - t + ag.ln()
    }
}

/// Exact binomial coefficient C(n, k). Returns `None` on u64 overflow and
/// `Some(0)` when `k > n`.
pub fn binomial(n: u64, k: u64) -> Option<u64> {
    if k > n {
        return Some(0);
    }
    // Use the smaller of k and n-k for efficiency
    let k = k.min(n - k);
    let mut result = 1u64;
    for i in 0..k {
        result = result.checked_mul(n - i)?;
        result /= i + 1;
    }
    Some(result)
}

/// Log of binomial coefficient ln(C(n, k)). Returns `-inf` when `k > n`, so
/// that exponentiating yields an exact zero for out-of-support outcomes.
pub fn ln_choose(n: u64, k: u64) -> f64 {
    if k > n {
        return f64::NEG_INFINITY;
    }
    ln_gamma(n as f64 + 1.0) - ln_gamma(k as f64 + 1.0) - ln_gamma((n - k) as f64 + 1.0)
}

/// Check the hypergeometric parameter relationship.
///
/// Sampling without replacement cannot draw more items, or contain more
/// "good" items, than the population holds.
fn validate(population: u64, good: u64, draws: u64) -> Result<()> {
    if good > population {
        return Err(HypertestError::Domain(format!(
            "hypergeometric: good items ({}) exceed population ({})",
            good, population,
        )));
    }
    if draws > population {
        return Err(HypertestError::Domain(format!(
            "hypergeometric: sample size ({}) exceeds population ({})",
            draws, population,
        )));
    }
    Ok(())
}

/// Hypergeometric PMF: P(X = k) where X ~ Hypergeometric(N, G, n).
///
/// Probability of drawing exactly `k` good items in a sample of `draws`
/// taken without replacement from a population of `population` items
/// containing `good` good items:
///
/// ```text
/// P(X = k) = C(G, k) · C(N-G, n-k) / C(N, n)
/// ```
///
/// Out-of-support `k` yields `0.0`.
///
/// # Errors
///
/// Returns a domain error if `good > population` or `draws > population`.
pub fn hypergeometric_pmf(k: u64, population: u64, good: u64, draws: u64) -> Result<f64> {
    validate(population, good, draws)?;
    if k > draws {
        return Ok(0.0);
    }
    let bad = population - good;
    let exact = binomial(population, draws).and_then(|total| {
        let a = binomial(good, k)?;
        let b = binomial(bad, draws - k)?;
        Some((a as f64) * (b as f64) / (total as f64))
    });
    Ok(match exact {
        Some(p) => p,
        None => {
            let ln_p = ln_choose(good, k) + ln_choose(bad, draws - k) - ln_choose(population, draws);
            ln_p.exp()
        }
    })
}

/// Hypergeometric PMF over the full outcome space `k = 0..=draws`.
///
/// The returned vector has length `draws + 1` and sums to 1 up to
/// floating-point error. A single vector is always computed on one numeric
/// path (exact-integer or log-space), never a mix, so that equal point
/// masses compare bit-equal.
///
/// # Errors
///
/// Returns a domain error if `good > population` or `draws > population`.
pub fn hypergeometric_pmf_vec(population: u64, good: u64, draws: u64) -> Result<Vec<f64>> {
    validate(population, good, draws)?;
    match exact_pmf_vec(population, good, draws) {
        Some(pmf) => Ok(pmf),
        None => Ok(ln_pmf_vec(population, good, draws)),
    }
}

/// Exact-integer path. `None` if any required coefficient overflows u64.
fn exact_pmf_vec(population: u64, good: u64, draws: u64) -> Option<Vec<f64>> {
    let total = binomial(population, draws)? as f64;
    let bad = population - good;
    let mut pmf = Vec::with_capacity(draws as usize + 1);
    for k in 0..=draws {
        let a = binomial(good, k)? as f64;
        let b = binomial(bad, draws - k)? as f64;
        pmf.push(a * b / total);
    }
    Some(pmf)
}

/// Log-space fallback for parameters whose coefficients overflow u64.
fn ln_pmf_vec(population: u64, good: u64, draws: u64) -> Vec<f64> {
    let bad = population - good;
    let ln_total = ln_choose(population, draws);
    (0..=draws)
        .map(|k| (ln_choose(good, k) + ln_choose(bad, draws - k) - ln_total).exp())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    #[test]
    fn binomial_small_values() {
        assert_eq!(binomial(10, 5), Some(252));
        assert_eq!(binomial(10, 0), Some(1));
        assert_eq!(binomial(10, 10), Some(1));
        assert_eq!(binomial(52, 5), Some(2_598_960));
    }

    #[test]
    fn binomial_k_greater_than_n() {
        assert_eq!(binomial(5, 6), Some(0));
    }

    #[test]
    fn binomial_overflow() {
        // C(80, 40) ≈ 1.08e23 does not fit in u64
        assert_eq!(binomial(80, 40), None);
    }

    #[test]
    fn ln_choose_matches_exact() {
        let exact = binomial(30, 12).unwrap() as f64;
        assert!((ln_choose(30, 12).exp() - exact).abs() / exact < TOL);
    }

    #[test]
    fn ln_choose_out_of_support() {
        assert_eq!(ln_choose(3, 4), f64::NEG_INFINITY);
        assert_eq!(ln_choose(3, 4).exp(), 0.0);
    }

    #[test]
    fn ln_gamma_factorials() {
        // Γ(n+1) = n!
        assert!((ln_gamma(5.0).exp() - 24.0).abs() < 1e-8);
        assert!((ln_gamma(11.0).exp() - 3_628_800.0).abs() < 0.1);
    }

    #[test]
    fn pmf_reference_values() {
        // X ~ Hypergeometric(N=10, G=2, n=5): masses are exact ratios of
        // small binomials, so the equalities hold bit-for-bit.
        let pmf = hypergeometric_pmf_vec(10, 2, 5).unwrap();
        assert_eq!(pmf.len(), 6);
        assert_eq!(pmf[0], 56.0 / 252.0);
        assert_eq!(pmf[1], 140.0 / 252.0);
        assert_eq!(pmf[2], 56.0 / 252.0);
        assert_eq!(pmf[3], 0.0);
        assert_eq!(pmf[4], 0.0);
        assert_eq!(pmf[5], 0.0);
    }

    #[test]
    fn pmf_symmetric_masses_bit_equal() {
        // The exact-equality tie-break downstream depends on this.
        let pmf = hypergeometric_pmf_vec(10, 2, 5).unwrap();
        assert_eq!(pmf[0].to_bits(), pmf[2].to_bits());

        // X ~ Hypergeometric(10, 5, 5) is symmetric about 2.5
        let pmf = hypergeometric_pmf_vec(10, 5, 5).unwrap();
        for k in 0..=2 {
            assert_eq!(pmf[k].to_bits(), pmf[5 - k].to_bits());
        }
    }

    #[test]
    fn pmf_sums_to_one_exact_path() {
        let pmf = hypergeometric_pmf_vec(50, 20, 10).unwrap();
        let sum: f64 = pmf.iter().sum();
        assert!((sum - 1.0).abs() < TOL, "sum={}", sum);
    }

    #[test]
    fn pmf_sums_to_one_log_path() {
        // C(200, 100) overflows u64, forcing the log-space fallback.
        let pmf = hypergeometric_pmf_vec(200, 80, 100).unwrap();
        let sum: f64 = pmf.iter().sum();
        assert!((sum - 1.0).abs() < 1e-8, "sum={}", sum);
        assert!(pmf.iter().all(|&p| p >= 0.0));
    }

    #[test]
    fn pmf_scalar_matches_vector() {
        let pmf = hypergeometric_pmf_vec(30, 12, 8).unwrap();
        for (k, &p) in pmf.iter().enumerate() {
            assert_eq!(hypergeometric_pmf(k as u64, 30, 12, 8).unwrap(), p);
        }
    }

    #[test]
    fn pmf_out_of_support() {
        // k beyond the sample size
        assert_eq!(hypergeometric_pmf(6, 10, 2, 5).unwrap(), 0.0);
        // k beyond the number of good items
        assert_eq!(hypergeometric_pmf(3, 10, 2, 5).unwrap(), 0.0);
    }

    #[test]
    fn pmf_degenerate_sample() {
        // n = 0: the only outcome is k = 0, with certainty
        let pmf = hypergeometric_pmf_vec(10, 3, 0).unwrap();
        assert_eq!(pmf, vec![1.0]);
    }

    #[test]
    fn pmf_invalid_parameters() {
        assert!(hypergeometric_pmf_vec(10, 11, 5).is_err());
        assert!(hypergeometric_pmf_vec(10, 2, 11).is_err());
        assert!(hypergeometric_pmf(0, 10, 11, 5).is_err());
    }
}
