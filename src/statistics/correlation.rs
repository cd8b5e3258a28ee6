//! Pearson correlation and its two-sided significance test.

use crate::error::{Error, Result};

use super::distributions::student_t_two_sided_pvalue;

/// Correlations this close to ±1 short-circuit to p = 0 instead of
/// dividing by a vanishing 1 - r².
const UNITY_EPS: f64 = 1e-12;

/// Outcome of a two-sided Pearson correlation test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrelationTest {
    /// Estimated correlation coefficient.
    pub r: f64,
    /// t statistic, `r * sqrt((n-2) / (1-r²))`. Signed infinity when the
    /// correlation is exactly ±1.
    pub t: f64,
    /// Degrees of freedom, n - 2.
    pub df: usize,
    /// Two-sided p-value under the null hypothesis of zero correlation.
    pub p_value: f64,
    /// Whether `p_value < alpha` (strict comparison).
    pub significant: bool,
}

/// Compute the Pearson correlation coefficient of two paired slices.
///
/// # Errors
///
/// - `InvalidParameter` if the slices differ in length or hold fewer than
///   two observations.
/// - `DegenerateSample` if either variable has zero variance.
pub fn pearson_r(x: &[f64], y: &[f64]) -> Result<f64> {
    if x.len() != y.len() {
        return Err(Error::invalid(
            "sample",
            format!("paired variables differ in length: {} vs {}", x.len(), y.len()),
        ));
    }
    let n = x.len();
    if n < 2 {
        return Err(Error::invalid(
            "sample",
            format!("correlation needs at least 2 observations, got {n}"),
        ));
    }

    let n_f = n as f64;
    let mean_x = x.iter().sum::<f64>() / n_f;
    let mean_y = y.iter().sum::<f64>() / n_f;

    let mut ss_x = 0.0;
    let mut ss_y = 0.0;
    let mut s_xy = 0.0;
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        ss_x += dx * dx;
        ss_y += dy * dy;
        s_xy += dx * dy;
    }

    if ss_x == 0.0 {
        return Err(Error::DegenerateSample { variable: "x" });
    }
    if ss_y == 0.0 {
        return Err(Error::DegenerateSample { variable: "y" });
    }

    // Rounding can push the ratio marginally past ±1.
    Ok((s_xy / (ss_x * ss_y).sqrt()).clamp(-1.0, 1.0))
}

/// Test whether the correlation of two paired slices differs from zero.
///
/// The p-value is the exact two-sided Student-t tail probability for
/// `t = r * sqrt((n-2) / (1-r²))` with `n-2` degrees of freedom. A
/// correlation within [`UNITY_EPS`] of ±1 short-circuits to `p = 0`
/// (always significant) so boundary samples never produce NaN.
///
/// # Errors
///
/// - `InvalidParameter` if `alpha` is outside (0, 1) or the slices are
///   unusable (length mismatch, fewer than two observations).
/// - `DegenerateSample` if either variable has zero variance.
pub fn correlation_test(x: &[f64], y: &[f64], alpha: f64) -> Result<CorrelationTest> {
    if !(alpha > 0.0 && alpha < 1.0) {
        return Err(Error::invalid(
            "alpha",
            format!("must be in (0, 1), got {alpha}"),
        ));
    }

    let r = pearson_r(x, y)?;
    let df = x.len() - 2;

    let (t, p_value) = if r.abs() >= 1.0 - UNITY_EPS {
        (r.signum() * f64::INFINITY, 0.0)
    } else {
        let t = r * (df as f64 / (1.0 - r * r)).sqrt();
        (t, student_t_two_sided_pvalue(t, df as f64))
    };

    Ok(CorrelationTest {
        r,
        t,
        df,
        p_value,
        significant: p_value < alpha,
    })
}
