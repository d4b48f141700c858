//! Student's-t hypothesis tests
//!
//! Paired two-sample and one-sample t-tests with two-sided p-values from the
//! Student's-t CDF (statrs). Degenerate inputs where the t-statistic is
//! undefined are rejected rather than propagated as NaN.

use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::descriptive::{mean, sample_variance};
use crate::error::{Result, StatError};

/// Outcome of a t-test
#[derive(Debug, Clone, Copy)]
pub struct TTest {
    pub statistic: f64,
    /// Two-sided p-value
    pub p_value: f64,
    /// Degrees of freedom (N − 1)
    pub df: f64,
}

/// Two-sided p-value for a t-statistic with `df` degrees of freedom
fn two_sided_p(statistic: f64, df: f64) -> Result<f64> {
    let dist = StudentsT::new(0.0, 1.0, df)
        .map_err(|e| StatError::domain("t distribution", e.to_string()))?;
    Ok(2.0 * (1.0 - dist.cdf(statistic.abs())))
}

/// One-sample t-test of `values` against a fixed population mean
///
/// t = (x̄ − μ) / (s / √N) with sample standard deviation s, df = N − 1.
pub fn one_sample_ttest(values: &[f64], popmean: f64) -> Result<TTest> {
    if values.len() < 2 {
        return Err(StatError::domain(
            "one-sample t-test",
            format!("need at least 2 values, got {}", values.len()),
        ));
    }

    let n = values.len() as f64;
    let variance = sample_variance(values)?;
    if variance == 0.0 {
        return Err(StatError::domain(
            "one-sample t-test",
            "zero sample variance, t-statistic undefined",
        ));
    }

    let statistic = (mean(values) - popmean) / (variance.sqrt() / n.sqrt());
    let df = n - 1.0;
    Ok(TTest {
        statistic,
        p_value: two_sided_p(statistic, df)?,
        df,
    })
}

/// Paired two-sample t-test over equal-length columns
///
/// A one-sample test of the element-wise differences against zero.
pub fn paired_ttest(a: &[f64], b: &[f64]) -> Result<TTest> {
    if a.len() != b.len() {
        return Err(StatError::domain(
            "paired t-test",
            format!("columns differ in length: {} vs {}", a.len(), b.len()),
        ));
    }
    if a.len() < 2 {
        return Err(StatError::domain(
            "paired t-test",
            format!("need at least 2 pairs, got {}", a.len()),
        ));
    }

    let differences: Vec<f64> = a.iter().zip(b).map(|(x, y)| x - y).collect();
    one_sample_ttest(&differences, 0.0).map_err(|e| match e {
        StatError::Domain { reason, .. } => StatError::Domain {
            context: "paired t-test",
            reason,
        },
        other => other,
    })
}
