//! Descriptive statistics over a numeric column
//!
//! Conventions are fixed to keep the numbers reproducible:
//! - variance uses Bessel's correction (divide by N−1)
//! - skewness is the population-biased third standardized moment (divide by
//!   N, population standard deviation)
//! - kurtosis is the population-biased excess kurtosis (fourth standardized
//!   moment minus 3)

use crate::error::{Result, StatError};

/// Mean, sample variance, skewness, and excess kurtosis of one column
#[derive(Debug, Clone, Copy)]
pub struct Summary {
    pub mean: f64,
    pub variance: f64,
    pub skewness: f64,
    pub kurtosis: f64,
}

/// Arithmetic mean; 0.0 for an empty slice
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample variance with Bessel's correction (divide by N−1)
pub fn sample_variance(values: &[f64]) -> Result<f64> {
    if values.len() < 2 {
        return Err(StatError::domain(
            "sample variance",
            format!("need at least 2 values, got {}", values.len()),
        ));
    }
    let m = mean(values);
    let sum_sq = values.iter().map(|v| (v - m) * (v - m)).sum::<f64>();
    Ok(sum_sq / (values.len() - 1) as f64)
}

/// Central moment of order `k` (divide by N)
fn central_moment(values: &[f64], k: i32) -> f64 {
    let m = mean(values);
    values.iter().map(|v| (v - m).powi(k)).sum::<f64>() / values.len() as f64
}

/// Population-biased skewness: m3 / m2^(3/2)
///
/// Zero for a perfectly symmetric sample and for a constant sample (the
/// zero-spread case is reported as no asymmetry rather than NaN).
pub fn skewness(values: &[f64]) -> Result<f64> {
    if values.len() < 2 {
        return Err(StatError::domain(
            "skewness",
            format!("need at least 2 values, got {}", values.len()),
        ));
    }
    let m2 = central_moment(values, 2);
    if m2 == 0.0 {
        return Ok(0.0);
    }
    Ok(central_moment(values, 3) / m2.powf(1.5))
}

/// Population-biased excess kurtosis: m4 / m2^2 − 3
pub fn excess_kurtosis(values: &[f64]) -> Result<f64> {
    if values.len() < 2 {
        return Err(StatError::domain(
            "kurtosis",
            format!("need at least 2 values, got {}", values.len()),
        ));
    }
    let m2 = central_moment(values, 2);
    if m2 == 0.0 {
        return Ok(-3.0);
    }
    Ok(central_moment(values, 4) / (m2 * m2) - 3.0)
}

/// Full descriptive summary of one column
pub fn describe(values: &[f64]) -> Result<Summary> {
    Ok(Summary {
        mean: mean(values),
        variance: sample_variance(values)?,
        skewness: skewness(values)?,
        kurtosis: excess_kurtosis(values)?,
    })
}
