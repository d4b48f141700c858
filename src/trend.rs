//! Least-squares trend fit and line integration
//!
//! Fits accuracy-over-year with the closed-form OLS estimator, integrates the
//! fitted line exactly over the observed year range, and compares the line's
//! average with the arithmetic mean of the observations. For a straight line
//! the antiderivative is exact, so no quadrature tolerance is involved.

use crate::descriptive::mean;
use crate::error::{Result, StatError};

/// Ordinary least-squares line `y = slope * x + intercept`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

/// Comparison of the fitted line's average with the observed mean
#[derive(Debug, Clone, Copy)]
pub struct TrendComparison {
    pub fitted_average: f64,
    pub observed_average: f64,
    pub difference: f64,
}

impl LinearFit {
    /// Fit a line to (year, value) pairs minimizing squared residuals
    ///
    /// Needs at least two points with distinct x values; anything less leaves
    /// the slope undefined.
    pub fn fit(years: &[i32], values: &[f64]) -> Result<Self> {
        if years.len() != values.len() {
            return Err(StatError::domain(
                "linear fit",
                format!("{} years but {} values", years.len(), values.len()),
            ));
        }
        if years.len() < 2 {
            return Err(StatError::domain(
                "linear fit",
                format!("need at least 2 points, got {}", years.len()),
            ));
        }

        let xs: Vec<f64> = years.iter().map(|&y| f64::from(y)).collect();
        let x_mean = mean(&xs);
        let y_mean = mean(values);

        let mut sxx = 0.0;
        let mut sxy = 0.0;
        for (x, y) in xs.iter().zip(values) {
            sxx += (x - x_mean) * (x - x_mean);
            sxy += (x - x_mean) * (y - y_mean);
        }
        if sxx == 0.0 {
            return Err(StatError::domain(
                "linear fit",
                "all points share one x value, slope undefined",
            ));
        }

        let slope = sxy / sxx;
        Ok(LinearFit {
            slope,
            intercept: y_mean - slope * x_mean,
        })
    }

    /// Value of the fitted line at `x`
    pub fn eval(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Definite integral of the line over `[a, b]` via the exact
    /// antiderivative `slope/2 * x^2 + intercept * x`
    pub fn integrate(&self, a: f64, b: f64) -> f64 {
        let antiderivative = |x: f64| self.slope / 2.0 * x * x + self.intercept * x;
        antiderivative(b) - antiderivative(a)
    }
}

/// Average the fitted line over the observed year range and compare with the
/// arithmetic mean of the observations
///
/// Fails with a domain error when all observations fall in a single year,
/// where the interval width is zero and the line average is undefined.
pub fn compare_averages(
    fit: &LinearFit,
    years: &[i32],
    values: &[f64],
) -> Result<TrendComparison> {
    if years.is_empty() {
        return Err(StatError::EmptyData("no accuracy points to average"));
    }
    let (xmin, xmax) = years.iter().fold((f64::MAX, f64::MIN), |(lo, hi), &y| {
        (lo.min(f64::from(y)), hi.max(f64::from(y)))
    });
    if xmax == xmin {
        return Err(StatError::domain(
            "trend average",
            "single distinct year, zero-width integration interval",
        ));
    }

    let fitted_average = fit.integrate(xmin, xmax) / (xmax - xmin);
    let observed_average = mean(values);
    Ok(TrendComparison {
        fitted_average,
        observed_average,
        difference: (fitted_average - observed_average).abs(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_fit_recovers_noiseless_line() {
        // y = 0.5 x - 960, sampled without noise
        let years = vec![2000, 2001, 2002, 2003];
        let values: Vec<f64> = years.iter().map(|&y| 0.5 * f64::from(y) - 960.0).collect();

        let fit = LinearFit::fit(&years, &values).unwrap();
        assert!((fit.slope - 0.5).abs() < EPS);
        assert!((fit.intercept + 960.0).abs() < EPS);
    }

    #[test]
    fn test_fitted_average_matches_observed_for_noiseless_line() {
        let years = vec![2000, 2001, 2002, 2003];
        let values: Vec<f64> = years.iter().map(|&y| 0.5 * f64::from(y) - 960.0).collect();

        let fit = LinearFit::fit(&years, &values).unwrap();
        let cmp = compare_averages(&fit, &years, &values).unwrap();
        assert!(cmp.difference < EPS, "difference {} too large", cmp.difference);
    }

    #[test]
    fn test_integrate_is_exact() {
        let fit = LinearFit {
            slope: 2.0,
            intercept: 1.0,
        };
        // ∫ (2x + 1) dx over [0, 3] = 9 + 3 = 12
        assert!((fit.integrate(0.0, 3.0) - 12.0).abs() < EPS);
    }

    #[test]
    fn test_fit_needs_two_points() {
        let err = LinearFit::fit(&[2000], &[40.0]).unwrap_err();
        assert!(matches!(err, StatError::Domain { .. }));
    }

    #[test]
    fn test_fit_rejects_mismatched_lengths() {
        let err = LinearFit::fit(&[2000, 2001], &[40.0]).unwrap_err();
        assert!(matches!(err, StatError::Domain { .. }));
    }

    #[test]
    fn test_fit_rejects_single_distinct_year() {
        let err = LinearFit::fit(&[2000, 2000], &[40.0, 42.0]).unwrap_err();
        assert!(matches!(err, StatError::Domain { .. }));
    }

    #[test]
    fn test_zero_width_interval_is_domain_error() {
        let fit = LinearFit {
            slope: 1.0,
            intercept: 0.0,
        };
        let err = compare_averages(&fit, &[2000, 2000], &[40.0, 42.0]).unwrap_err();
        assert!(matches!(err, StatError::Domain { .. }));
    }
}
