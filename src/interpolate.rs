//! Piecewise-linear interpolation over (year, accuracy) control points
//!
//! Control points are re-sorted by year at construction since the upstream
//! grouping orders by the raw season label, not the parsed year. Queries
//! outside the observed range are rejected; extrapolation is never silent.

use crate::error::{Result, StatError};

/// Piecewise-linear interpolant with sorted, distinct x values
#[derive(Debug, Clone)]
pub struct LinearInterpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl LinearInterpolator {
    /// Build an interpolant from (year, value) control points
    ///
    /// Needs at least two points; duplicate years make the interpolant
    /// ill-defined and are rejected.
    pub fn new(years: &[i32], values: &[f64]) -> Result<Self> {
        if years.len() != values.len() {
            return Err(StatError::domain(
                "interpolation",
                format!("{} years but {} values", years.len(), values.len()),
            ));
        }
        if years.len() < 2 {
            return Err(StatError::domain(
                "interpolation",
                format!("need at least 2 control points, got {}", years.len()),
            ));
        }

        let mut points: Vec<(i32, f64)> = years.iter().copied().zip(values.iter().copied()).collect();
        points.sort_by_key(|&(year, _)| year);

        if points.windows(2).any(|w| w[0].0 == w[1].0) {
            return Err(StatError::domain(
                "interpolation",
                "duplicate year among control points",
            ));
        }

        Ok(LinearInterpolator {
            xs: points.iter().map(|&(x, _)| f64::from(x)).collect(),
            ys: points.iter().map(|&(_, y)| y).collect(),
        })
    }

    /// Inclusive domain of valid queries
    pub fn domain(&self) -> (f64, f64) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }

    /// Evaluate the interpolant at `x`
    ///
    /// Exact at control points. Fails with a range error outside the
    /// observed domain.
    pub fn eval(&self, x: f64) -> Result<f64> {
        let (min, max) = self.domain();
        if x < min || x > max {
            return Err(StatError::Range {
                query: x,
                min,
                max,
            });
        }

        // partition_point: index of the first knot >= x
        let idx = self.xs.partition_point(|&knot| knot < x);
        if self.xs[idx] == x {
            return Ok(self.ys[idx]);
        }

        let (x0, x1) = (self.xs[idx - 1], self.xs[idx]);
        let (y0, y1) = (self.ys[idx - 1], self.ys[idx]);
        let t = (x - x0) / (x1 - x0);
        Ok(y0 + t * (y1 - y0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interp() -> LinearInterpolator {
        LinearInterpolator::new(&[2000, 2004, 2002], &[40.0, 48.0, 50.0]).unwrap()
    }

    #[test]
    fn test_control_points_are_exact() {
        let f = interp();
        assert_eq!(f.eval(2000.0).unwrap(), 40.0);
        assert_eq!(f.eval(2002.0).unwrap(), 50.0);
        assert_eq!(f.eval(2004.0).unwrap(), 48.0);
    }

    #[test]
    fn test_midpoint_is_linear_blend() {
        let f = interp();
        // Halfway between (2000, 40) and (2002, 50)
        assert!((f.eval(2001.0).unwrap() - 45.0).abs() < 1e-12);
        // Halfway between (2002, 50) and (2004, 48)
        assert!((f.eval(2003.0).unwrap() - 49.0).abs() < 1e-12);
    }

    #[test]
    fn test_unsorted_input_is_sorted_by_year() {
        let f = interp();
        assert_eq!(f.domain(), (2000.0, 2004.0));
    }

    #[test]
    fn test_out_of_range_query_fails() {
        let f = interp();
        assert!(matches!(f.eval(1999.9), Err(StatError::Range { .. })));
        assert!(matches!(f.eval(2004.1), Err(StatError::Range { .. })));
    }

    #[test]
    fn test_too_few_points_fails() {
        let err = LinearInterpolator::new(&[2000], &[40.0]).unwrap_err();
        assert!(matches!(err, StatError::Domain { .. }));
    }

    #[test]
    fn test_duplicate_years_fail() {
        let err = LinearInterpolator::new(&[2000, 2000, 2001], &[40.0, 41.0, 42.0]).unwrap_err();
        assert!(matches!(err, StatError::Domain { .. }));
    }
}
