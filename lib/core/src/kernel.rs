//! Gaussian kernel and mean aggregation
//!
//! Every score in the system is built from two reductions:
//!
//! - [`GaussianKernel::weight`] maps a signed difference `x` to
//!   `exp(-0.5 * x² / s²)`, which lies in (0, 1] and equals 1 at `x = 0`
//! - [`mean`] averages a sequence of such weights
//!
//! Both refuse empty input instead of returning NaN.

use crate::error::{Error, Result};

/// Bandwidth used by every scoring path
pub const DEFAULT_BANDWIDTH: f64 = 1.0;

/// Gaussian weighting function with a fixed bandwidth
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianKernel {
    bandwidth: f64,
}

impl Default for GaussianKernel {
    fn default() -> Self {
        Self {
            bandwidth: DEFAULT_BANDWIDTH,
        }
    }
}

impl GaussianKernel {
    /// Kernel with [`DEFAULT_BANDWIDTH`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Kernel with an explicit bandwidth, which must be finite and positive
    pub fn with_bandwidth(bandwidth: f64) -> Result<Self> {
        if !bandwidth.is_finite() || bandwidth <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "kernel bandwidth must be finite and positive, got {bandwidth}"
            )));
        }
        Ok(Self { bandwidth })
    }

    #[inline]
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// `exp(-0.5 * x² / s²)`
    #[inline]
    pub fn weight(&self, x: f64) -> f64 {
        (-0.5 * x * x / (self.bandwidth * self.bandwidth)).exp()
    }

    /// Mean kernel weight over a vector of signed differences.
    ///
    /// Fails with [`Error::EmptyAggregate`] for an empty vector.
    pub fn aggregate(&self, differences: &[i64]) -> Result<f64> {
        if differences.is_empty() {
            return Err(Error::EmptyAggregate("word"));
        }
        let total: f64 = differences.iter().map(|&d| self.weight(d as f64)).sum();
        Ok(total / differences.len() as f64)
    }
}

/// Arithmetic mean of `scores`; `what` names the sequence in the error.
pub fn mean(scores: &[f64], what: &'static str) -> Result<f64> {
    if scores.is_empty() {
        return Err(Error::EmptyAggregate(what));
    }
    Ok(scores.iter().sum::<f64>() / scores.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_at_zero_is_one() {
        let kernel = GaussianKernel::new();
        assert_eq!(kernel.weight(0.0), 1.0);
        assert_eq!(kernel.bandwidth(), DEFAULT_BANDWIDTH);
    }

    #[test]
    fn test_weight_is_even_and_decreasing() {
        let kernel = GaussianKernel::new();
        assert_eq!(kernel.weight(3.0), kernel.weight(-3.0));
        assert!(kernel.weight(1.0) > kernel.weight(2.0));
        assert!((kernel.weight(1.0) - (-0.5f64).exp()).abs() < 1e-12);
    }

    #[test]
    fn test_bandwidth_scales_decay() {
        let wide = GaussianKernel::with_bandwidth(2.0).unwrap();
        assert!((wide.weight(2.0) - (-0.5f64).exp()).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_bandwidth() {
        assert!(matches!(
            GaussianKernel::with_bandwidth(0.0),
            Err(Error::InvalidConfig(_))
        ));
        assert!(GaussianKernel::with_bandwidth(f64::NAN).is_err());
        assert!(GaussianKernel::with_bandwidth(-1.0).is_err());
    }

    #[test]
    fn test_aggregate() {
        let kernel = GaussianKernel::new();
        assert_eq!(kernel.aggregate(&[0, 0, 0]).unwrap(), 1.0);

        let expected = (1.0 + (-0.5f64).exp()) / 2.0;
        assert!((kernel.aggregate(&[0, 1]).unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_aggregate_empty_fails() {
        let kernel = GaussianKernel::new();
        let err = kernel.aggregate(&[]).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[1.0, 0.0], "text").unwrap(), 0.5);
        assert_eq!(mean(&[], "field list"), Err(Error::EmptyAggregate("field list")));
    }
}
