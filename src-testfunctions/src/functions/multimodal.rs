//! Multimodal test functions
//!
//! These functions have multiple local optima and are used to test the global
//! search capabilities and exploration of optimization algorithms.

use std::f64::consts::{E, PI};

use crate::catalogue::TestFunction;
use crate::validation::{IntoVector, VectorError, check_vector};

/// Ackley function - N-dimensional, nearly flat outer region with a deep hole at the origin
/// f(x) = -20 exp(-0.2 sqrt(mean(x_i^2))) - exp(mean(cos(2 pi x_i))) + 20 + e
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
pub fn ackley(x: impl IntoVector) -> Result<f64, VectorError> {
    let x = check_vector(x, TestFunction::Ackley.length_bounds())?;
    let n = x.len() as f64;
    let mean_squares = x.iter().map(|&xi| xi * xi).sum::<f64>() / n;
    let mean_cosines = x.iter().map(|&xi| (2.0 * PI * xi).cos()).sum::<f64>() / n;
    Ok(-20.0 * (-0.2 * mean_squares.sqrt()).exp() - mean_cosines.exp() + 20.0 + E)
}

/// Rastrigin function - N-dimensional, regular grid of local minima
/// f(x) = 10 n + sum(x_i^2 - 10 cos(2 pi x_i))
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
pub fn rastrigin(x: impl IntoVector) -> Result<f64, VectorError> {
    let x = check_vector(x, TestFunction::Rastrigin.length_bounds())?;
    let n = x.len() as f64;
    let sum: f64 = x
        .iter()
        .map(|&xi| xi * xi - 10.0 * (2.0 * PI * xi).cos())
        .sum();
    Ok(10.0 * n + sum)
}

/// Peaks function - 2D only, translated and scaled Gaussians
/// f(x) = 3 (1 - x1)^2 exp(-x1^2 - (x2 + 1)^2)
///        - 10 (x1 / 5 - x1^3 - x2^5) exp(-x1^2 - x2^2)
///        - 1/3 exp(-(x1 + 1)^2 - x2^2)
/// Global minimum: f(x) = -6.551133 at x = (0.228279, -1.625535)
/// Global maximum: f(x) = 8.106214 at x = (-0.009318, 1.581368)
pub fn peaks(x: impl IntoVector) -> Result<f64, VectorError> {
    let x = check_vector(x, TestFunction::Peaks.length_bounds())?;
    let x1 = x[0];
    let x2 = x[1];

    let term1 = 3.0 * (1.0 - x1).powi(2) * (-x1.powi(2) - (x2 + 1.0).powi(2)).exp();
    let term2 = 10.0 * (x1 / 5.0 - x1.powi(3) - x2.powi(5)) * (-x1.powi(2) - x2.powi(2)).exp();
    let term3 = (-(x1 + 1.0).powi(2) - x2.powi(2)).exp() / 3.0;
    Ok(term1 - term2 - term3)
}

/// Sinc function - 1D only, unnormalized
/// f(x) = sin(x) / x, with f(0) = 1
/// Global minima: f(x) = -0.217234 at x = -4.493409 and x = 4.493409
pub fn sinc(x: impl IntoVector) -> Result<f64, VectorError> {
    let x = check_vector(x, TestFunction::Sinc.length_bounds())?;
    let x = x[0];
    // exact comparison: the removable singularity is only patched at zero itself
    if x == 0.0 { Ok(1.0) } else { Ok(x.sin() / x) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() < tolerance,
            "expected {}, got {} (tolerance {:.0e})",
            expected,
            actual,
            tolerance
        );
    }

    #[test]
    fn test_ackley_values() {
        for n in 1..=10 {
            assert_close(ackley(vec![0.0; n]).unwrap(), 0.0, 1e-9);
        }
        assert_close(ackley([1.0, 1.0]).unwrap(), 3.6254, 1e-4);
        assert_close(ackley([2.0, 2.0]).unwrap(), 6.5936, 1e-4);
    }

    #[test]
    fn test_rastrigin_values() {
        let tolerance = 1e-9;
        assert_close(rastrigin([0.0]).unwrap(), 0.0, tolerance);
        assert_close(rastrigin([0.0, 0.0]).unwrap(), 0.0, tolerance);
        assert_close(rastrigin([1.0, 1.0]).unwrap(), 2.0, tolerance);
        assert_close(rastrigin([1.0, 2.0]).unwrap(), 5.0, tolerance);
        assert_close(rastrigin([2.0, 1.0]).unwrap(), 5.0, tolerance);
        assert_close(rastrigin([2.0, 2.0]).unwrap(), 8.0, tolerance);
        assert_close(rastrigin([4.5, 4.5]).unwrap(), 80.5, tolerance);
        assert_close(rastrigin([4.0, 4.5]).unwrap(), 56.25, tolerance);
        assert_close(rastrigin([1.0, 2.0, 3.0]).unwrap(), 14.0, tolerance);
        assert_close(rastrigin([5.12, 5.12]).unwrap(), 57.85, 5e-3);
    }

    #[test]
    fn test_peaks_values() {
        assert_close(peaks([0.0, 0.0]).unwrap(), 0.9810, 1e-4);
        assert_close(peaks([1.0, 1.0]).unwrap(), 2.4338, 1e-4);
        assert_close(peaks([2.0, 2.0]).unwrap(), 0.1328, 1e-4);
    }

    #[test]
    fn test_peaks_needs_exactly_two_elements() {
        for x in [vec![0.0], vec![0.0, 0.0, 0.0]] {
            assert!(matches!(
                peaks(&x),
                Err(VectorError::IncorrectNumberOfElements { n_min: 2, n_max: Some(2), .. })
            ));
        }
    }

    #[test]
    fn test_sinc_values() {
        assert_eq!(sinc([0.0]), Ok(1.0));
        assert_eq!(sinc([-0.0]), Ok(1.0));
        assert_close(sinc([1.0]).unwrap(), 0.8415, 1e-4);
        assert_close(sinc([-1.0]).unwrap(), 0.8415, 1e-4);
        // no epsilon band around zero
        assert_eq!(sinc([1e-300]), Ok((1e-300f64).sin() / 1e-300));
    }

    #[test]
    fn test_sinc_needs_exactly_one_element() {
        assert!(sinc([0.0, 0.0]).is_err());
        assert!(sinc([[0.0]]).is_err());
    }
}
