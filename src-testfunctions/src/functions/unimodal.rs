//! Unimodal test functions
//!
//! A single basin of attraction; these measure convergence speed rather than
//! global exploration.

use crate::catalogue::TestFunction;
use crate::validation::{IntoVector, VectorError, check_vector};

/// Sphere function - N-dimensional, convex
/// f(x) = sum(x_i^2)
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
pub fn sphere(x: impl IntoVector) -> Result<f64, VectorError> {
    let x = check_vector(x, TestFunction::Sphere.length_bounds())?;
    Ok(x.iter().map(|&xi| xi * xi).sum())
}

/// Rosenbrock function - N-dimensional banana valley, n >= 2
/// f(x) = sum_{i=1}^{n-1} [100 (x_{i+1} - x_i^2)^2 + (1 - x_i)^2]
/// Global minimum: f(x) = 0 at x = (1, 1, ..., 1)
pub fn rosenbrock(x: impl IntoVector) -> Result<f64, VectorError> {
    let x = check_vector(x, TestFunction::Rosenbrock.length_bounds())?;
    Ok(x.windows(2)
        .into_iter()
        .map(|w| 100.0 * (w[1] - w[0] * w[0]).powi(2) + (1.0 - w[0]).powi(2))
        .sum())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array1;

    #[test]
    fn test_sphere_values() {
        assert_eq!(sphere([0.0]), Ok(0.0));
        assert_eq!(sphere([0.0, 0.0]), Ok(0.0));
        assert_eq!(sphere([1.0, 1.0]), Ok(2.0));
        assert_eq!(sphere([2, 2]), Ok(8.0));
        assert_eq!(sphere([1.0, 2.0, 3.0]), Ok(14.0));
    }

    #[test]
    fn test_sphere_is_positive_away_from_origin() {
        let points = [
            vec![1e-3],
            vec![-1.0, 0.0],
            vec![0.0, 0.0, -2.5],
            vec![0.1, -0.2, 0.3, -0.4],
        ];
        for x in &points {
            assert!(sphere(x).unwrap() > 0.0, "sphere({:?}) should be positive", x);
        }
    }

    #[test]
    fn test_rosenbrock_values() {
        let tolerance = 1e-9;
        let cases: [(Vec<f64>, f64); 8] = [
            (vec![0.0, 0.0], 1.0),
            (vec![1.0, 1.0], 0.0),
            (vec![1.0, 2.0], 100.0),
            (vec![2.0, 1.0], 901.0),
            (vec![2.0, 2.0], 401.0),
            (vec![3.0, 3.0], 3604.0),
            (vec![1.0, 2.0, 3.0], 201.0),
            (vec![4.5, 4.0], 26418.5),
        ];
        for (x, expected) in cases {
            let actual = rosenbrock(&x).unwrap();
            assert!(
                (actual - expected).abs() < tolerance,
                "rosenbrock({:?}): expected {}, got {}",
                x,
                expected,
                actual
            );
        }
    }

    #[test]
    fn test_rosenbrock_minimum_in_any_dimension() {
        for n in 2..=10 {
            assert_eq!(rosenbrock(Array1::<f64>::ones(n)), Ok(0.0));
        }
    }

    #[test]
    fn test_rosenbrock_needs_two_elements() {
        assert_eq!(
            rosenbrock([1.0]),
            Err(VectorError::IncorrectNumberOfElements {
                n: 1,
                n_min: 2,
                n_max: None
            })
        );
    }
}
