//! Function values on coordinate grids

use fbench_testfunctions::{IntoVector, LengthBounds, VectorError, check_vector};
use ndarray::{Array1, Array2};

use crate::VizError;

/// (x, y) pairs of a one-dimensional function
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinatePairs {
    pub x: Array1<f64>,
    pub y: Array1<f64>,
}

/// X, Y, Z coordinate matrices of a two-dimensional function
///
/// Row `i` corresponds to `y[i]`, column `j` to `x[j]`.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateMatrices {
    pub x: Array2<f64>,
    pub y: Array2<f64>,
    pub z: Array2<f64>,
}

impl CoordinateMatrices {
    /// Grid coordinates along the x-axis (first row of `x`)
    pub fn x_axis(&self) -> Vec<f64> {
        self.x.row(0).to_vec()
    }

    /// Grid coordinates along the y-axis (first column of `y`)
    pub fn y_axis(&self) -> Vec<f64> {
        self.y.column(0).to_vec()
    }

    /// `z` as nested rows, the layout plotly expects
    pub fn z_rows(&self) -> Vec<Vec<f64>> {
        self.z.outer_iter().map(|row| row.to_vec()).collect()
    }

    pub fn z_min(&self) -> f64 {
        self.z.iter().copied().fold(f64::INFINITY, f64::min)
    }
}

/// Evaluate `func` at every x-coordinate
///
/// `x_coord` must be a vector of at least two elements; `func` receives
/// 1-vectors.
///
/// # Example
///
/// ```rust
/// use fbench_testfunctions::sphere;
/// use fbench_viz::create_coordinates2d;
///
/// let coord = create_coordinates2d(|x| sphere(x), [-2.0, -1.0, 0.0, 1.0, 2.0])?;
/// assert_eq!(coord.y.to_vec(), vec![4.0, 1.0, 0.0, 1.0, 4.0]);
/// # Ok::<(), fbench_viz::VizError>(())
/// ```
pub fn create_coordinates2d<F>(func: F, x_coord: impl IntoVector) -> Result<CoordinatePairs, VizError>
where
    F: Fn(&Array1<f64>) -> Result<f64, VectorError>,
{
    let x = check_vector(x_coord, LengthBounds::at_least(2))?;
    let y = x
        .iter()
        .map(|&xi| func(&Array1::from(vec![xi])))
        .collect::<Result<Array1<f64>, VectorError>>()?;
    Ok(CoordinatePairs { x, y })
}

/// Evaluate `func` on the mesh grid spanned by `x_coord` and `y_coord`
///
/// Both coordinate vectors need at least two elements; `y_coord` defaults to
/// `x_coord`. `func` receives 2-vectors `[x, y]`.
pub fn create_coordinates3d<F>(
    func: F,
    x_coord: impl IntoVector,
    y_coord: Option<Array1<f64>>,
) -> Result<CoordinateMatrices, VizError>
where
    F: Fn(&Array1<f64>) -> Result<f64, VectorError>,
{
    let x_coord = check_vector(x_coord, LengthBounds::at_least(2))?;
    let y_coord = match y_coord {
        Some(y) => check_vector(y, LengthBounds::at_least(2))?,
        None => x_coord.clone(),
    };

    let shape = (y_coord.len(), x_coord.len());
    let x = Array2::from_shape_fn(shape, |(_, j)| x_coord[j]);
    let y = Array2::from_shape_fn(shape, |(i, _)| y_coord[i]);

    let mut z = Array2::zeros(shape);
    for ((i, j), zij) in z.indexed_iter_mut() {
        *zij = func(&Array1::from(vec![x[[i, j]], y[[i, j]]]))?;
    }
    Ok(CoordinateMatrices { x, y, z })
}

#[cfg(test)]
mod tests {
    use super::*;
    use fbench_testfunctions::{TestFunction, sinc, sphere};
    use ndarray::array;

    #[test]
    fn test_create_coordinates2d() {
        let actual = create_coordinates2d(|x| sphere(x), [-2.0, -1.0, 0.0, 1.0, 2.0]).unwrap();
        assert_eq!(actual.x, array![-2.0, -1.0, 0.0, 1.0, 2.0]);
        assert_eq!(actual.y, array![4.0, 1.0, 0.0, 1.0, 4.0]);
    }

    #[test]
    fn test_create_coordinates2d_with_fixed_dimension_function() {
        let actual = create_coordinates2d(|x| sinc(x), vec![0.0, 1.0]).unwrap();
        assert_eq!(actual.y[0], 1.0);
    }

    #[test]
    fn test_create_coordinates2d_needs_two_points() {
        assert!(matches!(
            create_coordinates2d(|x| sphere(x), [1.0]),
            Err(VizError::Vector(VectorError::IncorrectNumberOfElements { .. }))
        ));
    }

    #[test]
    fn test_create_coordinates3d() {
        let actual = create_coordinates3d(|x| sphere(x), [-1.0, 0.0, 1.0], None).unwrap();
        assert_eq!(
            actual.x,
            array![[-1.0, 0.0, 1.0], [-1.0, 0.0, 1.0], [-1.0, 0.0, 1.0]]
        );
        assert_eq!(
            actual.y,
            array![[-1.0, -1.0, -1.0], [0.0, 0.0, 0.0], [1.0, 1.0, 1.0]]
        );
        assert_eq!(
            actual.z,
            array![[2.0, 1.0, 2.0], [1.0, 0.0, 1.0], [2.0, 1.0, 2.0]]
        );
        assert_eq!(actual.x_axis(), vec![-1.0, 0.0, 1.0]);
        assert_eq!(actual.y_axis(), vec![-1.0, 0.0, 1.0]);
        assert_eq!(actual.z_min(), 0.0);
    }

    #[test]
    fn test_create_coordinates3d_rectangular_grid() {
        let actual = create_coordinates3d(
            |x| TestFunction::Peaks.evaluate(x),
            [-1.0, 0.0, 1.0],
            Some(array![0.0, 0.5]),
        )
        .unwrap();
        assert_eq!(actual.z.dim(), (2, 3));
        assert_eq!(actual.z_rows().len(), 2);
        assert_eq!(actual.z[[0, 1]], TestFunction::Peaks.evaluate([0.0, 0.0]).unwrap());
    }

    #[test]
    fn test_create_coordinates3d_propagates_function_errors() {
        // sinc only accepts 1-vectors
        let result = create_coordinates3d(|x| sinc(x), [0.0, 1.0], None);
        assert!(matches!(result, Err(VizError::Vector(_))));
    }
}
