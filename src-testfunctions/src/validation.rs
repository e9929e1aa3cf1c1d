//! Input validation shared by every test function
//!
//! Every function of the catalogue accepts "vector-like" input (slices, arrays,
//! `Vec`s, ndarray arrays) and funnels it through [`check_vector`] before
//! evaluating its formula. Nested input is accepted by the conversion step so
//! that it can be rejected with a shape error rather than a type error.

use ndarray::{Array1, ArrayBase, ArrayD, Data, Dimension, Ix1, IxDyn};

/// Error raised when an input cannot be used as an evaluation point
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VectorError {
    /// The input has more (or fewer) than one dimension, e.g. `[[1, 2]]`.
    #[error("not a vector: expected a one-dimensional input, got shape {shape:?}")]
    NotAVector { shape: Vec<usize> },

    /// The number of elements is outside the accepted range.
    #[error(
        "incorrect number of elements: got n={n}, expected {n_min} <= n <= {}",
        display_n_max(.n_max)
    )]
    IncorrectNumberOfElements {
        n: usize,
        n_min: usize,
        n_max: Option<usize>,
    },
}

fn display_n_max(n_max: &Option<usize>) -> String {
    n_max.map_or_else(|| "inf".to_string(), |n| n.to_string())
}

/// Accepted range for the number of elements of a vector
///
/// `n_max == None` means the range is unbounded above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LengthBounds {
    pub n_min: usize,
    pub n_max: Option<usize>,
}

impl Default for LengthBounds {
    fn default() -> Self {
        Self::at_least(1)
    }
}

impl LengthBounds {
    pub const fn new(n_min: usize, n_max: Option<usize>) -> Self {
        Self { n_min, n_max }
    }

    /// At least `n_min` elements, no upper limit
    pub const fn at_least(n_min: usize) -> Self {
        Self { n_min, n_max: None }
    }

    /// Exactly `n` elements
    pub const fn exactly(n: usize) -> Self {
        Self {
            n_min: n,
            n_max: Some(n),
        }
    }

    pub fn contains(&self, n: usize) -> bool {
        n >= self.n_min && self.n_max.is_none_or(|n_max| n <= n_max)
    }
}

/// Conversion of array-like input into an n-dimensional `f64` array
///
/// Implemented for flat and nested slices, arrays and `Vec`s of `f64`, `f32`
/// and `i32`, and for ndarray arrays of `f64` of any dimensionality.
pub trait IntoVector {
    /// Convert into an n-dimensional array.
    ///
    /// Ragged nested input has no rectangular shape and is rejected here with
    /// [`VectorError::NotAVector`], reporting `[rows, longest_row]`.
    fn into_array(self) -> Result<ArrayD<f64>, VectorError>;
}

fn from_flat<T: Copy + Into<f64>>(values: &[T]) -> ArrayD<f64> {
    Array1::from_iter(values.iter().map(|&v| v.into())).into_dyn()
}

fn from_nested<T, R>(rows: &[R]) -> Result<ArrayD<f64>, VectorError>
where
    T: Copy + Into<f64>,
    R: AsRef<[T]>,
{
    let n_rows = rows.len();
    let longest = rows.iter().map(|row| row.as_ref().len()).max().unwrap_or(0);
    let shape = vec![n_rows, longest];

    if rows.iter().any(|row| row.as_ref().len() != longest) {
        return Err(VectorError::NotAVector { shape });
    }

    let values: Vec<f64> = rows
        .iter()
        .flat_map(|row| row.as_ref().iter().map(|&v| v.into()))
        .collect();
    ArrayD::from_shape_vec(IxDyn(&shape), values).map_err(|_| VectorError::NotAVector { shape })
}

macro_rules! impl_into_vector {
    ($($t:ty),*) => {$(
        impl IntoVector for Vec<$t> {
            fn into_array(self) -> Result<ArrayD<f64>, VectorError> {
                Ok(from_flat(&self))
            }
        }

        impl IntoVector for &Vec<$t> {
            fn into_array(self) -> Result<ArrayD<f64>, VectorError> {
                Ok(from_flat(self))
            }
        }

        impl IntoVector for &[$t] {
            fn into_array(self) -> Result<ArrayD<f64>, VectorError> {
                Ok(from_flat(self))
            }
        }

        impl<const N: usize> IntoVector for [$t; N] {
            fn into_array(self) -> Result<ArrayD<f64>, VectorError> {
                Ok(from_flat(&self))
            }
        }

        impl<const N: usize> IntoVector for &[$t; N] {
            fn into_array(self) -> Result<ArrayD<f64>, VectorError> {
                Ok(from_flat(self))
            }
        }

        impl IntoVector for Vec<Vec<$t>> {
            fn into_array(self) -> Result<ArrayD<f64>, VectorError> {
                from_nested::<$t, _>(&self)
            }
        }

        impl IntoVector for &Vec<Vec<$t>> {
            fn into_array(self) -> Result<ArrayD<f64>, VectorError> {
                from_nested::<$t, _>(self)
            }
        }

        impl IntoVector for &[Vec<$t>] {
            fn into_array(self) -> Result<ArrayD<f64>, VectorError> {
                from_nested::<$t, _>(self)
            }
        }

        impl<const M: usize, const N: usize> IntoVector for [[$t; M]; N] {
            fn into_array(self) -> Result<ArrayD<f64>, VectorError> {
                from_nested::<$t, _>(&self)
            }
        }

        impl<const M: usize, const N: usize> IntoVector for &[[$t; M]; N] {
            fn into_array(self) -> Result<ArrayD<f64>, VectorError> {
                from_nested::<$t, _>(self)
            }
        }
    )*};
}

impl_into_vector!(f64, f32, i32);

impl<S, D> IntoVector for ArrayBase<S, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    fn into_array(self) -> Result<ArrayD<f64>, VectorError> {
        Ok(self.into_dyn().into_owned())
    }
}

impl<S, D> IntoVector for &ArrayBase<S, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    fn into_array(self) -> Result<ArrayD<f64>, VectorError> {
        Ok(self.view().into_dyn().to_owned())
    }
}

/// Validate array-like input as a one-dimensional vector
///
/// # Arguments
/// * `x` - Input to validate
/// * `bounds` - Accepted range for the number of elements
///
/// # Returns
/// The validated vector, with the same values as the input
///
/// # Errors
/// * [`VectorError::NotAVector`] if the input is not one-dimensional
/// * [`VectorError::IncorrectNumberOfElements`] if its length is outside `bounds`
///
/// # Example
///
/// ```rust
/// use fbench_testfunctions::{check_vector, LengthBounds, VectorError};
///
/// let x = check_vector([1.0, 2.0, 3.0], LengthBounds::default())?;
/// assert_eq!(x.len(), 3);
///
/// assert!(check_vector([1.0, 2.0], LengthBounds::at_least(3)).is_err());
/// # Ok::<(), VectorError>(())
/// ```
pub fn check_vector<V: IntoVector>(x: V, bounds: LengthBounds) -> Result<Array1<f64>, VectorError> {
    let array = x.into_array()?;

    if array.ndim() != 1 {
        let shape = array.shape().to_vec();
        log::trace!("rejecting input of shape {:?}: not a vector", shape);
        return Err(VectorError::NotAVector { shape });
    }

    let shape = array.shape().to_vec();
    let vector = array
        .into_dimensionality::<Ix1>()
        .map_err(|_| VectorError::NotAVector { shape })?;

    let n = vector.len();
    if !bounds.contains(n) {
        log::trace!("rejecting vector of length {n}: accepted range is {bounds:?}");
        return Err(VectorError::IncorrectNumberOfElements {
            n,
            n_min: bounds.n_min,
            n_max: bounds.n_max,
        });
    }

    Ok(vector)
}
