//! Known optima of the catalogue functions
//!
//! A static table keyed by [`TestFunction`]; nothing here searches for an
//! optimum, it only restates known analytical (or high precision numerical)
//! results.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::catalogue::TestFunction;

/// A known optimal point and its function value
///
/// `n` always equals `x.len()`; deserialization recomputes it from `x`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "OptimumRecord")]
pub struct Optimum {
    /// Location of the optimum
    pub x: Array1<f64>,
    /// Function value at `x`
    pub fx: f64,
    /// Number of elements of `x`
    pub n: usize,
}

impl Optimum {
    pub fn new(x: Array1<f64>, fx: f64) -> Self {
        let n = x.len();
        Self { x, fx, n }
    }
}

#[derive(Deserialize)]
struct OptimumRecord {
    x: Array1<f64>,
    fx: f64,
}

impl From<OptimumRecord> for Optimum {
    fn from(record: OptimumRecord) -> Self {
        Optimum::new(record.x, record.fx)
    }
}

/// Peaks global minimum (x1, x2, f)
pub const PEAKS_MINIMUM: (f64, f64, f64) =
    (0.22827892051965623, -1.6255349575200946, -6.5511333328358345);

/// Peaks global maximum (x1, x2, f)
pub const PEAKS_MAXIMUM: (f64, f64, f64) =
    (-0.009317581911036734, 1.5813679629223278, 8.106213589442335);

/// Location of the positive Sinc minimum; the other one is its mirror image
pub const SINC_MINIMUM_X: f64 = 4.493409471849579;

/// Value of both Sinc minima
pub const SINC_MINIMUM_FX: f64 = -0.217233628211222;

/// Get the known optima of `func` for dimensionality `n`
///
/// Peaks and Sinc have fixed dimensionality and ignore `n`. For the
/// n-dimensional functions, `None` is returned when `n` is not an accepted
/// vector length (e.g. Rosenbrock with `n = 1`).
///
/// # Example
///
/// ```rust
/// use fbench_testfunctions::{TestFunction, get_optima};
///
/// let optima = get_optima(5, TestFunction::Sphere).unwrap();
/// assert_eq!(optima.len(), 1);
/// assert_eq!(optima[0].n, 5);
/// assert_eq!(optima[0].fx, 0.0);
/// ```
pub fn get_optima(n: usize, func: TestFunction) -> Option<Vec<Optimum>> {
    match func {
        TestFunction::Ackley | TestFunction::Rastrigin | TestFunction::Sphere => {
            uniform_optimum(n, func, 0.0)
        }
        TestFunction::Rosenbrock => uniform_optimum(n, func, 1.0),
        TestFunction::Peaks => Some(
            [PEAKS_MINIMUM, PEAKS_MAXIMUM]
                .into_iter()
                .map(|(x1, x2, fx)| Optimum::new(Array1::from(vec![x1, x2]), fx))
                .collect(),
        ),
        TestFunction::Sinc => Some(
            [-SINC_MINIMUM_X, SINC_MINIMUM_X]
                .into_iter()
                .map(|x| Optimum::new(Array1::from(vec![x]), SINC_MINIMUM_FX))
                .collect(),
        ),
    }
}

/// Single optimum at (value, ..., value) with f = 0
fn uniform_optimum(n: usize, func: TestFunction, value: f64) -> Option<Vec<Optimum>> {
    if !func.length_bounds().contains(n) {
        log::debug!("no optimum registered for {func} with n={n}");
        return None;
    }
    Some(vec![Optimum::new(Array1::from_elem(n, value), 0.0)])
}

impl TestFunction {
    /// Known optima for dimensionality `n`, see [`get_optima`]
    pub fn optima(self, n: usize) -> Option<Vec<Optimum>> {
        get_optima(n, self)
    }
}
