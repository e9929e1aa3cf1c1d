//! Benchmark functions for optimization algorithms
//!
//! This library provides a small catalogue of standard test functions used to
//! benchmark optimizers, a shared input validator and a table of known optima:
//!
//! - **Validation**: [`check_vector`] turns array-like input into a vector and
//!   enforces the accepted number of elements
//! - **Unimodal**: sphere, rosenbrock
//! - **Multimodal**: ackley, rastrigin, peaks, sinc
//! - **Optima**: [`get_optima`] returns the known optima of a [`TestFunction`]
//!
//! # Example
//!
//! ```rust
//! use fbench_testfunctions::*;
//!
//! let value = sphere([1.0, 2.0, 3.0])?;
//! assert_eq!(value, 14.0);
//!
//! // Get function metadata
//! let metadata = get_function_metadata();
//! let bounds = get_function_bounds("sphere");
//! assert!(metadata.contains_key("sphere"));
//! assert!(bounds.is_some());
//! # Ok::<(), VectorError>(())
//! ```

use std::collections::HashMap;

pub mod catalogue;
pub mod functions;
pub mod optima;
pub mod validation;

pub use catalogue::{TestFunction, UnknownFunctionError};
pub use functions::*;
pub use optima::{Optimum, get_optima};
pub use validation::{IntoVector, LengthBounds, VectorError, check_vector};

/// Metadata for a test function: plotting domain, description and typical dimensions
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionMetadata {
    /// Function name
    pub name: String,
    /// Bounds for each dimension (min, max)
    pub bounds: Vec<(f64, f64)>,
    /// Description of the function
    pub description: String,
    /// Whether the function is multimodal
    pub multimodal: bool,
    /// Typical dimension(s) for the function
    pub dimensions: Vec<usize>,
}

impl TestFunction {
    pub fn metadata(self) -> FunctionMetadata {
        let (bounds, description, multimodal, dimensions) = match self {
            // Default 2D, but can be N-dimensional
            TestFunction::Ackley => (
                vec![(-5.0, 5.0); 2],
                "N-dimensional multimodal function with a deep hole at the origin",
                true,
                vec![1, 2, 5, 10],
            ),
            TestFunction::Peaks => (
                vec![(-3.0, 3.0); 2],
                "2D multimodal function built from translated and scaled Gaussians",
                true,
                vec![2],
            ),
            TestFunction::Rastrigin => (
                vec![(-5.12, 5.12); 2],
                "N-dimensional highly multimodal function",
                true,
                vec![1, 2, 5],
            ),
            TestFunction::Rosenbrock => (
                vec![(-2.0, 2.0); 2],
                "N-dimensional banana function",
                false,
                vec![2, 4, 10],
            ),
            TestFunction::Sinc => (
                vec![(-10.0, 10.0)],
                "1D unnormalized cardinal sine with two symmetric minima",
                true,
                vec![1],
            ),
            TestFunction::Sphere => (
                vec![(-2.0, 2.0); 2],
                "N-dimensional quadratic function",
                false,
                vec![1, 2, 5, 10],
            ),
        };

        FunctionMetadata {
            name: self.name().to_string(),
            bounds,
            description: description.to_string(),
            multimodal,
            dimensions,
        }
    }
}

/// Get metadata for all available test functions, keyed by name
pub fn get_function_metadata() -> HashMap<String, FunctionMetadata> {
    TestFunction::ALL
        .into_iter()
        .map(|func| (func.name().to_string(), func.metadata()))
        .collect()
}

/// Helper function to get bounds for a specific function from metadata
/// Returns None if function is not found in metadata
pub fn get_function_bounds(function_name: &str) -> Option<Vec<(f64, f64)>> {
    function_name
        .parse::<TestFunction>()
        .ok()
        .map(|func| func.metadata().bounds)
}
