//! Tags for the functions of the catalogue
//!
//! [`TestFunction`] names each function explicitly so that lookups (optima,
//! metadata, plotting presets) never depend on comparing function pointers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::functions::{ackley, peaks, rastrigin, rosenbrock, sinc, sphere};
use crate::validation::{IntoVector, LengthBounds, VectorError};

/// One variant per function of the catalogue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestFunction {
    Ackley,
    Peaks,
    Rastrigin,
    Rosenbrock,
    Sinc,
    Sphere,
}

/// Error returned when parsing an unknown function name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown test function '{0}' (expected one of: ackley, peaks, rastrigin, rosenbrock, sinc, sphere)")]
pub struct UnknownFunctionError(pub String);

impl TestFunction {
    /// All functions, in alphabetical order
    pub const ALL: [TestFunction; 6] = [
        TestFunction::Ackley,
        TestFunction::Peaks,
        TestFunction::Rastrigin,
        TestFunction::Rosenbrock,
        TestFunction::Sinc,
        TestFunction::Sphere,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TestFunction::Ackley => "ackley",
            TestFunction::Peaks => "peaks",
            TestFunction::Rastrigin => "rastrigin",
            TestFunction::Rosenbrock => "rosenbrock",
            TestFunction::Sinc => "sinc",
            TestFunction::Sphere => "sphere",
        }
    }

    /// Accepted number of elements of an evaluation point
    pub const fn length_bounds(self) -> LengthBounds {
        match self {
            TestFunction::Ackley | TestFunction::Rastrigin | TestFunction::Sphere => {
                LengthBounds::at_least(1)
            }
            TestFunction::Rosenbrock => LengthBounds::at_least(2),
            TestFunction::Peaks => LengthBounds::exactly(2),
            TestFunction::Sinc => LengthBounds::exactly(1),
        }
    }

    /// Evaluate the function at `x`
    pub fn evaluate(self, x: impl IntoVector) -> Result<f64, VectorError> {
        match self {
            TestFunction::Ackley => ackley(x),
            TestFunction::Peaks => peaks(x),
            TestFunction::Rastrigin => rastrigin(x),
            TestFunction::Rosenbrock => rosenbrock(x),
            TestFunction::Sinc => sinc(x),
            TestFunction::Sphere => sphere(x),
        }
    }
}

impl fmt::Display for TestFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TestFunction {
    type Err = UnknownFunctionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        TestFunction::ALL
            .into_iter()
            .find(|func| func.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownFunctionError(s.to_string()))
    }
}
