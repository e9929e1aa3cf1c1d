//! Test function implementations organized by category
//!
//! - `unimodal`: single-optimum functions (sphere, rosenbrock)
//! - `multimodal`: functions with many local optima (ackley, rastrigin, peaks, sinc)
//!
//! Every function validates its input with [`crate::check_vector`] using the
//! bounds of its [`crate::TestFunction`] tag, then applies a closed-form formula.

pub mod multimodal;
pub mod unimodal;

// Re-export all functions for easy access
pub use multimodal::*;
pub use unimodal::*;
