//! Environment utilities and constants for fbench
//!
//! Resolves where generated artefacts (plots) are written, based on the
//! `FBENCH_DIR` environment variable.

pub mod constants;
pub mod env_utils;

pub use constants::*;
pub use env_utils::*;
