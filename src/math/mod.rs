//! Mathematical utilities for the walker simulation

/// Linear range mapping and angle bucketing
pub mod interpolation;
/// Two-dimensional vectors, rotations and transforms
pub mod vector;

pub use vector::{Mat2, Vec2, rot2d, trans};
