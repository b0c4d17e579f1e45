//! Spatial data structures for proximity testing
//!
//! This module contains:
//! - The bounded simulation domain
//! - The binned registry of accepted trail points

/// Square simulation domain and its bounds checks
pub mod domain;
/// Redundantly registered bin grid answering proximity queries
pub mod registry;

pub use domain::Domain;
pub use registry::{PointId, RegisteredPoint, SpatialRegistry};
