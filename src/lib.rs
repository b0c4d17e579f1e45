//! Self-avoiding walker trails for plotter-style generative art
//!
//! A population of walkers is scattered over a square domain. Each step every
//! active walker turns as little as possible to find a free spot one unit
//! ahead, keeping its trail at least the repulsion distance away from every
//! trail laid so far. When a walker is boxed in it walks back out from its
//! start in the opposite direction, then stops for good.

#![forbid(unsafe_code)]

/// Walkers, path recording, population stepping and seeded spawning
pub mod algorithm;
/// Statistics over finished path data
pub mod analysis;
/// Configuration, errors, command line and PNG/SVG output
pub mod io;
/// Planar vectors, rotation and range mapping
pub mod math;
/// Square domain and the binned proximity registry
pub mod spatial;

pub use io::error::{Result, WalkerError};
