//! Measurements over finished path data

/// Point, stroke and length statistics of a population
pub mod statistics;
