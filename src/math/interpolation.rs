//! Linear range mapping
//!
//! Used wherever a value is carried from one extent to another: dropoff
//! probabilities across the domain, angle sectors for color bucketing, and
//! simulation coordinates onto device pixels.

use num_traits::Float;

/// Linearly remap `value` from `[from_start, from_end]` to `[to_start, to_end]`
///
/// The result is not clamped, so values outside the source range extrapolate.
/// Either range may be reversed. A degenerate source range maps everything to
/// `to_start`.
pub fn map_range<T: Float>(value: T, from_start: T, from_end: T, to_start: T, to_end: T) -> T {
    let span = from_end - from_start;
    if span.is_zero() {
        return to_start;
    }
    let t = (value - from_start) / span;
    t.mul_add(to_end - to_start, to_start)
}

/// Bucket an angle in `[-pi, pi]` into one of `sectors` equal sectors
///
/// Returns a zero-based sector index. An angle of exactly `pi` would land on
/// `sectors`, so the result is clamped into range.
pub fn angle_sector(angle: f64, sectors: usize) -> usize {
    use std::f64::consts::PI;

    if sectors == 0 || !angle.is_finite() {
        return 0;
    }
    let position = map_range(angle, -PI, PI, 0.0, sectors as f64).floor();
    if position <= 0.0 {
        0
    } else {
        (position as usize).min(sectors - 1)
    }
}
