//! The bounded square simulation domain

use crate::math::Vec2;

/// Square domain `[-S, S]²` centred on the origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    half_size: f64,
}

impl Domain {
    /// Create a domain with half-size `half_size`
    pub const fn new(half_size: f64) -> Self {
        Self { half_size }
    }

    /// Half the side length
    pub const fn half_size(&self) -> f64 {
        self.half_size
    }

    /// Whether `point` lies inside the domain, edges included
    ///
    /// Non-finite points are never inside.
    pub fn contains(&self, point: Vec2) -> bool {
        let s = self.half_size;
        (-s..=s).contains(&point.x) && (-s..=s).contains(&point.y)
    }

    /// Distance from the centre to a corner, `sqrt(2) * S`
    pub const fn corner_distance(&self) -> f64 {
        std::f64::consts::SQRT_2 * self.half_size
    }
}
