//! Two-dimensional vector and matrix primitives
//!
//! Everything here is a pure value transform. Vectors are `Copy` and carry no
//! identity; equality is exact bitwise-value comparison of both components.

use std::ops::{Add, Mul, Neg, Sub};

/// Row-major 2x2 matrix
pub type Mat2 = [[f64; 2]; 2];

/// Point or direction in simulation space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    /// Horizontal component
    pub x: f64,
    /// Vertical component
    pub y: f64,
}

impl Vec2 {
    /// Create a vector from its components
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Multiply both components by `factor`
    #[must_use]
    pub const fn scale(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    /// Squared Euclidean length, used for threshold comparisons
    pub fn length_squared(self) -> f64 {
        self.x.mul_add(self.x, self.y * self.y)
    }

    /// Euclidean length
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Euclidean distance to `other`
    pub fn distance(self, other: Self) -> f64 {
        (self - other).length()
    }

    /// Unit vector in the same direction
    ///
    /// Returns `None` when the length is zero or not finite, so callers never
    /// see the NaN components a plain division would produce.
    pub fn normalize(self) -> Option<Self> {
        let length = self.length();
        (length > 0.0 && length.is_finite()).then(|| Self::new(self.x / length, self.y / length))
    }

    /// Angle of the vector from the positive x axis, in `[-pi, pi]`
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Exact component-wise equality
    #[allow(clippy::float_cmp)]
    pub const fn exactly_equals(self, other: Self) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// Both components are finite numbers
    pub const fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

impl Neg for Vec2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl From<[f64; 2]> for Vec2 {
    fn from(value: [f64; 2]) -> Self {
        Self::new(value[0], value[1])
    }
}

/// Rotation matrix for `angle` radians
pub fn rot2d(angle: f64) -> Mat2 {
    let (sin, cos) = angle.sin_cos();
    [[cos, -sin], [sin, cos]]
}

/// Multiply `v` as a row vector by `matrix`
///
/// Component `i` of the result is `sum_c v[c] * matrix[c][i]`. Combined with
/// [`rot2d`] this turns clockwise for positive angles in a y-up frame, which
/// is the turn sense the walker's side preference is defined against.
pub fn trans(matrix: &Mat2, v: Vec2) -> Vec2 {
    let [[m00, m01], [m10, m11]] = *matrix;
    Vec2::new(v.x.mul_add(m00, v.y * m10), v.x.mul_add(m01, v.y * m11))
}
