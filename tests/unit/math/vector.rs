//! Tests for vector arithmetic, normalization and row-vector rotation

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;
    use walkerpaths::math::{Vec2, rot2d, trans};

    fn assert_close(actual: Vec2, expected: Vec2) {
        assert!(
            actual.distance(expected) < 1e-12,
            "expected {expected:?}, got {actual:?}"
        );
    }

    // Tests basic arithmetic operators and lengths
    // Verified by swapping operands in Sub
    #[test]
    fn test_vector_arithmetic() {
        let a = Vec2::new(3.0, 4.0);
        let b = Vec2::new(1.0, -2.0);

        assert_eq!(a + b, Vec2::new(4.0, 2.0));
        assert_eq!(a - b, Vec2::new(2.0, 6.0));
        assert_eq!(a * 2.0, Vec2::new(6.0, 8.0));
        assert_eq!(-a, Vec2::new(-3.0, -4.0));
        assert!((a.length() - 5.0).abs() < f64::EPSILON);
        assert!((a.length_squared() - 25.0).abs() < f64::EPSILON);
        assert!((a.distance(b) - 40.0_f64.sqrt()).abs() < 1e-12);
        assert_eq!(Vec2::from([1.5, -0.5]), Vec2::new(1.5, -0.5));
    }

    // Tests normalization produces unit vectors and rejects degenerate input
    // Verified by returning the raw vector for zero length
    #[test]
    fn test_normalize() {
        let unit = Vec2::new(3.0, 4.0).normalize();
        assert_eq!(unit, Some(Vec2::new(0.6, 0.8)));

        assert!(Vec2::default().normalize().is_none());
        assert!(Vec2::new(f64::NAN, 1.0).normalize().is_none());
        assert!(Vec2::new(f64::INFINITY, 0.0).normalize().is_none());
    }

    // Tests the default vector is the additive identity
    // Verified by defaulting y to one
    #[test]
    fn test_default_is_zero() {
        assert_eq!(Vec2::default(), Vec2::new(0.0, 0.0));
        assert_eq!(Vec2::default() + Vec2::new(2.0, 3.0), Vec2::new(2.0, 3.0));
    }

    // Tests exact equality and finiteness checks
    // Verified by comparing with a tolerance in exactly_equals
    #[test]
    fn test_exact_equality_and_finiteness() {
        let a = Vec2::new(0.1 + 0.2, 1.0);
        assert!(a.exactly_equals(a));
        assert!(!a.exactly_equals(Vec2::new(0.3, 1.0)));
        assert!(a.is_finite());
        assert!(!Vec2::new(1.0, f64::NAN).is_finite());
    }

    // Tests angle measured from the positive x axis
    // Verified by swapping atan2 arguments
    #[test]
    fn test_angle() {
        assert!(Vec2::new(1.0, 0.0).angle().abs() < f64::EPSILON);
        assert!((Vec2::new(0.0, 1.0).angle() - FRAC_PI_2).abs() < 1e-12);
        assert!((Vec2::new(0.0, -1.0).angle() + FRAC_PI_2).abs() < 1e-12);
    }

    // Tests rot2d layout and that trans multiplies a row vector by the matrix
    // Verified by transposing the multiplication in trans
    #[test]
    fn test_rotation_turns_clockwise_for_positive_angles() {
        let matrix = rot2d(FRAC_PI_2);
        assert!((matrix[0][0]).abs() < 1e-12);
        assert!((matrix[0][1] + 1.0).abs() < 1e-12);
        assert!((matrix[1][0] - 1.0).abs() < 1e-12);

        assert_close(trans(&matrix, Vec2::new(1.0, 0.0)), Vec2::new(0.0, -1.0));
        assert_close(trans(&matrix, Vec2::new(0.0, 1.0)), Vec2::new(1.0, 0.0));
        assert_close(
            trans(&rot2d(-FRAC_PI_2), Vec2::new(1.0, 0.0)),
            Vec2::new(0.0, 1.0),
        );
    }

    // Tests rotation by zero is the identity and rotation preserves length
    // Verified by scaling the sine terms
    #[test]
    fn test_rotation_identity_and_length() {
        let v = Vec2::new(0.3, -0.7);
        assert_close(trans(&rot2d(0.0), v), v);

        for degrees in [1.0_f64, 33.0, 90.0, 179.5, 270.0] {
            let rotated = trans(&rot2d(degrees.to_radians()), v);
            assert!((rotated.length() - v.length()).abs() < 1e-12);
        }
    }
}
