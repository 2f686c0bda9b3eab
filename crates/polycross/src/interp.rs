//! Scalar and componentwise linear interpolation.

use nalgebra::Vector2;

/// Linear interpolation `a + (b - a) * t`.
///
/// `t` is not clamped; values outside [0, 1] extrapolate.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Componentwise [`lerp`] between two points.
#[inline]
pub fn lerp2(a: Vector2<f64>, b: Vector2<f64>, t: f64) -> Vector2<f64> {
    Vector2::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn midpoint_and_endpoints() {
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp(2.0, 7.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 7.0, 1.0), 7.0);
    }

    #[test]
    fn constant_inputs_and_extrapolation() {
        for &t in &[-2.0, 0.0, 0.3, 1.0, 5.0] {
            assert_eq!(lerp(4.5, 4.5, t), 4.5);
        }
        assert_eq!(lerp(0.0, 1.0, 2.0), 2.0);
        assert_eq!(lerp(0.0, 1.0, -1.0), -1.0);
    }

    #[test]
    fn lerp2_matches_per_axis() {
        let a = vector![1.0, -2.0];
        let b = vector![3.0, 6.0];
        let p = lerp2(a, b, 0.25);
        assert_eq!(p.x, lerp(a.x, b.x, 0.25));
        assert_eq!(p.y, lerp(a.y, b.y, 0.25));
    }
}
