//! Interpolation helpers shared by the blending operators.

/// Maps `t` in `[0, 1]` onto a cubic S-curve (`3t² - 2t³`).
///
/// The curve is monotonic, fixes both end points and has zero slope at each end,
/// so transitions built on it have no visible seam at their edges.
#[inline]
pub fn map_cubic_s_curve(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

/// Linear interpolation from `a` to `b`. `t` is not clamped.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn s_curve_fixes_end_points_and_midpoint() {
        assert_eq!(map_cubic_s_curve(0.0), 0.0);
        assert_eq!(map_cubic_s_curve(1.0), 1.0);
        assert_eq!(map_cubic_s_curve(0.5), 0.5);
    }

    #[test]
    fn s_curve_is_monotonic_on_unit_interval() {
        let mut prev = map_cubic_s_curve(0.0);
        for i in 1..=100 {
            let v = map_cubic_s_curve(i as f64 / 100.0);
            assert!(v >= prev, "s-curve decreased at step {i}");
            assert!((0.0..=1.0).contains(&v));
            prev = v;
        }
    }

    #[test]
    fn s_curve_is_flat_at_the_ends() {
        let h = 1e-6;
        let slope_start = (map_cubic_s_curve(h) - map_cubic_s_curve(0.0)) / h;
        let slope_end = (map_cubic_s_curve(1.0) - map_cubic_s_curve(1.0 - h)) / h;
        assert!(slope_start.abs() < 1e-4);
        assert!(slope_end.abs() < 1e-4);
    }

    #[test]
    fn lerp_does_not_clamp() {
        assert_eq!(lerp(10.0, 20.0, 0.0), 10.0);
        assert_eq!(lerp(10.0, 20.0, 1.0), 20.0);
        assert_eq!(lerp(10.0, 20.0, 0.25), 12.5);
        assert_eq!(lerp(10.0, 20.0, 2.0), 30.0);
    }
}
