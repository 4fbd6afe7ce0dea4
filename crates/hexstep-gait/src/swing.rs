//! Swing-phase foot trajectory.
//!
//! Interpolates a foot from its lift-off point to its touch-down point
//! with a smoothstep horizontal profile and a sinusoidal lift, so the foot
//! leaves and meets the ground with zero velocity in all three axes.

use hexstep_core::geometry::Point3;
use std::f64::consts::PI;

/// Foot position at swing progress `t` in [0, 1].
///
/// At `t = 0` the foot sits exactly at `lift_off`; at `t = 1` exactly at
/// `touch_down`. The apex clears the straight-line path by `step_height`
/// at mid-swing.
pub fn swing_foot_position(
    lift_off: &Point3,
    touch_down: &Point3,
    step_height: f64,
    t: f64,
) -> Point3 {
    let t = t.clamp(0.0, 1.0);
    // Smoothstep: zero slope at both endpoints.
    let s = t * t * (3.0 - 2.0 * t);
    let along = lift_off + (touch_down - lift_off) * s;
    let lift = step_height * (PI * t).sin();
    Point3::new(along.x, along.y, along.z + lift)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn endpoints_are_exact() {
        let a = Point3::new(10.0, -5.0, 0.0);
        let b = Point3::new(40.0, 5.0, 0.0);
        assert_relative_eq!(swing_foot_position(&a, &b, 30.0, 0.0), a, epsilon = 1e-12);
        assert_relative_eq!(swing_foot_position(&a, &b, 30.0, 1.0), b, epsilon = 1e-9);
    }

    #[test]
    fn apex_at_mid_swing() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(60.0, 0.0, 0.0);
        let mid = swing_foot_position(&a, &b, 25.0, 0.5);
        assert_relative_eq!(mid.x, 30.0, epsilon = 1e-12);
        assert_relative_eq!(mid.z, 25.0, epsilon = 1e-12);
    }

    #[test]
    fn stays_at_or_above_the_chord() {
        let a = Point3::new(0.0, 0.0, -10.0);
        let b = Point3::new(50.0, 20.0, -10.0);
        for k in 0..=20 {
            let t = k as f64 / 20.0;
            let p = swing_foot_position(&a, &b, 15.0, t);
            assert!(p.z >= -10.0 - 1e-12, "t = {t}: z = {}", p.z);
        }
    }

    #[test]
    fn horizontal_profile_is_symmetric() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(100.0, 0.0, 0.0);
        for k in 0..=10 {
            let t = k as f64 / 10.0;
            let fwd = swing_foot_position(&a, &b, 20.0, t);
            let back = swing_foot_position(&a, &b, 20.0, 1.0 - t);
            assert_relative_eq!(fwd.x, 100.0 - back.x, epsilon = 1e-9);
            assert_relative_eq!(fwd.z, back.z, epsilon = 1e-9);
        }
    }

    #[test]
    fn progress_is_clamped() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(10.0, 0.0, 0.0);
        assert_relative_eq!(swing_foot_position(&a, &b, 5.0, -0.5), a, epsilon = 1e-12);
        assert_relative_eq!(swing_foot_position(&a, &b, 5.0, 1.5), b, epsilon = 1e-9);
    }
}
