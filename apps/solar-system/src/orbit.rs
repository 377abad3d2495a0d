//! Circular orbit math, no engine state involved.

use std::f64::consts::TAU;

use glam::Vec3;

/// Position on a circular orbit of radius `distance` at `elapsed` seconds.
/// Derived from absolute time every frame, never integrated.
/// The angle is wrapped in f64 before narrowing so late positions stay exact.
pub fn circular_position(distance: f32, speed: f32, elapsed: f64, y: f32) -> Vec3 {
    let angle = (elapsed * speed as f64).rem_euclid(TAU) as f32;
    Vec3::new(angle.cos() * distance, y, angle.sin() * distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_on_the_circle() {
        for &d in &[10.0_f32, 32.0, 54.0] {
            for i in 0..200 {
                let t = i as f64 * 7.3;
                let p = circular_position(d, 0.04, t, 0.5);
                let r2 = p.x * p.x + p.z * p.z;
                assert!((r2 - d * d).abs() < d * d * 1e-5, "r2={r2} d={d} t={t}");
                assert_eq!(p.y, 0.5);
            }
        }
    }

    #[test]
    fn zero_speed_never_moves() {
        let start = circular_position(20.0, 0.0, 0.0, 0.5);
        for t in [1.0, 100.0, 1e5] {
            assert_eq!(circular_position(20.0, 0.0, t, 0.5), start);
        }
        assert_eq!(start, Vec3::new(20.0, 0.5, 0.0));
    }

    #[test]
    fn late_positions_match_early_ones() {
        // Three hundred whole turns later, about a day of session time.
        let period = TAU / 0.02_f32 as f64;
        let early = circular_position(20.0, 0.02, 12.5, 0.5);
        let late = circular_position(20.0, 0.02, 12.5 + 300.0 * period, 0.5);
        assert!((early - late).length() < 1e-3, "early={early} late={late}");
    }

    #[test]
    fn quarter_turn() {
        let p = circular_position(10.0, 1.0, std::f64::consts::FRAC_PI_2, 0.0);
        assert!(p.x.abs() < 1e-5);
        assert!((p.z - 10.0).abs() < 1e-5);
    }
}
