/// Circular-orbit motion model. Pure functions of (body, simulated time).
///
/// Simulated time is in milliseconds and grows without bound, so angles are
/// left unbounded too; trig handles the wrap.

use std::f64::consts::TAU;

use glam::DVec2;

use crate::bodies::CelestialBody;

/// Converts `angular_speed * t` into radians.
pub const ANGLE_SCALE: f64 = 0.001;

/// Angle in radians at simulated time `t`. Unbounded.
pub fn orbit_angle(body: &CelestialBody, t: f64) -> f64 {
    t * body.angular_speed * ANGLE_SCALE
}

/// Same angle reduced into `[0, 2π)`.
pub fn normalized_angle(body: &CelestialBody, t: f64) -> f64 {
    orbit_angle(body, t).rem_euclid(TAU)
}

/// World position at simulated time `t`. The anchor sits at the origin.
pub fn position(body: &CelestialBody, t: f64) -> DVec2 {
    if body.is_anchor() {
        return DVec2::ZERO;
    }
    let (sin, cos) = orbit_angle(body, t).sin_cos();
    DVec2::new(cos, sin) * body.orbit_radius
}

/// Simulated milliseconds per revolution, or `None` for bodies that never
/// complete one.
pub fn orbital_period(body: &CelestialBody) -> Option<f64> {
    if body.is_anchor() || body.angular_speed == 0.0 {
        return None;
    }
    Some(TAU / (body.angular_speed.abs() * ANGLE_SCALE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::BodyRegistry;
    use orrery_engine::VectorColor;

    fn body(orbit_radius: f64, angular_speed: f64) -> CelestialBody {
        CelestialBody {
            name: "A".into(),
            radius: 5.0,
            color: VectorColor::WHITE,
            orbit_radius,
            angular_speed,
            has_rings: false,
            moon_count: 0,
            description: String::new(),
        }
    }

    #[test]
    fn anchor_stays_at_origin() {
        let registry = BodyRegistry::builtin();
        let sun = registry.anchor_body();
        for t in [0.0, 16.0, 1.0e6, 1.0e12] {
            assert_eq!(position(sun, t), DVec2::ZERO);
        }

        // Even a spinning anchor does not move.
        let spinning = body(0.0, 3.0);
        assert_eq!(position(&spinning, 12345.0), DVec2::ZERO);
    }

    #[test]
    fn distance_from_anchor_is_orbit_radius() {
        let registry = BodyRegistry::builtin();
        for (_, b) in registry.iter() {
            for t in [0.0, 16.0, 777.7, 1.0e5, 3.3e9] {
                let d = position(b, t).length();
                assert!((d - b.orbit_radius).abs() < 1e-9, "{} at t={t}: {d}", b.name);
            }
        }
    }

    #[test]
    fn quarter_turn() {
        let a = body(100.0, 1.0);
        let start = position(&a, 0.0);
        assert!((start - DVec2::new(100.0, 0.0)).length() < 1e-12);

        let quarter = std::f64::consts::FRAC_PI_2 / (a.angular_speed * ANGLE_SCALE);
        let p = position(&a, quarter);
        assert!((p - DVec2::new(0.0, 100.0)).length() < 1e-9, "{p:?}");
    }

    #[test]
    fn angle_is_unbounded_but_normalizes() {
        let a = body(100.0, 1.0);
        let t = 10.0 * TAU / ANGLE_SCALE + 500.0;
        assert!(orbit_angle(&a, t) > TAU);

        let n = normalized_angle(&a, t);
        assert!((0.0..TAU).contains(&n));
        assert!((n - 0.5).abs() < 1e-9);

        let backwards = body(100.0, -1.0);
        let n = normalized_angle(&backwards, 500.0);
        assert!((n - (TAU - 0.5)).abs() < 1e-12);
    }

    #[test]
    fn period_matches_one_revolution() {
        let earth = body(160.0, 1.0);
        let period = orbital_period(&earth).unwrap();
        assert!((period - TAU * 1000.0).abs() < 1e-9);
        assert!((position(&earth, period) - position(&earth, 0.0)).length() < 1e-9);

        assert_eq!(orbital_period(&body(0.0, 0.0)), None);
        assert_eq!(orbital_period(&body(50.0, 0.0)), None);
    }
}
