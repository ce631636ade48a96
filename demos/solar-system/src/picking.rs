/// Hit-testing in world space.

use glam::DVec2;

use crate::bodies::{BodyId, BodyRegistry};
use crate::orbit;

/// The body whose disc contains `world` at time `t`, nearest center first.
///
/// A point exactly on the rim is outside. Equal distances go to the body
/// that comes first in the registry.
pub fn pick_at(world: DVec2, registry: &BodyRegistry, t: f64) -> Option<BodyId> {
    let mut best: Option<(BodyId, f64)> = None;
    for (id, body) in registry.iter() {
        let dist = orbit::position(body, t).distance(world);
        if dist >= body.radius {
            continue;
        }
        match best {
            Some((_, best_dist)) if best_dist <= dist => {}
            _ => best = Some((id, dist)),
        }
    }
    best.map(|(id, _)| id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::CelestialBody;
    use orrery_engine::VectorColor;

    fn body(name: &str, radius: f64, orbit_radius: f64) -> CelestialBody {
        CelestialBody {
            name: name.into(),
            radius,
            color: VectorColor::WHITE,
            orbit_radius,
            // Frozen so positions are (orbit_radius, 0) at any t.
            angular_speed: 0.0,
            has_rings: false,
            moon_count: 0,
            description: String::new(),
        }
    }

    #[test]
    fn center_of_each_body_picks_it() {
        let registry = BodyRegistry::new(vec![body("Star", 10.0, 0.0), body("Far", 5.0, 100.0)]).unwrap();
        assert_eq!(pick_at(DVec2::ZERO, &registry, 0.0), Some(BodyId(0)));
        assert_eq!(pick_at(DVec2::new(100.0, 0.0), &registry, 0.0), Some(BodyId(1)));
        assert_eq!(pick_at(DVec2::new(103.0, -2.0), &registry, 0.0), Some(BodyId(1)));
    }

    #[test]
    fn empty_space_picks_nothing() {
        let registry = BodyRegistry::new(vec![body("Star", 10.0, 0.0), body("Far", 5.0, 100.0)]).unwrap();
        assert_eq!(pick_at(DVec2::new(50.0, 50.0), &registry, 0.0), None);
        // On the rim is outside.
        assert_eq!(pick_at(DVec2::new(10.0, 0.0), &registry, 0.0), None);
    }

    #[test]
    fn overlapping_discs_pick_nearest_center() {
        let registry = BodyRegistry::new(vec![body("Star", 30.0, 0.0), body("Close", 8.0, 25.0)]).unwrap();
        // Inside both discs; nearer to the small body's center.
        assert_eq!(pick_at(DVec2::new(22.0, 0.0), &registry, 0.0), Some(BodyId(1)));
        // Inside both discs; nearer to the anchor.
        assert_eq!(pick_at(DVec2::new(10.0, 0.0), &registry, 0.0), Some(BodyId(0)));
    }

    #[test]
    fn ties_go_to_registry_order() {
        let registry = BodyRegistry::new(vec![body("Star", 30.0, 0.0), body("Twin", 30.0, 20.0)]).unwrap();
        assert_eq!(pick_at(DVec2::new(10.0, 0.0), &registry, 0.0), Some(BodyId(0)));
    }

    #[test]
    fn picks_follow_the_orbit() {
        let registry = BodyRegistry::builtin();
        let earth = registry.find("Earth").unwrap();
        let t = 2500.0;
        let at = orbit::position(registry.get(earth).unwrap(), t);
        assert_eq!(pick_at(at, &registry, t), Some(earth));
        assert_eq!(pick_at(DVec2::new(160.0, 0.0), &registry, t), None);
    }
}
