/// Body registry: the star and planets drawn by the orrery.
///
/// Sizes and distances are display units, not astronomy. The built-in set is
/// the default; the host may replace it with a JSON document at startup.

use std::collections::HashSet;

use orrery_engine::VectorColor;
use serde::Deserialize;
use thiserror::Error;

/// Index into a [`BodyRegistry`]. Only meaningful for the registry that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(pub usize);

/// One body on a circular orbit around the anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct CelestialBody {
    pub name: String,
    /// Disc radius in world units.
    pub radius: f64,
    pub color: VectorColor,
    /// Distance from the anchor. Zero marks the anchor itself.
    pub orbit_radius: f64,
    /// Angular speed before `ANGLE_SCALE` is applied.
    pub angular_speed: f64,
    pub has_rings: bool,
    pub moon_count: u32,
    pub description: String,
}

impl CelestialBody {
    pub fn is_anchor(&self) -> bool {
        self.orbit_radius == 0.0
    }
}

/// Errors from building a registry out of host-supplied data.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Registry has no bodies")]
    Empty,

    #[error("Registry has no anchor (a body with orbit_radius 0)")]
    NoAnchor,

    #[error("Registry has more than one anchor: {first} and {second}")]
    MultipleAnchors { first: String, second: String },

    #[error("Duplicate body name: {0}")]
    DuplicateName(String),

    #[error("Body {name}: radius must be positive, got {radius}")]
    InvalidRadius { name: String, radius: f64 },

    #[error("Body {name}: orbit_radius must be non-negative, got {orbit_radius}")]
    InvalidOrbit { name: String, orbit_radius: f64 },

    #[error("Body {name}: angular_speed must be finite")]
    InvalidSpeed { name: String },

    #[error("Body {name}: unrecognized color {color:?}")]
    InvalidColor { name: String, color: String },
}

/// Wire form of a body: the color is a `#RRGGBB` or `#RRGGBBAA` string.
#[derive(Debug, Deserialize)]
struct BodyRecord {
    name: String,
    radius: f64,
    color: String,
    orbit_radius: f64,
    angular_speed: f64,
    #[serde(default)]
    has_rings: bool,
    #[serde(default)]
    moon_count: u32,
    #[serde(default)]
    description: String,
}

impl TryFrom<BodyRecord> for CelestialBody {
    type Error = RegistryError;

    fn try_from(record: BodyRecord) -> Result<Self, Self::Error> {
        let color = VectorColor::from_hex(&record.color).ok_or_else(|| RegistryError::InvalidColor {
            name: record.name.clone(),
            color: record.color.clone(),
        })?;
        Ok(Self {
            name: record.name,
            radius: record.radius,
            color,
            orbit_radius: record.orbit_radius,
            angular_speed: record.angular_speed,
            has_rings: record.has_rings,
            moon_count: record.moon_count,
            description: record.description,
        })
    }
}

/// Ordered, validated set of bodies with exactly one anchor.
///
/// Registry order is paint order and breaks picking ties.
#[derive(Debug, Clone)]
pub struct BodyRegistry {
    bodies: Vec<CelestialBody>,
    anchor: BodyId,
}

impl BodyRegistry {
    /// Validate and wrap a list of bodies.
    pub fn new(bodies: Vec<CelestialBody>) -> Result<Self, RegistryError> {
        if bodies.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut names = HashSet::with_capacity(bodies.len());
        let mut anchor: Option<usize> = None;

        for (i, body) in bodies.iter().enumerate() {
            if !names.insert(body.name.as_str()) {
                return Err(RegistryError::DuplicateName(body.name.clone()));
            }
            if !(body.radius > 0.0 && body.radius.is_finite()) {
                return Err(RegistryError::InvalidRadius {
                    name: body.name.clone(),
                    radius: body.radius,
                });
            }
            if !(body.orbit_radius >= 0.0 && body.orbit_radius.is_finite()) {
                return Err(RegistryError::InvalidOrbit {
                    name: body.name.clone(),
                    orbit_radius: body.orbit_radius,
                });
            }
            if !body.angular_speed.is_finite() {
                return Err(RegistryError::InvalidSpeed { name: body.name.clone() });
            }
            if body.is_anchor() {
                if let Some(first) = anchor {
                    return Err(RegistryError::MultipleAnchors {
                        first: bodies[first].name.clone(),
                        second: body.name.clone(),
                    });
                }
                anchor = Some(i);
            }
        }

        let anchor = anchor.ok_or(RegistryError::NoAnchor)?;
        Ok(Self {
            bodies,
            anchor: BodyId(anchor),
        })
    }

    /// Parse a JSON array of bodies with snake_case keys.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let records: Vec<BodyRecord> = serde_json::from_str(json)?;
        let bodies = records
            .into_iter()
            .map(CelestialBody::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(bodies)
    }

    /// The Sun and the eight planets.
    pub fn builtin() -> Self {
        Self {
            bodies: builtin_bodies(),
            anchor: BodyId(0),
        }
    }

    pub fn anchor(&self) -> BodyId {
        self.anchor
    }

    pub fn anchor_body(&self) -> &CelestialBody {
        &self.bodies[self.anchor.0]
    }

    pub fn get(&self, id: BodyId) -> Option<&CelestialBody> {
        self.bodies.get(id.0)
    }

    pub fn find(&self, name: &str) -> Option<BodyId> {
        self.bodies.iter().position(|b| b.name == name).map(BodyId)
    }

    /// Bodies in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (BodyId, &CelestialBody)> {
        self.bodies.iter().enumerate().map(|(i, b)| (BodyId(i), b))
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

impl Default for BodyRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

// ── Built-in data ────────────────────────────────────────────────────

#[allow(clippy::too_many_arguments)]
fn body(
    name: &str,
    radius: f64,
    color: (u8, u8, u8),
    orbit_radius: f64,
    angular_speed: f64,
    has_rings: bool,
    moon_count: u32,
    description: &str,
) -> CelestialBody {
    CelestialBody {
        name: name.to_string(),
        radius,
        color: VectorColor::rgb8(color.0, color.1, color.2),
        orbit_radius,
        angular_speed,
        has_rings,
        moon_count,
        description: description.to_string(),
    }
}

fn builtin_bodies() -> Vec<CelestialBody> {
    vec![
        body("Sun", 30.0, (0xFF, 0xD7, 0x00), 0.0, 0.0, false, 0, "The star at the center of the solar system"),
        body("Mercury", 4.0, (0xA9, 0xA9, 0xA9), 80.0, 4.1, false, 0, "Closest planet to the Sun"),
        body("Venus", 8.0, (0xFF, 0xA5, 0x00), 120.0, 1.6, false, 0, "The hottest planet"),
        body("Earth", 8.5, (0x1E, 0x90, 0xFF), 160.0, 1.0, false, 1, "Our home"),
        body("Mars", 6.0, (0xFF, 0x45, 0x00), 200.0, 0.5, false, 2, "The red planet"),
        body("Jupiter", 20.0, (0xFF, 0xA0, 0x7A), 280.0, 0.08, true, 79, "The largest planet"),
        body("Saturn", 18.0, (0xF0, 0xE6, 0x8C), 360.0, 0.03, true, 82, "Famous for its beautiful rings"),
        body("Uranus", 12.0, (0x87, 0xCE, 0xEB), 420.0, 0.01, true, 27, "A planet that spins on its side"),
        body("Neptune", 11.0, (0x41, 0x69, 0xE1), 480.0, 0.006, true, 14, "An ice giant"),
    ]
}
