/// UI snapshot handed to the host as JSON: zoom readout, clock, toggles and
/// the selected body's details panel.

use serde::Serialize;

use crate::bodies::{BodyRegistry, CelestialBody};
use crate::orbit;
use crate::sim::{DisplayToggles, SimulationState};

/// Shown in the details panel while nothing is selected.
pub const SELECTION_PLACEHOLDER: &str = "Click a planet to view details";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UiSnapshot {
    /// e.g. `"110%"`
    pub zoom_label: String,
    pub zoom_percent: u32,
    pub speed: f64,
    /// Simulated milliseconds.
    pub time: f64,
    pub toggles: DisplayToggles,
    pub selection: Option<SelectionInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
}

/// Display strings for the details panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionInfo {
    pub index: usize,
    pub name: String,
    pub color: String,
    pub diameter: String,
    pub orbit_radius: String,
    pub speed: String,
    pub moons: u32,
    pub rings: &'static str,
    pub description: String,
    /// Simulated milliseconds per revolution; absent for the anchor.
    pub orbital_period: Option<f64>,
}

impl SelectionInfo {
    pub fn new(index: usize, body: &CelestialBody) -> Self {
        Self {
            index,
            name: body.name.clone(),
            color: body.color.to_hex(),
            diameter: format!("{:.1} units", body.radius * 2.0),
            orbit_radius: format!("{} units", body.orbit_radius),
            speed: format!("{:.2}", body.angular_speed),
            moons: body.moon_count,
            rings: if body.has_rings { "Yes" } else { "No" },
            description: body.description.clone(),
            orbital_period: orbit::orbital_period(body),
        }
    }
}

impl UiSnapshot {
    pub fn capture(state: &SimulationState, registry: &BodyRegistry) -> Self {
        let zoom_percent = state.camera.zoom_percent();
        let selection = state
            .selection
            .and_then(|id| registry.get(id).map(|body| SelectionInfo::new(id.0, body)));
        let placeholder = match selection {
            Some(_) => None,
            None => Some(SELECTION_PLACEHOLDER),
        };
        Self {
            zoom_label: format!("{zoom_percent}%"),
            zoom_percent,
            speed: state.clock.speed(),
            time: state.time(),
            toggles: state.toggles,
            selection,
            placeholder,
        }
    }
}
