/// Simulation state: camera, clock, selection and display toggles, plus the
/// transition function that input drives.

use glam::DVec2;
use orrery_engine::{Camera2D, Frame, SimulationClock};

use crate::bodies::{BodyId, BodyRegistry};
use crate::controls::{Control, Toggle};
use crate::picking;
use crate::render;

/// Which optional layers are drawn. All on by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct DisplayToggles {
    pub orbits: bool,
    pub labels: bool,
    pub rings: bool,
}

impl DisplayToggles {
    pub fn set(&mut self, toggle: Toggle, on: bool) {
        match toggle {
            Toggle::Orbits => self.orbits = on,
            Toggle::Labels => self.labels = on,
            Toggle::Rings => self.rings = on,
        }
    }
}

impl Default for DisplayToggles {
    fn default() -> Self {
        Self {
            orbits: true,
            labels: true,
            rings: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    pub camera: Camera2D,
    pub clock: SimulationClock,
    pub selection: Option<BodyId>,
    pub toggles: DisplayToggles,
    /// Viewport size in screen pixels.
    pub viewport: DVec2,
}

impl SimulationState {
    /// Fresh state with the default view for `viewport`.
    pub fn new(viewport: DVec2) -> Self {
        let mut camera = Camera2D::default();
        camera.reset(viewport);
        Self {
            camera,
            clock: SimulationClock::new(),
            selection: None,
            toggles: DisplayToggles::default(),
            viewport,
        }
    }

    /// Simulated time in milliseconds.
    pub fn time(&self) -> f64 {
        self.clock.time()
    }

    pub fn apply(&mut self, control: Control, registry: &BodyRegistry) {
        match control {
            Control::Pan(delta) => self.camera.pan(delta),
            Control::ZoomAt { screen, factor } => self.camera.zoom_at(screen, factor),
            Control::Click(screen) => {
                let world = self.camera.screen_to_world(screen);
                self.selection = picking::pick_at(world, registry, self.clock.time());
            }
            Control::SetZoomPercent(percent) => self.camera.set_scale(percent / 100.0),
            Control::SetSpeedPercent(percent) => self.clock.set_speed(percent / 100.0),
            Control::SetToggle(toggle, on) => self.toggles.set(toggle, on),
            Control::ResetView => self.camera.reset(self.viewport),
            Control::Resize(size) => {
                if size.x > 0.0 && size.y > 0.0 {
                    self.viewport = size;
                    self.camera.recenter(size);
                } else {
                    log::debug!("ignoring resize to {size}");
                }
            }
        }
    }

    /// Advance the clock by `dt` seconds of wall time and describe the
    /// resulting frame.
    pub fn tick(&mut self, dt: f64, registry: &BodyRegistry) -> Frame {
        self.clock.advance(dt);
        render::render_frame(self, registry)
    }
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new(DVec2::new(800.0, 600.0))
    }
}
