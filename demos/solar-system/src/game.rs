/// Solar System: interactive orrery with circular orbits.
///
/// Vectors + labels only. Camera: drag-to-pan, wheel zoom around the cursor,
/// zoom slider, reset button. Click a body to inspect it.

use glam::{DVec2, Vec2};
use orrery_engine::{
    rasterize_frame, EngineContext, Frame, Game, GameConfig, GameEvent, InputQueue, RenderContext,
};

use crate::bodies::{BodyId, BodyRegistry};
use crate::controls::Controller;
use crate::info::UiSnapshot;
use crate::render;
use crate::sim::SimulationState;

// ── World layout ─────────────────────────────────────────────────────

const WORLD_W: f32 = 800.0;
const WORLD_H: f32 = 600.0;

// ── Game event kinds to the host ─────────────────────────────────────

/// First frame is ready; the host can drop its loading screen.
pub const EVENT_READY: f32 = 1.0;
/// Zoom changed. `a` = percent.
pub const EVENT_ZOOM: f32 = 2.0;
/// Selection changed. `a` = body index, or -1 for none.
pub const EVENT_SELECTION: f32 = 3.0;
/// Clock readout. `a` = simulated ms, `b` = speed multiplier.
pub const EVENT_CLOCK: f32 = 4.0;

pub struct SolarSystem {
    registry: BodyRegistry,
    state: SimulationState,
    controller: Controller,
    /// Latest scene, rasterized by `render`.
    last_frame: Option<Frame>,

    // What the host has been told so far.
    ready_sent: bool,
    reported_zoom: Option<u32>,
    reported_selection: Option<BodyId>,
}

impl SolarSystem {
    pub fn new() -> Self {
        Self {
            registry: BodyRegistry::builtin(),
            state: SimulationState::new(DVec2::new(WORLD_W as f64, WORLD_H as f64)),
            controller: Controller::new(),
            last_frame: None,
            ready_sent: false,
            reported_zoom: None,
            reported_selection: None,
        }
    }

    pub fn registry(&self) -> &BodyRegistry {
        &self.registry
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    fn report_changes(&mut self, ctx: &mut EngineContext) {
        if !self.ready_sent {
            self.ready_sent = true;
            ctx.emit_event(GameEvent::new(EVENT_READY, 0.0, 0.0, 0.0));
        }

        let zoom = self.state.camera.zoom_percent();
        if self.reported_zoom != Some(zoom) {
            self.reported_zoom = Some(zoom);
            ctx.emit_event(GameEvent::new(EVENT_ZOOM, zoom as f32, 0.0, 0.0));
        }

        if self.reported_selection != self.state.selection {
            self.reported_selection = self.state.selection;
            match self.state.selection.and_then(|id| self.registry.get(id)) {
                Some(body) => log::debug!("selected {}", body.name),
                None => log::debug!("selection cleared"),
            }
            let index = self.state.selection.map_or(-1.0, |id| id.0 as f32);
            ctx.emit_event(GameEvent::new(EVENT_SELECTION, index, 0.0, 0.0));
        }

        ctx.emit_event(GameEvent::new(
            EVENT_CLOCK,
            self.state.time() as f32,
            self.state.clock.speed() as f32,
            0.0,
        ));
    }
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for SolarSystem {
    fn config(&self) -> GameConfig {
        GameConfig {
            fixed_dt: 1.0 / 60.0,
            world_width: WORLD_W,
            world_height: WORLD_H,
            max_labels: 64,
            max_events: 64,
            ..GameConfig::default()
        }
    }

    fn init(&mut self, _ctx: &mut EngineContext) {
        self.last_frame = Some(render::render_frame(&self.state, &self.registry));
        log::info!(
            "orrery ready: {} bodies around {}",
            self.registry.len(),
            self.registry.anchor_body().name
        );
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        // ── Handle input ─────────────────────────────────────────────
        for event in input.iter() {
            if let Some(control) = self.controller.handle(event) {
                self.state.apply(control, &self.registry);
            }
        }

        // ── Advance time, describe the scene ─────────────────────────
        self.last_frame = Some(self.state.tick(ctx.dt as f64, &self.registry));

        self.report_changes(ctx);
    }

    fn render(&self, ctx: &mut RenderContext) {
        if let Some(frame) = &self.last_frame {
            rasterize_frame(frame, ctx.vectors, ctx.labels);
        }
    }

    fn load_data(&mut self, json: &str) -> Result<(), Box<dyn std::error::Error>> {
        let registry = BodyRegistry::from_json(json)?;
        log::info!(
            "loaded {} bodies around {}",
            registry.len(),
            registry.anchor_body().name
        );
        self.registry = registry;
        self.state.selection = None;
        self.last_frame = Some(render::render_frame(&self.state, &self.registry));
        Ok(())
    }

    fn viewport(&self) -> Option<Vec2> {
        Some(self.state.viewport.as_vec2())
    }

    fn ui_state(&self) -> Option<serde_json::Value> {
        match serde_json::to_value(UiSnapshot::capture(&self.state, &self.registry)) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("UI snapshot serialization failed: {e}");
                None
            }
        }
    }
}
