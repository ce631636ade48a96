use glam::Vec2;

use crate::api::types::GameEvent;
use crate::input::queue::InputQueue;
use crate::systems::text::LabelState;
use crate::systems::vector::VectorState;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Initial surface width in pixels, used until `Game::viewport` reports one.
    pub world_width: f32,
    /// Initial surface height in pixels.
    pub world_height: f32,
    /// Maximum number of tessellated vector vertices per frame (default: 65536).
    pub max_vector_vertices: usize,
    /// Maximum number of text labels per frame (default: 64).
    pub max_labels: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            world_width: 800.0,
            world_height: 600.0,
            max_vector_vertices: 65536,
            max_labels: 64,
            max_events: 32,
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state.
    fn init(&mut self, ctx: &mut EngineContext);

    /// One fixed-step tick: consume input, advance the simulation.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// Draw the current state. Called once per host frame, after all updates.
    fn render(&self, _ctx: &mut RenderContext) {}

    /// Replace game data from a JSON document supplied by the host.
    fn load_data(&mut self, _json: &str) -> Result<(), Box<dyn std::error::Error>> {
        Ok(())
    }

    /// Current surface size in pixels, once the game has seen a resize.
    /// `None` keeps the configured world size.
    fn viewport(&self) -> Option<Vec2> {
        None
    }

    /// Snapshot of UI-facing state, serialized to JSON for the host.
    fn ui_state(&self) -> Option<serde_json::Value> {
        None
    }
}

/// Mutable engine state passed to Game::init and Game::update.
pub struct EngineContext {
    pub events: Vec<GameEvent>,
    /// Fixed timestep in seconds.
    pub dt: f32,
    max_events: usize,
    dropped_events: usize,
}

impl EngineContext {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            events: Vec::with_capacity(config.max_events),
            dt: config.fixed_dt,
            max_events: config.max_events,
            dropped_events: 0,
        }
    }

    /// Emit a game event to be forwarded to the host.
    /// Events past the configured capacity are dropped.
    pub fn emit_event(&mut self, event: GameEvent) {
        if self.events.len() < self.max_events {
            self.events.push(event);
        } else {
            self.dropped_events += 1;
        }
    }

    pub fn dropped_events(&self) -> usize {
        self.dropped_events
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
        self.dropped_events = 0;
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

/// Output buffers for Game::render.
pub struct RenderContext<'a> {
    pub vectors: &'a mut VectorState,
    pub labels: &'a mut LabelState,
}
