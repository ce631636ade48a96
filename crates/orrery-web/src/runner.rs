use glam::Vec2;
use orrery_engine::bridge::protocol::HEADER_FLOATS;
use orrery_engine::{
    EngineContext, FixedTimestep, FrameCounts, Game, GameConfig, InputEvent, InputQueue,
    LabelState, ProtocolLayout, RenderContext, VectorState,
};

/// Generic game runner that wires up the frame loop.
///
/// Each concrete game keeps a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]` (see `export_game!`), because
/// wasm-bindgen cannot export generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    vectors: VectorState,
    labels: LabelState,
    timestep: FixedTimestep,
    config: GameConfig,
    layout: ProtocolLayout,
    initialized: bool,
    frame: u64,
    header: [f32; HEADER_FLOATS],
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        Self {
            ctx: EngineContext::new(&config),
            input: InputQueue::new(),
            vectors: VectorState::with_capacity(config.max_vector_vertices),
            labels: LabelState::new(config.max_labels),
            timestep: FixedTimestep::new(config.fixed_dt),
            layout: ProtocolLayout::from_config(&config),
            config,
            game,
            initialized: false,
            frame: 0,
            header: [0.0; HEADER_FLOATS],
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.game.init(&mut self.ctx);
        self.initialized = true;
        self.refresh_header();
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one host frame: fixed updates, then a single render.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        self.ctx.clear_frame_data();

        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            self.game.update(&mut self.ctx, &self.input);
            // Events are applied once, by the first step that sees them.
            self.input.drain();
        }

        {
            let mut render_ctx = RenderContext {
                vectors: &mut self.vectors,
                labels: &mut self.labels,
            };
            self.game.render(&mut render_ctx);
        }

        if self.ctx.dropped_events() > 0 {
            log::warn!("dropped {} game events this frame", self.ctx.dropped_events());
        }

        self.frame += 1;
        self.refresh_header();
    }

    /// Hand a JSON document to the game. Failures are logged and leave the
    /// game's current data in place.
    pub fn load_data(&mut self, json: &str) -> bool {
        match self.game.load_data(json) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("rejected game data: {e}");
                false
            }
        }
    }

    /// Surface size the game is drawing for: its reported viewport, or the
    /// configured world size before the first resize.
    fn world_size(&self) -> Vec2 {
        self.game
            .viewport()
            .filter(|v| v.x > 0.0 && v.y > 0.0)
            .unwrap_or(Vec2::new(self.config.world_width, self.config.world_height))
    }

    fn refresh_header(&mut self) {
        self.header = self.layout.header(
            self.world_size(),
            FrameCounts {
                frame: self.frame,
                vector_vertices: self.vectors.vertex_count(),
                events: self.ctx.events.len(),
                labels: self.labels.len(),
            },
        );
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    // ---- Pointer accessors for host reads ----

    pub fn vector_vertices_ptr(&self) -> *const f32 {
        self.vectors.buffer_ptr()
    }

    pub fn vector_vertex_count(&self) -> u32 {
        self.vectors.vertex_count() as u32
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    pub fn header_ptr(&self) -> *const f32 {
        self.header.as_ptr()
    }

    pub fn header(&self) -> &[f32; HEADER_FLOATS] {
        &self.header
    }

    // ---- JSON accessors ----

    pub fn labels_json(&self) -> String {
        self.labels.to_json().unwrap_or_else(|e| {
            log::warn!("label serialization failed: {e}");
            String::from("[]")
        })
    }

    pub fn ui_json(&self) -> String {
        match self.game.ui_state() {
            Some(value) => value.to_string(),
            None => String::from("null"),
        }
    }

    // ---- Capacity accessors ----

    pub fn world_width(&self) -> f32 {
        self.world_size().x
    }

    pub fn world_height(&self) -> f32 {
        self.world_size().y
    }

    pub fn max_vector_vertices(&self) -> u32 {
        self.layout.max_vector_vertices as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn max_labels(&self) -> u32 {
        self.config.max_labels as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}
