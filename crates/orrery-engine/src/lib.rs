pub mod api;
pub mod core;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext, RenderContext};
pub use api::types::GameEvent;
pub use crate::core::time::{FixedTimestep, SimulationClock};
pub use renderer::camera::Camera2D;
pub use renderer::frame::{DrawCommand, Frame};
pub use input::queue::{InputEvent, InputQueue};
pub use bridge::protocol::{FrameCounts, ProtocolLayout};
pub use systems::render::rasterize_frame;
pub use systems::text::{Label, LabelState};
pub use systems::vector::{VectorState, VectorVertex, VectorColor};
