pub mod camera;
pub mod frame;

pub use camera::{Camera2D, MAX_SCALE, MIN_SCALE};
pub use frame::{DrawCommand, Frame};
