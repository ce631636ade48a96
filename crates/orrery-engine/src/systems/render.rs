use glam::{DVec2, Vec2};

use crate::renderer::frame::{DrawCommand, Frame};
use crate::systems::text::LabelState;
use crate::systems::vector::{VectorColor, VectorState};

/// Concentric layers used to approximate a radial gradient.
pub const GLOW_STEPS: usize = 8;

/// Rasterize a frame: clear to the background, then push every command
/// through the camera into the vector and label buffers.
///
/// Both buffers are cleared first; a frame always replaces the previous one.
pub fn rasterize_frame(frame: &Frame, vectors: &mut VectorState, labels: &mut LabelState) {
    vectors.clear();
    labels.clear();

    let viewport = frame.viewport.as_vec2();
    vectors.fill_rect(Vec2::ZERO, viewport.x, viewport.y, frame.background);

    let cam = &frame.camera;
    let scale = cam.scale();
    let to_screen = |p: DVec2| cam.world_to_screen(p).as_vec2();
    let px = |len: f64| (len * scale) as f32;

    for command in frame.iter() {
        match command {
            DrawCommand::FillCircle { center, radius, color } => {
                vectors.fill_circle(to_screen(*center), px(*radius), *color);
            }
            DrawCommand::StrokeCircle { center, radius, width, color } => {
                vectors.stroke_circle(to_screen(*center), px(*radius), px(*width), *color);
            }
            DrawCommand::RadialGlow { center, radius, color } => {
                vectors.fill_radial_glow(to_screen(*center), px(*radius), *color, GLOW_STEPS);
            }
            DrawCommand::StrokeEllipse { center, radii, width, color } => {
                vectors.stroke_ellipse(to_screen(*center), (*radii * scale).as_vec2(), px(*width), *color);
            }
            DrawCommand::Label { text, anchor, lift, size, color } => {
                let at = to_screen(*anchor - DVec2::new(0.0, *lift));
                labels.push(text.as_str(), at.x, at.y, px(*size), *color);
            }
        }
    }
}
