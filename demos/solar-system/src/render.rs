/// Scene description: turns the simulation state into a world-space [`Frame`].
///
/// Nothing here touches pixels. The engine's rasterizer applies the camera.

use glam::DVec2;
use orrery_engine::{DrawCommand, Frame, VectorColor};

use crate::bodies::BodyRegistry;
use crate::orbit;
use crate::sim::SimulationState;

// ── Palette and sizes (world units) ──────────────────────────────────

/// `#0F172A`
pub const BACKGROUND: VectorColor = VectorColor::rgb(15.0 / 255.0, 23.0 / 255.0, 42.0 / 255.0);

const ORBIT_COLOR: VectorColor = VectorColor::WHITE.with_alpha(0.1);
const ORBIT_WIDTH: f64 = 1.0;

/// Anchor glow reaches this multiple of its radius.
const GLOW_SCALE: f64 = 1.5;

/// Ring ellipse radii as multiples of the body radius.
const RING_RADII: DVec2 = DVec2::new(1.8, 0.6);
/// `0x80 / 0xFF`
const RING_ALPHA: f32 = 128.0 / 255.0;
const RING_WIDTH: f64 = 2.0;

const LABEL_SIZE: f64 = 12.0;
/// Gap between the top of a disc and its label.
const LABEL_GAP: f64 = 10.0;
const LABEL_COLOR: VectorColor = VectorColor::WHITE;

/// `#00FF00`
const SELECTION_COLOR: VectorColor = VectorColor::GREEN;
const SELECTION_GAP: f64 = 3.0;
const SELECTION_WIDTH: f64 = 2.0;

/// Describe the scene at the state's current time.
///
/// Paint order: orbit circles, then each body in registry order (disc, glow,
/// rings, label), then the selection ring on top.
pub fn render_frame(state: &SimulationState, registry: &BodyRegistry) -> Frame {
    let t = state.time();
    let toggles = state.toggles;
    let mut frame = Frame::new(BACKGROUND, state.viewport, state.camera);

    let anchor_pos = orbit::position(registry.anchor_body(), t);

    if toggles.orbits {
        for (_, body) in registry.iter().filter(|(_, b)| !b.is_anchor()) {
            frame.push(DrawCommand::StrokeCircle {
                center: anchor_pos,
                radius: body.orbit_radius,
                width: ORBIT_WIDTH,
                color: ORBIT_COLOR,
            });
        }
    }

    for (_, body) in registry.iter() {
        let center = orbit::position(body, t);

        frame.push(DrawCommand::FillCircle {
            center,
            radius: body.radius,
            color: body.color,
        });

        if body.is_anchor() {
            frame.push(DrawCommand::RadialGlow {
                center,
                radius: body.radius * GLOW_SCALE,
                color: body.color,
            });
        }

        if body.has_rings && toggles.rings {
            frame.push(DrawCommand::StrokeEllipse {
                center,
                radii: RING_RADII * body.radius,
                width: RING_WIDTH,
                color: body.color.with_alpha(RING_ALPHA),
            });
        }

        if toggles.labels {
            frame.push(DrawCommand::Label {
                text: body.name.clone(),
                anchor: center,
                lift: body.radius + LABEL_GAP,
                size: LABEL_SIZE,
                color: LABEL_COLOR,
            });
        }
    }

    if let Some(body) = state.selection.and_then(|id| registry.get(id)) {
        frame.push(DrawCommand::StrokeCircle {
            center: orbit::position(body, t),
            radius: body.radius + SELECTION_GAP,
            width: SELECTION_WIDTH,
            color: SELECTION_COLOR,
        });
    }

    frame
}
