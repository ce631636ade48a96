use glam::DVec2;

use super::camera::Camera2D;
use crate::systems::vector::VectorColor;

/// One world-space drawing primitive.
///
/// Lengths (radii, stroke widths, label sizes and offsets) are in world
/// units and get scaled by the camera along with positions.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillCircle {
        center: DVec2,
        radius: f64,
        color: VectorColor,
    },
    StrokeCircle {
        center: DVec2,
        radius: f64,
        width: f64,
        color: VectorColor,
    },
    /// Disc fading from `color` at the center to transparent at `radius`.
    RadialGlow {
        center: DVec2,
        radius: f64,
        color: VectorColor,
    },
    StrokeEllipse {
        center: DVec2,
        radii: DVec2,
        width: f64,
        color: VectorColor,
    },
    /// Text centered horizontally on `anchor`, baseline raised by `lift`.
    Label {
        text: String,
        anchor: DVec2,
        lift: f64,
        size: f64,
        color: VectorColor,
    },
}

/// Everything needed to draw one frame: the background, a snapshot of the
/// camera, and the draw list in paint order.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub background: VectorColor,
    /// Viewport size in screen pixels.
    pub viewport: DVec2,
    pub camera: Camera2D,
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    pub fn new(background: VectorColor, viewport: DVec2, camera: Camera2D) -> Self {
        Self {
            background,
            viewport,
            camera,
            commands: Vec::new(),
        }
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_keep_paint_order() {
        let mut frame = Frame::new(VectorColor::BLACK, DVec2::new(800.0, 600.0), Camera2D::default());
        assert!(frame.is_empty());

        frame.push(DrawCommand::FillCircle {
            center: DVec2::ZERO,
            radius: 30.0,
            color: VectorColor::WHITE,
        });
        frame.push(DrawCommand::StrokeCircle {
            center: DVec2::ZERO,
            radius: 33.0,
            width: 2.0,
            color: VectorColor::GREEN,
        });

        assert_eq!(frame.len(), 2);
        assert!(matches!(frame.iter().next(), Some(DrawCommand::FillCircle { .. })));
        assert!(matches!(frame.iter().last(), Some(DrawCommand::StrokeCircle { .. })));
    }
}
