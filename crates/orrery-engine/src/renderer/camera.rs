use glam::DVec2;

/// Smallest allowed zoom scale.
pub const MIN_SCALE: f64 = 0.1;
/// Largest allowed zoom scale.
pub const MAX_SCALE: f64 = 5.0;

/// Pan/zoom viewport camera.
///
/// Holds the affine map `screen = world * scale + offset`. World coordinates
/// are centered on the anchor body; screen coordinates are viewport pixels.
/// Math runs in f64 and is only narrowed to f32 when tessellating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera2D {
    /// Screen position of the world origin.
    pub offset: DVec2,
    /// Uniform world-to-screen scale, always within `[MIN_SCALE, MAX_SCALE]`.
    scale: f64,
}

impl Camera2D {
    pub fn new(offset: DVec2, scale: f64) -> Self {
        Self {
            offset,
            scale: clamp_scale(scale),
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Set the scale directly (zoom slider). The offset is left alone.
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = clamp_scale(scale);
    }

    pub fn world_to_screen(&self, world: DVec2) -> DVec2 {
        world * self.scale + self.offset
    }

    pub fn screen_to_world(&self, screen: DVec2) -> DVec2 {
        (screen - self.offset) / self.scale
    }

    /// Shift the view by a screen-space drag delta. Unbounded.
    pub fn pan(&mut self, delta: DVec2) {
        self.offset += delta;
    }

    /// Multiply the scale by `factor`, keeping the world point under `screen`
    /// fixed on screen.
    ///
    /// The offset is recomputed from the ratio actually applied after
    /// clamping, so the anchor does not drift once a bound is reached.
    pub fn zoom_at(&mut self, screen: DVec2, factor: f64) {
        let old = self.scale;
        let new = clamp_scale(old * factor);
        let ratio = new / old;
        self.offset = screen - (screen - self.offset) * ratio;
        self.scale = new;
    }

    /// Default view: world origin at the viewport center, scale 1.
    /// A degenerate viewport leaves the camera untouched.
    pub fn reset(&mut self, viewport: DVec2) {
        if let Some(center) = viewport_center(viewport) {
            self.offset = center;
            self.scale = 1.0;
        }
    }

    /// Move the world origin to the viewport center, keeping the scale.
    pub fn recenter(&mut self, viewport: DVec2) {
        if let Some(center) = viewport_center(viewport) {
            self.offset = center;
        }
    }

    /// Scale as a rounded percentage, e.g. `110` for 1.1.
    pub fn zoom_percent(&self) -> u32 {
        (self.scale * 100.0).round() as u32
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new(DVec2::ZERO, 1.0)
    }
}

fn clamp_scale(scale: f64) -> f64 {
    if scale.is_nan() {
        return 1.0;
    }
    scale.clamp(MIN_SCALE, MAX_SCALE)
}

fn viewport_center(viewport: DVec2) -> Option<DVec2> {
    if viewport.x > 0.0 && viewport.y > 0.0 && viewport.is_finite() {
        Some(viewport / 2.0)
    } else {
        None
    }
}
