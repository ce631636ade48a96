//! Lyon-based vector rendering for orbit rings, body discs and overlays.
//!
//! Shapes arrive in screen space (already passed through the camera) and are
//! tessellated on the CPU into a flat triangle-list buffer that the host
//! uploads as-is.
//!
//! # Usage
//!
//! ```ignore
//! vectors.fill_circle(Vec2::new(400.0, 300.0), 30.0, VectorColor::rgb8(0xFF, 0xD7, 0x00));
//! vectors.stroke_circle(Vec2::new(400.0, 300.0), 160.0, 1.0, VectorColor::WHITE.with_alpha(0.1));
//! vectors.stroke_ellipse(center, Vec2::new(36.0, 12.0), 2.0, ring_color);
//! ```

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use lyon::math::point;
use lyon::path::{Path, Winding};
use lyon::tessellation::{
    BuffersBuilder, FillOptions, FillTessellator, FillVertex, FillVertexConstructor,
    StrokeOptions, StrokeTessellator, StrokeVertex, StrokeVertexConstructor, VertexBuffers,
};

/// Tessellation tolerance in screen pixels.
const TOLERANCE: f32 = 0.25;

/// Per-vertex data for vector rendering.
/// 6 floats = 24 bytes per vertex.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct VectorVertex {
    pub x: f32,
    pub y: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl VectorVertex {
    /// Number of floats per vertex.
    pub const FLOATS: usize = 6;
    /// Stride in bytes.
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// RGBA color, components in 0.0 - 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VectorColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl VectorColor {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a fully opaque color from 0-255 channels.
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgba8(r, g, b, 255)
    }

    pub fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (leading `#` optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.is_ascii() || !(digits.len() == 6 || digits.len() == 8) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        let alpha = if digits.len() == 8 { channel(6)? } else { 255 };
        Some(Self::rgba8(channel(0)?, channel(2)?, channel(4)?, alpha))
    }

    /// Format as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    pub fn to_hex(&self) -> String {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        if q(self.a) == 255 {
            format!("#{:02X}{:02X}{:02X}", q(self.r), q(self.g), q(self.b))
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", q(self.r), q(self.g), q(self.b), q(self.a))
        }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
}

impl Default for VectorColor {
    fn default() -> Self {
        Self::WHITE
    }
}

struct FillVertexCtor {
    color: VectorColor,
}

impl FillVertexConstructor<VectorVertex> for FillVertexCtor {
    fn new_vertex(&mut self, vertex: FillVertex) -> VectorVertex {
        let p = vertex.position();
        let c = self.color;
        VectorVertex { x: p.x, y: p.y, r: c.r, g: c.g, b: c.b, a: c.a }
    }
}

struct StrokeVertexCtor {
    color: VectorColor,
}

impl StrokeVertexConstructor<VectorVertex> for StrokeVertexCtor {
    fn new_vertex(&mut self, vertex: StrokeVertex) -> VectorVertex {
        let p = vertex.position();
        let c = self.color;
        VectorVertex { x: p.x, y: p.y, r: c.r, g: c.g, b: c.b, a: c.a }
    }
}

/// CPU tessellation state plus the output vertex buffer.
///
/// Cleared at the start of every rendered frame. Shapes that would push the
/// buffer past `max_vertices` are dropped whole so the host never reads a
/// half-written triangle.
pub struct VectorState {
    fill_tess: FillTessellator,
    stroke_tess: StrokeTessellator,
    geometry: VertexBuffers<VectorVertex, u32>,
    buffer: Vec<f32>,
    max_vertices: usize,
    dropped_shapes: usize,
}

impl VectorState {
    pub fn new() -> Self {
        Self::with_capacity(16384)
    }

    pub fn with_capacity(max_vertices: usize) -> Self {
        Self {
            fill_tess: FillTessellator::new(),
            stroke_tess: StrokeTessellator::new(),
            geometry: VertexBuffers::new(),
            buffer: Vec::with_capacity(max_vertices * VectorVertex::FLOATS),
            max_vertices,
            dropped_shapes: 0,
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.dropped_shapes = 0;
    }

    pub fn vertex_count(&self) -> usize {
        self.buffer.len() / VectorVertex::FLOATS
    }


    /// Shapes dropped this frame because the buffer was full.
    pub fn dropped_shapes(&self) -> usize {
        self.dropped_shapes
    }

    /// Raw pointer to the flat float buffer (for host reads).
    pub fn buffer_ptr(&self) -> *const f32 {
        self.buffer.as_ptr()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.buffer
    }

    /// Flush indexed geometry to the flat buffer as a triangle list.
    fn flush_geometry(&mut self) {
        let incoming = self.geometry.indices.len();
        if self.vertex_count() + incoming > self.max_vertices {
            if self.dropped_shapes == 0 {
                log::warn!(
                    "vector buffer full ({} vertices), dropping shapes this frame",
                    self.max_vertices
                );
            }
            self.dropped_shapes += 1;
        } else {
            for idx in &self.geometry.indices {
                let v = &self.geometry.vertices[*idx as usize];
                self.buffer.extend_from_slice(&[v.x, v.y, v.r, v.g, v.b, v.a]);
            }
        }
        self.geometry.vertices.clear();
        self.geometry.indices.clear();
    }

    /// Fill an axis-aligned rectangle. Used for the frame background.
    pub fn fill_rect(&mut self, pos: Vec2, width: f32, height: f32, color: VectorColor) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        let mut builder = Path::builder();
        builder.begin(point(pos.x, pos.y));
        builder.line_to(point(pos.x + width, pos.y));
        builder.line_to(point(pos.x + width, pos.y + height));
        builder.line_to(point(pos.x, pos.y + height));
        builder.close();
        self.fill_path(&builder.build(), color);
    }

    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: VectorColor) {
        if radius <= 0.0 {
            return;
        }
        let mut builder = Path::builder();
        builder.add_circle(point(center.x, center.y), radius, Winding::Positive);
        self.fill_path(&builder.build(), color);
    }

    /// Soft radial glow: concentric discs whose alpha ramps from `color.a`
    /// at the center down to zero at `radius`.
    pub fn fill_radial_glow(&mut self, center: Vec2, radius: f32, color: VectorColor, steps: usize) {
        if radius <= 0.0 || steps == 0 {
            return;
        }
        // Source-over stacking: `steps` layers of alpha `l` composite to
        // `1 - (1 - l)^steps`, which equals `color.a` at the center.
        let layer_alpha = 1.0 - (1.0 - color.a.clamp(0.0, 1.0)).powf(1.0 / steps as f32);
        for i in 0..steps {
            let r = radius * (steps - i) as f32 / steps as f32;
            self.fill_circle(center, r, color.with_alpha(layer_alpha));
        }
    }

    pub fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: VectorColor) {
        if radius <= 0.0 || width <= 0.0 {
            return;
        }
        let mut builder = Path::builder();
        builder.add_circle(point(center.x, center.y), radius, Winding::Positive);
        self.stroke_path(&builder.build(), width, color);
    }

    /// Stroke an axis-aligned ellipse (flattened planetary ring).
    pub fn stroke_ellipse(&mut self, center: Vec2, radii: Vec2, width: f32, color: VectorColor) {
        if radii.x <= 0.0 || radii.y <= 0.0 || width <= 0.0 {
            return;
        }
        let mut builder = Path::builder();
        builder.add_ellipse(
            point(center.x, center.y),
            lyon::math::vector(radii.x, radii.y),
            lyon::math::Angle::radians(0.0),
            Winding::Positive,
        );
        self.stroke_path(&builder.build(), width, color);
    }

    pub fn fill_path(&mut self, path: &Path, color: VectorColor) {
        let result = self.fill_tess.tessellate_path(
            path,
            &FillOptions::tolerance(TOLERANCE),
            &mut BuffersBuilder::new(&mut self.geometry, FillVertexCtor { color }),
        );
        match result {
            Ok(()) => self.flush_geometry(),
            Err(e) => {
                log::debug!("fill tessellation failed: {e:?}");
                self.geometry.vertices.clear();
                self.geometry.indices.clear();
            }
        }
    }

    pub fn stroke_path(&mut self, path: &Path, width: f32, color: VectorColor) {
        let result = self.stroke_tess.tessellate_path(
            path,
            &StrokeOptions::tolerance(TOLERANCE).with_line_width(width),
            &mut BuffersBuilder::new(&mut self.geometry, StrokeVertexCtor { color }),
        );
        match result {
            Ok(()) => self.flush_geometry(),
            Err(e) => {
                log::debug!("stroke tessellation failed: {e:?}");
                self.geometry.vertices.clear();
                self.geometry.indices.clear();
            }
        }
    }
}

impl Default for VectorState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn vector_vertex_is_24_bytes() {
        assert_eq!(size_of::<VectorVertex>(), 24);
        assert_eq!(VectorVertex::STRIDE_BYTES, 24);
    }

    #[test]
    fn hex_colors_parse() {
        let gold = VectorColor::from_hex("#FFD700").unwrap();
        assert_eq!(gold, VectorColor::rgb8(0xFF, 0xD7, 0x00));

        let half = VectorColor::from_hex("F0E68C80").unwrap();
        assert!((half.a - 128.0 / 255.0).abs() < 1e-6);

        assert!(VectorColor::from_hex("#FFF").is_none());
        assert!(VectorColor::from_hex("#GG0000").is_none());
        assert!(VectorColor::from_hex("#ÿÿÿ").is_none());
    }

    #[test]
    fn hex_colors_format() {
        assert_eq!(VectorColor::rgb8(0x1E, 0x90, 0xFF).to_hex(), "#1E90FF");
        assert_eq!(VectorColor::rgba8(0, 0, 0, 0x80).to_hex(), "#00000080");
    }

    #[test]
    fn fill_rect_produces_two_triangles() {
        let mut state = VectorState::new();
        state.fill_rect(Vec2::ZERO, 100.0, 50.0, VectorColor::BLACK);
        assert_eq!(state.vertex_count(), 6);
    }

    #[test]
    fn fill_circle_produces_triangles() {
        let mut state = VectorState::new();
        state.fill_circle(Vec2::new(50.0, 50.0), 25.0, VectorColor::GREEN);
        assert!(state.vertex_count() > 0);
        assert_eq!(state.vertex_count() % 3, 0);
    }

    #[test]
    fn vertices_carry_color() {
        let mut state = VectorState::new();
        let color = VectorColor::new(0.1, 0.2, 0.3, 0.4);
        state.fill_circle(Vec2::ZERO, 5.0, color);
        let first = &state.as_slice()[..VectorVertex::FLOATS];
        assert_eq!(&first[2..], &[0.1, 0.2, 0.3, 0.4]);
    }

    #[test]
    fn ellipse_and_circle_strokes_produce_vertices() {
        let mut state = VectorState::new();
        state.stroke_ellipse(Vec2::new(10.0, 10.0), Vec2::new(36.0, 12.0), 2.0, VectorColor::WHITE);
        let after_ellipse = state.vertex_count();
        assert!(after_ellipse > 0);

        state.stroke_circle(Vec2::ZERO, 80.0, 1.0, VectorColor::WHITE);
        assert!(state.vertex_count() > after_ellipse);
    }

    #[test]
    fn glow_draws_one_disc_per_step() {
        let mut single = VectorState::new();
        single.fill_circle(Vec2::ZERO, 45.0, VectorColor::WHITE);

        let mut glow = VectorState::new();
        glow.fill_radial_glow(Vec2::ZERO, 45.0, VectorColor::WHITE, 4);
        assert!(glow.vertex_count() > single.vertex_count());
    }

    #[test]
    fn glow_center_composites_to_full_alpha() {
        let steps = 8;
        let color = VectorColor::new(1.0, 0.84, 0.0, 0.9);
        let mut glow = VectorState::new();
        glow.fill_radial_glow(Vec2::ZERO, 45.0, color, steps);

        let layer = glow.as_slice()[5];
        // Source-over blend of every layer covering the center.
        let mut composite = 0.0_f32;
        for _ in 0..steps {
            composite = layer + composite * (1.0 - layer);
        }
        assert!((composite - color.a).abs() < 1e-4, "center alpha {composite}");

        let mut opaque = VectorState::new();
        opaque.fill_radial_glow(Vec2::ZERO, 45.0, VectorColor::WHITE, steps);
        assert_eq!(opaque.as_slice()[5], 1.0);
    }

    #[test]
    fn degenerate_shapes_produce_nothing() {
        let mut state = VectorState::new();
        state.fill_circle(Vec2::ZERO, 0.0, VectorColor::WHITE);
        state.stroke_circle(Vec2::ZERO, 10.0, 0.0, VectorColor::WHITE);
        state.stroke_ellipse(Vec2::ZERO, Vec2::new(10.0, 0.0), 1.0, VectorColor::WHITE);
        state.fill_rect(Vec2::ZERO, 0.0, 10.0, VectorColor::WHITE);
        state.fill_radial_glow(Vec2::ZERO, 10.0, VectorColor::WHITE, 0);
        assert_eq!(state.vertex_count(), 0);
    }

    #[test]
    fn full_buffer_drops_whole_shapes() {
        let mut state = VectorState::with_capacity(6);
        state.fill_rect(Vec2::ZERO, 10.0, 10.0, VectorColor::WHITE);
        assert_eq!(state.vertex_count(), 6);

        state.fill_rect(Vec2::ZERO, 10.0, 10.0, VectorColor::WHITE);
        assert_eq!(state.vertex_count(), 6);
        assert_eq!(state.dropped_shapes(), 1);

        state.clear();
        assert_eq!(state.vertex_count(), 0);
        assert_eq!(state.dropped_shapes(), 0);
    }
}
