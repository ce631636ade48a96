/// Shared float-buffer layout.
/// Must stay in sync with the host-side reader.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 16 floats]
/// [Vectors: max_vector_vertices × 6 floats]
/// [Events: max_events × 4 floats]
/// ```
///
/// Capacities are written once into the header at init; the host reads them
/// back to compute offsets. Labels and the UI snapshot travel as JSON and
/// are not part of this buffer.

use glam::Vec2;

use crate::api::game::GameConfig;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_PROTOCOL_VERSION: usize = 2;
pub const HEADER_WORLD_WIDTH: usize = 3;
pub const HEADER_WORLD_HEIGHT: usize = 4;
pub const HEADER_MAX_VECTOR_VERTICES: usize = 5;
pub const HEADER_VECTOR_VERTEX_COUNT: usize = 6;
pub const HEADER_MAX_EVENTS: usize = 7;
pub const HEADER_EVENT_COUNT: usize = 8;
pub const HEADER_VECTOR_DATA_OFFSET: usize = 9;
pub const HEADER_EVENT_DATA_OFFSET: usize = 10;
pub const HEADER_LABEL_COUNT: usize = 11;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per vector vertex: x, y, r, g, b, a (fixed wire format).
pub const VECTOR_VERTEX_FLOATS: usize = 6;

/// Floats per game event: kind, a, b, c (fixed wire format).
pub const EVENT_FLOATS: usize = 4;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub max_vector_vertices: usize,
    pub max_events: usize,

    /// Size of the vector section in floats.
    pub vector_data_floats: usize,
    /// Size of the event section in floats.
    pub event_data_floats: usize,

    /// Offset (in floats) where vector data begins.
    pub vector_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,

    pub buffer_total_floats: usize,
    pub buffer_total_bytes: usize,
}

/// Per-frame counts written into the header.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameCounts {
    pub frame: u64,
    pub vector_vertices: usize,
    pub events: usize,
    pub labels: usize,
}

impl ProtocolLayout {
    pub fn new(max_vector_vertices: usize, max_events: usize) -> Self {
        let vector_data_floats = max_vector_vertices * VECTOR_VERTEX_FLOATS;
        let event_data_floats = max_events * EVENT_FLOATS;

        let vector_data_offset = HEADER_FLOATS;
        let event_data_offset = vector_data_offset + vector_data_floats;

        let buffer_total_floats = event_data_offset + event_data_floats;

        Self {
            max_vector_vertices,
            max_events,
            vector_data_floats,
            event_data_floats,
            vector_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.max_vector_vertices, config.max_events)
    }

    /// Fill a header block for the current frame. `world` is the surface
    /// size the frame was drawn for. The lock slot is owned by the host and
    /// left at zero.
    pub fn header(&self, world: Vec2, counts: FrameCounts) -> [f32; HEADER_FLOATS] {
        let mut header = [0.0; HEADER_FLOATS];
        header[HEADER_FRAME_COUNTER] = counts.frame as f32;
        header[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        header[HEADER_WORLD_WIDTH] = world.x;
        header[HEADER_WORLD_HEIGHT] = world.y;
        header[HEADER_MAX_VECTOR_VERTICES] = self.max_vector_vertices as f32;
        header[HEADER_VECTOR_VERTEX_COUNT] = counts.vector_vertices.min(self.max_vector_vertices) as f32;
        header[HEADER_MAX_EVENTS] = self.max_events as f32;
        header[HEADER_EVENT_COUNT] = counts.events.min(self.max_events) as f32;
        header[HEADER_VECTOR_DATA_OFFSET] = self.vector_data_offset as f32;
        header[HEADER_EVENT_DATA_OFFSET] = self.event_data_offset as f32;
        header[HEADER_LABEL_COUNT] = counts.labels as f32;
        header
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_default_config_matches_expected_sizes() {
        let layout = ProtocolLayout::from_config(&GameConfig::default());

        assert_eq!(layout.max_vector_vertices, 65536);
        assert_eq!(layout.max_events, 32);
        assert_eq!(layout.vector_data_floats, 65536 * 6);
        assert_eq!(layout.event_data_floats, 32 * 4);
        assert_eq!(layout.vector_data_offset, 16);
        assert_eq!(layout.event_data_offset, 16 + 65536 * 6);
        assert_eq!(layout.buffer_total_floats, 16 + 65536 * 6 + 32 * 4);
        assert_eq!(layout.buffer_total_bytes, layout.buffer_total_floats * 4);
    }

    #[test]
    fn offsets_are_contiguous() {
        let layout = ProtocolLayout::new(100, 20);

        assert_eq!(layout.vector_data_offset, HEADER_FLOATS);
        assert_eq!(layout.event_data_offset, layout.vector_data_offset + layout.vector_data_floats);
        assert_eq!(layout.buffer_total_floats, layout.event_data_offset + layout.event_data_floats);
    }

    #[test]
    fn header_reports_counts_and_offsets() {
        let layout = ProtocolLayout::from_config(&GameConfig::default());
        let header = layout.header(
            Vec2::new(1280.0, 720.0),
            FrameCounts { frame: 42, vector_vertices: 900, events: 3, labels: 9 },
        );

        assert_eq!(header[HEADER_LOCK], 0.0);
        assert_eq!(header[HEADER_FRAME_COUNTER], 42.0);
        assert_eq!(header[HEADER_PROTOCOL_VERSION], PROTOCOL_VERSION);
        assert_eq!(header[HEADER_WORLD_WIDTH], 1280.0);
        assert_eq!(header[HEADER_WORLD_HEIGHT], 720.0);
        assert_eq!(header[HEADER_VECTOR_VERTEX_COUNT], 900.0);
        assert_eq!(header[HEADER_EVENT_COUNT], 3.0);
        assert_eq!(header[HEADER_LABEL_COUNT], 9.0);
        assert_eq!(header[HEADER_EVENT_DATA_OFFSET], layout.event_data_offset as f32);
    }

    #[test]
    fn header_counts_never_exceed_capacity() {
        let layout = ProtocolLayout::new(10, 2);
        let header = layout.header(
            Vec2::new(800.0, 600.0),
            FrameCounts { frame: 1, vector_vertices: 50, events: 5, labels: 0 },
        );
        assert_eq!(header[HEADER_VECTOR_VERTEX_COUNT], 10.0);
        assert_eq!(header[HEADER_EVENT_COUNT], 2.0);
    }
}
