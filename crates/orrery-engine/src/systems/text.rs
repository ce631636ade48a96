//! Screen-space text labels.
//!
//! Text is not tessellated. Each label is a positioned run that the host
//! draws on an overlay (Canvas 2D `fillText`, DOM, ...). Labels are handed
//! over as JSON once per rendered frame.

use serde::Serialize;

use crate::systems::vector::VectorColor;

/// A text run in screen pixels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub text: String,
    /// Horizontal center of the text.
    pub x: f32,
    /// Baseline.
    pub y: f32,
    /// Font size in pixels.
    pub size: f32,
    /// RGBA in 0.0 - 1.0.
    pub color: [f32; 4],
}

/// Per-frame label list with a fixed capacity.
pub struct LabelState {
    labels: Vec<Label>,
    max_labels: usize,
}

impl LabelState {
    pub fn new(max_labels: usize) -> Self {
        Self {
            labels: Vec::with_capacity(max_labels),
            max_labels,
        }
    }

    pub fn clear(&mut self) {
        self.labels.clear();
    }

    /// Queue a label. Returns `false` when the frame is already full.
    pub fn push(&mut self, text: impl Into<String>, x: f32, y: f32, size: f32, color: VectorColor) -> bool {
        if self.labels.len() >= self.max_labels {
            return false;
        }
        self.labels.push(Label {
            text: text.into(),
            x,
            y,
            size,
            color: color.to_array(),
        });
        true
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Label> {
        self.labels.iter()
    }

    /// JSON array of the current labels.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.labels)
    }
}

impl Default for LabelState {
    fn default() -> Self {
        Self::new(64)
    }
}
