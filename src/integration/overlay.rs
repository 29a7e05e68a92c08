//! Overlay annotations for drawing tracked objects.
//!
//! Pixel drawing is left to the caller; this module only decides what to
//! draw: the box, its color, and the caption text and anchor.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::UNKNOWN_LABEL;
use crate::tracker::{PixelBox, TrackedObject};

/// RGB color.
pub type Rgb = [u8; 3];

/// Caption baseline offset above the box top edge, in pixels.
const CAPTION_OFFSET: i32 = 8;

/// Per-label color lookup with a fallback for unlisted labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    colors: HashMap<String, Rgb>,
    fallback: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new([255, 255, 255])
            .with_color("can", [0, 0, 255])
            .with_color("foam", [255, 255, 0])
            .with_color("plastic", [0, 255, 0])
            .with_color("plastic bottle", [255, 165, 0])
            .with_color(UNKNOWN_LABEL, [128, 128, 128])
    }
}

impl Palette {
    /// Empty palette that paints every label with `fallback`.
    pub fn new(fallback: Rgb) -> Self {
        Self {
            colors: HashMap::new(),
            fallback,
        }
    }

    pub fn with_color(mut self, label: impl Into<String>, color: Rgb) -> Self {
        self.colors.insert(label.into(), color);
        self
    }

    pub fn color(&self, label: &str) -> Rgb {
        self.colors.get(label).copied().unwrap_or(self.fallback)
    }
}

/// Drawing instructions for one tracked object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub bbox: PixelBox,
    pub color: Rgb,
    /// `ID {id} | {label} {score:.2}`
    pub caption: String,
    /// Bottom-left anchor of the caption text
    pub caption_origin: (i32, i32),
}

impl Annotation {
    pub fn new(object: &TrackedObject, palette: &Palette) -> Self {
        let bbox = object.bbox();
        Self {
            bbox,
            color: palette.color(object.label()),
            caption: format!("ID {} | {} {:.2}", object.id, object.label(), object.score()),
            caption_origin: (bbox.x1, (bbox.y1 - CAPTION_OFFSET).max(0)),
        }
    }
}

/// Build one annotation per tracked object. Each is independent of the others,
/// so drawing order does not matter.
pub fn annotate(objects: &[TrackedObject], palette: &Palette) -> Vec<Annotation> {
    objects.iter().map(|o| Annotation::new(o, palette)).collect()
}
