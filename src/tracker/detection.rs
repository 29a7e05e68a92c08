//! Detection input and tracked-object output records.

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::tracker::rect::PixelBox;
use crate::tracker::track::TrackId;

/// Representative position of an object in pixel space.
pub type Point = Point2<f32>;

/// Detection input for the tracker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// Representative position, the bounding-box center
    pub point: Point,
    /// Detection confidence score in [0, 1]
    pub score: f32,
    /// Bounding box in TLBR pixel format
    pub bbox: PixelBox,
    /// Class name
    pub label: String,
}

impl Detection {
    /// Create a detection from floating-point TLBR corners.
    ///
    /// The point is the mean of the two corners; the box is truncated to
    /// integer pixels.
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32, score: f32, label: impl Into<String>) -> Self {
        Self {
            point: Point::new((x1 + x2) / 2.0, (y1 + y2) / 2.0),
            score,
            bbox: PixelBox::from_tlbr(x1, y1, x2, y2),
            label: label.into(),
        }
    }

    pub fn from_parts(point: Point, score: f32, bbox: PixelBox, label: impl Into<String>) -> Self {
        Self {
            point,
            score,
            bbox,
            label: label.into(),
        }
    }
}

/// Snapshot of one live track, produced fresh by every `update` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedObject {
    pub id: TrackId,
    pub last_detection: Detection,
}

impl TrackedObject {
    pub fn bbox(&self) -> PixelBox {
        self.last_detection.bbox
    }

    pub fn label(&self) -> &str {
        &self.last_detection.label
    }

    pub fn score(&self) -> f32 {
        self.last_detection.score
    }
}
