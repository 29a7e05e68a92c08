//! Single object track for multi-object tracking.

use serde::{Deserialize, Serialize};

use crate::tracker::detection::{Detection, Point, TrackedObject};
use crate::tracker::track_state::TrackState;

/// Track identifier, unique for the lifetime of one tracker.
pub type TrackId = u64;

/// Single object track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier
    pub id: TrackId,
    /// Current track state
    pub state: TrackState,
    /// Most recent detection matched to this track
    pub last_detection: Detection,
    /// Position used for distance computation on the next frame
    pub estimated_point: Point,
    /// Consecutive frames with a successful match
    pub hits: u32,
    /// Consecutive frames without a match since the last hit
    pub misses: u32,
    /// Frames since creation, including the creating frame
    pub age: u32,
}

impl Track {
    /// Create a new tentative track from an unmatched detection.
    pub fn new(id: TrackId, detection: Detection) -> Self {
        Self {
            id,
            state: TrackState::Tentative,
            estimated_point: detection.point,
            last_detection: detection,
            hits: 1,
            misses: 0,
            age: 1,
        }
    }

    /// Apply a match for this frame.
    pub fn mark_matched(&mut self, detection: &Detection) {
        self.hits += 1;
        self.misses = 0;
        self.age += 1;
        self.last_detection = detection.clone();
        self.estimated_point = detection.point;

        if self.state == TrackState::Tentative {
            self.state = TrackState::Confirmed;
        }
    }

    /// Apply a miss for this frame. Ends the current hit run; the track
    /// becomes Lost once `misses` exceeds `miss_threshold`.
    pub fn mark_missed(&mut self, miss_threshold: u32) {
        self.hits = 0;
        self.misses += 1;
        self.age += 1;

        if self.misses > miss_threshold {
            self.state = TrackState::Lost;
        }
    }

    pub fn is_lost(&self) -> bool {
        self.state == TrackState::Lost
    }

    pub fn snapshot(&self) -> TrackedObject {
        TrackedObject {
            id: self.id,
            last_detection: self.last_detection.clone(),
        }
    }
}
