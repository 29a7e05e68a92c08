//! Centroid-distance multi-object tracking by detection.
//!
//! Per-frame detector output is adapted into [`Detection`] records and fed to a
//! [`CentroidTracker`], which keeps stable integer identities for moving
//! objects across frames.
//!
//! ```
//! use centroid_track::{CentroidTracker, Detection, TrackerConfig};
//!
//! let mut tracker = CentroidTracker::new(TrackerConfig::default()).unwrap();
//! let objects = tracker.update(&[Detection::new(10.0, 10.0, 20.0, 20.0, 0.9, "can")]);
//! assert_eq!(objects[0].id, 1);
//! ```

pub mod error;
pub mod integration;
pub mod tracker;

pub use error::{ConfigurationError, Error, MalformedDetectionError, Result};
pub use integration::{
    Annotation, DetectionAdapter, DetectionSource, Palette, RawDetection, RawDetectionBuilder,
    TrackerPipeline, UNKNOWN_LABEL, annotate,
};
pub use tracker::{
    AssignmentResult, AssignmentStrategy, CentroidTracker, Detection, DistanceFunction,
    DistanceMetric, PixelBox, Point, Track, TrackId, TrackState, TrackedObject, TrackerConfig,
};
