//! Integration module for connecting object detection backends with the tracker.
//!
//! This module provides the detector seam, the adapter from raw detector
//! output to tracker input, a per-frame pipeline, and overlay annotations for
//! rendering tracked objects.

mod adapter;
mod builder;
mod detector;
mod overlay;
mod pipeline;

pub use adapter::{DetectionAdapter, UNKNOWN_LABEL};
pub use builder::RawDetectionBuilder;
pub use detector::{DetectionSource, RawDetection};
pub use overlay::{Annotation, Palette, Rgb, annotate};
pub use pipeline::TrackerPipeline;
