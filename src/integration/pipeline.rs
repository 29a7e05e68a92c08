//! TrackerPipeline for combining detection with tracking.

use crate::error::Result;
use crate::tracker::{
    CentroidTracker, DistanceFunction, DistanceMetric, TrackedObject, TrackerConfig,
};

use super::{DetectionAdapter, DetectionSource};

/// Bundles a `DetectionSource`, a `DetectionAdapter` and a `CentroidTracker`
/// into a per-frame detect, adapt, track loop.
pub struct TrackerPipeline<S: DetectionSource, D = DistanceMetric> {
    detector: S,
    adapter: DetectionAdapter,
    tracker: CentroidTracker<D>,
}

impl<S: DetectionSource> TrackerPipeline<S> {
    /// Create a new tracking pipeline with the given detector, adapter and tracker config.
    pub fn new(
        detector: S,
        adapter: DetectionAdapter,
        config: TrackerConfig,
    ) -> Result<Self> {
        Ok(Self::from_parts(detector, adapter, CentroidTracker::new(config)?))
    }

    /// Create a new tracking pipeline with default tracker configuration.
    pub fn with_default_config(
        detector: S,
        adapter: DetectionAdapter,
    ) -> Result<Self> {
        Self::new(detector, adapter, TrackerConfig::default())
    }
}

impl<S: DetectionSource, D: DistanceFunction> TrackerPipeline<S, D> {
    pub fn from_parts(detector: S, adapter: DetectionAdapter, tracker: CentroidTracker<D>) -> Self {
        Self {
            detector,
            adapter,
            tracker,
        }
    }

    /// Process a single frame and return live tracked objects.
    ///
    /// A detector error is returned before the tracker is touched, so a failed
    /// frame never counts as an empty one.
    pub fn process_frame(
        &mut self,
        input: &[u8],
        width: u32,
        height: u32,
    ) -> std::result::Result<Vec<TrackedObject>, S::Error> {
        let raw = self.detector.detect(input, width, height)?;
        let detections = self.adapter.adapt(&raw);
        Ok(self.tracker.update(&detections))
    }

    pub fn detector(&self) -> &S {
        &self.detector
    }

    pub fn detector_mut(&mut self) -> &mut S {
        &mut self.detector
    }

    pub fn tracker(&self) -> &CentroidTracker<D> {
        &self.tracker
    }
}
