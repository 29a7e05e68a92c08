//! Main centroid tracker implementation.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::ConfigurationError;
use crate::tracker::detection::{Detection, Point, TrackedObject};
use crate::tracker::distance::{DistanceFunction, DistanceMetric};
use crate::tracker::matching::{self, AssignmentResult};
use crate::tracker::track::{Track, TrackId};

/// Solver used to associate detections with tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentStrategy {
    /// Greedy global-minimum matching
    #[default]
    Greedy,
    /// Minimum total cost matching (Jonker-Volgenant)
    Optimal,
}

/// Configuration for the CentroidTracker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Largest distance at which a detection may match a track, in pixels
    pub max_distance: f32,
    /// Consecutive misses tolerated before a track is dropped
    pub miss_threshold: u32,
    /// Built-in metric used by `CentroidTracker::new`
    pub metric: DistanceMetric,
    pub assignment: AssignmentStrategy,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            max_distance: 100.0,
            miss_threshold: 0,
            metric: DistanceMetric::Euclidean,
            assignment: AssignmentStrategy::Greedy,
        }
    }
}

impl TrackerConfig {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.max_distance.is_nan() || self.max_distance <= 0.0 {
            return Err(ConfigurationError::NonPositiveMaxDistance(self.max_distance));
        }
        if self.max_distance.is_infinite() {
            return Err(ConfigurationError::NonFiniteMaxDistance(self.max_distance));
        }
        Ok(())
    }
}

/// Frame-sequential tracker keeping stable ids for detected objects.
///
/// `update` must be called once per frame in frame order.
pub struct CentroidTracker<D = DistanceMetric> {
    tracks: Vec<Track>,
    next_id: TrackId,
    frame_id: u64,
    config: TrackerConfig,
    distance: D,
}

impl CentroidTracker<DistanceMetric> {
    /// Create a tracker using the metric named in `config`.
    pub fn new(config: TrackerConfig) -> Result<Self, ConfigurationError> {
        let metric = config.metric;
        Self::with_distance_function(config, metric)
    }
}

impl<D: DistanceFunction> CentroidTracker<D> {
    /// Create a tracker with a custom distance function. `config.metric` is ignored.
    pub fn with_distance_function(
        config: TrackerConfig,
        distance: D,
    ) -> Result<Self, ConfigurationError> {
        config.validate()?;
        Ok(Self {
            tracks: Vec::new(),
            next_id: 1,
            frame_id: 0,
            config,
            distance,
        })
    }

    pub fn update(&mut self, detections: &[Detection]) -> Vec<TrackedObject> {
        self.frame_id += 1;

        // Step 1: Distance from every detection to every live track
        let track_points: Vec<Point> = self.tracks.iter().map(|t| t.estimated_point).collect();
        let dists = matching::distance_matrix(detections, &track_points, &self.distance);

        // Step 2: Association
        let AssignmentResult {
            matches,
            unmatched_detections,
            unmatched_tracks,
        } = match self.config.assignment {
            AssignmentStrategy::Greedy => {
                matching::greedy_assignment(&dists, self.config.max_distance)
            }
            AssignmentStrategy::Optimal => {
                matching::optimal_assignment(&dists, self.config.max_distance)
            }
        };

        // Step 3: Lifecycle transitions
        for &(idet, itrack) in &matches {
            self.tracks[itrack].mark_matched(&detections[idet]);
        }
        for &itrack in &unmatched_tracks {
            self.tracks[itrack].mark_missed(self.config.miss_threshold);
        }

        // Step 4: Init new tracks
        for &idet in &unmatched_detections {
            let id = self.next_track_id();
            trace!(track_id = id, frame = self.frame_id, "new track");
            self.tracks.push(Track::new(id, detections[idet].clone()));
        }

        // Step 5: Drop lost tracks
        let before = self.tracks.len();
        self.tracks.retain(|t| {
            if t.is_lost() {
                trace!(track_id = t.id, misses = t.misses, age = t.age, "track removed");
            }
            !t.is_lost()
        });

        debug!(
            frame = self.frame_id,
            detections = detections.len(),
            matched = matches.len(),
            created = unmatched_detections.len(),
            removed = before - self.tracks.len(),
            live = self.tracks.len(),
            "tracker update"
        );

        self.tracks.iter().map(Track::snapshot).collect()
    }

    fn next_track_id(&mut self) -> TrackId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Live tracks, in ascending id order.
    pub fn tracks(&self) -> impl Iterator<Item = &Track> {
        self.tracks.iter()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Number of `update` calls so far.
    pub fn frame_count(&self) -> u64 {
        self.frame_id
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }
}
