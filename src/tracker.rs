mod centroid_tracker;
mod detection;
mod distance;
mod matching;
mod rect;
mod track;
mod track_state;

pub use centroid_tracker::{AssignmentStrategy, CentroidTracker, TrackerConfig};
pub use detection::{Detection, Point, TrackedObject};
pub use distance::{DistanceFunction, DistanceMetric};
pub use matching::{AssignmentResult, distance_matrix, greedy_assignment, optimal_assignment};
pub use rect::PixelBox;
pub use track::{Track, TrackId};
pub use track_state::TrackState;
