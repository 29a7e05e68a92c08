use serde::{Deserialize, Serialize};

/// Track state enumeration for object tracking lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TrackState {
    /// Newly created track, matched only on its first frame
    #[default]
    Tentative,
    /// Matched again after creation and still within the miss budget
    Confirmed,
    /// Miss budget exceeded, removed at the end of the current update
    Lost,
}
