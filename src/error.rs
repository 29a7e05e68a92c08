//! Error types for tracker construction and detection adaptation.

use thiserror::Error;

/// Invalid tracker configuration, reported at construction time.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("max_distance must be positive, got {0}")]
    NonPositiveMaxDistance(f32),
    #[error("max_distance must be finite, got {0}")]
    NonFiniteMaxDistance(f32),
}

/// A raw detection that cannot be turned into a trackable `Detection`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MalformedDetectionError {
    #[error("inverted bounding box ({x1}, {y1}, {x2}, {y2})")]
    InvertedBox { x1: f32, y1: f32, x2: f32, y2: f32 },
    #[error("confidence {0} outside [0, 1]")]
    ScoreOutOfRange(f32),
    #[error("bounding box has a non-finite coordinate")]
    NonFiniteCoordinate,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    MalformedDetection(#[from] MalformedDetectionError),
}

pub type Result<T> = std::result::Result<T, Error>;
