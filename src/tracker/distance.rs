//! Distance functions scoring a detection against a track's position.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::tracker::detection::Point;

/// Dissimilarity between a detection point and a track's estimated point.
///
/// Arguments are positional: the first is always the detection, the second
/// the track. Implementations must be pure and return a value `>= 0`.
///
/// Any `Fn(&Point, &Point) -> f32` closure can be used directly.
pub trait DistanceFunction {
    fn distance(&self, detection: &Point, track: &Point) -> f32;
}

impl<F> DistanceFunction for F
where
    F: Fn(&Point, &Point) -> f32,
{
    fn distance(&self, detection: &Point, track: &Point) -> f32 {
        self(detection, track)
    }
}

/// Built-in metrics, selectable by name from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMetric {
    /// Straight-line distance in pixel space
    #[default]
    Euclidean,
    /// Sum of absolute coordinate differences
    Manhattan,
    /// Largest absolute coordinate difference
    Chebyshev,
}

impl DistanceFunction for DistanceMetric {
    fn distance(&self, detection: &Point, track: &Point) -> f32 {
        match self {
            Self::Euclidean => nalgebra::distance(detection, track),
            Self::Manhattan => (detection - track).abs().sum(),
            Self::Chebyshev => (detection - track).amax(),
        }
    }
}

impl FromStr for DistanceMetric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "euclidean" => Ok(Self::Euclidean),
            "manhattan" => Ok(Self::Manhattan),
            "chebyshev" => Ok(Self::Chebyshev),
            other => Err(format!("unknown distance metric: {other}")),
        }
    }
}

impl fmt::Display for DistanceMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Euclidean => "euclidean",
            Self::Manhattan => "manhattan",
            Self::Chebyshev => "chebyshev",
        };
        f.write_str(name)
    }
}
