//! Conversion of raw detector output into tracker detections.

use std::collections::HashMap;

use tracing::warn;

use super::RawDetection;
use crate::error::MalformedDetectionError;
use crate::tracker::{Detection, PixelBox, Point};

/// Label used when a class id has no entry in the class-name mapping.
pub const UNKNOWN_LABEL: &str = "unknown";

/// Stateless adapter from `RawDetection` to `Detection`.
#[derive(Debug, Clone, Default)]
pub struct DetectionAdapter {
    class_names: HashMap<u32, String>,
}

impl DetectionAdapter {
    pub fn new<I, S>(class_names: I) -> Self
    where
        I: IntoIterator<Item = (u32, S)>,
        S: Into<String>,
    {
        Self {
            class_names: class_names
                .into_iter()
                .map(|(id, name)| (id, name.into()))
                .collect(),
        }
    }

    /// Class name for `class_id`, or [`UNKNOWN_LABEL`].
    pub fn label(&self, class_id: u32) -> &str {
        self.class_names
            .get(&class_id)
            .map(String::as_str)
            .unwrap_or(UNKNOWN_LABEL)
    }

    /// Adapt one frame of detector output, dropping malformed records.
    pub fn adapt(&self, raw: &[RawDetection]) -> Vec<Detection> {
        raw.iter()
            .filter_map(|r| match self.try_adapt(r) {
                Ok(det) => Some(det),
                Err(err) => {
                    warn!(%err, class_id = r.class_id, "dropping malformed detection");
                    None
                }
            })
            .collect()
    }

    pub fn try_adapt(&self, raw: &RawDetection) -> Result<Detection, MalformedDetectionError> {
        let [x1, y1, x2, y2] = raw.bbox;

        if raw.bbox.iter().any(|c| !c.is_finite()) {
            return Err(MalformedDetectionError::NonFiniteCoordinate);
        }
        if x1 > x2 || y1 > y2 {
            return Err(MalformedDetectionError::InvertedBox { x1, y1, x2, y2 });
        }
        if !(0.0..=1.0).contains(&raw.score) {
            return Err(MalformedDetectionError::ScoreOutOfRange(raw.score));
        }

        Ok(Detection::from_parts(
            Point::new((x1 + x2) / 2.0, (y1 + y2) / 2.0),
            raw.score,
            PixelBox::from_tlbr(x1, y1, x2, y2),
            self.label(raw.class_id),
        ))
    }
}
