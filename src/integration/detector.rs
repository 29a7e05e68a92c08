//! Trait for object detection inference backends.

use serde::{Deserialize, Serialize};

/// Raw detector output for one object, before adaptation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawDetection {
    /// Bounding box: [x1, y1, x2, y2] in pixels
    pub bbox: [f32; 4],
    /// Confidence score
    pub score: f32,
    /// Class ID, resolved to a name by `DetectionAdapter`
    pub class_id: u32,
}

impl RawDetection {
    pub fn new(bbox: [f32; 4], score: f32, class_id: u32) -> Self {
        Self {
            bbox,
            score,
            class_id,
        }
    }
}

/// Trait for object detection inference backends.
///
/// Implement this trait to connect any detection model to the tracker.
/// Confidence filtering and NMS belong to the implementation.
///
/// # Example
///
/// ```ignore
/// use centroid_track::{DetectionSource, RawDetection};
///
/// struct MyDetector {
///     // Your model here
/// }
///
/// impl DetectionSource for MyDetector {
///     type Error = std::io::Error;
///
///     fn detect(&mut self, input: &[u8], width: u32, height: u32) -> Result<Vec<RawDetection>, Self::Error> {
///         // Run inference and return raw boxes
///         Ok(vec![])
///     }
/// }
/// ```
pub trait DetectionSource {
    /// Error type for detection failures.
    type Error;

    /// Run inference on raw image data and return raw detections.
    ///
    /// # Arguments
    /// * `input` - Raw image bytes (format depends on implementation)
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    fn detect(
        &mut self,
        input: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Vec<RawDetection>, Self::Error>;
}
