use serde::Serialize;

use crate::analysis::ImageAnalysis;
use crate::image_key::ImageKey;

/// Timed metadata payloads over this size are rejected by the channel
/// service. The publisher warns above it but still lets the service rule.
pub const TIMED_METADATA_LIMIT_BYTES: usize = 1024;

/// The envelope inserted into the channel's timed metadata stream.
#[derive(Serialize, Debug, Clone)]
pub struct TimedMetadata {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub description: ImageAnalysis,
    pub image: String,
}

impl TimedMetadata {
    /// Builds the envelope for an analyzed upload: the display name becomes
    /// the title and the raw object key is echoed back for the overlay to
    /// reference the image.
    pub fn for_image(key: &ImageKey, analysis: ImageAnalysis) -> Self {
        Self {
            kind: "rekognition".to_string(),
            title: key.display_name().to_string(),
            description: analysis,
            image: key.raw().to_string(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
