use serde::{Deserialize, Serialize};

/// Outcome of one analysis pass over an uploaded image.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ImageAnalysis {
    pub description: String,
    pub objects: AnalysisObjects,
}

/// The per-strategy payload published under `objects`.
///
/// The shapes intentionally differ between strategies; a channel's overlay
/// reads whichever shape its configured strategy produces.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum AnalysisObjects {
    /// Content-safety labels.
    Labels(Vec<ModerationLabel>),
    /// Detected text, capped by the publisher.
    Text(String),
    /// Emotions of the most prominent face.
    Emotions(Vec<Emotion>),
    /// Object names reported by the vision-language model.
    Names(Vec<String>),
}

/// A content-safety label with its confidence score.
///
/// Serialized with the key casing the vision API reports, which is the shape
/// overlay consumers already parse.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ModerationLabel {
    pub name: String,
    pub confidence: f32,
    pub parent_name: String,
}

/// One detected emotion on a face.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Emotion {
    #[serde(rename = "Type")]
    pub kind: String,
    pub confidence: f32,
}

/// The output requested from the hosted vision-language model.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ImageDescription {
    pub description: String,
    #[serde(default)]
    pub objects: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_serialize_with_vision_api_casing() {
        let objects = AnalysisObjects::Labels(vec![ModerationLabel {
            name: "Violence".to_string(),
            confidence: 87.5,
            parent_name: "".to_string(),
        }]);

        let value = serde_json::to_value(&objects).unwrap();
        assert_eq!(value[0]["Name"], "Violence");
        assert_eq!(value[0]["Confidence"], 87.5);
        assert_eq!(value[0]["ParentName"], "");
    }

    #[test]
    fn emotions_serialize_with_type_key() {
        let objects = AnalysisObjects::Emotions(vec![Emotion {
            kind: "HAPPY".to_string(),
            confidence: 99.5,
        }]);

        let value = serde_json::to_value(&objects).unwrap();
        assert_eq!(value[0]["Type"], "HAPPY");
        assert_eq!(value[0]["Confidence"], 99.5);
    }

    #[test]
    fn image_description_tolerates_missing_objects() {
        let described: ImageDescription =
            serde_json::from_str(r#"{"description": "a dog on a beach"}"#).unwrap();
        assert_eq!(described.description, "a dog on a beach");
        assert!(described.objects.is_empty());
    }
}
