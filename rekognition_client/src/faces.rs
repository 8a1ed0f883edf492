use anyhow::Context;
use aws_sdk_rekognition as rekognition;
use model::analysis::Emotion;

use crate::image_ref;

/// Detects faces with the full attribute set and returns the emotions of
/// the most prominent face, empty when the image has no face.
#[tracing::instrument(skip(client))]
pub(crate) async fn detect_face_emotions(
    client: &rekognition::Client,
    bucket: &str,
    key: &str,
) -> anyhow::Result<Vec<Emotion>> {
    let resp = client
        .detect_faces()
        .image(image_ref::s3_image(bucket, key))
        .attributes(rekognition::types::Attribute::All)
        .send()
        .await
        .context(format!(
            "could not detect faces for {key} in bucket {bucket}"
        ))?;

    let emotions = match resp.face_details().first() {
        Some(face) => face
            .emotions()
            .iter()
            .map(|emotion| Emotion {
                kind: emotion
                    .r#type()
                    .map(|kind| kind.as_str().to_string())
                    .unwrap_or_default(),
                confidence: emotion.confidence().unwrap_or_default(),
            })
            .collect(),
        None => Vec::new(),
    };

    Ok(emotions)
}
