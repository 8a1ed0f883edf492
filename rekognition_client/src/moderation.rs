use anyhow::Context;
use aws_sdk_rekognition as rekognition;
use model::analysis::ModerationLabel;

use crate::image_ref;

/// Detects content-safety labels for the image at the provided key.
#[tracing::instrument(skip(client))]
pub(crate) async fn detect_moderation(
    client: &rekognition::Client,
    bucket: &str,
    key: &str,
) -> anyhow::Result<Vec<ModerationLabel>> {
    let resp = client
        .detect_moderation_labels()
        .image(image_ref::s3_image(bucket, key))
        .send()
        .await
        .context(format!(
            "could not detect moderation labels for {key} in bucket {bucket}"
        ))?;

    let labels = resp
        .moderation_labels()
        .iter()
        .map(|label| ModerationLabel {
            name: label.name().unwrap_or_default().to_string(),
            confidence: label.confidence().unwrap_or_default(),
            parent_name: label.parent_name().unwrap_or_default().to_string(),
        })
        .collect();

    Ok(labels)
}
