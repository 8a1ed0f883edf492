use anyhow::Context;
use aws_sdk_rekognition as rekognition;

use crate::image_ref;

/// Detects text in the image at the provided key, joined with a space
/// before each detection.
#[tracing::instrument(skip(client))]
pub(crate) async fn detect_text(
    client: &rekognition::Client,
    bucket: &str,
    key: &str,
) -> anyhow::Result<String> {
    let resp = client
        .detect_text()
        .image(image_ref::s3_image(bucket, key))
        .send()
        .await
        .context(format!("could not detect text for {key} in bucket {bucket}"))?;

    let mut full_text = String::new();
    for detection in resp.text_detections() {
        if let Some(text) = detection.detected_text() {
            full_text.push(' ');
            full_text.push_str(text);
        }
    }

    Ok(full_text)
}
