use model::analysis::{Emotion, ModerationLabel};

mod faces;
mod image_ref;
mod moderation;
mod text;

#[derive(Clone, Debug)]
pub struct Rekognition {
    inner: aws_sdk_rekognition::Client,
}

impl Rekognition {
    pub fn new(inner: aws_sdk_rekognition::Client) -> Self {
        Self { inner }
    }

    /// Detects content-safety labels for the image stored at the provided
    /// key.
    #[tracing::instrument(skip(self))]
    pub async fn detect_moderation(
        &self,
        bucket: &str,
        key: &str,
    ) -> anyhow::Result<Vec<ModerationLabel>> {
        moderation::detect_moderation(&self.inner, bucket, key).await
    }

    /// Detects any text in the image, concatenated in detection order.
    #[tracing::instrument(skip(self))]
    pub async fn detect_text(&self, bucket: &str, key: &str) -> anyhow::Result<String> {
        text::detect_text(&self.inner, bucket, key).await
    }

    /// Detects the emotions of the most prominent face in the image.
    /// Returns an empty list when no face is found.
    #[tracing::instrument(skip(self))]
    pub async fn detect_face_emotions(
        &self,
        bucket: &str,
        key: &str,
    ) -> anyhow::Result<Vec<Emotion>> {
        faces::detect_face_emotions(&self.inner, bucket, key).await
    }
}
