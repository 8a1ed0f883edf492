use anyhow::Context as _;
use model::analysis::{AnalysisObjects, ImageAnalysis};

use crate::config::AnalyzerKind;
use crate::context::Context;

/// Characters of detected text kept in the published payload.
const MAX_TEXT_LEN: usize = 600;

/// Fallback when neither the stored content type nor the key extension
/// identifies the image format.
const DEFAULT_MEDIA_TYPE: &str = "image/jpeg";

/// Media types the hosted model accepts for image blocks.
const SUPPORTED_MEDIA_TYPES: [&str; 4] =
    ["image/jpeg", "image/png", "image/gif", "image/webp"];

/// Runs the configured analysis strategy over the uploaded image.
#[tracing::instrument(skip(ctx))]
pub async fn analyze(ctx: &Context, bucket: &str, key: &str) -> anyhow::Result<ImageAnalysis> {
    match ctx.config.analyzer {
        AnalyzerKind::Moderation => {
            let labels = ctx.rekognition_client.detect_moderation(bucket, key).await?;
            tracing::info!(label_count = labels.len(), "detected moderation labels");

            Ok(ImageAnalysis {
                description: "Moderation".to_string(),
                objects: AnalysisObjects::Labels(labels),
            })
        }
        AnalyzerKind::Text => {
            let text = ctx.rekognition_client.detect_text(bucket, key).await?;
            tracing::info!(text_len = text.len(), "detected text");

            Ok(ImageAnalysis {
                description: "text identified".to_string(),
                objects: AnalysisObjects::Text(truncate_text(&text)),
            })
        }
        AnalyzerKind::Faces => {
            let emotions = ctx
                .rekognition_client
                .detect_face_emotions(bucket, key)
                .await?;
            tracing::info!(emotion_count = emotions.len(), "detected face emotions");

            Ok(ImageAnalysis {
                description: "Face detection".to_string(),
                objects: AnalysisObjects::Emotions(emotions),
            })
        }
        AnalyzerKind::Description => {
            let object = ctx
                .s3_client
                .get(bucket, key)
                .await
                .context("could not fetch image for description")?;

            let media_type = media_type_for(object.content_type.as_deref(), key);
            let described = ctx
                .bedrock_client
                .describe_image(&object.bytes, media_type)
                .await?;
            tracing::info!(object_count = described.objects.len(), "described image");

            Ok(ImageAnalysis {
                description: described.description,
                objects: AnalysisObjects::Names(described.objects),
            })
        }
    }
}

/// Caps detected text at the published limit without splitting a character.
fn truncate_text(text: &str) -> String {
    text.chars().take(MAX_TEXT_LEN).collect()
}

/// Picks the media type for the model payload: the stored content type when
/// it names a supported image format, then the key extension, then jpeg.
fn media_type_for(content_type: Option<&str>, key: &str) -> &'static str {
    if let Some(content_type) = content_type {
        if let Some(supported) = SUPPORTED_MEDIA_TYPES
            .iter()
            .copied()
            .find(|supported| *supported == content_type)
        {
            return supported;
        }
    }

    let extension = key
        .rsplit('.')
        .next()
        .map(|extension| extension.to_ascii_lowercase());

    match extension.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => DEFAULT_MEDIA_TYPE,
    }
}
