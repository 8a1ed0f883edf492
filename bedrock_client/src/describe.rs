use aws_smithy_types::Blob;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use model::analysis::ImageDescription;
use serde::Deserialize;
use thiserror::Error;

const ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";
const MAX_TOKENS: u32 = 1000;
const TEMPERATURE: f32 = 0.4;

/// The model must emit one complete JSON object. Anything else is rejected
/// by [parse_output] rather than repaired.
const PROMPT: &str = r#"Given an image, respond with exactly one complete JSON object and nothing else, in this format:
{
  "objects": [
    "object1",
    "object2",
    "object3"
  ],
  "description": "A detailed description of the overall image content."
}
The "objects" list should contain the names of the major objects or elements present in the image. The "description" should be a concise yet comprehensive textual summary of the image content.
Respond based on the image I share with you, with no text before or after the JSON object."#;

/// Failure modes of a hosted-model image description.
#[derive(Debug, Error)]
pub enum DescribeError {
    /// The model invocation itself failed.
    #[error("model invocation failed: {0}")]
    Invoke(String),
    /// The response envelope carried no text content.
    #[error("model response carried no text content")]
    MalformedResponse,
    /// The model text was not the requested JSON object. Carries the raw
    /// text so the caller can log it.
    #[error("model output was not the requested JSON object")]
    UnparsableOutput { raw: String },
}

#[derive(Deserialize)]
struct InvokeResponse {
    #[serde(default)]
    content: Vec<ResponseContent>,
}

#[derive(Deserialize)]
struct ResponseContent {
    #[serde(default)]
    text: String,
}

#[tracing::instrument(skip(client, image))]
pub(crate) async fn describe_image(
    client: &aws_sdk_bedrockruntime::Client,
    model_id: &str,
    image: &[u8],
    media_type: &str,
) -> Result<ImageDescription, DescribeError> {
    let response = client
        .invoke_model()
        .model_id(model_id)
        .content_type("application/json")
        .body(Blob::new(request_body(image, media_type)))
        .send()
        .await
        .map_err(|e| DescribeError::Invoke(e.to_string()))?;

    parse_output(response.body().as_ref())
}

fn request_body(image: &[u8], media_type: &str) -> String {
    let encoded_image = STANDARD.encode(image);

    serde_json::json!({
        "anthropic_version": ANTHROPIC_VERSION,
        "max_tokens": MAX_TOKENS,
        "temperature": TEMPERATURE,
        "messages": [
            {
                "role": "user",
                "content": [
                    {
                        "type": "image",
                        "source": {
                            "type": "base64",
                            "media_type": media_type,
                            "data": encoded_image,
                        },
                    },
                    {
                        "type": "text",
                        "text": PROMPT,
                    },
                ],
            },
        ],
    })
    .to_string()
}

/// Extracts the model text from the response envelope and parses the JSON
/// object the model was instructed to emit.
fn parse_output(raw: &[u8]) -> Result<ImageDescription, DescribeError> {
    let envelope: InvokeResponse =
        serde_json::from_slice(raw).map_err(|_| DescribeError::MalformedResponse)?;

    let text = envelope
        .content
        .first()
        .map(|content| content.text.as_str())
        .unwrap_or_default();

    if text.is_empty() {
        return Err(DescribeError::MalformedResponse);
    }

    serde_json::from_str(text.trim()).map_err(|_| DescribeError::UnparsableOutput {
        raw: text.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_complete_json_object_from_the_model() {
        let body = serde_json::json!({
            "content": [
                { "type": "text", "text": "{\"objects\": [\"dog\", \"beach\"], \"description\": \"A dog on a beach.\"}" }
            ]
        })
        .to_string();

        let described = parse_output(body.as_bytes()).unwrap();
        assert_eq!(described.description, "A dog on a beach.");
        assert_eq!(described.objects, vec!["dog", "beach"]);
    }

    #[test]
    fn non_json_model_text_is_a_typed_error_not_a_placeholder() {
        let body = serde_json::json!({
            "content": [
                { "type": "text", "text": "Sure! Here is the JSON you asked for: objects..." }
            ]
        })
        .to_string();

        match parse_output(body.as_bytes()) {
            Err(DescribeError::UnparsableOutput { raw }) => {
                assert!(raw.starts_with("Sure!"));
            }
            other => panic!("expected UnparsableOutput, got {other:?}"),
        }
    }

    #[test]
    fn empty_response_envelope_is_malformed() {
        let body = serde_json::json!({ "content": [] }).to_string();
        assert!(matches!(
            parse_output(body.as_bytes()),
            Err(DescribeError::MalformedResponse)
        ));
    }

    #[test]
    fn garbage_bytes_are_malformed() {
        assert!(matches!(
            parse_output(b"not a response"),
            Err(DescribeError::MalformedResponse)
        ));
    }

    #[test]
    fn request_embeds_the_image_and_media_type() {
        let body = request_body(b"image-bytes", "image/png");
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();

        assert_eq!(value["anthropic_version"], ANTHROPIC_VERSION);
        let source = &value["messages"][0]["content"][0]["source"];
        assert_eq!(source["media_type"], "image/png");
        assert_eq!(source["data"], STANDARD.encode(b"image-bytes"));
    }
}
