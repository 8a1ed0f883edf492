use model::analysis::ImageDescription;

mod describe;

pub use describe::DescribeError;

/// The hosted vision-language model used when no override is configured.
const DEFAULT_MODEL_ID: &str = "anthropic.claude-3-haiku-20240307-v1:0";

#[derive(Clone, Debug)]
pub struct Bedrock {
    inner: aws_sdk_bedrockruntime::Client,
    model_id: String,
}

impl Bedrock {
    pub fn new(inner: aws_sdk_bedrockruntime::Client) -> Self {
        Self {
            inner,
            model_id: DEFAULT_MODEL_ID.to_string(),
        }
    }

    /// Overrides the model used for image description.
    pub fn model_id(mut self, model_id: &str) -> Self {
        self.model_id = model_id.to_string();
        self
    }

    /// Asks the hosted model to describe the image and list its major
    /// objects.
    #[tracing::instrument(skip(self, image))]
    pub async fn describe_image(
        &self,
        image: &[u8],
        media_type: &str,
    ) -> Result<ImageDescription, DescribeError> {
        describe::describe_image(&self.inner, &self.model_id, image, media_type).await
    }
}
