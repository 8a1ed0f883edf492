mod put_metadata;

pub use put_metadata::PutMetadataError;

#[derive(Clone, Debug)]
pub struct Ivs {
    inner: aws_sdk_ivs::Client,
}

impl Ivs {
    pub fn new(inner: aws_sdk_ivs::Client) -> Self {
        Self { inner }
    }

    /// Inserts the payload into the channel's timed metadata stream.
    #[tracing::instrument(skip(self, payload))]
    pub async fn put_metadata(
        &self,
        channel_arn: &str,
        payload: &str,
    ) -> Result<(), PutMetadataError> {
        put_metadata::put_metadata(&self.inner, channel_arn, payload).await
    }
}
