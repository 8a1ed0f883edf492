mod get;

/// Object bytes together with the content type the bucket stored for them.
#[derive(Debug, Clone)]
pub struct ImageObject {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

#[derive(Clone, Debug)]
pub struct S3 {
    inner: aws_sdk_s3::Client,
}

impl S3 {
    pub fn new(inner: aws_sdk_s3::Client) -> Self {
        Self { inner }
    }

    /// Retreives the object at the provided key along with its stored
    /// content type.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, bucket: &str, key: &str) -> anyhow::Result<ImageObject> {
        get::get(&self.inner, bucket, key).await
    }
}
