use std::sync::Arc;

use crate::config::Config;

/// Per-process collaborators, constructed once in `main` and shared
/// read-only across invocations.
#[derive(Clone)]
pub struct Context {
    pub s3_client: Arc<s3_client::S3>,
    pub rekognition_client: Arc<rekognition_client::Rekognition>,
    pub bedrock_client: Arc<bedrock_client::Bedrock>,
    pub ivs_client: Arc<ivs_client::Ivs>,
    pub config: Config,
}
