use aws_sdk_ivs::error::SdkError;
use aws_sdk_ivs::operation::put_metadata::PutMetadataError as SdkPutMetadataError;
use thiserror::Error;

/// Failure modes of a timed-metadata insert.
#[derive(Debug, Error)]
pub enum PutMetadataError {
    /// The channel has no active broadcast to attach metadata to.
    #[error("channel is not broadcasting")]
    NotBroadcasting,
    /// Any other service or transport fault.
    #[error("{0}")]
    Other(String),
}

#[tracing::instrument(skip(client, payload))]
pub(crate) async fn put_metadata(
    client: &aws_sdk_ivs::Client,
    channel_arn: &str,
    payload: &str,
) -> Result<(), PutMetadataError> {
    match client
        .put_metadata()
        .channel_arn(channel_arn)
        .metadata(payload)
        .send()
        .await
    {
        Ok(_) => Ok(()),
        Err(SdkError::ServiceError(e)) => {
            if let SdkPutMetadataError::ChannelNotBroadcasting(_) = e.err() {
                Err(PutMetadataError::NotBroadcasting)
            } else {
                Err(PutMetadataError::Other(e.into_err().to_string()))
            }
        }
        Err(e) => Err(PutMetadataError::Other(e.to_string())),
    }
}
