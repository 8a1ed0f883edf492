use anyhow::Context as _;
use aws_lambda_events::event::s3::S3Event;
use lambda_runtime::{
    Error, LambdaEvent,
    tracing::{self},
};
use model::image_key::ImageKey;
use model::metadata::{TIMED_METADATA_LIMIT_BYTES, TimedMetadata};

use crate::analyzer;
use crate::context::Context;
use crate::response::InvocationResponse;

/// Reference to the uploaded object as carried by the event.
#[derive(Debug, PartialEq, Eq)]
pub struct ObjectRef {
    pub bucket: String,
    pub key: String,
}

/// Extracts the bucket and key of the first record.
///
/// An event with no records is an invocation-level error: there is nothing
/// to analyze and the platform should record the failure.
pub fn extract_object_ref(event: &S3Event) -> anyhow::Result<ObjectRef> {
    let record = event
        .records
        .first()
        .context("event contained no records")?;

    let bucket = record.s3.bucket.name.clone().context("expected bucket")?;
    let key = record.s3.object.key.clone().context("expected key")?;

    Ok(ObjectRef { bucket, key })
}

/// Processes one upload notification end to end: analyze the image, wrap
/// the result in the metadata envelope, publish it to the channel.
#[tracing::instrument(skip(ctx, event))]
pub async fn handler(
    ctx: Context,
    event: LambdaEvent<S3Event>,
) -> Result<InvocationResponse, Error> {
    let object_ref = extract_object_ref(&event.payload)?;
    tracing::info!(bucket=%object_ref.bucket, key=%object_ref.key, "processing upload");

    let image_key: ImageKey = object_ref.key.as_str().try_into()?;
    tracing::info!(image_name=%image_key.display_name(), "derived image name");

    let analysis = match analyzer::analyze(&ctx, &object_ref.bucket, image_key.decoded()).await
    {
        Ok(analysis) => analysis,
        Err(e) => {
            tracing::error!(error=?e, "image analysis failed");
            return Ok(InvocationResponse::internal_error(
                "Error: image analysis failed",
            ));
        }
    };

    let metadata = TimedMetadata::for_image(&image_key, analysis);
    let payload = match metadata.to_json() {
        Ok(payload) => payload,
        Err(e) => {
            tracing::error!(error=?e, "could not serialize metadata");
            return Ok(InvocationResponse::internal_error(
                "Error: metadata serialization failed",
            ));
        }
    };

    if payload.len() > TIMED_METADATA_LIMIT_BYTES {
        // The service enforces the limit; the insert below will be rejected.
        tracing::warn!(
            payload_len = payload.len(),
            "payload exceeds the timed metadata limit"
        );
    }

    let publish = ctx
        .ivs_client
        .put_metadata(&ctx.config.channel_arn, &payload)
        .await;

    match &publish {
        Ok(()) => tracing::info!("metadata inserted"),
        Err(e) => tracing::error!(error=?e, "metadata insert failed"),
    }

    Ok(InvocationResponse::from_publish(publish))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload_event(bucket: &str, key: &str) -> S3Event {
        let value = serde_json::json!({
            "Records": [
                {
                    "eventVersion": "2.1",
                    "eventSource": "aws:s3",
                    "awsRegion": "eu-central-1",
                    "eventTime": "2024-05-01T12:00:00.000Z",
                    "eventName": "ObjectCreated:Put",
                    "userIdentity": { "principalId": "EXAMPLE" },
                    "requestParameters": { "sourceIPAddress": "127.0.0.1" },
                    "responseElements": {
                        "x-amz-request-id": "EXAMPLE",
                        "x-amz-id-2": "EXAMPLE"
                    },
                    "s3": {
                        "s3SchemaVersion": "1.0",
                        "configurationId": "upload-notification",
                        "bucket": {
                            "name": bucket,
                            "ownerIdentity": { "principalId": "EXAMPLE" },
                            "arn": format!("arn:aws:s3:::{bucket}")
                        },
                        "object": {
                            "key": key,
                            "size": 1024,
                            "eTag": "d41d8cd98f00b204e9800998ecf8427e",
                            "sequencer": "0055AED6DCD90281E5"
                        }
                    }
                }
            ]
        });

        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn extracts_bucket_and_key_from_the_first_record() {
        let event = upload_event("uploads-bucket", "uploads/2024/photo1.jpg");

        let object_ref = extract_object_ref(&event).unwrap();
        assert_eq!(object_ref.bucket, "uploads-bucket");
        assert_eq!(object_ref.key, "uploads/2024/photo1.jpg");
    }

    #[test]
    fn an_event_with_zero_records_fails_the_invocation() {
        let event: S3Event = serde_json::from_value(serde_json::json!({ "Records": [] })).unwrap();

        let err = extract_object_ref(&event).unwrap_err();
        assert!(err.to_string().contains("no records"));
    }
}
