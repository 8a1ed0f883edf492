use anyhow::Context;
use aws_sdk_s3 as s3;

use crate::ImageObject;

/// Gets a given item from the bucket
#[tracing::instrument(skip(client))]
pub(crate) async fn get(
    client: &s3::Client,
    bucket: &str,
    key: &str,
) -> anyhow::Result<ImageObject> {
    let resp = client
        .get_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await
        .context(format!("could not get item {key} from bucket {bucket}"))?;

    let content_type = resp.content_type().map(|content_type| content_type.to_string());

    let body = resp
        .body
        .collect()
        .await
        .context("could not collect body")?;

    Ok(ImageObject {
        bytes: body.into_bytes().to_vec(),
        content_type,
    })
}
