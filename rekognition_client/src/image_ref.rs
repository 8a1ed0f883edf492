use aws_sdk_rekognition as rekognition;

/// Builds the by-reference image input pointing at an object in a bucket.
pub(crate) fn s3_image(bucket: &str, key: &str) -> rekognition::types::Image {
    rekognition::types::Image::builder()
        .s3_object(
            rekognition::types::S3Object::builder()
                .bucket(bucket)
                .name(key)
                .build(),
        )
        .build()
}
