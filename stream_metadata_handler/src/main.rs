use std::sync::Arc;

use anyhow::Context as _;
use aws_config::Region;
use aws_config::meta::region::RegionProviderChain;
use aws_lambda_events::s3::S3Event;
use entrypoint::Entrypoint;
use lambda_runtime::{Error, LambdaEvent, run, service_fn, tracing};

use crate::config::Config;
use crate::context::Context;

mod analyzer;
mod config;
mod context;
mod handler;
mod response;

#[tokio::main]
async fn main() -> Result<(), Error> {
    Entrypoint::default().init();

    tracing::trace!("initiating lambda");

    let config = Config::from_env().context("all necessary env vars should be available")?;
    tracing::trace!("initialized config");

    let region_provider =
        RegionProviderChain::default_provider().or_else(Region::new("eu-central-1"));
    let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(region_provider)
        .load()
        .await;

    let s3_client = s3_client::S3::new(aws_sdk_s3::Client::new(&aws_config));
    tracing::trace!("initialized s3 client");

    let rekognition_client =
        rekognition_client::Rekognition::new(aws_sdk_rekognition::Client::new(&aws_config));
    tracing::trace!("initialized rekognition client");

    let bedrock_client =
        bedrock_client::Bedrock::new(aws_sdk_bedrockruntime::Client::new(&aws_config));
    tracing::trace!("initialized bedrock client");

    let ivs_client = ivs_client::Ivs::new(aws_sdk_ivs::Client::new(&aws_config));
    tracing::trace!("initialized ivs client");

    let ctx = Context {
        s3_client: Arc::new(s3_client),
        rekognition_client: Arc::new(rekognition_client),
        bedrock_client: Arc::new(bedrock_client),
        ivs_client: Arc::new(ivs_client),
        config,
    };

    let func = service_fn(move |event: LambdaEvent<S3Event>| {
        let ctx = ctx.clone();

        async move { handler::handler(ctx, event).await }
    });

    run(func).await
}
