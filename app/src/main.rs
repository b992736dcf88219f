mod args;

use args::Args;
use aws_config::meta::region::RegionProviderChain;
use aws_config::{BehaviorVersion, Region};
use clap::Parser;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use log::info;
use pxl::client::msk_connect::MskConnectClient;
use pxl::handler::{ConfigChangeHandler, HandlerResponse};
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    info!("run begins");
    let args = Args::parse();
    let settings = args.to_updater_settings()?;
    info!(
        "Updating connector {} with {} properties",
        settings.connector,
        settings.connector_config.len()
    );

    let region = RegionProviderChain::default_provider()
        .or_else(Region::new(settings.connector.region().to_string()));
    let sdk_config = aws_config::defaults(BehaviorVersion::latest())
        .region(region)
        .load()
        .await;
    let client = MskConnectClient::new(aws_sdk_kafkaconnect::Client::new(&sdk_config));

    let handler = ConfigChangeHandler::new(client, settings);
    let handler = &handler;
    run(service_fn(|event: LambdaEvent<Value>| async move {
        let response: HandlerResponse = handler.handle(event).await?;
        Ok::<HandlerResponse, Error>(response)
    }))
    .await
}
