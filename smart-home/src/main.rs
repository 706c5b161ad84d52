//! Smart Home Skill Lambda - Answers Alexa Smart Home directives.

use std::sync::Arc;

use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use shared::{Config, DynamoEntityStore, SecretsManagerCredentials};
use smart_home::{AlexaResponse, Router, SmartHomeRequest};
use tracing::info;
use tracing_subscriber::EnvFilter;

async fn handler(
    router: &Router,
    event: LambdaEvent<SmartHomeRequest>,
) -> Result<AlexaResponse, Error> {
    info!(request_id = %event.context.request_id, "Received directive");
    Ok(router.route(&event.payload).await)
}

async fn build_router(config: &Config) -> Router {
    let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.aws_region.clone()))
        .load()
        .await;

    let store = DynamoEntityStore::from_config(aws_sdk_dynamodb::Client::new(&aws_config), config);
    let credentials = SecretsManagerCredentials::from_config(
        aws_sdk_secretsmanager::Client::new(&aws_config),
        config,
    );

    info!(
        table = %config.entity_table_name,
        region = %config.aws_region,
        "Smart home skill initialized"
    );
    Router::new(Arc::new(store), Arc::new(credentials))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = Config::from_env();
    let router = build_router(&config).await;
    run(service_fn(|event| handler(&router, event))).await
}
