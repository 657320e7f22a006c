use anyhow::Result;
use catalog_service::{
    logging, server,
    types::{Environment, ServiceConfig, Variant},
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let environment = Environment::from_env();
    logging::init(&environment);

    info!("✨ Starting fast catalog server in {:?} environment", environment);

    let config = ServiceConfig::from_env(Variant::Fast)?;
    server::start(environment, config).await
}
