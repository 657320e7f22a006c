use anyhow::Result;
use catalog_service::{
    logging, server,
    types::{Environment, ServiceConfig, Variant},
};
use tracing::info;

// Single-threaded on purpose: the injected busy-wait stalls every in-flight request.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let environment = Environment::from_env();
    logging::init(&environment);

    info!("Starting slow catalog server in {:?} environment", environment);

    let config = ServiceConfig::from_env(Variant::Slow)?;
    server::start(environment, config).await
}
