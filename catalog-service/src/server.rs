use std::{net::SocketAddr, sync::Arc, time::Duration};

use axum::{Extension, Router};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{error, info};

use crate::catalog::Catalog;
use crate::routes;
use crate::types::{Environment, ServiceConfig};

/// Builds the fully layered router for a catalog deployment
pub fn router(environment: Environment, config: Arc<ServiceConfig>, catalog: Arc<Catalog>) -> Router {
    let mut openapi = routes::api_document();

    routes::handler()
        .finish_api(&mut openapi)
        .layer(Extension(openapi))
        .layer(Extension(environment))
        .layer(Extension(config))
        .layer(Extension(catalog))
        // Any origin may read the catalog
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(5)))
}

/// Starts the server with the given environment and configuration
///
/// # Errors
///
/// Returns an error if the server fails to start or bind to the port
pub async fn start(environment: Environment, config: ServiceConfig) -> anyhow::Result<()> {
    let catalog = Arc::new(Catalog::for_variant(config.variant));
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    info!(
        variant = %config.variant,
        products = catalog.len(),
        blocking_delay = ?config.fault_injection.blocking_delay,
        error_rate = config.fault_injection.error_rate,
        use_cdn = config.cdn.use_cdn,
        "Loaded catalog"
    );

    let variant = config.variant;
    let router = router(environment, Arc::new(config), catalog);

    let listener = TcpListener::bind(&addr).await?;
    info!("🔄 {variant} catalog service started on http://{addr}");

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(anyhow::Error::from)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = ?e, "Failed to listen for shutdown signal");
        return;
    }
    info!("Shutting down catalog service...");
}
