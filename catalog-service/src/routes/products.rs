use std::sync::Arc;

use axum::{Extension, Json};
use catalog_types::Product;
use metrics::counter;
use tracing::{info, instrument, warn};

use crate::{
    catalog::Catalog,
    types::{AppError, ServiceConfig},
};

/// Lists every product in catalog order with image URLs resolved for the CDN settings
///
/// On the slow variant the handler first blocks its thread and may fail with a 500.
#[instrument(skip_all)]
pub async fn list_products(
    Extension(catalog): Extension<Arc<Catalog>>,
    Extension(config): Extension<Arc<ServiceConfig>>,
) -> Result<Json<Vec<Product>>, AppError> {
    info!(
        variant = %config.variant,
        use_cdn = config.cdn.use_cdn,
        cdn_base_url = config.cdn.base_url.as_deref().unwrap_or("<none>"),
        "Request received for /api/products"
    );

    let faults = config.fault_injection;
    faults.block_thread();

    if faults.should_fail() {
        warn!("Simulating server error");
        counter!("catalog_injected_failures").increment(1);
        return Err(AppError::injected_failure());
    }

    counter!("catalog_requests_served").increment(1);
    Ok(Json(catalog.resolve(&config.cdn)))
}
