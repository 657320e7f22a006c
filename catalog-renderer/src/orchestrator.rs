use std::time::{Duration, Instant};

use tracing::{debug, error, info, instrument};

use crate::{
    catalog_api::{CatalogApi, CatalogApiError},
    dom::Container,
    render::{RenderSummary, Renderer},
};

/// Message shown in the grid when the catalog cannot be loaded
pub const LOAD_ERROR_MESSAGE: &str =
    "Failed to load products. Please check your connection or try again later.";

#[derive(Debug)]
pub enum LoadOutcome {
    Rendered(RenderSummary),
    /// The catalog fetch failed; the container holds only the error element
    Failed(CatalogApiError),
}

#[derive(Debug)]
pub struct LoadReport {
    pub outcome: LoadOutcome,
    pub elapsed: Duration,
}

impl LoadReport {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.outcome, LoadOutcome::Rendered(_))
    }
}

/// Keeps the calling thread busy for `duration` without yielding to the runtime
///
/// Models page scripts that hog the main thread before the catalog is requested; nothing else
/// scheduled on this thread makes progress until it returns.
pub fn block_main_thread(duration: Duration) {
    if duration.is_zero() {
        return;
    }

    let start = Instant::now();
    while start.elapsed() < duration {
        std::hint::spin_loop();
    }

    debug!(blocked_for = ?duration, "Main thread was blocked");
}

/// Fetches the catalog and hands it to `renderer`
///
/// Any catalog failure (unreachable service, non-success status, malformed body) replaces the
/// container contents with a single error element; nothing is partially rendered.
#[instrument(skip_all)]
pub async fn load_products(
    api: &dyn CatalogApi,
    renderer: &dyn Renderer,
    container: &Container,
) -> LoadReport {
    let start = Instant::now();

    let outcome = match api.fetch_products().await {
        Ok(products) => {
            info!(count = products.len(), "Catalog received");
            LoadOutcome::Rendered(renderer.render(products, container).await)
        }
        Err(e) => {
            error!(error = %e, "Failed to load products");
            container.show_error(LOAD_ERROR_MESSAGE);
            LoadOutcome::Failed(e)
        }
    };

    LoadReport {
        outcome,
        elapsed: start.elapsed(),
    }
}
