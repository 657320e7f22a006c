mod error;

pub use error::CatalogApiError;

use catalog_types::{ErrorResponse, Product};
use reqwest_middleware::ClientWithMiddleware;
use tracing::{debug, instrument};
use url::Url;

/// Source of the product catalog
#[async_trait::async_trait]
pub trait CatalogApi: Send + Sync {
    /// Fetches all products in catalog order
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogApiError>;
}

/// HTTP client for `GET /api/products`
///
/// For more details see the `catalog-service` crate in this repository.
pub struct CatalogApiClient {
    products_url: Url,
    http_client: ClientWithMiddleware,
}

impl CatalogApiClient {
    #[must_use]
    pub const fn new(http_client: ClientWithMiddleware, products_url: Url) -> Self {
        Self {
            products_url,
            http_client,
        }
    }

    #[must_use]
    pub const fn products_url(&self) -> &Url {
        &self.products_url
    }
}

#[async_trait::async_trait]
impl CatalogApi for CatalogApiClient {
    #[instrument(skip(self), fields(url = %self.products_url))]
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogApiError> {
        let response = self
            .http_client
            .get(self.products_url.clone())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorResponse>()
                .await
                .ok()
                .map(|body| body.error);
            return Err(CatalogApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let products = response.json::<Vec<Product>>().await?;
        debug!(count = products.len(), "Fetched catalog");

        Ok(products)
    }
}
