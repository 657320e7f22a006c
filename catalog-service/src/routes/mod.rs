mod docs;
mod health;
pub mod products;

use aide::axum::{routing::get, ApiRouter};

pub use docs::api_document;

/// Creates the router with all handler routes
pub fn handler() -> ApiRouter {
    ApiRouter::new()
        .merge(docs::handler())
        .api_route("/health", get(health::handler))
        .api_route("/api/products", get(products::list_products))
}
