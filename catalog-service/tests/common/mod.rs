// Not every helper is used in every test, so we allow dead code
#![allow(dead_code)]

use std::sync::Arc;

use axum::{body::Body, http::Request, response::Response, Router};
use catalog_service::{
    catalog::Catalog,
    server,
    types::{Environment, ServiceConfig},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Initialize tracing for tests
pub fn setup_test_env() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init()
        .ok();
}

/// Router wired exactly as in production, with test-controlled configuration
pub struct TestSetup {
    pub router: Router,
    pub config: ServiceConfig,
    pub catalog: Arc<Catalog>,
}

impl TestSetup {
    pub fn new(environment: Environment, config: ServiceConfig) -> Self {
        setup_test_env();

        let catalog = Arc::new(Catalog::for_variant(config.variant));
        let router = server::router(environment, Arc::new(config.clone()), catalog.clone());

        Self {
            router,
            config,
            catalog,
        }
    }

    pub async fn send_get_request(
        &self,
        route: &str,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let request = Request::builder()
            .uri(route)
            .method("GET")
            .header("Origin", "http://localhost:8080")
            .body(Body::empty())?;
        let response = self.router.clone().oneshot(request).await?;
        Ok(response)
    }
}

/// Parse response body to JSON
pub async fn parse_response_body(response: Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
