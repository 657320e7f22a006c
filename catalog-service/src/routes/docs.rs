use crate::types::Environment;
use aide::{
    axum::ApiRouter,
    openapi::{Info, OpenApi},
    scalar::Scalar,
};
use axum::http::StatusCode;
use axum::{response::IntoResponse, routing::get, Extension, Json};

const API_TITLE: &str = "Catalog Service";

pub fn handler() -> ApiRouter {
    let scalar = Scalar::new("/openapi.json").with_title("Catalog Service Docs");

    ApiRouter::new()
        .route("/docs", scalar.axum_route())
        .route("/openapi.json", get(openapi_schema))
}

/// Base document that `finish_api` fills with the catalog routes
#[must_use]
pub fn api_document() -> OpenApi {
    OpenApi {
        info: Info {
            title: API_TITLE.to_string(),
            description: Some(
                "Product catalog served by the slow and fast demo deployments".to_string(),
            ),
            version: env!("CARGO_PKG_VERSION").to_string(),
            ..Info::default()
        },
        ..OpenApi::default()
    }
}

#[allow(clippy::unused_async)]
async fn openapi_schema(
    Extension(environment): Extension<Environment>,
    Extension(openapi): Extension<OpenApi>,
) -> impl IntoResponse {
    if !environment.show_api_docs() {
        return StatusCode::NOT_FOUND.into_response();
    }
    Json(openapi).into_response()
}
