// Not every helper is used in every test, so we allow dead code
#![allow(dead_code)]

use std::{io::Cursor, net::SocketAddr, sync::Arc, time::Duration};

use catalog_renderer::{
    catalog_api::CatalogApiClient, dom::Container, http_client, image_loader::HttpImageLoader,
    orchestrator::{load_products, LoadReport}, render::RenderMode,
};
use catalog_service::{
    catalog::Catalog,
    server,
    types::{Environment, ServiceConfig},
};
use catalog_types::Product;
use image::{ImageFormat, RgbImage};
use url::Url;
use wiremock::{
    matchers::{method, path, path_regex},
    Mock, MockServer, ResponseTemplate,
};

/// Initialize tracing for tests
pub fn setup_test_env() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init()
        .ok();
}

/// Encoded PNG of the given size
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let mut bytes = Vec::new();
    RgbImage::new(width, height)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}

pub fn product(id: u32, image_url: &str) -> Product {
    Product {
        id,
        name: format!("Product {id}"),
        description: format!("Description {id}"),
        image_url: image_url.to_string(),
    }
}

pub async fn mount_catalog(server: &MockServer, products: &[Product]) {
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(products))
        .mount(server)
        .await;
}

/// Serves a valid PNG for every request under `/img/`
pub async fn mount_images(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path_regex(r"^/img/.+$"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(png_bytes(8, 6)))
        .mount(server)
        .await;
}

/// Runs a full load against `api_url`, resolving images against `asset_base`
pub async fn render(
    mode: RenderMode,
    api_url: &str,
    asset_base: &str,
    container: &Container,
) -> LoadReport {
    setup_test_env();

    let http_client = http_client::build(Duration::from_secs(5)).unwrap();
    let api = CatalogApiClient::new(http_client.clone(), Url::parse(api_url).unwrap());
    let loader = Arc::new(HttpImageLoader::new(
        http_client,
        Url::parse(asset_base).unwrap(),
    ));
    let renderer = mode.renderer(loader);

    load_products(&api, renderer.as_ref(), container).await
}

/// Serves the real catalog router on an ephemeral local port
pub async fn spawn_catalog_service(config: ServiceConfig) -> SocketAddr {
    let catalog = Arc::new(Catalog::for_variant(config.variant));
    let router = server::router(Environment::Development, Arc::new(config), catalog);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router.into_make_service())
            .await
            .unwrap();
    });

    addr
}
