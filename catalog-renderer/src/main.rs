use std::sync::Arc;

use anyhow::{Context, Result};
use catalog_renderer::{
    catalog_api::CatalogApiClient,
    config::RendererConfig,
    dom::Container,
    http_client,
    image_loader::HttpImageLoader,
    orchestrator::{block_main_thread, load_products, LoadOutcome},
};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{filter::LevelFilter, fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let config = RendererConfig::parse();

    // Logs go to stderr so the rendered HTML can be piped from stdout
    fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    info!(
        api_url = %config.api_url,
        asset_base = %config.asset_base(),
        mode = ?config.mode,
        client_block = ?config.client_block(),
        "Starting catalog renderer"
    );

    let http_client =
        http_client::build(config.timeout()).context("Failed to create HTTP client")?;
    let api = CatalogApiClient::new(http_client.clone(), config.api_url.clone());
    let loader = Arc::new(HttpImageLoader::new(http_client, config.asset_base()));
    let renderer = config.mode.renderer(loader);

    let container = Container::with_skeletons(config.skeletons);
    block_main_thread(config.client_block());
    let report = load_products(&api, renderer.as_ref(), &container).await;

    info!(
        elapsed = ?report.elapsed,
        mutations = container.mutations().len(),
        "Render complete"
    );

    let html = container.to_html();
    match &config.output {
        Some(path) => tokio::fs::write(path, html)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => println!("{html}"),
    }

    if let LoadOutcome::Failed(e) = report.outcome {
        return Err(e).context("Catalog could not be loaded");
    }

    Ok(())
}
