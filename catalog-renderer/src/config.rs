use std::{path::PathBuf, time::Duration};

use clap::Parser;
use url::Url;

use crate::{http_client::DEFAULT_REQUEST_TIMEOUT_SECS, render::RenderMode};

/// Renders the product catalog the way a browser page would
#[derive(Debug, Clone, Parser)]
#[command(name = "catalog-renderer", version, about)]
pub struct RendererConfig {
    /// Catalog endpoint
    #[arg(
        long,
        env = "CATALOG_API_URL",
        default_value = "http://localhost:4001/api/products"
    )]
    pub api_url: Url,

    /// Base that relative image paths resolve against (defaults to the API origin)
    #[arg(long, env = "ASSET_BASE_URL")]
    pub asset_base_url: Option<Url>,

    /// Image loading strategy
    #[arg(long, env = "RENDER_MODE", value_enum, default_value_t = RenderMode::Concurrent)]
    pub mode: RenderMode,

    /// Loading skeletons shown before the catalog arrives
    #[arg(long, default_value_t = 9)]
    pub skeletons: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Milliseconds the main thread is kept busy before the catalog is requested
    #[arg(long, env = "CLIENT_BLOCK_MS", default_value_t = 0)]
    pub client_block_ms: u64,

    /// Write the rendered grid HTML here instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl RendererConfig {
    /// Explicit asset base, or the root of the API URL's origin
    #[must_use]
    pub fn asset_base(&self) -> Url {
        self.asset_base_url.clone().unwrap_or_else(|| {
            let mut base = self.api_url.clone();
            base.set_path("/");
            base.set_query(None);
            base.set_fragment(None);
            base
        })
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    #[must_use]
    pub const fn client_block(&self) -> Duration {
        Duration::from_millis(self.client_block_ms)
    }
}
