use std::time::Duration;

use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;

/// Default request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
/// Maximum number of idle connections to maintain per host
const MAX_IDLE_CONNECTIONS_PER_HOST: usize = 10;

/// Builds the traced HTTP client shared by the catalog and image fetchers
///
/// # Errors
///
/// Returns an error if the TLS backend fails to initialize
pub fn build(timeout: Duration) -> Result<ClientWithMiddleware, reqwest::Error> {
    let reqwest_client = Client::builder()
        .timeout(timeout)
        .pool_max_idle_per_host(MAX_IDLE_CONNECTIONS_PER_HOST)
        .build()?;

    Ok(ClientBuilder::new(reqwest_client)
        .with(TracingMiddleware::default())
        .build())
}
