use thiserror::Error;

/// Errors that abort a catalog load
#[derive(Error, Debug)]
pub enum CatalogApiError {
    /// The service could not be reached
    #[error("Catalog request failed: {0}")]
    Transport(#[from] reqwest_middleware::Error),

    /// The service answered with a non-success status
    #[error("Server error! Status: {status}")]
    Status {
        status: u16,
        /// Message from the JSON error body, when present
        message: Option<String>,
    },

    /// The response body was not a product array
    #[error("Invalid catalog payload: {0}")]
    Decode(#[from] reqwest::Error),
}
