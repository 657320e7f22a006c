use thiserror::Error;

/// Why a single product image could not be shown
#[derive(Error, Debug)]
pub enum ImageLoadError {
    #[error("Failed to load image: {src}: invalid URL: {source}")]
    InvalidUrl {
        src: String,
        source: url::ParseError,
    },

    #[error("Failed to load image: {src}: {source}")]
    Transport {
        src: String,
        source: reqwest_middleware::Error,
    },

    #[error("Failed to load image: {src}: status {status}")]
    Status { src: String, status: u16 },

    #[error("Failed to load image: {src}: {source}")]
    Body { src: String, source: reqwest::Error },

    #[error("Failed to load image: {src}: {message}")]
    Decode { src: String, message: String },
}
