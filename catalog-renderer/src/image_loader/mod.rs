mod error;

pub use error::ImageLoadError;

use std::io::Cursor;

use image::ImageReader;
use reqwest_middleware::ClientWithMiddleware;
use tracing::{debug, instrument};
use url::Url;

/// An image whose bytes arrived and whose header decodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    /// Absolute URL the image was fetched from
    pub src: String,
    pub width: u32,
    pub height: u32,
    pub byte_len: usize,
}

/// Loads product images
#[async_trait::async_trait]
pub trait ImageLoader: Send + Sync {
    /// Fetches and decodes the image at `src`
    ///
    /// `src` may be absolute or relative to the loader's asset base.
    async fn load(&self, src: &str) -> Result<DecodedImage, ImageLoadError>;
}

/// Fetches images over HTTP, resolving relative paths like a browser resolves them against
/// the page URL
pub struct HttpImageLoader {
    asset_base: Url,
    http_client: ClientWithMiddleware,
}

impl HttpImageLoader {
    #[must_use]
    pub const fn new(http_client: ClientWithMiddleware, asset_base: Url) -> Self {
        Self {
            asset_base,
            http_client,
        }
    }

    /// Resolves `src` against the asset base; absolute URLs are returned unchanged
    ///
    /// # Errors
    ///
    /// Returns an error if `src` cannot be parsed as a URL reference
    pub fn resolve(&self, src: &str) -> Result<Url, ImageLoadError> {
        self.asset_base
            .join(src)
            .map_err(|source| ImageLoadError::InvalidUrl {
                src: src.to_string(),
                source,
            })
    }
}

#[async_trait::async_trait]
impl ImageLoader for HttpImageLoader {
    #[instrument(skip(self))]
    async fn load(&self, src: &str) -> Result<DecodedImage, ImageLoadError> {
        let url = self.resolve(src)?;

        let response = self
            .http_client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| ImageLoadError::Transport {
                src: src.to_string(),
                source,
            })?;

        if !response.status().is_success() {
            return Err(ImageLoadError::Status {
                src: src.to_string(),
                status: response.status().as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|source| ImageLoadError::Body {
                src: src.to_string(),
                source,
            })?;

        let (width, height) = decode_dimensions(&bytes).map_err(|message| {
            ImageLoadError::Decode {
                src: src.to_string(),
                message,
            }
        })?;

        debug!(width, height, byte_len = bytes.len(), "Image loaded");

        Ok(DecodedImage {
            src: url.to_string(),
            width,
            height,
            byte_len: bytes.len(),
        })
    }
}

/// Reads the pixel dimensions from an encoded image header
fn decode_dimensions(bytes: &[u8]) -> Result<(u32, u32), String> {
    ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| e.to_string())?
        .into_dimensions()
        .map_err(|e| e.to_string())
}
