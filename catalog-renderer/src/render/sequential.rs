use std::sync::Arc;

use catalog_types::Product;
use tracing::{debug, error, info};

use super::{build_card, RenderSummary, Renderer};
use crate::{dom::Container, image_loader::ImageLoader};

/// Loads one image at a time and inserts each card as soon as its image settles
///
/// Rendering N products takes the sum of N image latencies, and every card is a separate
/// live mutation of the container.
pub struct SequentialRenderer {
    loader: Arc<dyn ImageLoader>,
}

impl SequentialRenderer {
    #[must_use]
    pub fn new(loader: Arc<dyn ImageLoader>) -> Self {
        Self { loader }
    }
}

#[async_trait::async_trait]
impl Renderer for SequentialRenderer {
    async fn render(&self, products: Vec<Product>, container: &Container) -> RenderSummary {
        let mut summary = RenderSummary::default();

        // Drops the skeletons before anything is loaded
        container.clear();

        for product in &products {
            debug!("[BOTTLENECK] Starting to load {}...", product.image_url);

            let image = match self.loader.load(&product.image_url).await {
                Ok(image) => {
                    debug!("[BOTTLENECK] ...Finished loading {}", product.image_url);
                    Some(image)
                }
                Err(e) => {
                    error!(product_id = product.id, error = %e, "Image failed");
                    None
                }
            };

            summary.record(image.is_some());
            container.append(build_card(product, image));
        }

        info!(
            cards = summary.cards,
            placeholders = summary.placeholders,
            "All sequential loading finished"
        );
        summary
    }
}
