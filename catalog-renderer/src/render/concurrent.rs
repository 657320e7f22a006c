use std::sync::Arc;

use catalog_types::Product;
use futures::future::join_all;
use tracing::{error, info};

use super::{build_card, RenderSummary, Renderer};
use crate::{
    dom::{Container, Fragment},
    image_loader::{DecodedImage, ImageLoadError, ImageLoader},
};

/// Outcome of one product's image load, consumed immediately to build its card
struct RenderResult {
    product: Product,
    image: Result<DecodedImage, ImageLoadError>,
}

/// Starts every image load at once, waits for all of them to settle, then publishes every
/// card with a single container mutation
///
/// Total time is bounded by the slowest image. A failed image only affects its own card.
pub struct ConcurrentRenderer {
    loader: Arc<dyn ImageLoader>,
}

impl ConcurrentRenderer {
    #[must_use]
    pub fn new(loader: Arc<dyn ImageLoader>) -> Self {
        Self { loader }
    }
}

#[async_trait::async_trait]
impl Renderer for ConcurrentRenderer {
    async fn render(&self, products: Vec<Product>, container: &Container) -> RenderSummary {
        let loader = self.loader.as_ref();

        let loads = products.into_iter().map(move |product| async move {
            let image = loader.load(&product.image_url).await;
            RenderResult { product, image }
        });

        // join_all keeps input order regardless of which load settles first
        let results = join_all(loads).await;

        let mut summary = RenderSummary::default();
        let mut fragment = Fragment::new();

        for RenderResult { product, image } in results {
            let image = image
                .map_err(|e| error!(product_id = product.id, error = %e, "Image failed"))
                .ok();
            summary.record(image.is_some());
            fragment.push(build_card(&product, image));
        }

        container.clear();
        container.append_fragment(fragment);

        info!(
            cards = summary.cards,
            placeholders = summary.placeholders,
            "🚀 All parallel loading and batched render finished"
        );
        summary
    }
}
