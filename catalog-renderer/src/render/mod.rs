mod concurrent;
mod sequential;

pub use concurrent::ConcurrentRenderer;
pub use sequential::SequentialRenderer;

use std::sync::Arc;

use catalog_types::Product;
use clap::ValueEnum;

use crate::{
    dom::{Card, CardMedia, Container, Element, IMAGE_PLACEHOLDER_TEXT},
    image_loader::{DecodedImage, ImageLoader},
};

/// Counts describing what a render put into the container
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderSummary {
    pub cards: usize,
    pub placeholders: usize,
}

impl RenderSummary {
    fn record(&mut self, loaded: bool) {
        self.cards += 1;
        if !loaded {
            self.placeholders += 1;
        }
    }
}

/// Turns a product list into cards in a container
#[async_trait::async_trait]
pub trait Renderer: Send + Sync {
    async fn render(&self, products: Vec<Product>, container: &Container) -> RenderSummary;
}

/// Image loading strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RenderMode {
    /// Await each image before starting the next; one live insert per card
    Sequential,
    /// Load all images at once; one batched insert for every card
    Concurrent,
}

impl RenderMode {
    #[must_use]
    pub fn renderer(self, loader: Arc<dyn ImageLoader>) -> Box<dyn Renderer> {
        match self {
            Self::Sequential => Box::new(SequentialRenderer::new(loader)),
            Self::Concurrent => Box::new(ConcurrentRenderer::new(loader)),
        }
    }
}

/// Builds the card for `product`, using a placeholder when its image failed
fn build_card(product: &Product, image: Option<DecodedImage>) -> Element {
    let media = match image {
        Some(image) => CardMedia::Image {
            src: image.src,
            alt: product.name.clone(),
            width: image.width,
            height: image.height,
        },
        None => CardMedia::Placeholder {
            text: IMAGE_PLACEHOLDER_TEXT.to_string(),
        },
    };

    Element::Card(Card {
        product_id: product.id,
        title: product.name.clone(),
        description: product.description.clone(),
        media,
    })
}
