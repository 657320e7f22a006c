//! Minimal document model for the product grid
//!
//! [`Container`] stands in for the live grid element: every change made through it is a
//! visible mutation and is recorded, so callers can observe how many layout-affecting
//! updates a render performed. [`Fragment`] is the off-tree equivalent used to batch cards.

use std::{
    fmt::Write as _,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use html_escape::{encode_double_quoted_attribute, encode_text};

/// Text shown in place of an image that failed to load
pub const IMAGE_PLACEHOLDER_TEXT: &str = "Image failed to load";

/// What a product card shows above its title
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardMedia {
    Image {
        src: String,
        alt: String,
        width: u32,
        height: u32,
    },
    Placeholder {
        text: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub product_id: u32,
    pub title: String,
    pub description: String,
    pub media: CardMedia,
}

impl Card {
    #[must_use]
    pub const fn has_placeholder(&self) -> bool {
        matches!(self.media, CardMedia::Placeholder { .. })
    }
}

/// A child of the product grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    /// Loading skeleton present before the catalog arrives
    Skeleton,
    Card(Card),
    Error { message: String },
}

impl Element {
    fn write_html(&self, out: &mut String) {
        match self {
            Self::Skeleton => out.push_str(r#"<div class="product-card skeleton"></div>"#),
            Self::Card(card) => {
                let _ = write!(
                    out,
                    r#"<div class="product-card" data-product-id="{}">"#,
                    card.product_id
                );
                match &card.media {
                    CardMedia::Image {
                        src,
                        alt,
                        width,
                        height,
                    } => {
                        let _ = write!(
                            out,
                            r#"<img src="{}" alt="{}" width="{width}" height="{height}">"#,
                            encode_double_quoted_attribute(src),
                            encode_double_quoted_attribute(alt),
                        );
                    }
                    CardMedia::Placeholder { text } => {
                        let _ = write!(
                            out,
                            r#"<div class="image-error-placeholder">{}</div>"#,
                            encode_text(text)
                        );
                    }
                }
                let _ = write!(
                    out,
                    "<h3>{}</h3><p>{}</p></div>",
                    encode_text(&card.title),
                    encode_text(&card.description)
                );
            }
            Self::Error { message } => {
                let _ = write!(out, r#"<div class="error">{}</div>"#, encode_text(message));
            }
        }
    }
}

/// Off-tree collection of elements; building one never touches the container
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    children: Vec<Element>,
}

impl Fragment {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            children: Vec::new(),
        }
    }

    pub fn push(&mut self, element: Element) {
        self.children.push(element);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// A recorded change to the live container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    /// All children removed
    Clear,
    /// One element appended
    Append,
    /// A whole fragment appended in one operation
    AppendFragment { len: usize },
    /// Children replaced by a fixed set of elements
    ReplaceChildren { len: usize },
}

impl Mutation {
    /// Whether the mutation inserts visible content (as opposed to only removing it)
    #[must_use]
    pub const fn inserts_content(&self) -> bool {
        !matches!(self, Self::Clear)
    }
}

#[derive(Debug, Default)]
struct ContainerState {
    children: Vec<Element>,
    mutations: Vec<Mutation>,
}

/// Shared handle to the live product grid
///
/// Clones refer to the same grid.
#[derive(Debug, Clone, Default)]
pub struct Container {
    state: Arc<Mutex<ContainerState>>,
}

impl Container {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A grid pre-filled with `count` loading skeletons, as served in the initial page
    #[must_use]
    pub fn with_skeletons(count: usize) -> Self {
        let container = Self::new();
        container.lock().children = vec![Element::Skeleton; count];
        container
    }

    fn lock(&self) -> MutexGuard<'_, ContainerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn clear(&self) {
        let mut state = self.lock();
        state.children.clear();
        state.mutations.push(Mutation::Clear);
    }

    pub fn append(&self, element: Element) {
        let mut state = self.lock();
        state.children.push(element);
        state.mutations.push(Mutation::Append);
    }

    /// Moves every element of `fragment` into the grid as a single mutation
    pub fn append_fragment(&self, fragment: Fragment) {
        let mut state = self.lock();
        let len = fragment.len();
        state.children.extend(fragment.children);
        state.mutations.push(Mutation::AppendFragment { len });
    }

    /// Replaces all content with one error element
    pub fn show_error(&self, message: &str) {
        let mut state = self.lock();
        state.children = vec![Element::Error {
            message: message.to_string(),
        }];
        state.mutations.push(Mutation::ReplaceChildren { len: 1 });
    }

    #[must_use]
    pub fn children(&self) -> Vec<Element> {
        self.lock().children.clone()
    }

    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        self.lock()
            .children
            .iter()
            .filter_map(|element| match element {
                Element::Card(card) => Some(card.clone()),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn card_count(&self) -> usize {
        self.lock()
            .children
            .iter()
            .filter(|element| matches!(element, Element::Card(_)))
            .count()
    }

    #[must_use]
    pub fn error_count(&self) -> usize {
        self.lock()
            .children
            .iter()
            .filter(|element| matches!(element, Element::Error { .. }))
            .count()
    }

    #[must_use]
    pub fn mutations(&self) -> Vec<Mutation> {
        self.lock().mutations.clone()
    }

    /// Serializes the grid as HTML
    #[must_use]
    pub fn to_html(&self) -> String {
        let state = self.lock();
        let mut out = String::from(r#"<div id="product-grid">"#);
        for child in &state.children {
            child.write_html(&mut out);
        }
        out.push_str("</div>");
        out
    }
}
