use catalog_types::Product;

use crate::types::Variant;

/// CDN settings used to rewrite image URLs before they are served
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CdnConfig {
    /// Whether image URLs should point at the CDN
    pub use_cdn: bool,
    /// CDN origin without a trailing slash
    pub base_url: Option<String>,
}

impl CdnConfig {
    /// Creates a CDN config, normalizing the base URL
    ///
    /// Trailing slashes are stripped and an empty base is treated as unset.
    #[must_use]
    pub fn new(use_cdn: bool, base_url: Option<&str>) -> Self {
        let base_url = base_url
            .map(|url| url.trim().trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .map(ToString::to_string);

        Self { use_cdn, base_url }
    }
}

/// A catalog record as stored by the service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: u32,
    pub name: String,
    pub description: String,
    /// Path relative to the asset root, e.g. `img/1_mac.png`
    pub image_path: String,
    /// Explicit CDN location, preferred over `CdnConfig::base_url`
    pub cdn_image_url: Option<String>,
}

impl CatalogEntry {
    #[must_use]
    pub fn new(id: u32, name: &str, description: &str, image_path: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            description: description.to_string(),
            image_path: image_path.to_string(),
            cdn_image_url: None,
        }
    }

    #[must_use]
    pub fn with_cdn_image_url(mut self, url: &str) -> Self {
        self.cdn_image_url = Some(url.to_string());
        self
    }

    /// Produces the wire representation with the image URL resolved
    #[must_use]
    pub fn resolve(&self, cdn: &CdnConfig) -> Product {
        Product {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            image_url: resolve_image_url(self, cdn),
        }
    }
}

/// Computes the image URL a client should load for `entry`
///
/// Resolution order:
/// 1. CDN enabled and the entry has an explicit CDN URL: that URL, verbatim.
/// 2. CDN enabled and a base URL is configured: base and path joined by exactly one `/`.
/// 3. Otherwise the stored relative path.
#[must_use]
pub fn resolve_image_url(entry: &CatalogEntry, cdn: &CdnConfig) -> String {
    if !cdn.use_cdn {
        return entry.image_path.clone();
    }

    if let Some(url) = &entry.cdn_image_url {
        return url.clone();
    }

    match cdn
        .base_url
        .as_deref()
        .map(|base| base.trim_end_matches('/'))
        .filter(|base| !base.is_empty())
    {
        Some(base) => format!("{base}/{}", entry.image_path.trim_start_matches('/')),
        None => entry.image_path.clone(),
    }
}

/// The fixed, ordered product list served by one deployment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    #[must_use]
    pub const fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// Returns the built-in catalog for a deployment variant
    #[must_use]
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Slow => Self::new(slow_entries()),
            Variant::Fast => Self::new(fast_entries()),
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves every entry in catalog order
    #[must_use]
    pub fn resolve(&self, cdn: &CdnConfig) -> Vec<Product> {
        self.entries.iter().map(|entry| entry.resolve(cdn)).collect()
    }
}

// Unoptimized PNG assets, several megabytes each.
fn slow_entries() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new(
            1,
            "Computer Mouse",
            "Loads just as slowly: the photo weighs a whole 10 MB.",
            "img/2_mouse.png",
        ),
        CatalogEntry::new(
            2,
            "Huge Unoptimized MacBook",
            "This MacBook is so big its photo weighs 2.2 MB.",
            "img/1_mac.png",
        ),
        CatalogEntry::new(
            3,
            "RAM",
            "Should be fast, but loads slowly.",
            "img/3_ram.png",
        ),
        CatalogEntry::new(4, "Mobile Phone - Honor", "Chinese phone", "img/4_phone_honor.png"),
        CatalogEntry::new(5, "Camera - Nikon", "Great for portraits", "img/5_nikon.png"),
        CatalogEntry::new(
            6,
            "Drone - DJI Inspire",
            "Best for video filming",
            "img/6_dji_inspire.png",
        ),
        CatalogEntry::new(
            7,
            "Portable Speaker - JBL",
            "Small, handy and well made",
            "img/7_jbl.png",
        ),
        CatalogEntry::new(8, "Headphones", "Loud", "img/8_headphones.png"),
        CatalogEntry::new(9, "Retro TV", "For connoisseurs", "img/9_retro_tv.png"),
    ]
}

// Same products pointing at compressed WebP assets.
fn fast_entries() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new(1, "Computer Mouse", "Loads instantly.", "img/2_mouse.webp"),
        CatalogEntry::new(
            2,
            "Optimized MacBook",
            "This photo now weighs 40 KB.",
            "img/1_mac.webp",
        ),
        CatalogEntry::new(
            3,
            "RAM",
            "Fast, as it should be. This photo now weighs 50 KB, not 12 MB.",
            "img/3_ram.webp",
        ),
        CatalogEntry::new(4, "Mobile Phone - Honor", "Chinese phone", "img/4_phone_honor.webp"),
        CatalogEntry::new(5, "Camera - Nikon", "Great for portraits", "img/5_nikon.webp"),
        CatalogEntry::new(
            6,
            "Drone - DJI Inspire",
            "Best for video filming",
            "img/6_dji_inspire.webp",
        ),
        CatalogEntry::new(
            7,
            "Portable Speaker - JBL",
            "Small, handy and well made",
            "img/7_jbl.webp",
        ),
        CatalogEntry::new(8, "Headphones", "Loud", "img/8_headphones.webp"),
        CatalogEntry::new(9, "Retro TV", "For connoisseurs", "img/9_retro_tv.webp"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entry(path: &str) -> CatalogEntry {
        CatalogEntry::new(1, "Mouse", "Clicks", path)
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let cdn = CdnConfig::new(true, Some("https://cdn.example.com"));
        let entry = entry("img/a.png");

        assert_eq!(
            resolve_image_url(&entry, &cdn),
            resolve_image_url(&entry, &cdn)
        );
    }

    #[test]
    fn test_cdn_disabled_returns_stored_path() {
        let entry = entry("img/a.png").with_cdn_image_url("https://other.example.com/a.png");

        for cdn in [
            CdnConfig::new(false, None),
            CdnConfig::new(false, Some("https://cdn.example.com/")),
        ] {
            assert_eq!(resolve_image_url(&entry, &cdn), "img/a.png");
        }
    }

    #[test]
    fn test_explicit_cdn_url_wins_over_base() {
        let entry = entry("img/a.png").with_cdn_image_url("https://assets.example.net/a-v2.png");
        let cdn = CdnConfig::new(true, Some("https://cdn.example.com"));

        assert_eq!(
            resolve_image_url(&entry, &cdn),
            "https://assets.example.net/a-v2.png"
        );
    }

    #[test]
    fn test_base_url_joined_with_exactly_one_slash() {
        let cases = [
            ("https://cdn.example.com", "img/a.png"),
            ("https://cdn.example.com/", "img/a.png"),
            ("https://cdn.example.com", "/img/a.png"),
            ("https://cdn.example.com/", "/img/a.png"),
            ("https://cdn.example.com//", "//img/a.png"),
        ];

        for (base, path) in cases {
            let cdn = CdnConfig {
                use_cdn: true,
                base_url: Some(base.to_string()),
            };
            assert_eq!(
                resolve_image_url(&entry(path), &cdn),
                "https://cdn.example.com/img/a.png",
                "base={base} path={path}"
            );
        }
    }

    #[test]
    fn test_cdn_enabled_without_base_falls_back_to_path() {
        let cdn = CdnConfig::new(true, Some("/"));
        assert_eq!(cdn.base_url, None);
        assert_eq!(resolve_image_url(&entry("img/a.png"), &cdn), "img/a.png");
    }

    #[test]
    fn test_cdn_config_strips_trailing_slash() {
        let cdn = CdnConfig::new(true, Some("https://cdn.example.com/"));
        assert_eq!(cdn.base_url.as_deref(), Some("https://cdn.example.com"));
    }

    #[test]
    fn test_builtin_catalogs_keep_id_order() {
        for variant in [Variant::Slow, Variant::Fast] {
            let ids: Vec<u32> = Catalog::for_variant(variant)
                .entries()
                .iter()
                .map(|entry| entry.id)
                .collect();
            assert_eq!(ids, (1..=9).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_resolve_rewrites_every_entry() {
        let catalog = Catalog::for_variant(Variant::Fast);
        let cdn = CdnConfig::new(true, Some("https://cdn.example.com"));

        let products = catalog.resolve(&cdn);

        assert_eq!(products.len(), catalog.len());
        assert_eq!(products[0].image_url, "https://cdn.example.com/img/2_mouse.webp");
        assert!(products
            .iter()
            .all(|p| p.image_url.starts_with("https://cdn.example.com/img/")));
    }
}
