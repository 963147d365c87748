//! Catalog data source.
//!
//! The catalog is a fixed list of fruit names expanded once at startup into
//! [`CatalogItem`] cards. Cards carry a synthetic price, a description derived
//! from the title and a remote image reference built as `base_url + title`.
//! Nothing mutates or removes a card after construction.

use uuid::Uuid;

/// Names the catalog is built from when the configuration does not override them.
pub const DEFAULT_FRUITS: [&str; 12] = [
    "Apple",
    "Orange",
    "Kiwi",
    "Strawberry",
    "Berry",
    "Banana",
    "Peach",
    "Grape",
    "Mango",
    "Pineapple",
    "Coconut",
    "Watermelon",
];

/// Image reference prefix; the title is appended as the query string.
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://source.unsplash.com/500x300/?";

/// Price every card is listed at.
pub const UNIT_PRICE: u32 = 8;

/// Currency suffix used when a price is displayed.
pub const CURRENCY: &str = "SR";

/// A single card in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItem {
    pub id: Uuid,
    pub title: String,
    pub price: u32,
    pub image_reference: Option<String>,
    pub description: String,
}

impl CatalogItem {
    /// Builds a card for `title` with a fresh identifier.
    ///
    /// The image reference is `image_base_url` followed by the title as written;
    /// escaping for the wire happens when the request is sent. It is `None` when
    /// `image_base_url` is empty or the title is blank.
    ///
    /// ```
    /// use fruitstand::domain::CatalogItem;
    ///
    /// let item = CatalogItem::new("Kiwi", "https://img.example/?");
    /// assert_eq!(item.image_reference.as_deref(), Some("https://img.example/?Kiwi"));
    /// assert_eq!(item.description, "This is a picture of Kiwi.");
    /// ```
    #[must_use]
    pub fn new(title: &str, image_base_url: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.to_string(),
            price: UNIT_PRICE,
            image_reference: image_reference(image_base_url, title),
            description: format!("This is a picture of {title}."),
        }
    }

    /// Price formatted for display, e.g. `"8 SR"`.
    #[must_use]
    pub fn display_price(&self) -> String {
        format!("{} {CURRENCY}", self.price)
    }
}

fn image_reference(base_url: &str, title: &str) -> Option<String> {
    if base_url.trim().is_empty() || title.trim().is_empty() {
        return None;
    }
    Some(format!("{base_url}{title}"))
}

/// Expands a list of names into catalog cards, preserving order.
///
/// Blank names are skipped. Every card receives its own identifier, so two cards
/// with the same title remain distinguishable.
///
/// ```
/// use fruitstand::domain::build_catalog;
///
/// let items = build_catalog(&["Apple", "Kiwi"], "https://img.example/?");
/// assert_eq!(items.len(), 2);
/// assert_eq!(items[0].price, 8);
/// ```
#[must_use]
pub fn build_catalog<S: AsRef<str>>(names: &[S], image_base_url: &str) -> Vec<CatalogItem> {
    let items: Vec<CatalogItem> = names
        .iter()
        .map(|name| name.as_ref().trim())
        .filter(|name| !name.is_empty())
        .map(|name| CatalogItem::new(name, image_base_url))
        .collect();

    tracing::debug!(item_count = items.len(), "catalog built");
    items
}
