use serde::{Deserialize, Serialize};
use url::Url;

/// Identifier assigned to a product by the upstream store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// Parses a path segment made only of ASCII digits.
    ///
    /// Anything else (signs, whitespace, empty input, overflow) yields `None`,
    /// which callers treat as a route mismatch rather than a lookup miss.
    pub fn parse_segment(segment: &str) -> Option<Self> {
        if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        segment.parse::<u64>().ok().map(Self)
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Entry of the product listing: just enough to fill a dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: ProductId,
    pub name: String,
}

impl ProductSummary {
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Pricing and display data for a single product.
///
/// `price_html` is pre-rendered by the store and inserted verbatim by the
/// widget, so the store is trusted as the source of that markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDetail {
    pub id: ProductId,
    pub name: String,
    pub price_html: String,
    pub permalink: Url,
}
