use poem_openapi::Object;

use business::domain::product::model::{ProductDetail, ProductSummary};

/// Product entry of the listing
#[derive(Debug, Clone, PartialEq, Object)]
pub struct ProductSummaryResponse {
    /// Store-assigned product id
    pub id: u64,
    /// Display name
    pub name: String,
}

impl From<ProductSummary> for ProductSummaryResponse {
    fn from(product: ProductSummary) -> Self {
        Self {
            id: product.id.value(),
            name: product.name,
        }
    }
}

/// Pricing and display data for one product
#[derive(Debug, Clone, PartialEq, Object)]
pub struct ProductDetailResponse {
    /// Store-assigned product id
    pub id: u64,
    /// Display name
    pub name: String,
    /// Price markup pre-rendered by the store (currency, sale price, tax suffix)
    pub price_html: String,
    /// Absolute URL of the product page
    pub permalink: String,
}

impl From<ProductDetail> for ProductDetailResponse {
    fn from(product: ProductDetail) -> Self {
        Self {
            id: product.id.value(),
            name: product.name,
            price_html: product.price_html,
            permalink: product.permalink.into(),
        }
    }
}
