use serde::Deserialize;
use url::Url;

use business::domain::errors::StoreError;
use business::domain::product::model::{ProductDetail, ProductId, ProductSummary};

/// Product object as returned by `GET /wp-json/wc/v3/products[/{id}]`.
///
/// Only the fields this service projects are decoded.
#[derive(Debug, Deserialize)]
pub struct ProductEntity {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub price_html: String,
    pub permalink: String,
}

impl ProductEntity {
    pub fn into_summary(self) -> ProductSummary {
        ProductSummary::new(ProductId::new(self.id), self.name)
    }

    /// Projects to a detail; a relative permalink is resolved against `store_url`.
    ///
    /// An empty permalink is rejected rather than resolving to the shop root.
    pub fn into_detail(self, store_url: &Url) -> Result<ProductDetail, StoreError> {
        if self.permalink.trim().is_empty() {
            return Err(StoreError::InvalidResponse);
        }
        let permalink = match Url::parse(&self.permalink) {
            Ok(url) => url,
            Err(url::ParseError::RelativeUrlWithoutBase) => store_url
                .join(&self.permalink)
                .map_err(|_| StoreError::InvalidResponse)?,
            Err(_) => return Err(StoreError::InvalidResponse),
        };

        Ok(ProductDetail {
            id: ProductId::new(self.id),
            name: self.name,
            price_html: self.price_html,
            permalink,
        })
    }
}

/// Error body WooCommerce attaches to non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorEntity {
    pub code: String,
    #[serde(default)]
    pub message: String,
}
