use async_trait::async_trait;

use crate::domain::errors::StoreError;

use super::model::{ProductDetail, ProductId, ProductSummary};

/// Read-only port onto the external product store.
///
/// Implementations re-read the store on every call; nothing is cached.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Published products in the store's default listing order, at most `limit`.
    async fn list_published(&self, limit: usize) -> Result<Vec<ProductSummary>, StoreError>;
    async fn get_by_id(&self, id: ProductId) -> Result<ProductDetail, StoreError>;
}
