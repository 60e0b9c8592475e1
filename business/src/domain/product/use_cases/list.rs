use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::ProductSummary;

/// Upper bound on the number of products a listing returns.
pub const LIST_LIMIT: usize = 50;

#[async_trait]
pub trait ListProductsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ProductSummary>, ProductError>;
}
