use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::ProductSummary;
use crate::domain::product::store::ProductStore;
use crate::domain::product::use_cases::list::{LIST_LIMIT, ListProductsUseCase};

pub struct ListProductsUseCaseImpl {
    pub store: Arc<dyn ProductStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListProductsUseCase for ListProductsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<ProductSummary>, ProductError> {
        self.logger.info("Listing published products");

        let mut products = self.store.list_published(LIST_LIMIT).await.map_err(|e| {
            self.logger
                .error(&format!("Product store listing failed: {}", e));
            ProductError::Store(e)
        })?;

        // The store may ignore the requested page size.
        if products.len() > LIST_LIMIT {
            self.logger.warn(&format!(
                "Store returned {} products, truncating to {}",
                products.len(),
                LIST_LIMIT
            ));
            products.truncate(LIST_LIMIT);
        }

        self.logger
            .info(&format!("Found {} published products", products.len()));
        Ok(products)
    }
}
