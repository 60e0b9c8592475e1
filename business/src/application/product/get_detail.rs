use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::ProductDetail;
use crate::domain::product::store::ProductStore;
use crate::domain::product::use_cases::get_detail::{
    GetProductDetailParams, GetProductDetailUseCase,
};

pub struct GetProductDetailUseCaseImpl {
    pub store: Arc<dyn ProductStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductDetailUseCase for GetProductDetailUseCaseImpl {
    async fn execute(&self, params: GetProductDetailParams) -> Result<ProductDetail, ProductError> {
        self.logger
            .info(&format!("Fetching product detail by id: {}", params.id));

        let detail = self
            .store
            .get_by_id(params.id)
            .await
            .map_err(ProductError::from_lookup)
            .inspect_err(|e| {
                if let ProductError::Store(inner) = e {
                    self.logger.error(&format!(
                        "Product store lookup for {} failed: {}",
                        params.id, inner
                    ));
                }
            })?;

        Ok(detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::StoreError;
    use crate::domain::product::model::{ProductId, ProductSummary};
    use mockall::mock;
    use url::Url;

    mock! {
        pub Store {}

        #[async_trait]
        impl ProductStore for Store {
            async fn list_published(&self, limit: usize) -> Result<Vec<ProductSummary>, StoreError>;
            async fn get_by_id(&self, id: ProductId) -> Result<ProductDetail, StoreError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn gadget() -> ProductDetail {
        ProductDetail {
            id: ProductId::new(2),
            name: "Gadget".to_string(),
            price_html: "<span>$9.00</span>".to_string(),
            permalink: Url::parse("https://shop/gadget").unwrap(),
        }
    }

    #[tokio::test]
    async fn should_return_detail_when_product_exists() {
        let mut mock_store = MockStore::new();
        mock_store
            .expect_get_by_id()
            .withf(|id| *id == ProductId::new(2))
            .returning(|_| Ok(gadget()));

        let use_case = GetProductDetailUseCaseImpl {
            store: Arc::new(mock_store),
            logger: mock_logger(),
        };

        let detail = use_case
            .execute(GetProductDetailParams {
                id: ProductId::new(2),
            })
            .await
            .unwrap();

        assert_eq!(detail, gadget());
        assert_eq!(detail.permalink.as_str(), "https://shop/gadget");
    }

    #[tokio::test]
    async fn should_return_identical_payloads_for_repeated_calls() {
        let mut mock_store = MockStore::new();
        mock_store
            .expect_get_by_id()
            .times(2)
            .returning(|_| Ok(gadget()));

        let use_case = GetProductDetailUseCaseImpl {
            store: Arc::new(mock_store),
            logger: mock_logger(),
        };

        let first = use_case
            .execute(GetProductDetailParams {
                id: ProductId::new(2),
            })
            .await
            .unwrap();
        let second = use_case
            .execute(GetProductDetailParams {
                id: ProductId::new(2),
            })
            .await
            .unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn should_return_not_found_when_store_misses() {
        let mut mock_store = MockStore::new();
        mock_store
            .expect_get_by_id()
            .returning(|_| Err(StoreError::NotFound));

        let use_case = GetProductDetailUseCaseImpl {
            store: Arc::new(mock_store),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductDetailParams {
                id: ProductId::new(999),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test]
    async fn should_keep_store_failures_distinct_from_not_found() {
        let mut mock_store = MockStore::new();
        mock_store
            .expect_get_by_id()
            .returning(|_| Err(StoreError::InvalidResponse));

        let use_case = GetProductDetailUseCaseImpl {
            store: Arc::new(mock_store),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductDetailParams {
                id: ProductId::new(1),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Store(StoreError::InvalidResponse)
        ));
    }
}
