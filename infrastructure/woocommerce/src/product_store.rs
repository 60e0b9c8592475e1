use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use tracing::warn;

use business::domain::errors::StoreError;
use business::domain::product::model::{ProductDetail, ProductId, ProductSummary};
use business::domain::product::store::ProductStore;

use crate::client::WooCommerceClient;
use crate::entity::{ApiErrorEntity, ProductEntity};

const INVALID_ID_CODE: &str = "woocommerce_rest_product_invalid_id";

pub struct ProductStoreWooCommerce {
    client: WooCommerceClient,
}

impl ProductStoreWooCommerce {
    pub fn new(client: WooCommerceClient) -> Self {
        Self { client }
    }

    async fn send(&self, url: &str, query: &[(&str, String)]) -> Result<Response, StoreError> {
        self.client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                warn!(url, error = %e, "product store request failed");
                StoreError::Unavailable
            })
    }

    /// Maps a non-2xx upstream response onto the store error taxonomy.
    async fn classify_failure(response: Response) -> StoreError {
        let status = response.status();
        let body = response.json::<ApiErrorEntity>().await.ok();

        if status == StatusCode::NOT_FOUND
            || body.as_ref().is_some_and(|b| b.code == INVALID_ID_CODE)
        {
            return StoreError::NotFound;
        }

        warn!(
            status = status.as_u16(),
            code = body.as_ref().map(|b| b.code.as_str()).unwrap_or(""),
            message = body.as_ref().map(|b| b.message.as_str()).unwrap_or(""),
            "product store answered with an error"
        );
        StoreError::Unavailable
    }
}

#[async_trait]
impl ProductStore for ProductStoreWooCommerce {
    async fn list_published(&self, limit: usize) -> Result<Vec<ProductSummary>, StoreError> {
        let query = [
            ("status", "publish".to_string()),
            ("per_page", limit.to_string()),
        ];
        let response = self.send(&self.client.products_url(), &query).await?;

        if !response.status().is_success() {
            return Err(match Self::classify_failure(response).await {
                // The collection endpoint has no per-id miss; treat it as an outage.
                StoreError::NotFound => StoreError::Unavailable,
                other => other,
            });
        }

        let entities: Vec<ProductEntity> = response
            .json()
            .await
            .map_err(|_| StoreError::InvalidResponse)?;

        Ok(entities.into_iter().map(|e| e.into_summary()).collect())
    }

    async fn get_by_id(&self, id: ProductId) -> Result<ProductDetail, StoreError> {
        let response = self.send(&self.client.product_url(id), &[]).await?;

        if !response.status().is_success() {
            return Err(Self::classify_failure(response).await);
        }

        let entity: ProductEntity = response
            .json()
            .await
            .map_err(|_| StoreError::InvalidResponse)?;

        entity.into_detail(&self.client.base_url)
    }
}
