use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::product::model::ProductId;
use business::domain::product::use_cases::get_detail::{
    GetProductDetailParams, GetProductDetailUseCase,
};
use business::domain::product::use_cases::list::ListProductsUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{ProductDetailResponse, ProductSummaryResponse};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    list_use_case: Arc<dyn ListProductsUseCase>,
    get_detail_use_case: Arc<dyn GetProductDetailUseCase>,
}

impl ProductApi {
    pub fn new(
        list_use_case: Arc<dyn ListProductsUseCase>,
        get_detail_use_case: Arc<dyn GetProductDetailUseCase>,
    ) -> Self {
        Self {
            list_use_case,
            get_detail_use_case,
        }
    }
}

/// Product catalog API
///
/// Read-only, unauthenticated views over the upstream product store.
#[OpenApi]
impl ProductApi {
    /// List published products
    ///
    /// Returns at most 50 published products in the store's listing order.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn list_products(&self) -> ListProductsResponse {
        match self.list_use_case.execute().await {
            Ok(products) => {
                let responses: Vec<ProductSummaryResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                ListProductsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => ListProductsResponse::NotFound(json),
                    _ => ListProductsResponse::BadGateway(json),
                }
            }
        }
    }

    /// Get a product's pricing and display data
    ///
    /// Returns the name, pre-rendered price markup and permalink of one product.
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_detail(&self, id: Path<String>) -> GetProductDetailResponse {
        let Some(id) = ProductId::parse_segment(&id.0) else {
            return GetProductDetailResponse::NotFound(Json(ErrorResponse::no_route()));
        };

        match self
            .get_detail_use_case
            .execute(GetProductDetailParams { id })
            .await
        {
            Ok(product) => GetProductDetailResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductDetailResponse::NotFound(json),
                    _ => GetProductDetailResponse::BadGateway(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductSummaryResponse>>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductDetailResponse {
    #[oai(status = 200)]
    Ok(Json<ProductDetailResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}
