use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, code, message) = match &self {
            ProductError::NotFound => (StatusCode::NOT_FOUND, "not_found", "Product not found"),
            ProductError::Store(_) => (
                StatusCode::BAD_GATEWAY,
                "store_unavailable",
                "Product store unavailable",
            ),
        };

        (status, Json(ErrorResponse::new(code, message)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::StoreError;

    #[test]
    fn should_map_not_found_to_404_payload() {
        let (status, json) = ProductError::NotFound.into_error_response();

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json.0, ErrorResponse::new("not_found", "Product not found"));
    }

    #[test]
    fn should_map_every_store_failure_to_502() {
        for error in [StoreError::Unavailable, StoreError::InvalidResponse] {
            let (status, json) = ProductError::Store(error).into_error_response();

            assert_eq!(status, StatusCode::BAD_GATEWAY);
            assert_eq!(json.0.code, "store_unavailable");
        }
    }
}
