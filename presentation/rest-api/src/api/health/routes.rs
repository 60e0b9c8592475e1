use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// Service status
    pub status: String,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
}

/// Liveness probe for the selector service.
///
/// Does not call the product store: a store outage shows up as 502s on the
/// product endpoints, not as an unhealthy service.
#[derive(Default)]
pub struct HealthApi;

impl HealthApi {
    pub fn new() -> Self {
        Self
    }
}

#[OpenApi]
impl HealthApi {
    /// Health check endpoint
    ///
    /// Returns the current status of the service. Public, like every endpoint here.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        Json(HealthCheckResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use poem::http::StatusCode;
    use poem::test::TestClient;
    use poem_openapi::OpenApiService;

    #[tokio::test]
    async fn should_report_healthy() {
        let service = OpenApiService::new(HealthApi::new(), "test", "0.0.0");
        let client = TestClient::new(service);

        let response = client.get("/health").send().await;

        response.assert_status(StatusCode::OK);
        let json = response.json().await;
        json.value().object().get("status").assert_string("healthy");
        json.value()
            .object()
            .get("version")
            .assert_string(env!("CARGO_PKG_VERSION"));
    }
}
