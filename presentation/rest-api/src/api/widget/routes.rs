use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    payload::{Html, Json},
};
use tracing::error;

use crate::api::error::ErrorResponse;
use crate::api::tags::ApiTags;
use crate::api::widget::renderer::WidgetRenderer;

pub struct WidgetApi {
    renderer: Arc<WidgetRenderer>,
}

impl WidgetApi {
    pub fn new(renderer: Arc<WidgetRenderer>) -> Self {
        Self { renderer }
    }
}

/// Embeddable product selector
#[OpenApi]
impl WidgetApi {
    /// Render the product selection widget
    ///
    /// Returns a self-contained HTML fragment (asset tags, markup and script)
    /// for placement in any host page. Takes no parameters.
    #[oai(path = "/widget", method = "get", tag = "ApiTags::Widget")]
    async fn render_widget(&self) -> RenderWidgetResponse {
        match self.renderer.render() {
            Ok(html) => RenderWidgetResponse::Ok(Html(html)),
            Err(err) => {
                error!(error = %err, "widget template failed to render");
                RenderWidgetResponse::InternalError(Json(ErrorResponse::new(
                    "render_failed",
                    "Widget could not be rendered",
                )))
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum RenderWidgetResponse {
    #[oai(status = 200)]
    Ok(Html<String>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::widget::renderer::WidgetEndpoints;
    use business::application::asset::register::{WidgetAssetSources, register_widget_assets};
    use poem::test::TestClient;
    use poem_openapi::OpenApiService;

    #[tokio::test]
    async fn should_serve_widget_markup() {
        let manifest = register_widget_assets(&WidgetAssetSources {
            stylesheet: "http://localhost:8080/assets/style.css".to_string(),
            ui_library: "https://cdn.jsdelivr.net/npm/vue@2".to_string(),
            http_client: "https://cdn.jsdelivr.net/npm/axios/dist/axios.min.js".to_string(),
        })
        .unwrap();
        let renderer = WidgetRenderer::new(
            manifest,
            WidgetEndpoints {
                list_url: "http://localhost:8080/v1/products".to_string(),
                detail_url_base: "http://localhost:8080/v1/products/".to_string(),
            },
        )
        .unwrap();
        let service = OpenApiService::new(WidgetApi::new(Arc::new(renderer)), "test", "0.0.0");
        let client = TestClient::new(service);

        let response = client.get("/widget").send().await;

        response.assert_status_is_ok();
        response.assert_content_type("text/html; charset=utf-8");
        let body = response.0.into_body().into_string().await.unwrap();
        assert!(body.contains(r#"id="product-app""#));
        assert!(body.contains("http://localhost:8080/v1/products"));
    }
}
