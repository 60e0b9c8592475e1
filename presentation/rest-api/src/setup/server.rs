use poem::{
    EndpointExt, Route, Server as PoemServer, get, listener::TcpListener, middleware::Tracing,
};
use poem_openapi::OpenApiService;
use tracing::info;

use crate::api::assets::routes::stylesheet;
use crate::config::widget_config::STYLESHEET_PATH;
use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let prefix = match config.widget.api_prefix.as_str() {
            "" => "/",
            prefix => prefix,
        };
        let api_service = OpenApiService::new(
            (
                container.health_api,
                container.product_api,
                container.widget_api,
            ),
            "Product Selector API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(config.widget.public_url(&config.widget.api_prefix));
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();
        let app = Route::new()
            .at(STYLESHEET_PATH, get(stylesheet))
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .nest(prefix, api_service)
            .with(config.cors)
            .with(Tracing);
        info!(address = %addr, prefix, "product selector listening");
        info!("Swagger UI at http://{}/docs", addr);
        let widget_path = format!("{}/widget", config.widget.api_prefix);
        info!("Widget at {}", config.widget.public_url(&widget_path));
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}
