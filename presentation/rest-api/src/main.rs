use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod setup;

use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, server::Server};

const DEFAULT_LOG_FILTER: &str = "info";

/// Product Selector entry point
///
/// Initializes the application, wires dependencies, and starts the HTTP server.
/// - config/: Application configuration (server, CORS, store, widget)
/// - setup/: Dependency injection and server setup
/// - api/: Route handlers, DTOs and the widget renderer
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables, so RUST_LOG may come from .env
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    let directives = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(directives.as_deref()))
        .init();

    // 3. Load configuration
    let config = AppConfig::from_env()?;

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config)?;

    // 5. Run server
    Server::run(config, container).await?;

    Ok(())
}

fn env_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}
