use super::{
    cors_config, server_config::ServerConfig, store_config::StoreConfig,
    widget_config::WidgetConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub store: StoreConfig,
    pub widget: WidgetConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let server = ServerConfig::from_env();
        let widget = WidgetConfig::from_env(&server)?;
        Ok(Self {
            cors: cors_config::init_cors(),
            store: StoreConfig::from_env()?,
            widget,
            server,
        })
    }
}
