pub mod app_config;
pub mod cors_config;
pub mod server_config;
pub mod store_config;
pub mod widget_config;
