use std::env;

use anyhow::Context;
use url::Url;

use super::server_config::ServerConfig;

const DEFAULT_API_PREFIX: &str = "/v1";
const DEFAULT_VUE_SCRIPT_URL: &str = "https://cdn.jsdelivr.net/npm/vue@2";
const DEFAULT_AXIOS_SCRIPT_URL: &str = "https://cdn.jsdelivr.net/npm/axios/dist/axios.min.js";

pub const STYLESHEET_PATH: &str = "/assets/style.css";

/// Where the widget and its assets are served from, as seen by the browser
#[derive(Debug, Clone)]
pub struct WidgetConfig {
    pub public_base_url: Url,
    pub api_prefix: String,
    pub vue_script_url: String,
    pub axios_script_url: String,
}

impl WidgetConfig {
    /// Load widget configuration from environment variables
    ///
    /// Environment variables:
    /// - PUBLIC_BASE_URL: Origin the widget calls back to (default: "http://SERVICE_IP:SERVICE_PORT")
    /// - API_PREFIX: Versioned namespace segment for the API (default: "/v1")
    /// - VUE_SCRIPT_URL: Reactive UI library source (default: jsDelivr Vue 2)
    /// - AXIOS_SCRIPT_URL: HTTP client library source (default: jsDelivr axios)
    pub fn from_env(server: &ServerConfig) -> anyhow::Result<Self> {
        let raw_base = env::var("PUBLIC_BASE_URL").unwrap_or_else(|_| server.local_origin());
        let public_base_url = Url::parse(&raw_base)
            .with_context(|| format!("PUBLIC_BASE_URL is not a valid URL: {}", raw_base))?;

        Ok(Self {
            public_base_url,
            api_prefix: normalize_prefix(
                &env::var("API_PREFIX").unwrap_or_else(|_| DEFAULT_API_PREFIX.to_string()),
            ),
            vue_script_url: env::var("VUE_SCRIPT_URL")
                .unwrap_or_else(|_| DEFAULT_VUE_SCRIPT_URL.to_string()),
            axios_script_url: env::var("AXIOS_SCRIPT_URL")
                .unwrap_or_else(|_| DEFAULT_AXIOS_SCRIPT_URL.to_string()),
        })
    }

    /// Absolute URL of a path on this service, e.g. `"/v1/products"`
    pub fn public_url(&self, path: &str) -> String {
        format!(
            "{}{}",
            self.public_base_url.as_str().trim_end_matches('/'),
            path
        )
    }

    pub fn list_products_url(&self) -> String {
        self.public_url(&format!("{}/products", self.api_prefix))
    }

    /// Detail URL without the id; the widget script appends it.
    pub fn product_detail_url_base(&self) -> String {
        self.public_url(&format!("{}/products/", self.api_prefix))
    }

    pub fn stylesheet_url(&self) -> String {
        self.public_url(STYLESHEET_PATH)
    }
}

/// Leading slash, no trailing slash; an empty prefix mounts at the root.
fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}
