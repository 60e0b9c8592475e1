use std::env;

use anyhow::Context;
use url::Url;
use woocommerce::client::ApiCredentials;

/// Connection settings for the upstream WooCommerce store
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub base_url: Url,
    pub credentials: Option<ApiCredentials>,
}

impl StoreConfig {
    /// Load store configuration from environment variables
    ///
    /// Environment variables:
    /// - WOOCOMMERCE_URL: Store base URL (required)
    /// - WOOCOMMERCE_CONSUMER_KEY / WOOCOMMERCE_CONSUMER_SECRET: REST API
    ///   credentials; both must be set for requests to be authenticated
    pub fn from_env() -> anyhow::Result<Self> {
        let raw = env::var("WOOCOMMERCE_URL").context("WOOCOMMERCE_URL must be set")?;
        Self::from_parts(
            &raw,
            env::var("WOOCOMMERCE_CONSUMER_KEY").ok(),
            env::var("WOOCOMMERCE_CONSUMER_SECRET").ok(),
        )
    }

    fn from_parts(
        raw_url: &str,
        consumer_key: Option<String>,
        consumer_secret: Option<String>,
    ) -> anyhow::Result<Self> {
        let base_url = Url::parse(raw_url)
            .with_context(|| format!("WOOCOMMERCE_URL is not a valid URL: {}", raw_url))?;

        let credentials = match (consumer_key, consumer_secret) {
            (Some(consumer_key), Some(consumer_secret))
                if !consumer_key.is_empty() && !consumer_secret.is_empty() =>
            {
                Some(ApiCredentials {
                    consumer_key,
                    consumer_secret,
                })
            }
            _ => None,
        };

        Ok(Self {
            base_url,
            credentials,
        })
    }
}
