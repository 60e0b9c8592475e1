use reqwest::{Client, RequestBuilder};
use url::Url;

use business::domain::product::model::ProductId;

const PRODUCTS_PATH: &str = "wp-json/wc/v3/products";

/// Credentials for the WooCommerce REST API (consumer key and secret).
#[derive(Debug, Clone)]
pub struct ApiCredentials {
    pub consumer_key: String,
    pub consumer_secret: String,
}

/// Shared WooCommerce HTTP client configuration.
pub struct WooCommerceClient {
    pub client: Client,
    pub base_url: Url,
    pub credentials: Option<ApiCredentials>,
}

impl WooCommerceClient {
    pub fn new(base_url: Url, credentials: Option<ApiCredentials>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: with_trailing_slash(base_url),
            credentials,
        }
    }

    /// Returns the product collection endpoint URL.
    pub fn products_url(&self) -> String {
        format!("{}{}", self.base_url, PRODUCTS_PATH)
    }

    /// Returns the single product endpoint URL.
    pub fn product_url(&self, id: ProductId) -> String {
        format!("{}{}/{}", self.base_url, PRODUCTS_PATH, id)
    }

    /// Starts a GET request, attaching basic auth when credentials are set.
    pub fn get(&self, url: &str) -> RequestBuilder {
        let request = self.client.get(url);
        match &self.credentials {
            Some(c) => request.basic_auth(&c.consumer_key, Some(&c.consumer_secret)),
            None => request,
        }
    }
}

// Url::join drops the last path segment unless the base ends with '/'.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_endpoint_urls_from_root_store() {
        let client = WooCommerceClient::new(Url::parse("https://shop.example").unwrap(), None);

        assert_eq!(
            client.products_url(),
            "https://shop.example/wp-json/wc/v3/products"
        );
        assert_eq!(
            client.product_url(ProductId::new(7)),
            "https://shop.example/wp-json/wc/v3/products/7"
        );
    }

    #[test]
    fn should_keep_subdirectory_installs() {
        let client =
            WooCommerceClient::new(Url::parse("https://example.com/shop").unwrap(), None);

        assert_eq!(client.base_url.as_str(), "https://example.com/shop/");
        assert_eq!(
            client.products_url(),
            "https://example.com/shop/wp-json/wc/v3/products"
        );
    }
}
