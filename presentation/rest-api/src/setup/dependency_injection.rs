use std::sync::Arc;

use anyhow::Context;

use logger::TracingLogger;
use woocommerce::client::WooCommerceClient;
use woocommerce::product_store::ProductStoreWooCommerce;

use business::application::asset::register::{WidgetAssetSources, register_widget_assets};
use business::application::product::get_detail::GetProductDetailUseCaseImpl;
use business::application::product::list::ListProductsUseCaseImpl;

use crate::api::widget::renderer::{WidgetEndpoints, WidgetRenderer};
use crate::config::app_config::AppConfig;

/// Composition root: every adapter, use case and API is built here and
/// handed to the server. Nothing registers itself.
pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::HealthApi,
    pub product_api: crate::api::product::routes::ProductApi,
    pub widget_api: crate::api::widget::routes::WidgetApi,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::HealthApi::new();

        // Infrastructure adapters
        let store_client = WooCommerceClient::new(
            config.store.base_url.clone(),
            config.store.credentials.clone(),
        );
        let product_store = Arc::new(ProductStoreWooCommerce::new(store_client));

        // Product use cases
        let list_use_case = Arc::new(ListProductsUseCaseImpl {
            store: product_store.clone(),
            logger: logger.clone(),
        });
        let get_detail_use_case = Arc::new(GetProductDetailUseCaseImpl {
            store: product_store,
            logger,
        });

        let product_api =
            crate::api::product::routes::ProductApi::new(list_use_case, get_detail_use_case);

        // Widget and its assets
        let widget = &config.widget;
        let manifest = register_widget_assets(&WidgetAssetSources {
            stylesheet: widget.stylesheet_url(),
            ui_library: widget.vue_script_url.clone(),
            http_client: widget.axios_script_url.clone(),
        })
        .context("widget assets could not be registered")?;
        let renderer = WidgetRenderer::new(
            manifest,
            WidgetEndpoints {
                list_url: widget.list_products_url(),
                detail_url_base: widget.product_detail_url_base(),
            },
        )
        .context("widget template could not be loaded")?;

        let widget_api = crate::api::widget::routes::WidgetApi::new(Arc::new(renderer));

        Ok(Self {
            health_api,
            product_api,
            widget_api,
        })
    }
}
