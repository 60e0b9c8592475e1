use crate::domain::asset::errors::AssetError;
use crate::domain::asset::model::AssetManifest;

pub const STYLE_HANDLE: &str = "product-selector-style";
pub const UI_LIBRARY_HANDLE: &str = "vue";
pub const HTTP_CLIENT_HANDLE: &str = "axios";

/// Where each of the widget's static dependencies is served from.
#[derive(Debug, Clone)]
pub struct WidgetAssetSources {
    pub stylesheet: String,
    pub ui_library: String,
    pub http_client: String,
}

/// Declares the stylesheet, the reactive UI library and the HTTP client
/// library, in the order the widget script expects them.
pub fn register_widget_assets(sources: &WidgetAssetSources) -> Result<AssetManifest, AssetError> {
    let mut manifest = AssetManifest::new();
    manifest
        .register_style(STYLE_HANDLE, sources.stylesheet.as_str())?
        .register_script(UI_LIBRARY_HANDLE, sources.ui_library.as_str())?
        .register_script(HTTP_CLIENT_HANDLE, sources.http_client.as_str())?;
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::asset::model::AssetKind;

    #[test]
    fn should_declare_three_assets_in_load_order() {
        let sources = WidgetAssetSources {
            stylesheet: "http://localhost:8080/assets/style.css".to_string(),
            ui_library: "https://cdn.jsdelivr.net/npm/vue@2".to_string(),
            http_client: "https://cdn.jsdelivr.net/npm/axios/dist/axios.min.js".to_string(),
        };

        let manifest = register_widget_assets(&sources).unwrap();
        let assets = manifest.assets();

        assert_eq!(assets.len(), 3);
        assert_eq!(assets[0].handle, STYLE_HANDLE);
        assert_eq!(assets[0].kind, AssetKind::Style);
        assert_eq!(assets[1].handle, UI_LIBRARY_HANDLE);
        assert_eq!(assets[2].handle, HTTP_CLIENT_HANDLE);
        assert_eq!(assets[2].src, sources.http_client);
    }

    #[test]
    fn should_fail_when_a_source_is_missing() {
        let sources = WidgetAssetSources {
            stylesheet: "/assets/style.css".to_string(),
            ui_library: String::new(),
            http_client: "https://cdn/axios.js".to_string(),
        };

        assert!(matches!(
            register_widget_assets(&sources),
            Err(AssetError::SourceEmpty)
        ));
    }
}
