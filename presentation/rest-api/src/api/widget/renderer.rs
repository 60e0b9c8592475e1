use serde::Serialize;
use tera::{Context, Tera};

use business::domain::asset::model::AssetManifest;
use business::domain::widget::model::{
    DETAIL_ERROR_TEXT, LIST_ERROR_TEXT, PLACEHOLDER_LABEL, WidgetState,
};

const TEMPLATE_NAME: &str = "widget.html";
const HEADING: &str = "Find a Product";

/// Endpoint URLs baked into the widget script.
#[derive(Debug, Clone)]
pub struct WidgetEndpoints {
    pub list_url: String,
    pub detail_url_base: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScriptConfig<'a> {
    list_url: &'a str,
    detail_url: &'a str,
    list_error_text: &'a str,
    detail_error_text: &'a str,
}

/// Renders the self-contained selection widget: asset tags, container markup
/// and the inline script driving it.
pub struct WidgetRenderer {
    tera: Tera,
    manifest: AssetManifest,
    endpoints: WidgetEndpoints,
}

impl WidgetRenderer {
    pub fn new(manifest: AssetManifest, endpoints: WidgetEndpoints) -> tera::Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(
            TEMPLATE_NAME,
            include_str!("../../../templates/widget.html"),
        )?;
        Ok(Self {
            tera,
            manifest,
            endpoints,
        })
    }

    pub fn render(&self) -> tera::Result<String> {
        let config = ScriptConfig {
            list_url: &self.endpoints.list_url,
            detail_url: &self.endpoints.detail_url_base,
            list_error_text: LIST_ERROR_TEXT,
            detail_error_text: DETAIL_ERROR_TEXT,
        };

        let mut context = Context::new();
        context.insert("heading", HEADING);
        context.insert("placeholder", PLACEHOLDER_LABEL);
        context.insert("styles", &self.manifest.styles().collect::<Vec<_>>());
        context.insert("scripts", &self.manifest.scripts().collect::<Vec<_>>());
        context.insert("config_json", &script_json(&config)?);
        context.insert("state_json", &script_json(&WidgetState::new())?);

        self.tera.render(TEMPLATE_NAME, &context)
    }
}

/// JSON safe to splice into an inline `<script>` block.
fn script_json<T: Serialize>(value: &T) -> tera::Result<String> {
    let json = serde_json::to_string(value).map_err(tera::Error::json)?;
    Ok(json
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026"))
}
