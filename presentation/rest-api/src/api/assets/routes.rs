use poem::{IntoResponse, handler};

const STYLESHEET: &str = include_str!("../../../static/style.css");

/// Serves the widget stylesheet declared by the asset manifest.
#[handler]
pub fn stylesheet() -> impl IntoResponse {
    STYLESHEET.with_content_type("text/css; charset=utf-8")
}
