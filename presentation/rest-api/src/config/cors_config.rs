use poem::middleware::Cors;
use std::env;

/// Initialize CORS middleware so host pages on other origins can embed the widget
///
/// Environment variables:
/// - CORS_ALLOWED_ORIGINS: Comma-separated list of allowed origins
///   (default: "http://localhost:8080")
///
/// Configuration:
/// - Methods: GET, OPTIONS (the API is read-only)
/// - Headers: content-type, accept
/// - Credentials: Disabled (the API is unauthenticated)
///
pub fn init_cors() -> Cors {
    let allowed_origins =
        env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| "http://localhost:8080".to_string());

    let origins: Vec<&str> = allowed_origins
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .collect();

    Cors::new()
        .allow_origins(origins)
        .allow_methods(vec!["GET", "OPTIONS"])
        .allow_headers(vec!["content-type", "accept"])
        .allow_credentials(false)
}
