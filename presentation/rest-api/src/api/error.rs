use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Error payload shared by every endpoint: a stable machine code plus a
/// human-readable message.
#[derive(Object, Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
        }
    }

    /// Answer for paths the router can't dispatch, such as a non-numeric product id.
    pub fn no_route() -> Self {
        Self::new(
            "no_route",
            "No route was found matching the URL and request method",
        )
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
