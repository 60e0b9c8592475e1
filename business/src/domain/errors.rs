/// Product store errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store.not_found")]
    NotFound,
    #[error("store.unavailable")]
    Unavailable,
    #[error("store.invalid_response")]
    InvalidResponse,
}
