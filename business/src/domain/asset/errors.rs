#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("asset.handle_empty")]
    HandleEmpty,
    #[error("asset.source_empty")]
    SourceEmpty,
    #[error("asset.duplicate_handle")]
    DuplicateHandle(String),
}
