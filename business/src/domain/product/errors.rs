use crate::domain::errors::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.not_found")]
    NotFound,
    #[error("store.unavailable")]
    Store(#[from] StoreError),
}

impl ProductError {
    /// Lifts a store lookup miss into the domain-level `NotFound`.
    pub fn from_lookup(error: StoreError) -> Self {
        match error {
            StoreError::NotFound => ProductError::NotFound,
            other => ProductError::Store(other),
        }
    }
}
