use serde::Serialize;

use crate::domain::product::model::{ProductDetail, ProductId, ProductSummary};

pub const PLACEHOLDER_LABEL: &str = "Select a product";
pub const LIST_ERROR_TEXT: &str = "Error loading products.";
pub const DETAIL_ERROR_TEXT: &str = "Failed to load product details.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    #[serde(rename = "type")]
    pub kind: MessageKind,
    pub text: String,
}

/// Reactive data of the product selection widget, handed to the inline
/// script as its initial state.
///
/// `detailSeq` is the number of the latest detail request; the script only
/// applies a detail response carrying that number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetState {
    pub products: Vec<ProductSummary>,
    pub selected_product_id: Option<ProductId>,
    pub product_details: Option<ProductDetail>,
    pub messages: Vec<Message>,
    detail_seq: u64,
}

impl WidgetState {
    pub fn new() -> Self {
        Self::default()
    }
}
