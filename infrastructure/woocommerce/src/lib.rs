pub mod client;
pub mod entity;
pub mod product_store;
