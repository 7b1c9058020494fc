//! UI Components for the storefront desktop shell.

mod product_card;
mod store_layout;

pub use product_card::{ProductCard, ProductIdInput};
pub use store_layout::StoreLayout;
