//! Page components for the storefront.

mod checkout;
mod shop;

pub use checkout::Checkout;
pub use shop::Shop;
