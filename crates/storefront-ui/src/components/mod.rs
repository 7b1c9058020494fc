//! Reusable cart components
//!
//! All components take already-rendered data from `storefront_core::view`
//! and never talk to the server themselves.

mod add_to_cart;
mod button;
mod cart_badge;
mod cart_line;
mod cart_sidebar;
mod toast;

pub use add_to_cart::*;
pub use button::*;
pub use cart_badge::*;
pub use cart_line::*;
pub use cart_sidebar::*;
pub use toast::*;
