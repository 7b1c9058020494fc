//! Storefront Cart UI Components
//!
//! Dioxus components for the cart badge, the cart sidebar, cart lines,
//! add-to-cart buttons and toasts.
//!
//! ## Element Ids
//!
//! Every cart anchor is rendered with the id the core crate expects
//! (`cartToggle`, `cartSidebar`, `cartOverlay`, `cartClose`, `cartCount`,
//! `cartItemsList`, `cartTotal`, `cartEmpty`), so a page assembled from
//! these components always resolves the full set of
//! [`storefront_core::ViewBindings`].
//!
//! Components are stateless: they draw what they are given and report
//! clicks through `EventHandler`s. The host app owns the controller.

pub mod components;

pub use components::*;
