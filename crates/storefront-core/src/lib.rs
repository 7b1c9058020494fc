//! Storefront Cart Core Library
//!
//! Server-authoritative shopping cart for a storefront UI.
//!
//! ## Overview
//!
//! The cart lives on the storefront server. This crate keeps a cart badge
//! and a cart sidebar in step with it: every mutation is sent to the server,
//! then the authoritative state is fetched again and rendered. Nothing is
//! projected locally.
//!
//! ## Core Principles
//!
//! - **Server is the source of truth**: no local quantity math
//! - **Failures never escape**: each mutation returns a bool and notifies
//! - **Injected collaborators**: API client, notifier and view anchors are
//!   handed to the controller, nothing is global
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use storefront_core::{
//!     CartController, CsrfCookieAuthorizer, HttpCartApi, ProductId, StorefrontConfig,
//!     TracingNotifier, ViewBindings,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = StorefrontConfig::from_env();
//!     let auth = Arc::new(CsrfCookieAuthorizer::from_config(&config));
//!     let api = Arc::new(HttpCartApi::new(config, auth)?);
//!
//!     let cart = CartController::new(api, Arc::new(TracingNotifier), ViewBindings::all());
//!     cart.initialize().await;
//!     cart.add_item(ProductId(42)).await;
//!     cart.open().await;
//!
//!     for line in cart.display().rendered.iter().flat_map(|r| r.lines()) {
//!         println!("{} x{} {}", line.name, line.quantity, line.price_text);
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod events;
pub mod logging;
pub mod money;
pub mod notify;
pub mod types;
pub mod view;

// Re-exports
pub use api::{
    ApiRequest, CartApi, CatalogProduct, CsrfCookieAuthorizer, HttpCartApi, MemoryCartApi,
    NoAuthorizer, RequestAuthorizer,
};
pub use config::StorefrontConfig;
pub use controller::CartController;
pub use error::{StorefrontError, StorefrontResult};
pub use events::CartEvent;
pub use notify::{BroadcastNotifier, Notification, NotificationLevel, Notifier, TracingNotifier};
pub use types::*;
pub use view::{
    Anchor, AnchorLookup, BadgeDisplay, CartBody, CartDisplay, LineMedia, RenderedCart,
    RenderedLine, ViewBindings,
};
