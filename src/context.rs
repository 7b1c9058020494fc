//! Cart context provider for the storefront desktop shell.
//!
//! Builds one [`CartController`] per window and hands it to every component
//! via use_context, together with the signals that mirror its display.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let cart = use_cart();
//! let display = use_cart_display();
//! spawn(async move { cart.toggle().await; });
//! ```

use std::sync::Arc;
use std::time::Duration;

use dioxus::prelude::*;
use storefront_core::{
    BroadcastNotifier, CartApi, CartController, CartDisplay, CatalogProduct, CsrfCookieAuthorizer,
    HttpCartApi, MemoryCartApi, StorefrontConfig, StorefrontResult, ViewBindings,
};
use storefront_ui::ToastEntry;

use crate::Backend;

/// Everything the shell shares with its pages.
#[derive(Clone)]
pub struct CartContext {
    pub cart: Arc<CartController>,
    /// The API the controller uses, for read-only views like checkout
    pub api: Arc<dyn CartApi>,
    pub notifier: Arc<BroadcastNotifier>,
    /// Demo products, empty against a live storefront
    pub catalog: Vec<CatalogProduct>,
    pub toast_duration: Duration,
}

impl PartialEq for CartContext {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.cart, &other.cart)
    }
}

impl CartContext {
    /// Wire API, notifier and controller for a backend.
    ///
    /// The shell always mounts every cart element, so all anchors resolve.
    pub fn build(backend: Backend) -> StorefrontResult<Self> {
        let notifier = Arc::new(BroadcastNotifier::default());

        let (api, catalog, toast_duration): (Arc<dyn CartApi>, _, _) = match backend {
            Backend::Offline => {
                let store = MemoryCartApi::demo();
                let mut catalog = store.catalog();
                catalog.sort_by_key(|p| p.id);
                let duration = StorefrontConfig::default().notification_duration;
                (Arc::new(store), catalog, duration)
            }
            Backend::Remote(config) => {
                let duration = config.notification_duration;
                let auth = Arc::new(CsrfCookieAuthorizer::from_config(&config));
                (Arc::new(HttpCartApi::new(config, auth)?), Vec::new(), duration)
            }
        };

        let cart = CartController::new(api.clone(), notifier.clone(), ViewBindings::all());

        Ok(Self {
            cart: Arc::new(cart),
            api,
            notifier,
            catalog,
            toast_duration,
        })
    }
}

/// Hook to access the shared cart context.
pub fn use_cart_context() -> CartContext {
    use_context::<CartContext>()
}

/// Hook to access the cart controller.
pub fn use_cart() -> Arc<CartController> {
    use_cart_context().cart
}

/// Hook to read what the cart UI currently shows.
///
/// Updated from the controller's event stream.
pub fn use_cart_display() -> Signal<CartDisplay> {
    use_context::<Signal<CartDisplay>>()
}

/// Hook to the visible toasts.
pub fn use_toasts() -> Signal<Vec<ToastEntry>> {
    use_context::<Signal<Vec<ToastEntry>>>()
}
