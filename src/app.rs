use dioxus::prelude::*;
use storefront_core::CartDisplay;
use storefront_ui::ToastEntry;
use tokio::sync::broadcast::error::RecvError;

use crate::components::StoreLayout;
use crate::context::CartContext;
use crate::get_backend;
use crate::pages::{Checkout, Shop};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Product grid with add-to-cart buttons
/// - `/checkout` - Order summary with VAT
#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(StoreLayout)]
        #[route("/")]
        Shop {},
        #[route("/checkout")]
        Checkout {},
}

/// Root application component.
///
/// Builds the cart once; a bad storefront config shows an error screen
/// instead of the shop.
#[component]
pub fn App() -> Element {
    let shell = use_hook(|| CartContext::build(get_backend()).map_err(|e| e.to_string()));

    rsx! {
        style { {GLOBAL_STYLES} }
        {match shell {
            Ok(ctx) => rsx! { CartShell { ctx: ctx } },
            Err(message) => rsx! {
                main { class: "startup-error",
                    h1 { "Cart unavailable" }
                    p { "{message}" }
                }
            },
        }}
    }
}

/// Provides the cart context and mirrors controller output into signals.
#[component]
fn CartShell(ctx: CartContext) -> Element {
    let ctx = use_context_provider(|| ctx);
    let mut display: Signal<CartDisplay> = use_signal(|| ctx.cart.display());
    let mut toasts: Signal<Vec<ToastEntry>> = use_signal(Vec::new);
    use_context_provider(|| display);
    use_context_provider(|| toasts);

    // Subscribe before the first fetch so no event is missed
    use_effect(move || {
        let cart = ctx.cart.clone();
        let mut events = cart.subscribe();
        spawn(async move {
            loop {
                match events.recv().await {
                    Ok(event) => {
                        tracing::trace!(kind = event.kind(), "Cart event");
                        display.set(cart.display());
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::debug!(skipped, "Cart events lagged, resyncing display");
                        display.set(cart.display());
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        });

        let mut notifications = ctx.notifier.subscribe();
        let duration = ctx.toast_duration;
        spawn(async move {
            let mut next_id = 0u64;
            loop {
                let notification = match notifications.recv().await {
                    Ok(notification) => notification,
                    Err(RecvError::Lagged(_)) => continue,
                    Err(RecvError::Closed) => break,
                };
                next_id += 1;
                let id = next_id;
                toasts.write().push(ToastEntry { id, notification });

                // Schedule removal after display duration
                spawn(async move {
                    tokio::time::sleep(duration).await;
                    toasts.write().retain(|t| t.id != id);
                });
            }
        });

        let cart = ctx.cart.clone();
        spawn(async move {
            cart.initialize().await;
        });
    });

    rsx! {
        Router::<Route> {}
    }
}
