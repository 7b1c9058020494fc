//! Checkout page - order summary.
//!
//! Fetches the cart straight from the API and shows subtotal, VAT and
//! total. Refetches whenever the cart item count changes.

use dioxus::prelude::*;
use storefront_core::money::format_price;
use storefront_core::{CartDisplay, CartState, OrderSummary, RenderedCart, VAT_PERCENT};

use crate::app::Route;
use crate::context::{use_cart_context, use_cart_display};

/// What the summary refetches on: the item count, not sidebar visibility
fn refetch_key(display: &CartDisplay) -> u32 {
    display.badge.count
}

#[component]
pub fn Checkout() -> Element {
    let ctx = use_cart_context();
    let display = use_cart_display();
    let mut state: Signal<Option<CartState>> = use_signal(|| None);
    let mut load_error: Signal<Option<String>> = use_signal(|| None);

    let item_count = use_memo(move || refetch_key(&display.read()));

    use_effect(move || {
        let count = item_count();
        tracing::debug!(count, "Loading order summary");
        let api = ctx.api.clone();
        spawn(async move {
            match api.fetch_cart().await {
                Ok(cart) => {
                    state.set(Some(cart));
                    load_error.set(None);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Error loading order summary");
                    load_error.set(Some(e.user_message("Could not load cart")));
                }
            }
        });
    });

    let Some(cart) = state() else {
        return rsx! {
            section { class: "checkout",
                h1 { class: "page-title", "Checkout" }
                if let Some(message) = load_error() {
                    p { class: "checkout-error", "{message}" }
                } else {
                    p { class: "checkout-loading", "Loading cart..." }
                }
            }
        };
    };

    let summary = OrderSummary::from_state(&cart);
    let rendered = RenderedCart::from_state(&cart);

    rsx! {
        section { class: "checkout",
            h1 { class: "page-title", "Checkout" }

            if rendered.is_empty() {
                p { class: "checkout-empty", "Your cart is empty" }
                Link { to: Route::Shop {}, class: "btn-primary", "Browse products" }
            } else {
                table { class: "checkout-lines",
                    for line in rendered.lines() {
                        tr { key: "{line.id}",
                            td { "{line.name}" }
                            td { class: "qty", "x{line.quantity}" }
                            td { class: "price", "{line.price_text}" }
                        }
                    }
                }

                dl { class: "checkout-summary",
                    dt { "Items" }
                    dd { "{summary.item_count}" }
                    dt { "Subtotal" }
                    dd { "{format_price(summary.subtotal)}" }
                    dt { "IVA {VAT_PERCENT}%" }
                    dd { "{format_price(summary.tax)}" }
                    dt { class: "total", "Total" }
                    dd { class: "total", "{format_price(summary.total)}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sidebar_visibility_does_not_refetch() {
        let mut display = CartDisplay::default();
        display.badge = display.badge.next(2);
        let before = refetch_key(&display);

        display.sidebar_open = true;
        display.scroll_locked = true;
        assert_eq!(refetch_key(&display), before);

        display.sidebar_open = false;
        display.scroll_locked = false;
        assert_eq!(refetch_key(&display), before);
    }

    #[test]
    fn count_change_refetches() {
        let mut display = CartDisplay::default();
        let before = refetch_key(&display);
        display.badge = display.badge.next(1);
        assert_ne!(refetch_key(&display), before);
    }
}
