//! Cart toggle with item-count badge

use dioxus::prelude::*;
use storefront_core::{Anchor, BadgeDisplay};

/// CSS classes for the badge bubble
pub fn badge_class(badge: &BadgeDisplay) -> String {
    let mut class = String::from("cart-count");
    if !badge.visible {
        class.push_str(" hidden");
    }
    if badge.bounce {
        class.push_str(" bounce");
    }
    class
}

/// Cart toggle button
///
/// Renders `cartToggle` with the `cartCount` bubble inside. The bubble is
/// hidden at zero and bounces when the count went up.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     CartToggle {
///         badge: display().badge,
///         on_toggle: move |_| spawn(async move { cart.toggle().await; }),
///     }
/// }
/// ```
#[component]
pub fn CartToggle(badge: BadgeDisplay, on_toggle: EventHandler<()>) -> Element {
    let class = badge_class(&badge);
    let label = format!("Cart, {} items", badge.count);
    // Keying on the count restarts the bounce animation on every increase
    let key = badge.count;

    rsx! {
        button {
            id: Anchor::Toggle.id(),
            class: "cart-toggle",
            r#type: "button",
            "aria-label": "{label}",
            onclick: move |_| on_toggle.call(()),
            span { class: "cart-icon", "\u{1F6D2}" }
            span {
                key: "{key}",
                id: Anchor::Badge.id(),
                class: "{class}",
                "{badge.text()}"
            }
        }
    }
}
