//! Cart Line Component
//!
//! One row of the sidebar list: image or icon, name, unit price and the
//! quantity controls.

use dioxus::prelude::*;
use storefront_core::{LineId, LineMedia, RenderedLine};

use super::button::{Button, ButtonVariant};

/// A single cart line
///
/// Quantity buttons report the line's current quantity; the controller
/// works out the new one and the server decides the result.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     for line in rendered.lines() {
///         CartLineItem {
///             key: "{line.id}",
///             line: line.clone(),
///             on_increment: move |(id, qty)| { /* ... */ },
///             on_decrement: move |(id, qty)| { /* ... */ },
///             on_remove: move |id| { /* ... */ },
///         }
///     }
/// }
/// ```
#[component]
pub fn CartLineItem(
    line: RenderedLine,
    on_increment: EventHandler<(LineId, u32)>,
    on_decrement: EventHandler<(LineId, u32)>,
    on_remove: EventHandler<LineId>,
) -> Element {
    let id = line.id;
    let quantity = line.quantity;

    rsx! {
        div {
            class: "cart-item",
            "data-item-id": "{id}",

            div { class: "cart-item-image",
                {match &line.media {
                    LineMedia::Image { src, alt } => rsx! {
                        img { src: "{src}", alt: "{alt}" }
                    },
                    LineMedia::Icon(icon) => rsx! {
                        i { class: "{icon}" }
                    },
                }}
            }

            div { class: "cart-item-details",
                div { class: "cart-item-name", "{line.name}" }
                div { class: "cart-item-price", "{line.price_text}" }
            }

            div { class: "cart-item-controls",
                Button {
                    variant: ButtonVariant::Quantity,
                    class: "decrease".to_string(),
                    onclick: move |_| on_decrement.call((id, quantity)),
                    "\u{2212}"
                }
                span { class: "qty-display", "{quantity}" }
                Button {
                    variant: ButtonVariant::Quantity,
                    class: "increase".to_string(),
                    onclick: move |_| on_increment.call((id, quantity)),
                    "+"
                }
            }

            Button {
                variant: ButtonVariant::Danger,
                class: "cart-item-remove".to_string(),
                onclick: move |_| on_remove.call(id),
                "\u{1F5D1}"
            }
        }
    }
}
