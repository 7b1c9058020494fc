//! Cart Sidebar Component
//!
//! Overlay, close button, line list or empty placeholder, and the total.

use dioxus::prelude::*;
use storefront_core::{Anchor, CartState, LineId, RenderedCart};

use super::button::{Button, ButtonVariant, CloseButton};
use super::cart_line::CartLineItem;

/// Class for the sidebar and overlay given the open flag
pub fn sidebar_class(base: &str, open: bool) -> String {
    if open {
        format!("{} active", base)
    } else {
        base.to_string()
    }
}

/// Properties for the CartSidebar component
#[derive(Clone, PartialEq, Props)]
pub struct CartSidebarProps {
    pub open: bool,
    /// Last rendered contents, `None` before the first open
    #[props(!optional)]
    pub rendered: Option<RenderedCart>,
    pub on_close: EventHandler<()>,
    pub on_increment: EventHandler<(LineId, u32)>,
    pub on_decrement: EventHandler<(LineId, u32)>,
    pub on_remove: EventHandler<LineId>,
    #[props(default)]
    pub on_checkout: Option<EventHandler<()>>,
}

/// Slide-in cart sidebar
///
/// The list and the placeholder are both always mounted; only one is
/// visible. Clicking the overlay closes the sidebar like the close button.
#[component]
pub fn CartSidebar(props: CartSidebarProps) -> Element {
    let rendered = props
        .rendered
        .clone()
        .unwrap_or_else(|| RenderedCart::from_state(&CartState::empty()));
    let empty = rendered.is_empty();
    let list_style = if empty { "display: none;" } else { "display: block;" };
    let empty_style = if empty { "display: block;" } else { "display: none;" };
    let on_close = props.on_close;
    let on_increment = props.on_increment;
    let on_decrement = props.on_decrement;
    let on_remove = props.on_remove;

    rsx! {
        div {
            id: Anchor::Overlay.id(),
            class: sidebar_class("cart-overlay", props.open),
            onclick: move |_| on_close.call(()),
        }

        aside {
            id: Anchor::Sidebar.id(),
            class: sidebar_class("cart-sidebar", props.open),

            header { class: "cart-header",
                h2 { "Your cart" }
                CloseButton {
                    id: Anchor::Close.id().to_string(),
                    onclick: move |_| on_close.call(()),
                }
            }

            div {
                id: Anchor::LineList.id(),
                class: "cart-items",
                style: "{list_style}",
                for line in rendered.lines().iter().cloned() {
                    CartLineItem {
                        key: "{line.id}",
                        line: line,
                        on_increment: move |args| on_increment.call(args),
                        on_decrement: move |args| on_decrement.call(args),
                        on_remove: move |id| on_remove.call(id),
                    }
                }
            }

            div {
                id: Anchor::EmptyPlaceholder.id(),
                class: "cart-empty",
                style: "{empty_style}",
                p { "Your cart is empty" }
            }

            footer { class: "cart-footer",
                div { class: "cart-total-row",
                    span { "Total" }
                    span { id: Anchor::Total.id(), class: "cart-total", "{rendered.total_text}" }
                }
                if let Some(checkout) = props.on_checkout {
                    Button {
                        variant: ButtonVariant::Primary,
                        class: "cart-checkout".to_string(),
                        disabled: empty,
                        onclick: move |_| checkout.call(()),
                        "Checkout"
                    }
                }
            }
        }
    }
}
