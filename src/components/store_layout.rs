//! Store Layout Component
//!
//! Header with the cart toggle, the routed page, the cart sidebar and the
//! toast stack. Every cart element the controller binds to lives here.

use dioxus::prelude::*;
use storefront_core::LineId;
use storefront_ui::{CartSidebar, CartToggle, ToastStack};

use crate::app::Route;
use crate::context::{use_cart, use_cart_display, use_toasts};

#[component]
pub fn StoreLayout() -> Element {
    let cart = use_cart();
    let display = use_cart_display();
    let toasts = use_toasts();
    let navigator = use_navigator();

    let shown = display();
    let root_class = if shown.scroll_locked {
        "store scroll-locked"
    } else {
        "store"
    };

    let on_toggle = {
        let cart = cart.clone();
        move |_: ()| {
            let cart = cart.clone();
            spawn(async move {
                cart.toggle().await;
            });
        }
    };
    let on_close = {
        let cart = cart.clone();
        move |_: ()| cart.close()
    };
    let on_increment = {
        let cart = cart.clone();
        move |(line, current): (LineId, u32)| {
            let cart = cart.clone();
            spawn(async move {
                cart.increment_item(line, current).await;
            });
        }
    };
    let on_decrement = {
        let cart = cart.clone();
        move |(line, current): (LineId, u32)| {
            let cart = cart.clone();
            spawn(async move {
                cart.decrement_item(line, current).await;
            });
        }
    };
    let on_remove = {
        let cart = cart.clone();
        move |line: LineId| {
            let cart = cart.clone();
            spawn(async move {
                cart.remove_item(line).await;
            });
        }
    };
    let on_checkout = move |_: ()| {
        cart.close();
        navigator.push(Route::Checkout {});
    };

    rsx! {
        div { class: "{root_class}",
            header { class: "store-header",
                Link { to: Route::Shop {}, class: "store-title", "Storefront" }
                nav { class: "store-nav",
                    Link { to: Route::Shop {}, class: "nav-link", "Shop" }
                    Link { to: Route::Checkout {}, class: "nav-link", "Checkout" }
                }
                CartToggle { badge: shown.badge, on_toggle: on_toggle }
            }

            main { class: "store-main",
                Outlet::<Route> {}
            }

            CartSidebar {
                open: shown.sidebar_open,
                rendered: shown.rendered.clone(),
                on_close: on_close,
                on_increment: on_increment,
                on_decrement: on_decrement,
                on_remove: on_remove,
                on_checkout: on_checkout,
            }

            ToastStack { toasts: toasts() }
        }
    }
}
