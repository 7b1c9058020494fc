//! Product Card Component
//!
//! Catalog entries with an add-to-cart button, plus a free-form product id
//! field for live storefronts where the catalog is not known locally.

use dioxus::prelude::*;
use storefront_core::money::format_price;
use storefront_core::{CatalogProduct, ProductId};
use storefront_ui::AddToCartButton;

use crate::context::use_cart;

/// A single catalog product
#[component]
pub fn ProductCard(product: CatalogProduct) -> Element {
    let cart = use_cart();
    let sold_out = product.stock == 0;
    let stock_text = if sold_out {
        "Out of stock".to_string()
    } else {
        format!("{} in stock", product.stock)
    };

    let on_add = move |attr: Option<String>| {
        let cart = cart.clone();
        spawn(async move {
            cart.handle_add_click(attr.as_deref()).await;
        });
    };

    rsx! {
        article { class: "product-card",
            div { class: "product-media",
                if let Some(src) = &product.image {
                    img { src: "{src}", alt: "{product.name}" }
                } else {
                    i { class: "{product.icon}" }
                }
            }
            h3 { class: "product-name", "{product.name}" }
            div { class: "product-price", "{format_price(product.price)}" }
            div { class: if sold_out { "product-stock sold-out" } else { "product-stock" }, "{stock_text}" }
            // Sold-out products stay clickable; the server refuses them
            AddToCartButton { product_id: Some(product.id), on_add: on_add }
        }
    }
}

/// Add by product id, for storefronts without a local catalog
#[component]
pub fn ProductIdInput() -> Element {
    let cart = use_cart();
    let mut input_value = use_signal(String::new);

    let parsed = input_value.read().parse::<ProductId>().ok();

    let on_add = move |attr: Option<String>| {
        let cart = cart.clone();
        input_value.set(String::new());
        spawn(async move {
            cart.handle_add_click(attr.as_deref()).await;
        });
    };

    rsx! {
        div { class: "product-id-input",
            input {
                class: "input-field",
                placeholder: "product id",
                value: "{input_value}",
                oninput: move |e| input_value.set(e.value()),
            }
            AddToCartButton {
                product_id: parsed,
                on_add: on_add,
                disabled: parsed.is_none(),
            }
        }
    }
}
