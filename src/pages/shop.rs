//! Shop page - product grid.

use dioxus::prelude::*;

use crate::components::{ProductCard, ProductIdInput};
use crate::context::use_cart_context;

#[component]
pub fn Shop() -> Element {
    let ctx = use_cart_context();

    rsx! {
        section { class: "shop",
            h1 { class: "page-title", "Products" }
            if ctx.catalog.is_empty() {
                p { class: "shop-hint", "Enter a product id from the storefront to add it." }
                ProductIdInput {}
            } else {
                div { class: "product-grid",
                    for product in ctx.catalog.iter().cloned() {
                        ProductCard { key: "{product.id}", product: product }
                    }
                }
            }
        }
    }
}
