//! Add-to-cart button for product cards

use dioxus::prelude::*;
use storefront_core::ProductId;

/// Add-to-cart button
///
/// Carries the product id as a `data-product-id` attribute and reports it
/// raw; the controller parses it and ignores clicks without a valid id.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     AddToCartButton {
///         product_id: Some(ProductId(42)),
///         on_add: move |attr: Option<String>| {
///             spawn(async move { cart.handle_add_click(attr.as_deref()).await; });
///         },
///     }
/// }
/// ```
#[component]
pub fn AddToCartButton(
    #[props(!optional)] product_id: Option<ProductId>,
    on_add: EventHandler<Option<String>>,
    #[props(default = false)] disabled: bool,
) -> Element {
    let attr = product_id.map(|id| id.to_string());
    let data_attr = attr.clone().unwrap_or_default();

    rsx! {
        button {
            class: "add-to-cart",
            r#type: "button",
            "data-product-id": "{data_attr}",
            disabled: disabled,
            onclick: move |_| {
                tracing::debug!(product = ?attr, "Add to cart clicked");
                on_add.call(attr.clone());
            },
            "Add to cart"
        }
    }
}
