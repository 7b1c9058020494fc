//! Toast notifications

use dioxus::prelude::*;
use storefront_core::Notification;

/// A toast with a stable key for list rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastEntry {
    pub id: u64,
    pub notification: Notification,
}

/// Stack of transient toasts
///
/// The host removes entries after the configured display duration.
#[component]
pub fn ToastStack(toasts: Vec<ToastEntry>) -> Element {
    rsx! {
        div { class: "toast-stack",
            for toast in toasts {
                Toast { key: "{toast.id}", notification: toast.notification.clone() }
            }
        }
    }
}

#[component]
pub fn Toast(notification: Notification) -> Element {
    let class = format!("toast {}", notification.level.class());

    rsx! {
        div { class: "{class}", role: "status",
            span { class: "toast-icon", "{notification.level.icon()}" }
            span { class: "toast-message", "{notification.message}" }
        }
    }
}
