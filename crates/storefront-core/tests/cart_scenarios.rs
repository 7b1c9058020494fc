//! Cart controller scenarios
//!
//! End-to-end flows through the public API, with the in-memory server
//! standing in for the storefront.

use std::sync::Arc;

use parking_lot::Mutex;
use storefront_core::{
    Anchor, ApiRequest, CartBody, CartController, CartEvent, CatalogProduct, LineId,
    MemoryCartApi, Notification, NotificationLevel, Notifier, ProductId, ViewBindings,
};

#[derive(Default)]
struct Toasts(Mutex<Vec<Notification>>);

impl Notifier for Toasts {
    fn notify(&self, notification: Notification) {
        self.0.lock().push(notification);
    }
}

fn storefront() -> Arc<MemoryCartApi> {
    Arc::new(MemoryCartApi::new([
        CatalogProduct::new(42, "Managed Router", 10_000, 10).with_icon("fas fa-wifi"),
        CatalogProduct::new(43, "Patch Cable", 2_500, 3).with_image("/media/cable.png"),
        CatalogProduct::new(44, "Support Hour", 85_000, 0),
    ]))
}

fn controller(api: &Arc<MemoryCartApi>) -> (CartController, Arc<Toasts>) {
    let toasts = Arc::new(Toasts::default());
    let cart = CartController::new(api.clone(), toasts.clone(), ViewBindings::all());
    (cart, toasts)
}

// ============================================================================
// Scenarios
// ============================================================================

/// One line at quantity 2 and 10000 COP; decrementing sends quantity 1 and
/// the reload shows the new quantity and total.
#[tokio::test]
async fn test_decrement_from_two() {
    let api = storefront();
    let line = api.seed_line(ProductId(42), 2);
    let (cart, _) = controller(&api);
    cart.open().await;
    api.clear_requests();

    assert!(cart.decrement_item(line, 2).await);

    assert_eq!(
        api.requests(),
        vec![ApiRequest::Update(line, 1), ApiRequest::FetchCart]
    );
    let rendered = cart.display().rendered.unwrap();
    assert_eq!(rendered.lines().len(), 1);
    assert_eq!(rendered.lines()[0].quantity, 1);
    assert_eq!(rendered.lines()[0].price_text, "$10.000");
    assert_eq!(rendered.total_text, "$10,000");
    assert_eq!(api.state().total_minor(), 10_000);
}

/// Empty cart, closed sidebar: adding shows "1" with a bounce and leaves the
/// list untouched.
#[tokio::test]
async fn test_first_add_with_sidebar_closed() {
    let api = storefront();
    let (cart, toasts) = controller(&api);
    let mut events = cart.subscribe();

    assert!(cart.add_item(ProductId(42)).await);

    let shown = cart.display();
    assert_eq!(shown.badge.text(), "1");
    assert!(shown.badge.visible);
    assert!(shown.badge.bounce);
    assert!(shown.rendered.is_none());

    match events.recv().await.unwrap() {
        CartEvent::BadgeChanged(badge) => assert_eq!(badge.count, 1),
        other => panic!("expected badge event, got {:?}", other),
    }
    assert!(events.try_recv().is_err(), "no render while closed");
    assert_eq!(toasts.0.lock()[0].level, NotificationLevel::Success);
}

/// The badge follows the server's count, not the number of clicks.
#[tokio::test]
async fn test_badge_tracks_server_count_not_calls() {
    let api = storefront();
    let (cart, toasts) = controller(&api);

    for _ in 0..5 {
        cart.add_item(ProductId(43)).await;
    }

    // Stock is 3, the last two adds were refused
    assert_eq!(cart.display().badge.count, 3);
    assert_eq!(api.state().item_count, 3);
    let errors = toasts
        .0
        .lock()
        .iter()
        .filter(|t| t.level == NotificationLevel::Error)
        .count();
    assert_eq!(errors, 2);
}

#[tokio::test]
async fn test_every_mutation_failure_preserves_display() {
    let api = storefront();
    let line = api.seed_line(ProductId(43), 3);
    let (cart, toasts) = controller(&api);
    cart.open().await;
    let before = cart.display();

    assert!(!cart.add_item(ProductId(44)).await);
    assert!(!cart.increment_item(line, 3).await);
    assert!(!cart.remove_item(LineId(999)).await);
    api.set_offline(true);
    assert!(!cart.decrement_item(line, 3).await);

    assert_eq!(cart.display(), before);
    let messages: Vec<String> = toasts.0.lock().iter().map(|t| t.message.clone()).collect();
    assert_eq!(
        messages,
        vec![
            "Product out of stock".to_string(),
            "Max stock: 3 units".to_string(),
            "Cart line 999 not found".to_string(),
            "Connection error".to_string(),
        ]
    );

    // Still usable once the network is back
    api.set_offline(false);
    assert!(cart.decrement_item(line, 3).await);
    assert_eq!(cart.display().badge.count, 2);
}

#[tokio::test]
async fn test_remove_last_line_shows_placeholder() {
    let api = storefront();
    let line = api.seed_line(ProductId(42), 1);
    let (cart, toasts) = controller(&api);
    cart.open().await;
    assert!(!cart.display().rendered.unwrap().is_empty());

    assert!(cart.decrement_item(line, 1).await);

    let shown = cart.display();
    let rendered = shown.rendered.unwrap();
    assert_eq!(rendered.body, CartBody::Empty);
    assert_eq!(rendered.total_text, "$0");
    assert!(!shown.badge.visible);
    assert_eq!(
        toasts.0.lock().last().unwrap().message,
        "Managed Router removed from cart"
    );
}

#[tokio::test]
async fn test_reload_while_closed_updates_badge_only() {
    let api = storefront();
    let (cart, _) = controller(&api);
    cart.initialize().await;
    assert_eq!(cart.display().badge.count, 0);

    // Another tab adds to the same session cart
    api.seed_line(ProductId(42), 4);
    cart.reload().await;

    let shown = cart.display();
    assert_eq!(shown.badge.count, 4);
    assert!(shown.rendered.is_none());
}

#[tokio::test]
async fn test_partial_bindings_skip_rendering() {
    let api = storefront();
    api.seed_line(ProductId(42), 1);
    let cart = CartController::attach(
        api.clone(),
        Arc::new(Toasts::default()),
        &[Anchor::Toggle, Anchor::Sidebar, Anchor::Badge, Anchor::LineList],
    )
    .expect("required anchors present");

    cart.open().await;

    let shown = cart.display();
    assert!(shown.sidebar_open);
    assert_eq!(shown.badge.count, 1);
    assert!(shown.rendered.is_none(), "total and placeholder anchors missing");
}
