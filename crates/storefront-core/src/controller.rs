//! Cart Sync Controller
//!
//! Mirrors the server's cart into a badge and a sidebar. The server is the
//! only source of truth: mutations are sent, and the display is refreshed
//! from what the server answers, never from a local projection.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use storefront_core::{CartController, MemoryCartApi, TracingNotifier, ViewBindings};
//!
//! let cart = CartController::new(
//!     Arc::new(MemoryCartApi::demo()),
//!     Arc::new(TracingNotifier),
//!     ViewBindings::all(),
//! );
//! cart.initialize().await;
//! cart.add_item(ProductId(1)).await;
//! cart.open().await;
//! ```
//!
//! # Ordering
//!
//! Requests are not serialized, so responses can land out of order. Every
//! request that may change the display takes a ticket before it is sent and
//! its response is applied only if no newer ticket has been applied already.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::api::CartApi;
use crate::error::StorefrontError;
use crate::events::{CartEvent, EVENT_CHANNEL_CAPACITY};
use crate::notify::{Notification, Notifier};
use crate::types::{CartState, LineId, ProductId};
use crate::view::{Anchor, AnchorLookup, CartDisplay, RenderedCart, ViewBindings};

const ADD_FAILED: &str = "Could not add product";
const REMOVE_FAILED: &str = "Could not remove product";
const UPDATE_FAILED: &str = "Could not update quantity";
const ADDED: &str = "Product added to cart";
const REMOVED: &str = "Product removed from cart";

struct ControllerState {
    display: CartDisplay,
    /// Newest ticket whose response has been applied
    applied_ticket: u64,
}

/// Keeps the cart badge and sidebar in step with the server
pub struct CartController {
    api: Arc<dyn CartApi>,
    notifier: Arc<dyn Notifier>,
    bindings: ViewBindings,
    state: Mutex<ControllerState>,
    next_ticket: AtomicU64,
    event_tx: broadcast::Sender<CartEvent>,
}

impl CartController {
    pub fn new(api: Arc<dyn CartApi>, notifier: Arc<dyn Notifier>, bindings: ViewBindings) -> Self {
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            api,
            notifier,
            bindings,
            state: Mutex::new(ControllerState {
                display: CartDisplay::default(),
                applied_ticket: 0,
            }),
            next_ticket: AtomicU64::new(0),
            event_tx,
        }
    }

    /// Resolve anchors and build a controller.
    ///
    /// Returns `None` (after a warning) when a required anchor is missing,
    /// leaving the page without a cart instead of failing it.
    pub fn attach<L: AnchorLookup + ?Sized>(
        api: Arc<dyn CartApi>,
        notifier: Arc<dyn Notifier>,
        lookup: &L,
    ) -> Option<Self> {
        match ViewBindings::resolve(lookup) {
            Ok(bindings) => {
                let missing = bindings.missing_optional();
                if !missing.is_empty() {
                    debug!(?missing, "Optional cart anchors not mounted");
                }
                info!("Cart module attached");
                Some(Self::new(api, notifier, bindings))
            }
            Err(err) => {
                warn!(error = %err, "Cart elements not found, cart disabled");
                None
            }
        }
    }

    /// Initial load so the badge is live from the start
    pub async fn initialize(&self) {
        self.reload().await;
    }

    pub fn subscribe(&self) -> broadcast::Receiver<CartEvent> {
        self.event_tx.subscribe()
    }

    /// Snapshot of what the UI currently shows
    pub fn display(&self) -> CartDisplay {
        self.state.lock().display.clone()
    }

    pub fn is_open(&self) -> bool {
        self.state.lock().display.sidebar_open
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Sidebar
    // ═══════════════════════════════════════════════════════════════════════

    /// Show the sidebar, lock page scroll and fetch fresh contents
    pub async fn open(&self) {
        self.set_visibility(true);
        self.reload().await;
    }

    /// Hide the sidebar and restore page scroll; never fetches
    pub fn close(&self) {
        self.set_visibility(false);
    }

    /// Handler for the toggle anchor
    pub async fn toggle(&self) {
        self.open().await;
    }

    fn set_visibility(&self, open: bool) {
        let mut state = self.state.lock();
        state.display.sidebar_open = open;
        state.display.scroll_locked = open;
        self.emit(CartEvent::VisibilityChanged {
            open,
            scroll_locked: open,
        });
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Mutations
    // ═══════════════════════════════════════════════════════════════════════

    /// Add one unit of `product`. Returns whether the server accepted it.
    pub async fn add_item(&self, product: ProductId) -> bool {
        let ticket = self.take_ticket();
        debug!(%product, ticket, "Adding to cart");

        match self.api.add_item(product).await {
            Ok(outcome) => {
                self.apply_count(ticket, outcome.cart.item_count);
                self.notifier.notify(Notification::success(
                    outcome.message.unwrap_or_else(|| ADDED.to_string()),
                ));
                if self.is_open() {
                    self.reload().await;
                }
                true
            }
            Err(err) => {
                self.report_failure("add", &err, ADD_FAILED);
                false
            }
        }
    }

    /// Delete a cart line
    pub async fn remove_item(&self, line: LineId) -> bool {
        let ticket = self.take_ticket();
        debug!(%line, ticket, "Removing from cart");

        match self.api.remove_line(line).await {
            Ok(outcome) => {
                self.apply_count(ticket, outcome.cart.item_count);
                self.reload().await;
                self.notifier.notify(Notification::success(
                    outcome.message.unwrap_or_else(|| REMOVED.to_string()),
                ));
                true
            }
            Err(err) => {
                self.report_failure("remove", &err, REMOVE_FAILED);
                false
            }
        }
    }

    /// Set a line's quantity. Zero is routed to [`Self::remove_item`].
    pub async fn update_quantity(&self, line: LineId, quantity: u32) -> bool {
        if quantity == 0 {
            debug!(%line, "Quantity zero, removing line instead");
            return self.remove_item(line).await;
        }

        let ticket = self.take_ticket();
        debug!(%line, quantity, ticket, "Updating quantity");

        match self.api.update_line(line, quantity).await {
            Ok(outcome) => {
                self.apply_count(ticket, outcome.cart.item_count);
                self.reload().await;
                true
            }
            Err(err) => {
                self.report_failure("update", &err, UPDATE_FAILED);
                false
            }
        }
    }

    pub async fn increment_item(&self, line: LineId, current: u32) -> bool {
        self.update_quantity(line, current.saturating_add(1)).await
    }

    /// One less; at quantity 1 the line is removed
    pub async fn decrement_item(&self, line: LineId, current: u32) -> bool {
        if current > 1 {
            self.update_quantity(line, current - 1).await
        } else {
            self.remove_item(line).await
        }
    }

    /// Delegated click on an add-to-cart button carrying a product id attribute
    pub async fn handle_add_click(&self, product_attr: Option<&str>) -> bool {
        let Some(raw) = product_attr else {
            debug!("Add-to-cart click without product id");
            return false;
        };
        match raw.parse::<ProductId>() {
            Ok(product) => self.add_item(product).await,
            Err(err) => {
                debug!(error = %err, "Ignoring add-to-cart click");
                false
            }
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Reconciliation
    // ═══════════════════════════════════════════════════════════════════════

    /// Fetch the cart; the badge always updates, the list only while open.
    ///
    /// Failures are logged and leave the display as it was.
    pub async fn reload(&self) -> bool {
        let ticket = self.take_ticket();
        match self.api.fetch_cart().await {
            Ok(cart) => {
                self.apply_state(ticket, &cart);
                true
            }
            Err(err) => {
                warn!(error = %err, "Error loading cart");
                false
            }
        }
    }

    fn take_ticket(&self) -> u64 {
        self.next_ticket.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn accept(state: &mut ControllerState, ticket: u64) -> bool {
        if ticket <= state.applied_ticket {
            debug!(
                ticket,
                applied = state.applied_ticket,
                "Dropping stale cart response"
            );
            return false;
        }
        state.applied_ticket = ticket;
        true
    }

    fn apply_count(&self, ticket: u64, count: u32) {
        let mut state = self.state.lock();
        if Self::accept(&mut state, ticket) {
            self.update_badge(&mut state, count);
        }
    }

    fn apply_state(&self, ticket: u64, cart: &CartState) {
        let mut state = self.state.lock();
        if !Self::accept(&mut state, ticket) {
            return;
        }

        self.update_badge(&mut state, cart.item_count);

        if state.display.sidebar_open && self.bindings.can_render_lines() {
            let rendered = RenderedCart::from_state(cart);
            state.display.rendered = Some(rendered.clone());
            self.emit(CartEvent::Rendered(rendered));
        }
    }

    fn update_badge(&self, state: &mut ControllerState, count: u32) {
        let badge = state.display.badge.next(count);
        state.display.badge = badge;
        if self.bindings.has(Anchor::Badge) {
            self.emit(CartEvent::BadgeChanged(badge));
        }
    }

    fn emit(&self, event: CartEvent) {
        // Nobody subscribed is fine
        let _ = self.event_tx.send(event);
    }

    fn report_failure(&self, operation: &str, err: &StorefrontError, fallback: &str) {
        warn!(operation, error = %err, "Cart request failed");
        self.notifier
            .notify(Notification::error(err.user_message(fallback)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiRequest, CatalogProduct, MemoryCartApi};
    use crate::error::StorefrontResult;
    use crate::notify::NotificationLevel;
    use crate::types::{CartCount, MutationOutcome};
    use async_trait::async_trait;
    use tokio::sync::oneshot;

    #[derive(Default)]
    struct Recorder {
        seen: Mutex<Vec<Notification>>,
    }

    impl Notifier for Recorder {
        fn notify(&self, notification: Notification) {
            self.seen.lock().push(notification);
        }
    }

    fn setup() -> (Arc<MemoryCartApi>, Arc<Recorder>, CartController) {
        let api = Arc::new(MemoryCartApi::new([
            CatalogProduct::new(42, "Router", 10_000, 5),
            CatalogProduct::new(7, "Cable", 5_000, 0),
        ]));
        let notes = Arc::new(Recorder::default());
        let cart = CartController::new(api.clone(), notes.clone(), ViewBindings::all());
        (api, notes, cart)
    }

    #[tokio::test]
    async fn test_attach_disables_without_required_anchors() {
        let api: Arc<dyn CartApi> = Arc::new(MemoryCartApi::default());
        let notes: Arc<dyn Notifier> = Arc::new(Recorder::default());

        assert!(CartController::attach(api.clone(), notes.clone(), &[Anchor::Badge]).is_none());
        assert!(
            CartController::attach(api, notes, &[Anchor::Toggle, Anchor::Sidebar]).is_some()
        );
    }

    #[tokio::test]
    async fn test_open_reloads_once_close_never_fetches() {
        let (api, _, cart) = setup();

        cart.open().await;
        assert_eq!(api.requests(), vec![ApiRequest::FetchCart]);
        let shown = cart.display();
        assert!(shown.sidebar_open);
        assert!(shown.scroll_locked);
        assert!(shown.rendered.unwrap().is_empty());

        api.clear_requests();
        cart.close();
        assert!(api.requests().is_empty());
        assert!(!cart.display().scroll_locked);
    }

    #[tokio::test]
    async fn test_add_while_closed_skips_list_render() {
        let (api, notes, cart) = setup();

        assert!(cart.add_item(ProductId(42)).await);

        let shown = cart.display();
        assert_eq!(shown.badge.text(), "1");
        assert!(shown.badge.bounce);
        assert!(shown.rendered.is_none());
        assert_eq!(api.requests(), vec![ApiRequest::Add(ProductId(42))]);
        assert_eq!(notes.seen.lock()[0], Notification::success("Router added to cart"));
    }

    #[tokio::test]
    async fn test_add_while_open_reloads() {
        let (api, _, cart) = setup();
        cart.open().await;
        api.clear_requests();

        cart.add_item(ProductId(42)).await;

        assert_eq!(
            api.requests(),
            vec![ApiRequest::Add(ProductId(42)), ApiRequest::FetchCart]
        );
        assert_eq!(cart.display().rendered.unwrap().lines().len(), 1);
    }

    #[tokio::test]
    async fn test_rejection_keeps_display_and_notifies() {
        let (_, notes, cart) = setup();
        cart.add_item(ProductId(42)).await;
        cart.open().await;
        let before = cart.display();

        assert!(!cart.add_item(ProductId(7)).await);

        assert_eq!(cart.display(), before);
        let last = notes.seen.lock().last().cloned().unwrap();
        assert_eq!(last.level, NotificationLevel::Error);
        assert_eq!(last.message, "Product out of stock");
    }

    #[tokio::test]
    async fn test_transport_failure_uses_connection_message() {
        let (api, notes, cart) = setup();
        api.set_offline(true);

        assert!(!cart.remove_item(LineId(1)).await);
        assert_eq!(notes.seen.lock()[0].message, "Connection error");
        assert_eq!(cart.display(), CartDisplay::default());
    }

    #[tokio::test]
    async fn test_failed_reload_is_silent() {
        let (api, notes, cart) = setup();
        api.set_offline(true);

        assert!(!cart.reload().await);
        assert!(notes.seen.lock().is_empty());
    }

    #[tokio::test]
    async fn test_decrement_at_one_removes() {
        let (api, _, cart) = setup();
        let line = api.seed_line(ProductId(42), 1);

        cart.decrement_item(line, 1).await;

        let requests = api.requests();
        assert_eq!(requests[0], ApiRequest::Remove(line));
        assert!(!requests
            .iter()
            .any(|r| matches!(r, ApiRequest::Update(_, 0))));
    }

    #[tokio::test]
    async fn test_update_zero_routes_to_remove() {
        let (api, _, cart) = setup();
        let line = api.seed_line(ProductId(42), 3);

        assert!(cart.update_quantity(line, 0).await);
        assert_eq!(api.requests()[0], ApiRequest::Remove(line));
        assert!(api.state().is_empty());
    }

    #[tokio::test]
    async fn test_add_while_open_keeps_bounce_through_reload() {
        let (_, _, cart) = setup();
        cart.open().await;
        let mut events = cart.subscribe();

        assert!(cart.add_item(ProductId(42)).await);

        let mut badges = Vec::new();
        while let Ok(event) = events.try_recv() {
            if let CartEvent::BadgeChanged(badge) = event {
                badges.push(badge);
            }
        }
        assert_eq!(badges.len(), 2, "count from the add, then from the reload");
        assert!(badges.iter().all(|b| b.count == 1 && b.bounce));

        let badge = cart.display().badge;
        assert_eq!(badge.count, 1);
        assert!(badge.bounce);
    }

    #[tokio::test]
    async fn test_badge_does_not_bounce_on_decrease() {
        let (api, _, cart) = setup();
        let line = api.seed_line(ProductId(42), 3);
        cart.initialize().await;
        assert!(cart.display().badge.bounce);

        cart.decrement_item(line, 3).await;

        let badge = cart.display().badge;
        assert_eq!(badge.count, 2);
        assert!(!badge.bounce);
    }

    #[tokio::test]
    async fn test_add_click_parses_attribute() {
        let (api, _, cart) = setup();

        assert!(!cart.handle_add_click(None).await);
        assert!(!cart.handle_add_click(Some("not-a-number")).await);
        assert!(api.requests().is_empty());

        assert!(cart.handle_add_click(Some("42")).await);
        assert_eq!(api.requests(), vec![ApiRequest::Add(ProductId(42))]);
    }

    #[tokio::test]
    async fn test_events_follow_display() {
        let (_, _, cart) = setup();
        let mut events = cart.subscribe();

        cart.open().await;

        assert_eq!(
            events.recv().await.unwrap(),
            CartEvent::VisibilityChanged {
                open: true,
                scroll_locked: true
            }
        );
        assert!(matches!(events.recv().await.unwrap(), CartEvent::BadgeChanged(_)));
        assert!(matches!(events.recv().await.unwrap(), CartEvent::Rendered(_)));
    }

    #[tokio::test]
    async fn test_badge_anchor_absent_emits_no_badge_events() {
        let api = Arc::new(MemoryCartApi::new([CatalogProduct::new(1, "Router", 10_000, 5)]));
        let cart = CartController::attach(
            api,
            Arc::new(Recorder::default()),
            &[Anchor::Toggle, Anchor::Sidebar],
        )
        .unwrap();
        let mut events = cart.subscribe();

        cart.add_item(ProductId(1)).await;

        assert_eq!(cart.display().badge.count, 1);
        assert!(events.try_recv().is_err());
    }

    /// Fetches park until the test releases them, so responses can be
    /// delivered out of order.
    struct GatedApi {
        gates: Mutex<Vec<oneshot::Receiver<CartState>>>,
    }

    #[async_trait]
    impl CartApi for GatedApi {
        async fn fetch_cart(&self) -> StorefrontResult<CartState> {
            let gate = self.gates.lock().remove(0);
            gate.await
                .map_err(|e| StorefrontError::Transport(e.to_string()))
        }

        async fn add_item(&self, _product: ProductId) -> StorefrontResult<MutationOutcome> {
            Ok(MutationOutcome {
                message: None,
                cart: CartCount {
                    item_count: 1,
                    total: None,
                    formatted_total: None,
                },
            })
        }

        async fn remove_line(&self, _line: LineId) -> StorefrontResult<MutationOutcome> {
            Err(StorefrontError::Rejected { message: None })
        }

        async fn update_line(&self, _line: LineId, _quantity: u32) -> StorefrontResult<MutationOutcome> {
            Err(StorefrontError::Rejected { message: None })
        }
    }

    fn state_with_count(count: u32) -> CartState {
        CartState {
            item_count: count,
            ..CartState::empty()
        }
    }

    #[tokio::test]
    async fn test_stale_reload_is_dropped() {
        let (first_tx, first_rx) = oneshot::channel();
        let (second_tx, second_rx) = oneshot::channel();
        let api = Arc::new(GatedApi {
            gates: Mutex::new(vec![first_rx, second_rx]),
        });
        let cart = Arc::new(CartController::new(
            api,
            Arc::new(Recorder::default()),
            ViewBindings::all(),
        ));

        let older = tokio::spawn({
            let cart = cart.clone();
            async move { cart.reload().await }
        });
        tokio::task::yield_now().await;
        let newer = tokio::spawn({
            let cart = cart.clone();
            async move { cart.reload().await }
        });
        tokio::task::yield_now().await;

        // Newer response first, then the older one
        second_tx.send(state_with_count(5)).unwrap();
        assert!(newer.await.unwrap());
        first_tx.send(state_with_count(2)).unwrap();
        assert!(older.await.unwrap());

        assert_eq!(cart.display().badge.count, 5);
    }
}
