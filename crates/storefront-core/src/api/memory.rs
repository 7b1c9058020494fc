//! In-process cart API.
//!
//! Applies the storefront server's cart rules against a fixed catalog:
//! stock checks on add and update, quantity zero deletes the line, the unit
//! price is captured when a line is created. Every call is recorded so tests
//! can assert on what went over the "wire".

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::CartApi;
use crate::error::{StorefrontError, StorefrontResult};
use crate::money::format_server_total;
use crate::types::{CartCount, CartLine, CartState, LineId, MutationOutcome, ProductId};

/// A product the in-memory store can sell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogProduct {
    pub id: ProductId,
    pub name: String,
    /// Final (sale) price in minor units
    pub price: i64,
    pub stock: u32,
    pub icon: String,
    pub image: Option<String>,
}

impl CatalogProduct {
    pub fn new(id: u64, name: impl Into<String>, price: i64, stock: u32) -> Self {
        Self {
            id: ProductId(id),
            name: name.into(),
            price,
            stock,
            icon: "fas fa-box".to_string(),
            image: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image = Some(url.into());
        self
    }
}

/// A call received by [`MemoryCartApi`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiRequest {
    FetchCart,
    Add(ProductId),
    Remove(LineId),
    Update(LineId, u32),
}

#[derive(Debug)]
struct StoredLine {
    id: LineId,
    product: ProductId,
    quantity: u32,
    price: i64,
}

#[derive(Debug, Default)]
struct Store {
    catalog: BTreeMap<ProductId, CatalogProduct>,
    lines: Vec<StoredLine>,
    next_line: u64,
    requests: Vec<ApiRequest>,
    offline: bool,
}

impl Store {
    fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    fn total(&self) -> i64 {
        self.lines
            .iter()
            .map(|line| line.price * i64::from(line.quantity))
            .sum()
    }

    fn count(&self) -> CartCount {
        let total = self.total();
        CartCount {
            item_count: self.item_count(),
            total: Some(total),
            formatted_total: Some(format_server_total(total)),
        }
    }

    fn snapshot(&self) -> CartState {
        if self.lines.is_empty() {
            return CartState::empty();
        }

        let items = self
            .lines
            .iter()
            .filter_map(|line| {
                let product = self.catalog.get(&line.product)?;
                let subtotal = line.price * i64::from(line.quantity);
                Some(CartLine {
                    id: line.id,
                    product_id: Some(product.id),
                    product_name: product.name.clone(),
                    product_image: product.image.clone(),
                    product_icon: Some(product.icon.clone()),
                    price: line.price,
                    quantity: line.quantity,
                    subtotal: Some(subtotal),
                    formatted_subtotal: Some(format_server_total(subtotal)),
                })
            })
            .collect();

        let total = self.total();
        CartState {
            item_count: self.item_count(),
            items,
            formatted_total: format_server_total(total),
            total: Some(total),
        }
    }

    fn product_name(&self, product: ProductId) -> String {
        self.catalog
            .get(&product)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| format!("Product {}", product))
    }

    fn line_index(&self, line: LineId) -> StorefrontResult<usize> {
        self.lines
            .iter()
            .position(|stored| stored.id == line)
            .ok_or_else(|| rejected(format!("Cart line {} not found", line)))
    }

    fn outcome(&self, message: String) -> MutationOutcome {
        MutationOutcome {
            message: Some(message),
            cart: self.count(),
        }
    }

    fn check_online(&mut self, request: ApiRequest) -> StorefrontResult<()> {
        self.requests.push(request);
        if self.offline {
            return Err(StorefrontError::Transport("server unreachable".to_string()));
        }
        Ok(())
    }
}

fn rejected(message: impl Into<String>) -> StorefrontError {
    StorefrontError::Rejected {
        message: Some(message.into()),
    }
}

/// [`CartApi`] over an in-memory catalog and session cart
#[derive(Debug, Default)]
pub struct MemoryCartApi {
    store: Mutex<Store>,
}

impl MemoryCartApi {
    pub fn new(catalog: impl IntoIterator<Item = CatalogProduct>) -> Self {
        let store = Store {
            catalog: catalog.into_iter().map(|p| (p.id, p)).collect(),
            next_line: 1,
            ..Store::default()
        };
        Self {
            store: Mutex::new(store),
        }
    }

    /// A small catalog for offline demos
    pub fn demo() -> Self {
        Self::new([
            CatalogProduct::new(1, "Managed Wi-Fi Router", 189_900, 12).with_icon("fas fa-wifi"),
            CatalogProduct::new(2, "1TB NVMe SSD", 329_000, 5).with_icon("fas fa-hdd"),
            CatalogProduct::new(3, "Mechanical Keyboard", 149_500, 8).with_icon("fas fa-keyboard"),
            CatalogProduct::new(4, "Cat6 Patch Cable", 12_000, 40).with_icon("fas fa-network-wired"),
            CatalogProduct::new(5, "Remote Support Hour", 85_000, 0).with_icon("fas fa-headset"),
        ])
    }

    pub fn catalog(&self) -> Vec<CatalogProduct> {
        self.store.lock().catalog.values().cloned().collect()
    }

    /// Put a line straight into the cart without recording a request
    pub fn seed_line(&self, product: ProductId, quantity: u32) -> LineId {
        let mut store = self.store.lock();
        let price = store.catalog.get(&product).map(|p| p.price).unwrap_or(0);
        let id = LineId(store.next_line);
        store.next_line += 1;
        store.lines.push(StoredLine {
            id,
            product,
            quantity,
            price,
        });
        id
    }

    /// Make every call fail as if the network were down
    pub fn set_offline(&self, offline: bool) {
        self.store.lock().offline = offline;
    }

    /// Current server-side state, without recording a request
    pub fn state(&self) -> CartState {
        self.store.lock().snapshot()
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.store.lock().requests.clone()
    }

    pub fn clear_requests(&self) {
        self.store.lock().requests.clear();
    }
}

#[async_trait]
impl CartApi for MemoryCartApi {
    async fn fetch_cart(&self) -> StorefrontResult<CartState> {
        let mut store = self.store.lock();
        store.check_online(ApiRequest::FetchCart)?;
        Ok(store.snapshot())
    }

    async fn add_item(&self, product: ProductId) -> StorefrontResult<MutationOutcome> {
        let mut store = self.store.lock();
        store.check_online(ApiRequest::Add(product))?;

        let entry = store
            .catalog
            .get(&product)
            .cloned()
            .ok_or_else(|| rejected(format!("Product {} not found", product)))?;

        if entry.stock == 0 {
            return Err(rejected("Product out of stock"));
        }

        match store.lines.iter().position(|line| line.product == product) {
            Some(index) => {
                if store.lines[index].quantity >= entry.stock {
                    return Err(rejected(format!(
                        "Max stock reached ({} units)",
                        entry.stock
                    )));
                }
                store.lines[index].quantity += 1;
            }
            None => {
                let id = LineId(store.next_line);
                store.next_line += 1;
                store.lines.push(StoredLine {
                    id,
                    product,
                    quantity: 1,
                    price: entry.price,
                });
            }
        }

        Ok(store.outcome(format!("{} added to cart", entry.name)))
    }

    async fn remove_line(&self, line: LineId) -> StorefrontResult<MutationOutcome> {
        let mut store = self.store.lock();
        store.check_online(ApiRequest::Remove(line))?;

        let index = store.line_index(line)?;
        let removed = store.lines.remove(index);
        let name = store.product_name(removed.product);
        Ok(store.outcome(format!("{} removed from cart", name)))
    }

    async fn update_line(&self, line: LineId, quantity: u32) -> StorefrontResult<MutationOutcome> {
        let mut store = self.store.lock();
        store.check_online(ApiRequest::Update(line, quantity))?;

        let index = store.line_index(line)?;
        if quantity == 0 {
            let removed = store.lines.remove(index);
            let name = store.product_name(removed.product);
            return Ok(store.outcome(format!("{} removed from cart", name)));
        }

        let product = store.lines[index].product;
        let stock = store.catalog.get(&product).map(|p| p.stock).unwrap_or(0);
        if quantity > stock {
            return Err(rejected(format!("Max stock: {} units", stock)));
        }

        store.lines[index].quantity = quantity;
        Ok(store.outcome("Quantity updated".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api() -> MemoryCartApi {
        MemoryCartApi::new([
            CatalogProduct::new(1, "Router", 10_000, 2),
            CatalogProduct::new(2, "Cable", 5_000, 0),
        ])
    }

    #[tokio::test]
    async fn test_add_creates_then_increments() {
        let api = api();
        let first = api.add_item(ProductId(1)).await.unwrap();
        assert_eq!(first.cart.item_count, 1);
        assert_eq!(first.message.as_deref(), Some("Router added to cart"));

        let second = api.add_item(ProductId(1)).await.unwrap();
        assert_eq!(second.cart.item_count, 2);
        assert_eq!(second.cart.formatted_total.as_deref(), Some("$20,000"));
        assert_eq!(api.state().items.len(), 1);
    }

    #[tokio::test]
    async fn test_add_respects_stock() {
        let api = api();
        let err = api.add_item(ProductId(2)).await.unwrap_err();
        assert_eq!(err.user_message(""), "Product out of stock");

        api.add_item(ProductId(1)).await.unwrap();
        api.add_item(ProductId(1)).await.unwrap();
        let err = api.add_item(ProductId(1)).await.unwrap_err();
        assert_eq!(err.user_message(""), "Max stock reached (2 units)");
    }

    #[tokio::test]
    async fn test_update_and_remove() {
        let api = api();
        let line = api.seed_line(ProductId(1), 1);

        let updated = api.update_line(line, 2).await.unwrap();
        assert_eq!(updated.cart.item_count, 2);

        let err = api.update_line(line, 3).await.unwrap_err();
        assert_eq!(err.user_message(""), "Max stock: 2 units");

        let removed = api.remove_line(line).await.unwrap();
        assert_eq!(removed.cart.item_count, 0);
        assert_eq!(removed.message.as_deref(), Some("Router removed from cart"));
        assert!(api.state().is_empty());
    }

    #[tokio::test]
    async fn test_update_to_zero_deletes() {
        let api = api();
        let line = api.seed_line(ProductId(1), 2);
        let outcome = api.update_line(line, 0).await.unwrap();
        assert_eq!(outcome.cart.item_count, 0);
    }

    #[tokio::test]
    async fn test_unknown_line_rejected() {
        let api = api();
        let err = api.remove_line(LineId(99)).await.unwrap_err();
        assert!(matches!(err, StorefrontError::Rejected { .. }));
    }

    #[tokio::test]
    async fn test_offline_records_and_fails() {
        let api = api();
        api.set_offline(true);
        let err = api.fetch_cart().await.unwrap_err();
        assert!(matches!(err, StorefrontError::Transport(_)));
        assert_eq!(api.requests(), vec![ApiRequest::FetchCart]);
    }

    #[test]
    fn test_seed_does_not_record() {
        let api = api();
        api.seed_line(ProductId(1), 1);
        assert!(api.requests().is_empty());
        assert_eq!(api.state().formatted_total, "$10,000");
    }
}
