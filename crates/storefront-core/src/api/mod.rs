//! Cart API abstraction
//!
//! The storefront server owns the cart. [`CartApi`] is the seam the
//! controller talks through; [`HttpCartApi`] speaks to the real server and
//! [`MemoryCartApi`] applies the same rules in-process.
//!
//! ## Wire shape
//!
//! ```text
//! GET  {prefix}/                  -> { success, cart: CartState }
//! POST {prefix}/add/{product}/    -> { success, message, cart: { item_count, .. } }
//! POST {prefix}/remove/{line}/    -> same
//! POST {prefix}/update/{line}/    -> same   (form body: quantity=N)
//! failure                         -> { success: false, message }
//! ```

mod auth;
mod http;
mod memory;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{StorefrontError, StorefrontResult};
use crate::types::{CartState, LineId, MutationOutcome, ProductId};

pub use auth::{read_cookie, AuthHeader, CsrfCookieAuthorizer, NoAuthorizer, RequestAuthorizer};
pub use http::HttpCartApi;
pub use memory::{ApiRequest, CatalogProduct, MemoryCartApi};

/// Operations the storefront server exposes for the session cart
#[async_trait]
pub trait CartApi: Send + Sync {
    /// Fetch the full authoritative cart
    async fn fetch_cart(&self) -> StorefrontResult<CartState>;

    /// Add one unit of a product
    async fn add_item(&self, product: ProductId) -> StorefrontResult<MutationOutcome>;

    /// Delete a cart line
    async fn remove_line(&self, line: LineId) -> StorefrontResult<MutationOutcome>;

    /// Set the quantity of a cart line
    async fn update_line(&self, line: LineId, quantity: u32) -> StorefrontResult<MutationOutcome>;
}

/// JSON envelope shared by every cart endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cart: Option<T>,
}

impl<T> ApiEnvelope<T> {
    pub fn ok(message: Option<String>, cart: T) -> Self {
        Self {
            success: true,
            message,
            cart: Some(cart),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            cart: None,
        }
    }

    /// Split into the server message and payload, turning `success: false`
    /// into [`StorefrontError::Rejected`].
    pub fn into_result(self) -> StorefrontResult<(Option<String>, T)> {
        if !self.success {
            return Err(StorefrontError::Rejected {
                message: self.message,
            });
        }
        match self.cart {
            Some(cart) => Ok((self.message, cart)),
            None => Err(StorefrontError::MalformedResponse(
                "success response without cart".to_string(),
            )),
        }
    }
}

/// Decode a response body regardless of HTTP status.
///
/// The server answers rejections with 4xx/5xx and a JSON body, so the status
/// only matters when the body is not the envelope at all.
pub fn decode_envelope<T: DeserializeOwned>(
    status: u16,
    body: &[u8],
) -> StorefrontResult<(Option<String>, T)> {
    let envelope: ApiEnvelope<T> = serde_json::from_slice(body).map_err(|e| {
        StorefrontError::MalformedResponse(format!("status {}: {}", status, e))
    })?;
    envelope.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CartCount;

    #[test]
    fn test_decode_success() {
        let body = br#"{"success": true, "message": "Router added to cart", "cart": {"item_count": 2, "total": 20000.0, "formatted_total": "$20,000"}}"#;
        let (message, cart): (_, CartCount) = decode_envelope(200, body).unwrap();
        assert_eq!(message.as_deref(), Some("Router added to cart"));
        assert_eq!(cart.item_count, 2);
    }

    #[test]
    fn test_decode_rejection_keeps_message() {
        let body = br#"{"success": false, "message": "Product out of stock"}"#;
        let err = decode_envelope::<CartCount>(400, body).unwrap_err();
        match err {
            StorefrontError::Rejected { message } => {
                assert_eq!(message.as_deref(), Some("Product out of stock"))
            }
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_html_error_page() {
        let err = decode_envelope::<CartCount>(403, b"<html>CSRF verification failed</html>")
            .unwrap_err();
        match err {
            StorefrontError::MalformedResponse(detail) => assert!(detail.starts_with("status 403")),
            other => panic!("expected malformed, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_full_cart_and_rejection_without_cart() {
        let body = br#"{"success": true, "cart": {"item_count": 1, "items": [], "formatted_total": "$0"}}"#;
        let (message, cart): (_, CartState) = decode_envelope(200, body).unwrap();
        assert!(message.is_none());
        assert_eq!(cart.item_count, 1);

        let err = decode_envelope::<CartState>(500, br#"{"success": false}"#).unwrap_err();
        assert!(matches!(err, StorefrontError::Rejected { message: None }));
    }

    #[test]
    fn test_decode_success_without_cart() {
        let err = decode_envelope::<CartCount>(200, br#"{"success": true}"#).unwrap_err();
        assert!(matches!(err, StorefrontError::MalformedResponse(_)));
    }
}
