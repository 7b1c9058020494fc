//! Core types for the storefront cart
//!
//! These mirror the JSON the cart API returns. Prices travel as JSON numbers
//! (the server sends them as floats) and are held as whole minor units.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::StorefrontError;
use crate::money;

macro_rules! id_newtype {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            /// Get the raw server id
            pub fn get(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = StorefrontError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim()
                    .parse::<u64>()
                    .map($name)
                    .map_err(|_| StorefrontError::InvalidId(format!("{} {:?}", $label, s)))
            }
        }
    };
}

id_newtype!(
    /// Server id of a catalog product (the `data-product-id` of add buttons)
    ProductId,
    "product"
);

id_newtype!(
    /// Server id of one line in the cart
    LineId,
    "cart line"
);

/// A single line of the cart as returned by `GET /cart/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: LineId,
    #[serde(default)]
    pub product_id: Option<ProductId>,
    pub product_name: String,
    /// Image URL; when absent the icon token is shown instead
    #[serde(default)]
    pub product_image: Option<String>,
    #[serde(default)]
    pub product_icon: Option<String>,
    /// Unit price in minor units
    #[serde(deserialize_with = "minor_units")]
    pub price: i64,
    pub quantity: u32,
    #[serde(default, deserialize_with = "opt_minor_units")]
    pub subtotal: Option<i64>,
    #[serde(default)]
    pub formatted_subtotal: Option<String>,
}

impl CartLine {
    /// Line subtotal, preferring the server's figure
    pub fn line_total(&self) -> i64 {
        self.subtotal
            .unwrap_or_else(|| self.price * i64::from(self.quantity))
    }
}

/// Authoritative cart state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartState {
    pub item_count: u32,
    #[serde(default)]
    pub items: Vec<CartLine>,
    #[serde(default = "empty_total")]
    pub formatted_total: String,
    #[serde(default, deserialize_with = "opt_minor_units")]
    pub total: Option<i64>,
}

impl CartState {
    /// The state the server reports for a session without a cart
    pub fn empty() -> Self {
        Self {
            item_count: 0,
            items: Vec::new(),
            formatted_total: empty_total(),
            total: Some(0),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    pub fn line(&self, id: LineId) -> Option<&CartLine> {
        self.items.iter().find(|line| line.id == id)
    }

    /// Cart total in minor units, summing lines if the server left it out
    pub fn total_minor(&self) -> i64 {
        self.total
            .unwrap_or_else(|| self.items.iter().map(CartLine::line_total).sum())
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::empty()
    }
}

/// The reduced cart embedded in mutation responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartCount {
    pub item_count: u32,
    #[serde(default, deserialize_with = "opt_minor_units")]
    pub total: Option<i64>,
    #[serde(default)]
    pub formatted_total: Option<String>,
}

impl From<&CartState> for CartCount {
    fn from(state: &CartState) -> Self {
        Self {
            item_count: state.item_count,
            total: Some(state.total_minor()),
            formatted_total: Some(state.formatted_total.clone()),
        }
    }
}

/// Result of a successful add/remove/update call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationOutcome {
    /// Server message, e.g. "Keyboard added to cart"
    pub message: Option<String>,
    pub cart: CartCount,
}

/// VAT rate applied on the cart detail page, in percent
pub const VAT_PERCENT: i64 = 19;

/// Subtotal / VAT / total breakdown of a cart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    pub item_count: u32,
    pub subtotal: i64,
    pub tax: i64,
    pub total: i64,
}

impl OrderSummary {
    pub fn from_state(state: &CartState) -> Self {
        let subtotal = state.total_minor();
        // Round half up to whole minor units
        let tax = (subtotal * VAT_PERCENT + 50).div_euclid(100);
        Self {
            item_count: state.item_count,
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }
}

impl fmt::Display for OrderSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Items:    {}", self.item_count)?;
        writeln!(f, "Subtotal: {}", money::format_price(self.subtotal))?;
        writeln!(f, "IVA 19%:  {}", money::format_price(self.tax))?;
        write!(f, "Total:    {}", money::format_price(self.total))
    }
}

fn empty_total() -> String {
    "$0".to_string()
}

fn number_to_minor<E: serde::de::Error>(number: serde_json::Number) -> Result<i64, E> {
    if let Some(value) = number.as_i64() {
        return Ok(value);
    }
    match number.as_f64() {
        Some(value) if value.is_finite() && value.abs() < i64::MAX as f64 => {
            Ok(value.round() as i64)
        }
        _ => Err(E::custom(format!("amount out of range: {}", number))),
    }
}

fn minor_units<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    number_to_minor(serde_json::Number::deserialize(deserializer)?)
}

fn opt_minor_units<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Number>::deserialize(deserializer)? {
        Some(number) => number_to_minor(number).map(Some),
        None => Ok(None),
    }
}
