//! Catalog product.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// A product in the catalog.
///
/// Monetary fields use [`Decimal`]; `local_price` is in the source-country
/// currency, everything else in the store currency. `stock` is signed because
/// the engine deliberately allows overselling (accepting an order beats
/// rejecting it over a stock discrepancy), so the level may go negative until
/// the operator reconciles it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Stable unique id, assigned by the catalog operator at creation.
    pub id: ProductId,
    pub name: String,
    /// Image reference (URL or data URI).
    pub image: String,
    /// Ordered option labels (e.g. colors, flavors).
    pub options: Vec<String>,
    /// Country of origin.
    pub country: String,
    /// Source purchase URL.
    pub purchase_url: String,
    /// Unit price in the source currency.
    pub local_price: Decimal,
    /// Source-currency to store-currency multiplier.
    pub exchange_rate: Decimal,
    /// Fully-loaded unit cost: converted price + materials + packaging.
    pub cost: Decimal,
    /// Unit selling price.
    pub price: Decimal,
    /// Remaining sellable units. May go negative when oversold.
    pub stock: i64,
    /// Cumulative units sold. Only ever increases.
    pub sold: u64,
    /// Free-text operator notes.
    #[serde(default)]
    pub notes: String,
}

impl Product {
    /// Converted unit price: `local_price * exchange_rate`.
    ///
    /// Derived display value, never stored.
    #[must_use]
    pub fn converted_price(&self) -> Decimal {
        self.local_price * self.exchange_rate
    }
}
