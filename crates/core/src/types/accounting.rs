//! Derived accounting aggregates.
//!
//! These types are computed on demand from the catalog and the full order
//! history; they are never stored.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// Per-product profit/loss row.
///
/// Aggregated over all orders of any status, so a pending order already
/// counts toward revenue (the sales ledger is authoritative).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountingRow {
    pub product_id: ProductId,
    pub product_name: String,
    /// Sum of order-item quantities for this product.
    pub total_sold: u64,
    /// Sum of `price * quantity` across order items.
    pub total_revenue: Decimal,
    /// `product.cost * total_sold`.
    pub total_cost: Decimal,
    /// `total_revenue - total_cost`.
    pub profit: Decimal,
    /// Converted unit price (`local_price * exchange_rate`), for display.
    pub converted_price: Decimal,
}

/// Dashboard grand totals across all accounting rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GrandTotals {
    pub revenue: Decimal,
    pub profit: Decimal,
}

/// One full recomputation of the accounting view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountingReport {
    /// One row per current product, in catalog order.
    pub rows: Vec<AccountingRow>,
    pub totals: GrandTotals,
}
