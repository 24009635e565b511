//! Accounting aggregation: a pure view over the catalog and order history.
//!
//! The aggregation is recomputed fully on every call instead of being cached
//! incrementally. Either input may have changed since the last call, the
//! dataset is small, and a full recomputation can never drift from the true
//! state. Summation is commutative, so the result is independent of order
//! creation sequence.

use std::collections::HashMap;

use lychee_market_core::{AccountingReport, AccountingRow, GrandTotals, Order, Product, ProductId};
use rust_decimal::Decimal;

/// Per-product sales tally collected from order items.
#[derive(Default)]
struct Tally {
    sold: u64,
    revenue: Decimal,
}

/// Compute one [`AccountingRow`] per current product, in catalog order.
///
/// Items of any order status count: the sales ledger is authoritative from
/// the moment an order is created. Orders referencing products no longer in
/// the catalog keep their line items, but contribute no row here - the row
/// list is keyed to *current* products.
#[must_use]
pub fn accounting_rows(products: &[Product], orders: &[Order]) -> Vec<AccountingRow> {
    let mut tallies: HashMap<&ProductId, Tally> = HashMap::new();
    for order in orders {
        for item in &order.items {
            let tally = tallies.entry(&item.product_id).or_default();
            tally.sold += u64::from(item.quantity);
            tally.revenue += item.line_total();
        }
    }

    products
        .iter()
        .map(|product| {
            let tally = tallies.remove(&product.id).unwrap_or_default();
            let total_cost = product.cost * Decimal::from(tally.sold);
            AccountingRow {
                product_id: product.id.clone(),
                product_name: product.name.clone(),
                total_sold: tally.sold,
                total_revenue: tally.revenue,
                total_cost,
                profit: tally.revenue - total_cost,
                converted_price: product.converted_price(),
            }
        })
        .collect()
}

/// Sum revenue and profit across all rows for dashboard display.
#[must_use]
pub fn grand_totals(rows: &[AccountingRow]) -> GrandTotals {
    rows.iter().fold(GrandTotals::default(), |acc, row| {
        GrandTotals {
            revenue: acc.revenue + row.total_revenue,
            profit: acc.profit + row.profit,
        }
    })
}

/// Bundle rows and grand totals into one report.
#[must_use]
pub fn accounting_report(products: &[Product], orders: &[Order]) -> AccountingReport {
    let rows = accounting_rows(products, orders);
    let totals = grand_totals(&rows);
    AccountingReport { rows, totals }
}
