//! The store engine: one aggregate root over catalog, orders and members.
//!
//! All mutating operations serialize behind a single write lock, so two
//! concurrent checkouts against the same product cannot lose an inventory
//! update. Reads take the read lock and clone a snapshot, so a listing or an
//! accounting recomputation never observes an order mid-mutation.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use lychee_market_core::{
    AccountingReport, CustomerInfo, Member, Order, OrderId, OrderStatus, Phone, Product, ProductId,
    ShippingInfo,
};
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::accounting;
use crate::cart::Cart;
use crate::catalog::CatalogStore;
use crate::error::{EngineError, Result};
use crate::members::MemberDirectory;
use crate::orders::OrderBook;

#[derive(Debug, Default)]
struct StoreState {
    catalog: CatalogStore,
    orders: OrderBook,
    members: MemberDirectory,
}

/// The single logical owner of all shop state.
///
/// Cheaply cloneable; clones share the same underlying state.
#[derive(Debug, Clone, Default)]
pub struct StoreEngine {
    inner: Arc<RwLock<StoreState>>,
}

impl StoreEngine {
    /// Create an engine with an empty catalog, no orders and no members.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine owning the given catalog.
    #[must_use]
    pub fn with_catalog(catalog: CatalogStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(StoreState {
                catalog,
                orders: OrderBook::new(),
                members: MemberDirectory::new(),
            })),
        }
    }

    // =========================================================================
    // Catalog commands and queries
    // =========================================================================

    /// Insert a product with a caller-supplied unique id.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DuplicateProduct`] if the id is taken.
    pub fn add_product(&self, product: Product) -> Result<()> {
        self.write().catalog.add(product)
    }

    /// Replace a product in place, preserving its stock/sold counters.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ProductNotFound`] if the id is absent.
    pub fn update_product(&self, product: Product) -> Result<()> {
        self.write().catalog.update(product)
    }

    /// Replace a product in place, counters included.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ProductNotFound`] if the id is absent.
    pub fn update_product_with_counters(&self, product: Product) -> Result<()> {
        self.write().catalog.update_with_counters(product)
    }

    /// Remove a product. Silent no-op if absent.
    pub fn delete_product(&self, id: &ProductId) {
        self.write().catalog.delete(id);
    }

    /// Atomically apply stock and sold deltas to one product.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ProductNotFound`] if the id is absent.
    pub fn adjust_inventory(
        &self,
        id: &ProductId,
        delta_stock: i64,
        delta_sold: u64,
    ) -> Result<i64> {
        let stock = self.write().catalog.adjust_inventory(id, delta_stock, delta_sold)?;
        if stock < 0 {
            warn!(product_id = %id, stock, "inventory oversold");
        }
        Ok(stock)
    }

    /// Snapshot of all products in catalog order.
    #[must_use]
    pub fn products(&self) -> Vec<Product> {
        self.read().catalog.products().to_vec()
    }

    /// Snapshot of one product.
    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<Product> {
        self.read().catalog.get(id).cloned()
    }

    // =========================================================================
    // Order lifecycle
    // =========================================================================

    /// Create an order from the cart's current lines.
    ///
    /// The cart is drained on success (the session's selection becomes the
    /// order's immutable item snapshots). Placing the order and adjusting
    /// inventory happen under one write lock: per distinct product, stock
    /// drops and sold grows by the ordered quantity.
    ///
    /// Inventory is best-effort while the sales ledger is authoritative: a
    /// product deleted between cart-add and checkout skips its inventory
    /// delta with a warning, and stock going negative is logged as oversell
    /// rather than blocking the order. Rejecting a paid-for order is worse
    /// than a stock discrepancy requiring manual reconciliation.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EmptyOrder`] if the cart has no lines; the
    /// cart is left untouched in that case.
    pub fn create_order(
        &self,
        cart: &mut Cart,
        discount: Decimal,
        customer: CustomerInfo,
        shipping: ShippingInfo,
    ) -> Result<Order> {
        if cart.is_empty() {
            return Err(EngineError::EmptyOrder);
        }
        let lines = cart.take_lines();

        let mut state = self.write();
        let order = state
            .orders
            .place(lines, discount, customer, shipping, Utc::now())
            .clone();

        // One adjustment per distinct product: lines differing only by
        // option collapse into a single delta.
        let mut quantities: HashMap<ProductId, u64> = HashMap::new();
        for item in &order.items {
            *quantities.entry(item.product_id.clone()).or_default() += u64::from(item.quantity);
        }

        for (product_id, quantity) in quantities {
            let delta_stock = -i64::try_from(quantity).unwrap_or(i64::MAX);
            match state
                .catalog
                .adjust_inventory(&product_id, delta_stock, quantity)
            {
                Ok(stock) if stock < 0 => {
                    warn!(
                        order_id = %order.id,
                        product_id = %product_id,
                        stock,
                        "order accepted with insufficient stock (oversold)"
                    );
                }
                Ok(_) => {}
                Err(_) => {
                    warn!(
                        order_id = %order.id,
                        product_id = %product_id,
                        "product missing from catalog, skipping inventory adjustment"
                    );
                }
            }
        }

        info!(
            order_id = %order.id,
            items = order.items.len(),
            final_amount = %order.final_amount,
            "order created"
        );
        Ok(order)
    }

    /// Operator action: reconcile a reported remittance.
    ///
    /// Transitions `pending_check` to `paid`; anything else (including an
    /// unknown id) is a tolerated no-op. Returns whether the transition
    /// applied.
    pub fn verify_payment(&self, id: &OrderId) -> bool {
        let applied = self.write().orders.verify_payment(id);
        if applied {
            info!(order_id = %id, "payment verified");
        }
        applied
    }

    /// Operator action: hand the order to the carrier.
    ///
    /// Transitions `paid` to `shipped` and stamps the shipping time; no-op
    /// from any other state. Returns whether the transition applied.
    pub fn mark_shipped(&self, id: &OrderId) -> bool {
        let applied = self.write().orders.mark_shipped(id, Utc::now());
        if applied {
            info!(order_id = %id, "order shipped");
        }
        applied
    }

    /// Snapshot of all orders, newest first.
    #[must_use]
    pub fn orders(&self) -> Vec<Order> {
        self.read().orders.orders().to_vec()
    }

    /// Snapshot of one order.
    #[must_use]
    pub fn order(&self, id: &OrderId) -> Option<Order> {
        self.read().orders.get(id).cloned()
    }

    /// Orders with the given status, newest first.
    #[must_use]
    pub fn orders_by_status(&self, status: OrderStatus) -> Vec<Order> {
        self.read().orders.by_status(status)
    }

    /// A member's order history: orders with this shipping phone, newest
    /// first.
    #[must_use]
    pub fn orders_for(&self, phone: &Phone) -> Vec<Order> {
        self.read().orders.orders_for(phone)
    }

    // =========================================================================
    // Accounting
    // =========================================================================

    /// Recompute the accounting view from the current catalog and the full
    /// order history.
    ///
    /// Pull-based by design: the caller invokes this whenever it needs fresh
    /// rows, and both inputs are read under one lock so the report is a
    /// consistent snapshot.
    #[must_use]
    pub fn accounting_report(&self) -> AccountingReport {
        let state = self.read();
        accounting::accounting_report(state.catalog.products(), state.orders.orders())
    }

    // =========================================================================
    // Membership
    // =========================================================================

    /// Register a member unless the phone is already taken (first
    /// registration wins). Returns whether a new member was inserted.
    pub fn register_member(
        &self,
        name: impl Into<String>,
        phone: Phone,
        external_id: Option<String>,
    ) -> bool {
        self.write()
            .members
            .register(name, phone, external_id, Utc::now())
    }

    /// Exact-match member lookup by phone.
    #[must_use]
    pub fn member_by_phone(&self, phone: &Phone) -> Option<Member> {
        self.read().members.find_by_phone(phone).cloned()
    }

    /// Exact-match member lookup by linked external identity.
    #[must_use]
    pub fn member_by_external_id(&self, id: &str) -> Option<Member> {
        self.read().members.find_by_external_id(id).cloned()
    }

    // A poisoned lock means a panic mid-mutation elsewhere; the state itself
    // is still the last consistent value written, so recover the guard.
    fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::seed::sample_catalog;

    use super::*;

    fn customer() -> CustomerInfo {
        CustomerInfo {
            name: "Amy".to_owned(),
            payment_time: "2026-08-25 10:00".to_owned(),
            payment_last5: "12345".to_owned(),
        }
    }

    fn shipping(phone: &str) -> ShippingInfo {
        ShippingInfo {
            recipient: "Amy".to_owned(),
            phone: Phone::parse(phone).unwrap(),
            pickup_store: "Downtown".to_owned(),
        }
    }

    fn engine() -> StoreEngine {
        StoreEngine::with_catalog(sample_catalog())
    }

    #[test]
    fn test_create_order_adjusts_inventory_and_ledger() {
        let engine = engine();
        let mask_id = ProductId::new("1");
        let mask = engine.product(&mask_id).unwrap();

        let mut cart = Cart::new();
        cart.add_line(&mask, "白色", 3).unwrap();

        let order = engine
            .create_order(
                &mut cart,
                Decimal::from(20),
                customer(),
                shipping("0912345678"),
            )
            .unwrap();

        assert_eq!(order.status, OrderStatus::PendingCheck);
        assert_eq!(order.subtotal, Decimal::from(75));
        assert_eq!(order.final_amount, Decimal::from(55));
        assert!(cart.is_empty());

        let mask = engine.product(&mask_id).unwrap();
        assert_eq!(mask.stock, 97);
        assert_eq!(mask.sold, 253);
    }

    #[test]
    fn test_create_order_collapses_options_per_product() {
        let engine = engine();
        let mask_id = ProductId::new("1");
        let mask = engine.product(&mask_id).unwrap();

        let mut cart = Cart::new();
        cart.add_line(&mask, "白色", 2).unwrap();
        cart.add_line(&mask, "黑色", 1).unwrap();

        engine
            .create_order(
                &mut cart,
                Decimal::from(20),
                customer(),
                shipping("0912345678"),
            )
            .unwrap();

        let mask = engine.product(&mask_id).unwrap();
        assert_eq!(mask.stock, 97);
        assert_eq!(mask.sold, 253);
    }

    #[test]
    fn test_create_order_empty_cart_rejected() {
        let engine = engine();
        let mut cart = Cart::new();
        let err = engine
            .create_order(
                &mut cart,
                Decimal::from(20),
                customer(),
                shipping("0912345678"),
            )
            .unwrap_err();
        assert_eq!(err, EngineError::EmptyOrder);
        assert!(engine.orders().is_empty());
    }

    #[test]
    fn test_create_order_with_deleted_product_keeps_ledger() {
        let engine = engine();
        let mask_id = ProductId::new("1");
        let mask = engine.product(&mask_id).unwrap();

        let mut cart = Cart::new();
        cart.add_line(&mask, "白色", 2).unwrap();

        // Product disappears between cart-add and checkout.
        engine.delete_product(&mask_id);

        let order = engine
            .create_order(
                &mut cart,
                Decimal::from(20),
                customer(),
                shipping("0912345678"),
            )
            .unwrap();

        // The sale is recorded even though no inventory could be adjusted.
        assert_eq!(order.items.len(), 1);
        assert_eq!(engine.orders().len(), 1);
        assert!(engine.product(&mask_id).is_none());
    }

    #[test]
    fn test_oversell_allowed() {
        let engine = engine();
        let eye_mask_id = ProductId::new("2"); // stock 45
        let eye_mask = engine.product(&eye_mask_id).unwrap();

        let mut cart = Cart::new();
        cart.add_line(&eye_mask, "無香", 50).unwrap();

        engine
            .create_order(
                &mut cart,
                Decimal::from(20),
                customer(),
                shipping("0912345678"),
            )
            .unwrap();

        let eye_mask = engine.product(&eye_mask_id).unwrap();
        assert_eq!(eye_mask.stock, -5);
        assert_eq!(eye_mask.sold, 130);
    }

    #[test]
    fn test_lifecycle_through_engine() {
        let engine = engine();
        let mask = engine.product(&ProductId::new("1")).unwrap();
        let mut cart = Cart::new();
        cart.add_line(&mask, "白色", 1).unwrap();

        let order = engine
            .create_order(
                &mut cart,
                Decimal::from(20),
                customer(),
                shipping("0912345678"),
            )
            .unwrap();

        // Shipping before payment verification is ignored.
        assert!(!engine.mark_shipped(&order.id));
        assert_eq!(
            engine.order(&order.id).unwrap().status,
            OrderStatus::PendingCheck
        );

        assert!(engine.verify_payment(&order.id));
        assert!(engine.mark_shipped(&order.id));

        let shipped = engine.order(&order.id).unwrap();
        assert_eq!(shipped.status, OrderStatus::Shipped);
        assert!(shipped.shipped_at.is_some());
    }

    #[test]
    fn test_accounting_report_reflects_new_orders() {
        let engine = engine();
        let mask = engine.product(&ProductId::new("1")).unwrap();

        let before = engine.accounting_report();
        assert_eq!(before.rows.len(), 3);
        assert_eq!(before.totals.revenue, Decimal::ZERO);

        let mut cart = Cart::new();
        cart.add_line(&mask, "白色", 3).unwrap();
        engine
            .create_order(
                &mut cart,
                Decimal::from(20),
                customer(),
                shipping("0912345678"),
            )
            .unwrap();

        let after = engine.accounting_report();
        let mask_row = &after.rows[0];
        assert_eq!(mask_row.total_sold, 3);
        assert_eq!(mask_row.total_revenue, Decimal::from(75));
        // profit = 75 - 17 * 3
        assert_eq!(mask_row.profit, Decimal::from(24));
        assert_eq!(after.totals.revenue, Decimal::from(75));
    }

    #[test]
    fn test_accounting_report_serializes_for_dashboard() {
        let engine = engine();
        let mask = engine.product(&ProductId::new("1")).unwrap();

        let mut cart = Cart::new();
        cart.add_line(&mask, "白色", 3).unwrap();
        engine
            .create_order(
                &mut cart,
                Decimal::from(20),
                customer(),
                shipping("0912345678"),
            )
            .unwrap();

        let json = serde_json::to_value(engine.accounting_report()).unwrap();
        let mask_row = &json["rows"][0];
        assert_eq!(mask_row["product_id"], "1");
        assert_eq!(mask_row["total_sold"], 3);
        assert_eq!(mask_row["total_revenue"], "75");
        assert_eq!(mask_row["profit"], "24");
        assert_eq!(json["totals"]["revenue"], "75");
    }

    #[test]
    fn test_member_registration_first_wins() {
        let engine = engine();
        let phone = Phone::parse("0912345678").unwrap();

        assert!(engine.register_member("Amy", phone.clone(), None));
        assert!(!engine.register_member("Amy2", phone.clone(), None));

        let member = engine.member_by_phone(&phone).unwrap();
        assert_eq!(member.name, "Amy");
    }

    #[test]
    fn test_member_external_id_lookup() {
        let engine = engine();
        let phone = Phone::parse("0912345678").unwrap();
        engine.register_member("Amy", phone, Some("LINE_42".to_owned()));

        assert_eq!(
            engine.member_by_external_id("LINE_42").unwrap().name,
            "Amy"
        );
        assert!(engine.member_by_external_id("LINE_404").is_none());
    }

    #[test]
    fn test_clones_share_state() {
        let engine = engine();
        let view = engine.clone();

        engine
            .adjust_inventory(&ProductId::new("1"), -5, 5)
            .unwrap();
        assert_eq!(view.product(&ProductId::new("1")).unwrap().stock, 95);
    }
}
