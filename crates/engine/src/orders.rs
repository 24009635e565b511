//! The order book and the order lifecycle state machine.

use chrono::{DateTime, Utc};
use lychee_market_core::{
    CartLine, CustomerInfo, Order, OrderId, OrderStatus, Phone, ShippingInfo,
};
use rust_decimal::Decimal;
use tracing::debug;

/// Owns the order collection, newest first.
///
/// Orders are immutable once placed except for `status` and `shipped_at`,
/// which only move forward. Transitions attempted from the wrong state, or
/// against an unknown id, are deliberate no-ops: the operator dashboard can
/// hold stale references and must never crash over them.
#[derive(Debug, Clone, Default)]
pub struct OrderBook {
    orders: Vec<Order>,
    next_seq: u64,
}

impl OrderBook {
    /// Create an empty order book.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            orders: Vec::new(),
            next_seq: 0,
        }
    }

    /// Place a new order from checkout-time line snapshots.
    ///
    /// The id is derived from `now` plus a monotonic sequence, the subtotal
    /// from the items, and `final_amount = max(0, subtotal - discount)`.
    /// Status starts at [`OrderStatus::PendingCheck`]. The order is
    /// prepended, keeping the collection newest first.
    pub fn place(
        &mut self,
        items: Vec<CartLine>,
        discount: Decimal,
        customer: CustomerInfo,
        shipping: ShippingInfo,
        now: DateTime<Utc>,
    ) -> &Order {
        let subtotal: Decimal = items.iter().map(CartLine::line_total).sum();
        self.next_seq += 1;

        let order = Order {
            id: OrderId::from_creation(now, self.next_seq),
            items,
            subtotal,
            discount,
            final_amount: Order::final_amount(subtotal, discount),
            customer,
            shipping,
            status: OrderStatus::PendingCheck,
            created_at: now,
            shipped_at: None,
        };
        self.orders.insert(0, order);
        // Just inserted at the front.
        &self.orders[0]
    }

    /// Transition an order from `pending_check` to `paid`.
    ///
    /// Returns whether the transition applied. Any other starting state, or
    /// an unknown id, leaves the book untouched - in particular a `shipped`
    /// order never regresses to `paid`.
    pub fn verify_payment(&mut self, id: &OrderId) -> bool {
        self.transition(id, OrderStatus::Paid, None)
    }

    /// Transition an order from `paid` to `shipped`, stamping `shipped_at`.
    ///
    /// Returns whether the transition applied; no-op from any other state.
    pub fn mark_shipped(&mut self, id: &OrderId, now: DateTime<Utc>) -> bool {
        self.transition(id, OrderStatus::Shipped, Some(now))
    }

    fn transition(
        &mut self,
        id: &OrderId,
        next: OrderStatus,
        shipped_at: Option<DateTime<Utc>>,
    ) -> bool {
        let Some(order) = self.orders.iter_mut().find(|o| &o.id == id) else {
            debug!(order_id = %id, "ignoring transition for unknown order");
            return false;
        };

        if !order.status.can_transition_to(next) {
            debug!(
                order_id = %id,
                from = %order.status,
                to = %next,
                "ignoring disallowed status transition"
            );
            return false;
        }

        order.status = next;
        if next == OrderStatus::Shipped {
            order.shipped_at = shipped_at;
        }
        true
    }

    /// All orders whose shipping phone matches, newest first by creation
    /// time. This is the basis for a member's order history view.
    #[must_use]
    pub fn orders_for(&self, phone: &Phone) -> Vec<Order> {
        let mut matched: Vec<Order> = self
            .orders
            .iter()
            .filter(|o| &o.shipping.phone == phone)
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        matched
    }

    /// All orders with the given status, newest first.
    #[must_use]
    pub fn by_status(&self, status: OrderStatus) -> Vec<Order> {
        self.orders
            .iter()
            .filter(|o| o.status == status)
            .cloned()
            .collect()
    }

    /// Look up an order by id.
    #[must_use]
    pub fn get(&self, id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| &o.id == id)
    }

    /// All orders, newest first.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Number of orders placed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Whether no orders have been placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
