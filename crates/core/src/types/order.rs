//! Orders and their checkout metadata.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::cart::CartLine;
use super::id::OrderId;
use super::phone::Phone;
use super::status::OrderStatus;

/// Customer-supplied remittance metadata collected at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    /// Free-text time the customer reports having paid.
    pub payment_time: String,
    /// Last five digits of the remitting bank account.
    pub payment_last5: String,
}

/// Shipping metadata collected at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingInfo {
    pub recipient: String,
    /// Join key to the membership directory. Not a foreign key: an order may
    /// reference a phone with no matching member.
    pub phone: Phone,
    pub pickup_store: String,
}

/// A placed order.
///
/// Immutable except for `status` and `shipped_at`, which only move forward
/// through the [`OrderStatus`] state machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    /// Cart line snapshots at checkout time.
    pub items: Vec<CartLine>,
    /// Sum of `price * quantity` across items.
    pub subtotal: Decimal,
    /// Flat amount applied at checkout.
    pub discount: Decimal,
    /// `max(0, subtotal - discount)`.
    pub final_amount: Decimal,
    pub customer: CustomerInfo,
    pub shipping: ShippingInfo,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    /// Set if and only if `status` is [`OrderStatus::Shipped`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipped_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Amount due after the flat discount, floored at zero.
    #[must_use]
    pub fn final_amount(subtotal: Decimal, discount: Decimal) -> Decimal {
        (subtotal - discount).max(Decimal::ZERO)
    }
}
