//! Order status state machine.

use serde::{Deserialize, Serialize};

/// Order payment-and-shipping status.
///
/// Transitions only move forward:
/// `PendingCheck` -> `Paid` -> `Shipped`. There is no cancellation or refund
/// state, and no transition ever regresses an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Created, waiting for the operator to match the remittance.
    #[default]
    PendingCheck,
    /// Remittance verified by the operator.
    Paid,
    /// Handed to the carrier. Terminal.
    Shipped,
}

impl OrderStatus {
    /// Whether a transition from `self` to `next` is permitted.
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::PendingCheck, Self::Paid) | (Self::Paid, Self::Shipped)
        )
    }

    /// Whether this status is terminal.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Shipped)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PendingCheck => write!(f, "pending_check"),
            Self::Paid => write!(f, "paid"),
            Self::Shipped => write!(f, "shipped"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending_check" => Ok(Self::PendingCheck),
            "paid" => Ok(Self::Paid),
            "shipped" => Ok(Self::Shipped),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}
