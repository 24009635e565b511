//! Cart line items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// One (product, option, quantity) line within a cart or order.
///
/// `price`, `product_name` and `image` are snapshots taken when the line was
/// added: a mid-session catalog edit never changes what the customer agreed
/// to pay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub product_name: String,
    /// One label from the product's option list, or empty.
    pub option: String,
    /// Unit price snapshot.
    pub price: Decimal,
    /// Always at least 1.
    pub quantity: u32,
    /// Image snapshot.
    pub image: String,
}

impl CartLine {
    /// Line total: `price * quantity`.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total() {
        let line = CartLine {
            product_id: ProductId::new("1"),
            product_name: "mask".to_owned(),
            option: "white".to_owned(),
            price: Decimal::from(25),
            quantity: 3,
            image: String::new(),
        };
        assert_eq!(line.line_total(), Decimal::from(75));
    }
}
