//! The per-session shopping cart.

use lychee_market_core::{CartLine, Product, ProductId};
use rust_decimal::Decimal;

use crate::error::{EngineError, Result};

/// An ephemeral, per-session selection of (product, option, quantity) lines.
///
/// Lines are unique by (product id, option) and keep their insertion order.
/// The cart holds no inventory reservation: adding to it never touches
/// stock, which is only adjusted at order creation.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add `quantity` of a product/option to the cart.
    ///
    /// If a line with the same (product id, option) already exists its
    /// quantity grows; otherwise a new line is appended. The price, name and
    /// image are captured from `product` now and never re-read, so a
    /// mid-session catalog edit cannot change what this customer pays.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidQuantity`] if `quantity` is zero.
    pub fn add_line(&mut self, product: &Product, option: &str, quantity: u32) -> Result<()> {
        if quantity == 0 {
            return Err(EngineError::InvalidQuantity);
        }

        if let Some(line) = self.line_mut(&product.id, option) {
            line.quantity += quantity;
            return Ok(());
        }

        self.lines.push(CartLine {
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            option: option.to_owned(),
            price: product.price,
            quantity,
            image: product.image.clone(),
        });
        Ok(())
    }

    /// Apply a quantity delta to a line, clamping at a minimum of 1.
    ///
    /// The increment/decrement controls can never drive a line to zero;
    /// removal is the explicit [`Self::remove_line`] operation. Unknown
    /// lines are ignored.
    pub fn adjust_quantity(&mut self, product_id: &ProductId, option: &str, delta: i64) {
        if let Some(line) = self.line_mut(product_id, option) {
            let adjusted = i64::from(line.quantity) + delta;
            line.quantity = u32::try_from(adjusted.max(1)).unwrap_or(u32::MAX);
        }
    }

    /// Set a line's quantity directly, clamping at a minimum of 1.
    ///
    /// Unknown lines are ignored.
    pub fn set_quantity(&mut self, product_id: &ProductId, option: &str, quantity: u32) {
        if let Some(line) = self.line_mut(product_id, option) {
            line.quantity = quantity.max(1);
        }
    }

    /// Remove a line by its (product id, option) identity.
    pub fn remove_line(&mut self, product_id: &ProductId, option: &str) {
        self.lines
            .retain(|l| !(&l.product_id == product_id && l.option == option));
    }

    /// Sum of `price * quantity` over all lines.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Sum of quantities over all lines.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// The lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Discard all lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Take the lines out of the cart, leaving it empty.
    ///
    /// Checkout uses this to snapshot the selection into an order.
    #[must_use]
    pub fn take_lines(&mut self) -> Vec<CartLine> {
        std::mem::take(&mut self.lines)
    }

    fn line_mut(&mut self, product_id: &ProductId, option: &str) -> Option<&mut CartLine> {
        self.lines
            .iter_mut()
            .find(|l| &l.product_id == product_id && l.option == option)
    }
}
