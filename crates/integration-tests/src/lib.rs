//! Integration tests for Lychee Market.
//!
//! # Test Categories
//!
//! - `order_lifecycle` - Checkout, inventory coupling, the status machine
//! - `accounting` - Aggregation commutativity and catalog boundaries
//! - `members` - Registration and lookups
//! - `concurrency` - Serialization of concurrent mutations
//!
//! The crate root provides shared fixtures: a seeded engine and checkout
//! metadata builders.

#![cfg_attr(not(test), forbid(unsafe_code))]

use lychee_market_core::{CustomerInfo, Phone, ShippingInfo};
use lychee_market_engine::{StoreEngine, seed};

/// An engine seeded with the built-in three-product catalog.
#[must_use]
pub fn sample_engine() -> StoreEngine {
    StoreEngine::with_catalog(seed::sample_catalog())
}

/// Checkout remittance metadata for a named customer.
#[must_use]
pub fn customer(name: &str) -> CustomerInfo {
    CustomerInfo {
        name: name.to_owned(),
        payment_time: "2026-08-25 10:00".to_owned(),
        payment_last5: "12345".to_owned(),
    }
}

/// Checkout shipping metadata for a recipient and phone.
///
/// # Panics
///
/// Panics if `phone` is not a valid phone number; fixtures pass literals.
#[must_use]
#[allow(clippy::missing_panics_doc, clippy::unwrap_used)]
pub fn shipping(recipient: &str, phone: &str) -> ShippingInfo {
    ShippingInfo {
        recipient: recipient.to_owned(),
        phone: Phone::parse(phone).unwrap(),
        pickup_store: "Downtown".to_owned(),
    }
}
