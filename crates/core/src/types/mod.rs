//! Core types for Lychee Market.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod accounting;
pub mod cart;
pub mod id;
pub mod member;
pub mod order;
pub mod phone;
pub mod product;
pub mod status;

pub use accounting::{AccountingReport, AccountingRow, GrandTotals};
pub use cart::CartLine;
pub use id::*;
pub use member::Member;
pub use order::{CustomerInfo, Order, ShippingInfo};
pub use phone::{Phone, PhoneError};
pub use product::Product;
pub use status::OrderStatus;
