//! Lychee Market Core - Shared domain types.
//!
//! This crate provides the common types used across all Lychee Market
//! components:
//! - `engine` - Transactional state engine (catalog, cart, orders, members)
//! - `cli` - Command-line tools for catalog inspection and simulations
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no locking, no clocks.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, the order status machine, and the domain
//!   structs (`Product`, `CartLine`, `Order`, `Member`, accounting rows)

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
