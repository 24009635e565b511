//! Lychee Market Engine - The transactional state engine.
//!
//! This crate keeps inventory, sales counters, order status and the derived
//! accounting view mutually consistent as orders are created and advanced
//! through their lifecycle.
//!
//! # Architecture
//!
//! State lives inside explicit aggregate-root types with no ambient globals:
//!
//! - [`CatalogStore`] - the mutable product set and the
//!   `adjust_inventory` primitive
//! - [`Cart`] - an ephemeral per-session selection, price-snapshotting
//! - [`OrderBook`] - the order collection and the
//!   `pending_check -> paid -> shipped` state machine
//! - [`MemberDirectory`] - members keyed by phone number
//! - [`accounting`] - pure `(products, orders) -> rows` recomputation
//!
//! [`StoreEngine`] composes all of the above behind a single lock so that
//! mutations serialize and reads observe consistent snapshots. Presentation
//! and transport layers are external collaborators: they hand the engine
//! already-validated commands and render its state back out.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod accounting;
pub mod cart;
pub mod catalog;
pub mod error;
pub mod members;
pub mod orders;
pub mod seed;
pub mod store;

pub use cart::Cart;
pub use catalog::CatalogStore;
pub use error::{EngineError, Result};
pub use members::MemberDirectory;
pub use orders::OrderBook;
pub use store::StoreEngine;
