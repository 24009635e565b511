//! Engine error taxonomy.
//!
//! Only genuine caller mistakes surface as errors. Lifecycle transitions
//! attempted from the wrong state, and operations against unknown order ids,
//! are tolerated no-ops: an operator dashboard should never crash on a stale
//! reference. Inventory shortfall is likewise not an error - the order is
//! recorded and the shortfall logged (see [`crate::store::StoreEngine`]).

use lychee_market_core::ProductId;
use thiserror::Error;

/// Errors surfaced by engine operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A product with this id already exists in the catalog.
    #[error("product {0} already exists")]
    DuplicateProduct(ProductId),

    /// No product with this id exists in the catalog.
    #[error("product {0} not found")]
    ProductNotFound(ProductId),

    /// A cart quantity must be at least 1.
    #[error("quantity must be at least 1")]
    InvalidQuantity,

    /// An order cannot be created from an empty cart.
    #[error("cannot create an order with no line items")]
    EmptyOrder,
}

/// Result type alias for [`EngineError`].
pub type Result<T> = std::result::Result<T, EngineError>;
