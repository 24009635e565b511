//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types. IDs are string-backed:
//! product ids are supplied by the catalog operator, and order ids are derived
//! from the creation timestamp.

use chrono::{DateTime, Utc};

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<&str>` and `From<String>` implementations
///
/// # Example
///
/// ```rust
/// # use lychee_market_core::define_id;
/// define_id!(ProductId);
/// define_id!(OrderId);
///
/// let product_id = ProductId::new("p-1");
/// let order_id = OrderId::new("1735689600000-1");
///
/// // These are different types, so this won't compile:
/// // let _: ProductId = order_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from anything string-like.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying value as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return its inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

define_id!(ProductId);
define_id!(OrderId);

impl OrderId {
    /// Derive an order ID from the creation timestamp plus a per-book
    /// sequence number.
    ///
    /// The sequence disambiguates orders created within the same
    /// millisecond; ids stay sortable by creation time.
    #[must_use]
    pub fn from_creation(created_at: DateTime<Utc>, seq: u64) -> Self {
        Self(format!("{}-{seq}", created_at.timestamp_millis()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        let id = ProductId::new("p-42");
        assert_eq!(id.to_string(), "p-42");
        assert_eq!(id.as_str(), "p-42");
    }

    #[test]
    fn test_id_equality() {
        assert_eq!(ProductId::new("1"), ProductId::from("1"));
        assert_ne!(ProductId::new("1"), ProductId::new("2"));
    }

    #[test]
    fn test_serde_transparent() {
        let id = OrderId::new("1735689600000-1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"1735689600000-1\"");

        let parsed: OrderId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_order_id_from_creation() {
        let at = DateTime::from_timestamp_millis(1_735_689_600_000).unwrap();
        let id = OrderId::from_creation(at, 7);
        assert_eq!(id.as_str(), "1735689600000-7");
    }

    #[test]
    fn test_order_id_from_creation_unique_per_seq() {
        let at = Utc::now();
        assert_ne!(
            OrderId::from_creation(at, 1),
            OrderId::from_creation(at, 2)
        );
    }
}
