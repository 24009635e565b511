//! The membership directory.

use chrono::{DateTime, Utc};
use lychee_market_core::{Member, Phone};
use tracing::debug;

/// Registered members, keyed by phone number.
///
/// Members are never deleted or merged. Duplicate registration is a silent
/// no-op rather than an error: the shop UI re-derives "already a member" by
/// lookup, not by catching a failure.
#[derive(Debug, Clone, Default)]
pub struct MemberDirectory {
    members: Vec<Member>,
}

impl MemberDirectory {
    /// Create an empty directory.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            members: Vec::new(),
        }
    }

    /// Register a member unless the phone number is already taken.
    ///
    /// First registration wins; a repeat registration with the same phone
    /// changes nothing. Returns whether a new member was inserted.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        phone: Phone,
        external_id: Option<String>,
        now: DateTime<Utc>,
    ) -> bool {
        if self.find_by_phone(&phone).is_some() {
            debug!(phone = %phone, "phone already registered, keeping existing member");
            return false;
        }

        self.members.push(Member {
            name: name.into(),
            phone,
            external_id,
            joined_at: now,
        });
        true
    }

    /// Exact-match lookup by phone number.
    #[must_use]
    pub fn find_by_phone(&self, phone: &Phone) -> Option<&Member> {
        self.members.iter().find(|m| &m.phone == phone)
    }

    /// Exact-match lookup by linked external identity.
    #[must_use]
    pub fn find_by_external_id(&self, id: &str) -> Option<&Member> {
        self.members
            .iter()
            .find(|m| m.external_id.as_deref() == Some(id))
    }

    /// Number of registered members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether no members are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
