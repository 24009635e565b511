//! Registered shop members.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::phone::Phone;

/// A registered member.
///
/// The phone number is the unique identity key. `external_id` optionally
/// binds the member to an external messaging-platform account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    pub phone: Phone,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    pub joined_at: DateTime<Utc>,
}
