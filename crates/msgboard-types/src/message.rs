//! The message entity and its snapshot encoding

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One submitted text, as recorded in the database of record.
///
/// `id` and `created_at` are assigned by the store on insert and never
/// change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    pub content: String,
    #[serde(with = "crate::timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Serialize to the snapshot form pushed into the cache list.
    pub fn to_snapshot(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Decode a snapshot previously produced by [`Message::to_snapshot`].
    pub fn from_snapshot(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }
}
