//! Summary cache port

use crate::Result;
use async_trait::async_trait;

/// Secondary, non-authoritative key/list store holding the advisory
/// submission counter and the rolling recent-message list.
#[async_trait]
pub trait RecentCache: Send + Sync {
    /// Connectivity probe for the health check.
    async fn ping(&self) -> Result<()>;

    /// Atomic increment; returns the new value.
    async fn increment_counter(&self, key: &str) -> Result<i64>;

    /// Push a snapshot to the front of the list at `key`, then trim it to
    /// `bound` entries.
    ///
    /// Push and trim are two commands: other readers may observe a
    /// transient over-length list, but the list is back within `bound`
    /// once this returns.
    async fn push_recent(&self, key: &str, snapshot: &str, bound: usize) -> Result<()>;

    /// Counter value; an absent key reads as 0.
    async fn read_counter(&self, key: &str) -> Result<i64>;

    /// Up to `limit` snapshots in push order, most recent first; an absent
    /// list reads as empty.
    async fn read_recent(&self, key: &str, limit: usize) -> Result<Vec<String>>;
}
