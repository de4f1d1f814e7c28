//! Durable store port

use crate::Result;
use async_trait::async_trait;
use msgboard_types::Message;

/// Database of record for messages.
///
/// Implementations acquire and release their own connection per call; no
/// call holds one across cache I/O, so the two failure domains stay
/// uncoupled.
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Insert one message and return it with its assigned id and timestamp.
    async fn insert(&self, content: &str) -> Result<Message>;

    /// Up to `limit` messages, newest first. Ids break timestamp ties since
    /// they are monotonic with insertion.
    async fn list_recent(&self, limit: i64) -> Result<Vec<Message>>;

    /// Exact row count.
    async fn count(&self) -> Result<i64>;

    /// Connectivity probe for the health check.
    async fn ping(&self) -> Result<()>;
}
