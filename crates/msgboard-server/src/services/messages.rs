//! Message service: durable writes with best-effort cache mirroring

use msgboard_core::{BoardError, MessageStore, MirrorOutcome, RecentCache, Result};
use msgboard_types::Message;
use std::sync::Arc;
use tracing::{info, warn};

/// Cache key for the advisory submission counter.
pub const MESSAGE_COUNT_KEY: &str = "message_count";
/// Cache key for the rolling recent-message list.
pub const RECENT_MESSAGES_KEY: &str = "recent_messages";
/// Upper bound on the cached recent list.
pub const RECENT_BOUND: usize = 10;
/// Page size for message listing.
pub const DEFAULT_LIST_LIMIT: i64 = 50;

/// Aggregate statistics combining both backends.
///
/// The two counts are read independently and deliberately not reconciled;
/// a mismatch is the caller's signal of cache staleness.
#[derive(Debug)]
pub struct Stats {
    pub cache_count: i64,
    pub store_count: i64,
    pub recent: Vec<Message>,
}

/// Health of one backend, described as data rather than an error.
#[derive(Debug, Clone)]
pub enum BackendHealth {
    Connected,
    Unreachable(String),
}

impl BackendHealth {
    pub fn is_connected(&self) -> bool {
        matches!(self, BackendHealth::Connected)
    }

    /// Status string for the health endpoint.
    pub fn describe(&self) -> String {
        match self {
            BackendHealth::Connected => "connected".to_string(),
            BackendHealth::Unreachable(reason) => format!("error: {}", reason),
        }
    }
}

/// Report produced by [`MessageService::health`]. Producing one never fails.
#[derive(Debug)]
pub struct Health {
    pub store: BackendHealth,
    pub cache: BackendHealth,
}

impl Health {
    pub fn is_healthy(&self) -> bool {
        self.store.is_connected() && self.cache.is_connected()
    }
}

pub struct MessageService {
    store: Arc<dyn MessageStore>,
    cache: Arc<dyn RecentCache>,
}

impl MessageService {
    pub fn new(store: Arc<dyn MessageStore>, cache: Arc<dyn RecentCache>) -> Self {
        Self { store, cache }
    }

    /// Persist a message, then mirror it into the cache.
    ///
    /// The store write comes first and is the success criterion: the cache
    /// never references a message that does not durably exist. A mirror
    /// failure is reported in the returned outcome, not as an error.
    pub async fn submit(&self, content: &str) -> Result<(Message, MirrorOutcome)> {
        if content.is_empty() {
            return Err(BoardError::Validation(
                "content must not be empty".to_string(),
            ));
        }

        let message = self.store.insert(content).await?;
        info!("Stored message {}", message.id);

        let mirror = self.mirror(&message).await;
        if let MirrorOutcome::Degraded(reason) = &mirror {
            warn!("Cache mirror degraded for message {}: {}", message.id, reason);
        }

        Ok((message, mirror))
    }

    async fn mirror(&self, message: &Message) -> MirrorOutcome {
        let snapshot = match message.to_snapshot() {
            Ok(snapshot) => snapshot,
            Err(e) => return MirrorOutcome::Degraded(format!("snapshot encoding: {}", e)),
        };

        if let Err(e) = self.cache.increment_counter(MESSAGE_COUNT_KEY).await {
            return MirrorOutcome::Degraded(e.to_string());
        }
        if let Err(e) = self
            .cache
            .push_recent(RECENT_MESSAGES_KEY, &snapshot, RECENT_BOUND)
            .await
        {
            return MirrorOutcome::Degraded(e.to_string());
        }

        MirrorOutcome::Applied
    }

    /// Up to `limit` messages from the store, newest first. No cache
    /// fallback: the store is authoritative and the cache holds at most
    /// [`RECENT_BOUND`] entries.
    pub async fn list(&self, limit: i64) -> Result<Vec<Message>> {
        self.store.list_recent(limit).await
    }

    /// Read the cache counter, the cache recent list, and the store count
    /// independently. Either backend's failure propagates; the values are
    /// never reconciled against each other.
    pub async fn stats(&self) -> Result<Stats> {
        let cache_count = self.cache.read_counter(MESSAGE_COUNT_KEY).await?;
        let snapshots = self
            .cache
            .read_recent(RECENT_MESSAGES_KEY, RECENT_BOUND)
            .await?;
        let store_count = self.store.count().await?;

        let mut recent = Vec::with_capacity(snapshots.len());
        for snapshot in &snapshots {
            match Message::from_snapshot(snapshot) {
                Ok(message) => recent.push(message),
                // A poisoned entry degrades the secondary index, not the read.
                Err(e) => warn!("Skipping undecodable cache snapshot: {}", e),
            }
        }

        Ok(Stats {
            cache_count,
            store_count,
            recent,
        })
    }

    /// Ping both backends, converting failure into data. Never fails.
    pub async fn health(&self) -> Health {
        let store = match self.store.ping().await {
            Ok(()) => BackendHealth::Connected,
            Err(e) => BackendHealth::Unreachable(e.to_string()),
        };
        let cache = match self.cache.ping().await {
            Ok(()) => BackendHealth::Connected,
            Err(e) => BackendHealth::Unreachable(e.to_string()),
        };

        Health { store, cache }
    }
}
