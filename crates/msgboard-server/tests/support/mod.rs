//! In-memory fakes for the two backend ports, shared by the test binaries.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use msgboard_core::{BoardError, MessageStore, RecentCache, Result};
use msgboard_server::services::MessageService;
use msgboard_types::Message;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Store fake: rows in a vec, ids assigned monotonically, with a hard-down
/// switch to simulate an outage.
pub struct MemStore {
    rows: Mutex<Vec<Message>>,
    down: AtomicBool,
}

impl MemStore {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            down: AtomicBool::new(false),
        }
    }

    pub fn set_down(&self, down: bool) {
        self.down.store(down, Ordering::SeqCst);
    }

    pub fn row_count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn check(&self) -> Result<()> {
        if self.down.load(Ordering::SeqCst) {
            Err(BoardError::StoreUnavailable(
                "connection refused".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl MessageStore for MemStore {
    async fn insert(&self, content: &str) -> Result<Message> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        let id = rows.len() as i64 + 1;
        // Distinct increasing timestamps keep created_at ordering
        // well-defined across rows.
        let created_at =
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::microseconds(id);
        let message = Message {
            id,
            content: content.to_string(),
            created_at,
        };
        rows.push(message.clone());
        Ok(message)
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<Message>> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        rows.truncate(limit as usize);
        Ok(rows)
    }

    async fn count(&self) -> Result<i64> {
        self.check()?;
        Ok(self.rows.lock().unwrap().len() as i64)
    }

    async fn ping(&self) -> Result<()> {
        self.check()
    }
}

/// Cache fake: counters and bounded lists behind mutexes, with a hard-down
/// switch to simulate an outage.
pub struct MemCache {
    counters: Mutex<HashMap<String, i64>>,
    lists: Mutex<HashMap<String, Vec<String>>>,
    down: AtomicBool,
}

impl MemCache {
    pub fn new() -> Self {
        Self {
            counters: Mutex::new(HashMap::new()),
            lists: Mutex::new(HashMap::new()),
            down: AtomicBool::new(false),
        }
    }

    pub fn set_down(&self, down: bool) {
        self.down.store(down, Ordering::SeqCst);
    }

    pub fn counter(&self, key: &str) -> i64 {
        *self.counters.lock().unwrap().get(key).unwrap_or(&0)
    }

    pub fn list_len(&self, key: &str) -> usize {
        self.lists.lock().unwrap().get(key).map_or(0, Vec::len)
    }

    fn check(&self) -> Result<()> {
        if self.down.load(Ordering::SeqCst) {
            Err(BoardError::CacheUnavailable(
                "connection refused".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl RecentCache for MemCache {
    async fn ping(&self) -> Result<()> {
        self.check()
    }

    async fn increment_counter(&self, key: &str) -> Result<i64> {
        self.check()?;
        let mut counters = self.counters.lock().unwrap();
        let value = counters.entry(key.to_string()).or_insert(0);
        *value += 1;
        Ok(*value)
    }

    async fn push_recent(&self, key: &str, snapshot: &str, bound: usize) -> Result<()> {
        self.check()?;
        let mut lists = self.lists.lock().unwrap();
        let list = lists.entry(key.to_string()).or_default();
        list.insert(0, snapshot.to_string());
        list.truncate(bound);
        Ok(())
    }

    async fn read_counter(&self, key: &str) -> Result<i64> {
        self.check()?;
        Ok(*self.counters.lock().unwrap().get(key).unwrap_or(&0))
    }

    async fn read_recent(&self, key: &str, limit: usize) -> Result<Vec<String>> {
        self.check()?;
        let lists = self.lists.lock().unwrap();
        Ok(lists
            .get(key)
            .map(|list| list.iter().take(limit).cloned().collect())
            .unwrap_or_default())
    }
}

/// A service wired to fresh fakes, handing back the fakes for inspection.
pub fn service_with_fakes() -> (Arc<MemStore>, Arc<MemCache>, MessageService) {
    let store = Arc::new(MemStore::new());
    let cache = Arc::new(MemCache::new());
    let service = MessageService::new(store.clone(), cache.clone());
    (store, cache, service)
}
