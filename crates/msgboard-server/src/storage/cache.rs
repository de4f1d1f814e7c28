//! Redis summary cache (submission counter + rolling recent list)

use anyhow::Context;
use async_trait::async_trait;
use msgboard_core::{BoardError, RecentCache, Result};
use redis::AsyncCommands;

use crate::config::Config;

pub struct RedisCache {
    client: redis::Client,
}

impl RedisCache {
    /// Parse the cache address. No I/O happens here: every operation opens
    /// its own connection, so a down cache never blocks process start and
    /// never couples its failure domain to the store's.
    pub fn connect(config: &Config) -> anyhow::Result<Self> {
        let client = redis::Client::open(config.redis_url()).context("Invalid Redis URL")?;

        Ok(Self { client })
    }

    async fn connection(&self) -> Result<redis::aio::MultiplexedConnection> {
        self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(cache_err)
    }
}

fn cache_err(e: redis::RedisError) -> BoardError {
    BoardError::CacheUnavailable(e.to_string())
}

#[async_trait]
impl RecentCache for RedisCache {
    async fn ping(&self) -> Result<()> {
        let mut conn = self.connection().await?;
        redis::cmd("PING")
            .query_async::<_, String>(&mut conn)
            .await
            .map_err(cache_err)?;

        Ok(())
    }

    async fn increment_counter(&self, key: &str) -> Result<i64> {
        let mut conn = self.connection().await?;
        conn.incr::<_, _, i64>(key, 1).await.map_err(cache_err)
    }

    async fn push_recent(&self, key: &str, snapshot: &str, bound: usize) -> Result<()> {
        let mut conn = self.connection().await?;
        conn.lpush::<_, _, ()>(key, snapshot)
            .await
            .map_err(cache_err)?;
        // Readers may briefly observe an over-length list between the two
        // commands; the trim restores the bound.
        conn.ltrim::<_, ()>(key, 0, bound as isize - 1)
            .await
            .map_err(cache_err)?;

        Ok(())
    }

    async fn read_counter(&self, key: &str) -> Result<i64> {
        let mut conn = self.connection().await?;
        let value: Option<i64> = conn.get(key).await.map_err(cache_err)?;

        Ok(value.unwrap_or(0))
    }

    async fn read_recent(&self, key: &str, limit: usize) -> Result<Vec<String>> {
        let mut conn = self.connection().await?;
        conn.lrange::<_, Vec<String>>(key, 0, limit as isize - 1)
            .await
            .map_err(cache_err)
    }
}
