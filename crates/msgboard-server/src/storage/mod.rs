//! Storage layer
//!
//! PostgreSQL is the database of record; Redis holds the advisory counter
//! and the rolling recent-message list.

pub mod cache;
pub mod db;

pub use cache::RedisCache;
pub use db::PgMessageStore;
