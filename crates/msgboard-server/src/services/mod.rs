//! Business logic services

pub mod messages;

pub use messages::{
    BackendHealth, Health, MessageService, Stats, DEFAULT_LIST_LIMIT, MESSAGE_COUNT_KEY,
    RECENT_BOUND, RECENT_MESSAGES_KEY,
};
