//! Msgboard Core Library
//!
//! Error taxonomy and the port traits the message service is programmed
//! against.

// Re-export pure types from msgboard-types
pub use msgboard_types::*;

pub mod error;
pub mod ports;

pub use error::{BoardError, MirrorOutcome, Result};
pub use ports::{MessageStore, RecentCache};
