//! Msgboard Types - pure type definitions
//!
//! This crate contains only plain data types with no async runtime
//! dependencies, shared by the service core and the server.

pub mod message;
pub mod timestamp;

pub use message::Message;
