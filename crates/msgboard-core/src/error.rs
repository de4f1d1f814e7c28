//! Error types for the message service

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoardError>;

#[derive(Error, Debug)]
pub enum BoardError {
    /// Malformed or empty input. No side effects occur before this check.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The database of record is unreachable or a query failed.
    #[error("message store unavailable: {0}")]
    StoreUnavailable(String),

    /// The cache backend is unreachable or a command failed.
    #[error("cache unavailable: {0}")]
    CacheUnavailable(String),
}

/// Outcome of the best-effort cache mirroring that follows a durable write.
///
/// The durable write is the success criterion for a submission; a mirror
/// failure degrades the cache without failing the request, and the reason
/// is carried here so callers can log or assert on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MirrorOutcome {
    /// Counter and recent list were both updated.
    Applied,
    /// At least one cache write failed.
    Degraded(String),
}

impl MirrorOutcome {
    pub fn is_degraded(&self) -> bool {
        matches!(self, MirrorOutcome::Degraded(_))
    }
}
