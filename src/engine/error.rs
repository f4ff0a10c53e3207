//! Engine error types
//!
//! Every variant is recoverable: the session carries on and the front end
//! shows the matching [`Notice`](super::Notice).

/// Errors returned by playlist edits and `spin()`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// Not a recognisable video URL
    #[error("Invalid video URL: {0}")]
    InvalidUrl(String),

    /// Exact string already in the playlist
    #[error("URL already in playlist: {0}")]
    DuplicateUrl(String),

    /// No entry at this position
    #[error("No playlist entry at index {index} (playlist has {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Playlist too small to spin, or the previous spin has not settled
    /// (then `available >= required`)
    #[error("Cannot spin now: {available} videos in playlist, {required} required, no spin may be running")]
    InsufficientEntries { available: usize, required: usize },
}
