//! User-facing notices
//!
//! Short transient messages for whatever front end drives the engine.

use super::error::EngineError;
use serde::Serialize;
use std::fmt;

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

/// A message to show the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn url_added() -> Self {
        Self::success("Song added to playlist")
    }

    pub fn url_removed() -> Self {
        Self::success("Song removed from playlist")
    }

    pub fn no_urls_in_file() -> Self {
        Self::error("No valid YouTube URLs found in file")
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.level {
            NoticeLevel::Success => "ok",
            NoticeLevel::Warning => "warning",
            NoticeLevel::Error => "error",
        };
        write!(f, "[{}] {}", tag, self.message)
    }
}

impl From<&EngineError> for Notice {
    fn from(err: &EngineError) -> Self {
        match err {
            EngineError::InvalidUrl(_) => Notice::error("Please enter a valid YouTube URL"),
            EngineError::DuplicateUrl(_) => Notice::error("This URL is already in your playlist"),
            EngineError::IndexOutOfRange { index, len } => Notice::error(format!(
                "There is no song #{} in a playlist of {}",
                index + 1,
                len
            )),
            EngineError::InsufficientEntries {
                available,
                required,
            } if available >= required => Notice::error("Already spinning, wait for the result"),
            EngineError::InsufficientEntries { required, .. } => {
                Notice::error(format!("You need at least {} videos to play!", required))
            }
        }
    }
}

/// Result of replacing the whole playlist
///
/// A too-small playlist is still loaded; the outcome only says so.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded { count: usize },
    TooFew { count: usize, minimum: usize },
}

impl LoadOutcome {
    pub fn is_too_few(&self) -> bool {
        matches!(self, LoadOutcome::TooFew { .. })
    }

    pub fn notice(&self) -> Notice {
        match *self {
            LoadOutcome::Loaded { count } => {
                Notice::success(format!("Playlist loaded with {} videos!", count))
            }
            LoadOutcome::TooFew { count, minimum } => Notice::warning(format!(
                "Added {} videos. You need at least {} for the game.",
                count, minimum
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_notices() {
        let ok = LoadOutcome::Loaded { count: 4 }.notice();
        assert_eq!(ok.level, NoticeLevel::Success);
        assert_eq!(ok.message, "Playlist loaded with 4 videos!");

        let few = LoadOutcome::TooFew { count: 1, minimum: 2 }.notice();
        assert_eq!(few.level, NoticeLevel::Warning);
        assert_eq!(few.message, "Added 1 videos. You need at least 2 for the game.");
    }

    #[test]
    fn test_error_notices() {
        let notice = Notice::from(&EngineError::InsufficientEntries {
            available: 1,
            required: 2,
        });
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.message, "You need at least 2 videos to play!");

        let notice = Notice::from(&EngineError::InsufficientEntries {
            available: 3,
            required: 2,
        });
        assert_eq!(notice.message, "Already spinning, wait for the result");

        let notice = Notice::from(&EngineError::IndexOutOfRange { index: 4, len: 2 });
        assert_eq!(notice.to_string(), "[error] There is no song #5 in a playlist of 2");
    }
}
