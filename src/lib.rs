//! Playlist Roulette - pick a random video from a playlist
//!
//! Validates video URLs, keeps them in a playlist and runs a timed
//! "spin" that picks one entry at random and reveals it as an embeddable
//! player address.

pub mod engine;
pub mod model;
pub mod playlist_file;
pub mod random;
pub mod resolver;
pub mod scheduler;
pub mod view;

pub use engine::{EngineConfig, EngineError, SelectionEngine};
pub use model::{Playlist, SpinState};
pub use resolver::{extract_video_id, is_valid_youtube_url, parse_urls_from_text, VideoId};
