//! Video URL resolution
//!
//! Turns free-form text into validated video identifiers. Nothing in here
//! fails loudly: unrecognised input yields `None` or an empty list and the
//! caller decides how to report it.

mod text;
mod video_id;

pub use text::parse_urls_from_text;
pub use video_id::{embed_url, extract_video_id, is_valid_youtube_url, VideoId, VIDEO_ID_LEN};
