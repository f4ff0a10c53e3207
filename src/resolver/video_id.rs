//! Video identifier extraction

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;

/// Length of a video identifier, in UTF-16 code units
pub const VIDEO_ID_LEN: usize = 11;

/// Embed address template, `{id}` is replaced by the identifier
const EMBED_URL_PREFIX: &str = "https://www.youtube.com/embed/";
const EMBED_URL_QUERY: &str = "?autoplay=1";

/// Opaque 11-unit token addressing a hosted video
///
/// Only produced by [`extract_video_id`], so every value has the right length.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Embed address for this video (see [`embed_url`])
    pub fn embed_url(&self) -> String {
        embed_url(self)
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VideoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Shared URL pattern
///
/// The leading `.*` is greedy, so when several prefixes appear the last one
/// wins. The dot in `youtu.be` is left unescaped.
fn url_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^.*(youtu.be/|v/|u/(?-u:\w)/|embed/|watch\?v=|&v=)([^#&?]*).*")
            .expect("video URL pattern must compile")
    })
}

/// Extract the video identifier from a URL
///
/// Recognises `youtu.be/<id>`, `/v/<id>`, `/u/<letter>/<id>`, `/embed/<id>`,
/// `?v=<id>` and `&v=<id>`. The captured segment must be exactly
/// [`VIDEO_ID_LEN`] UTF-16 code units long, anything shorter or longer yields
/// `None`. This is purely syntactic; nothing is looked up online.
pub fn extract_video_id(url: &str) -> Option<VideoId> {
    let captures = url_pattern().captures(url)?;
    let candidate = captures.get(2)?.as_str();

    if candidate.encode_utf16().count() == VIDEO_ID_LEN {
        Some(VideoId(candidate.to_string()))
    } else {
        None
    }
}

/// Check whether a string is a recognisable video URL
pub fn is_valid_youtube_url(url: &str) -> bool {
    extract_video_id(url).is_some()
}

/// Build the autoplaying embed address for a video
pub fn embed_url(id: &VideoId) -> String {
    format!("{}{}{}", EMBED_URL_PREFIX, id.as_str(), EMBED_URL_QUERY)
}
