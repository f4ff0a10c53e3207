//! Playlist listing rows

use crate::model::Playlist;
use crate::resolver::{extract_video_id, VideoId};
use serde::Serialize;
use std::fmt;

/// One line of the playlist listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaylistRow {
    /// 1-based position
    pub number: usize,
    pub url: String,
    /// Resolved for display, `None` shows as "Invalid URL"
    pub video_id: Option<VideoId>,
}

impl fmt::Display for PlaylistRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.video_id {
            Some(id) => write!(f, "{}. {}", self.number, id),
            None => write!(f, "{}. Invalid URL", self.number),
        }
    }
}

/// Build listing rows, resolving each entry afresh
pub fn playlist_rows(playlist: &Playlist) -> Vec<PlaylistRow> {
    playlist
        .entries()
        .iter()
        .enumerate()
        .map(|(i, url)| PlaylistRow {
            number: i + 1,
            url: url.clone(),
            video_id: extract_video_id(url),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows() {
        let playlist = Playlist::from_entries(vec![
            "https://youtu.be/dQw4w9WgXcQ".to_string(),
            "garbage".to_string(),
        ]);
        let rows = playlist_rows(&playlist);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].to_string(), "1. dQw4w9WgXcQ");
        assert_eq!(rows[1].to_string(), "2. Invalid URL");
        assert_eq!(rows[1].url, "garbage");
    }
}
