//! Embedded player surface

use crate::resolver::VideoId;
use serde::Serialize;
use std::fmt;

/// What the player area should show
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlayerView {
    /// Placeholder, nothing chosen
    Empty,

    /// Autoplaying embed of the chosen video
    Embed { video_id: VideoId, src: String },
}

impl PlayerView {
    pub fn new(video_id: Option<&VideoId>) -> Self {
        match video_id {
            Some(id) => PlayerView::Embed {
                video_id: id.clone(),
                src: id.embed_url(),
            },
            None => PlayerView::Empty,
        }
    }

    /// Embed address, if a video is shown
    pub fn src(&self) -> Option<&str> {
        match self {
            PlayerView::Embed { src, .. } => Some(src),
            PlayerView::Empty => None,
        }
    }
}

impl fmt::Display for PlayerView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerView::Empty => f.write_str("No video selected"),
            PlayerView::Embed { src, .. } => f.write_str(src),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::extract_video_id;

    #[test]
    fn test_empty() {
        let view = PlayerView::new(None);
        assert_eq!(view, PlayerView::Empty);
        assert_eq!(view.src(), None);
        assert_eq!(view.to_string(), "No video selected");
    }

    #[test]
    fn test_embed() {
        let id = extract_video_id("https://youtu.be/dQw4w9WgXcQ").unwrap();
        let view = PlayerView::new(Some(&id));

        assert_eq!(
            view.src(),
            Some("https://www.youtube.com/embed/dQw4w9WgXcQ?autoplay=1")
        );
    }
}
