//! Line-oriented URL list parsing

use super::video_id::is_valid_youtube_url;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Parse video URLs out of pasted text or an uploaded file
///
/// One URL per line. Lines are trimmed; blank lines and lines that are not
/// recognisable video URLs are dropped. Order is kept and duplicates are not
/// removed, so the result may be empty.
pub fn parse_urls_from_text(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| line.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK))
        .filter(|line| !line.is_empty() && is_valid_youtube_url(line))
        .map(str::to_string)
        .collect()
}
