use serde::{Deserialize, Serialize};

/// Ordered list of video URLs, exactly as the user entered them
///
/// Order is both display order and selection order. Duplicates are not
/// prevented here; the engine rejects them when adding one URL at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Playlist {
    entries: Vec<String>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a playlist holding the given entries in order
    pub fn from_entries(entries: Vec<String>) -> Self {
        Self { entries }
    }

    /// All entries in order
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Entry at a position
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    /// Whether the exact string is already present
    pub fn contains(&self, url: &str) -> bool {
        self.entries.iter().any(|entry| entry == url)
    }

    /// Append an entry
    pub fn push(&mut self, url: String) {
        self.entries.push(url);
    }

    /// Remove the entry at a position, shifting later entries down
    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Plain-text form: one URL per line, newline-joined
    pub fn to_text(&self) -> String {
        self.entries.join("\n")
    }
}

impl From<Vec<String>> for Playlist {
    fn from(entries: Vec<String>) -> Self {
        Self::from_entries(entries)
    }
}
