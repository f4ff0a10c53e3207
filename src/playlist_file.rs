//! Plain-text playlist import and export
//!
//! The file format is one URL per line. Import keeps only lines that resolve
//! to a video; export writes the playlist exactly as stored.

use crate::engine::{Notice, SelectionEngine};
use crate::model::Playlist;
use crate::random::RandomSource;
use crate::resolver::parse_urls_from_text;
use crate::scheduler::Scheduler;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name offered for a playlist download
pub const EXPORT_FILE_NAME: &str = "playlist.txt";

/// Read a playlist file and return the valid video URLs in order
///
/// Fails only if the file cannot be read; a file without any valid URL
/// gives an empty list.
pub fn read_playlist(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read playlist file: {:?}", path))?;

    let urls = parse_urls_from_text(&text);
    log::info!("Read {} URLs from {:?}", urls.len(), path);
    Ok(urls)
}

/// Upload a playlist file into the engine
///
/// A file with no valid URL leaves the current playlist untouched and comes
/// back as an error notice; only I/O failures are returned as `Err`.
pub fn import_playlist<S: Scheduler, R: RandomSource>(
    engine: &mut SelectionEngine<S, R>,
    path: &Path,
) -> Result<Notice> {
    let urls = read_playlist(path)?;
    if urls.is_empty() {
        log::warn!("No valid URLs in {:?}, keeping current playlist", path);
        return Ok(Notice::no_urls_in_file());
    }

    Ok(engine.load_playlist(urls).notice())
}

/// Write the playlist as newline-joined text
///
/// If `path` is a directory the file is created inside it as
/// [`EXPORT_FILE_NAME`]. Returns the path written.
pub fn write_playlist(path: &Path, playlist: &Playlist) -> Result<PathBuf> {
    let target = if path.is_dir() {
        path.join(EXPORT_FILE_NAME)
    } else {
        path.to_path_buf()
    };

    if let Some(parent) = target.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }
    }

    fs::write(&target, playlist.to_text())
        .with_context(|| format!("Failed to write playlist file: {:?}", target))?;

    log::info!("Exported {} URLs to {:?}", playlist.len(), target);
    Ok(target)
}
