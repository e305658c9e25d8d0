use std::path::Path;

use lofty::prelude::{Accessor, TaggedFileExt};
use log::{debug, info, warn};
use walkdir::WalkDir;

use crate::config::{LibrarySettings, normalize_extension};

use super::model::Track;

/// Something that can turn a folder into track records.
///
/// Failures (missing folder, unreadable files) are handled by the reader
/// itself; callers always get a possibly empty list back.
pub trait TrackReader {
    fn read_tracks(&self, dir: &Path, extension: &str) -> Vec<Track>;
}

/// Reads tracks from the filesystem, taking artist and title from embedded
/// tags when present and from the file name otherwise.
#[derive(Debug, Clone, Default)]
pub struct FolderReader {
    settings: LibrarySettings,
}

impl FolderReader {
    pub fn new(settings: LibrarySettings) -> Self {
        Self { settings }
    }
}

impl TrackReader for FolderReader {
    fn read_tracks(&self, dir: &Path, extension: &str) -> Vec<Track> {
        if !dir.is_dir() {
            warn!("library folder {} is missing or not a directory", dir.display());
            return Vec::new();
        }

        let tracks = scan(dir, &normalize_extension(extension), &self.settings);
        info!("read {} tracks from {}", tracks.len(), dir.display());
        tracks
    }
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|e| e.eq_ignore_ascii_case(ext))
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

fn read_track(path: &Path) -> Track {
    let decoded = Track::from_filename(path);
    let mut artist = decoded.artist().to_string();
    let mut title = decoded.title().to_string();

    match lofty::read_from_path(path) {
        Ok(tagged) => {
            if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
                if let Some(v) = tag.artist().filter(|v| !v.trim().is_empty()) {
                    artist = v.trim().to_string();
                }
                if let Some(v) = tag.title().filter(|v| !v.trim().is_empty()) {
                    title = v.trim().to_string();
                }
            }
        }
        Err(e) => debug!("no tags for {}: {e}", path.display()),
    }

    Track::new(artist, title, path)
}

fn scan(dir: &Path, ext: &str, settings: &LibrarySettings) -> Vec<Track> {
    let mut walker = WalkDir::new(dir).follow_links(settings.follow_links);

    // Non-recursive = only the root directory.
    let depth_cap = if settings.recursive {
        settings.max_depth
    } else {
        Some(1)
    };
    if let Some(d) = depth_cap {
        walker = walker.max_depth(d);
    }

    let mut tracks: Vec<Track> = walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("skipping unreadable entry: {e}");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file() || entry.path().is_file())
        .filter(|entry| has_extension(entry.path(), ext))
        .map(|entry| read_track(entry.path()))
        .collect();

    tracks.sort_by(|a, b| a.details().to_lowercase().cmp(&b.details().to_lowercase()));
    tracks
}
