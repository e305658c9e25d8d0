use std::path::{Path, PathBuf};

use super::display::{decode_filename, make_details};

/// Placeholder for metadata that could not be determined.
pub const UNKNOWN: &str = "unknown";

/// Metadata for one audio file. Immutable once built; `details` is derived
/// from the other fields at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    artist: String,
    title: String,
    filename: PathBuf,
    details: String,
}

impl Track {
    pub fn new(
        artist: impl Into<String>,
        title: impl Into<String>,
        filename: impl Into<PathBuf>,
    ) -> Self {
        let artist = artist.into();
        let title = title.into();
        let filename = filename.into();
        let details = make_details(&artist, &title, &filename);
        Self {
            artist,
            title,
            filename,
            details,
        }
    }

    /// Build a track from its file name alone.
    ///
    /// Names shaped like `Artist-Title.mp3` fill in artist and title; anything
    /// else leaves both as [`UNKNOWN`].
    pub fn from_filename(filename: impl Into<PathBuf>) -> Self {
        let filename = filename.into();
        let (artist, title) = decode_filename(&filename)
            .unwrap_or_else(|| (UNKNOWN.to_string(), UNKNOWN.to_string()));
        Self::new(artist, title, filename)
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn filename(&self) -> &Path {
        &self.filename
    }

    /// Human-readable one-liner: `artist: title  (file: filename)`.
    pub fn details(&self) -> &str {
        &self.details
    }
}
