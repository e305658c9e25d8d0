use std::path::PathBuf;

use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/music-organizer/config.toml`
/// or `~/.config/music-organizer/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `ORGANIZER__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub playback: PlaybackSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Folder read once at startup.
    pub dir: PathBuf,
    /// Extension filter handed to the reader (case-insensitive, dot optional).
    pub extension: String,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("../audio"),
            extension: "mp3".to_string(),
            follow_links: true,
            include_hidden: false,
            recursive: true,
            max_depth: None,
        }
    }
}

impl LibrarySettings {
    /// The extension without a leading dot, lowercased.
    pub fn normalized_extension(&self) -> String {
        normalize_extension(&self.extension)
    }
}

pub fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_ascii_lowercase()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Length of the preview played by `play <index>` (milliseconds).
    pub sample_ms: u64,
    /// Fixed seed for shuffle; random per run when unset.
    pub seed: Option<u64>,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            sample_ms: 15_000,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    pub level: LogLevelSetting,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogLevelSetting {
    #[serde(alias = "none")]
    Off,
    Error,
    #[default]
    #[serde(alias = "warning")]
    Warn,
    Info,
    Debug,
    Trace,
}
