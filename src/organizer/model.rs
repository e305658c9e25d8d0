//! The `Organizer` type.
//!
//! All user-facing text goes to the organizer's output sink, one line per
//! message. Bad indices and empty-collection conditions are reported there
//! and never returned as errors.

use std::fmt::Display;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use rand::Rng;
use rand::rngs::StdRng;

use crate::audio::Player;
use crate::config::LibrarySettings;
use crate::library::{Track, TrackReader};

use super::index::{EMPTY_MESSAGE, IndexError, check_index, range_message};

/// Owns the track collection and drives a [`Player`].
pub struct Organizer<P, W> {
    tracks: Vec<Track>,
    player: P,
    out: W,
    rng: StdRng,
}

fn by_artist<'a>(tracks: &'a [Track], artist: &'a str) -> impl Iterator<Item = &'a Track> {
    tracks.iter().filter(move |t| t.artist().contains(artist))
}

fn say<W: Write>(out: &mut W, line: impl Display) {
    if let Err(e) = writeln!(out, "{line}") {
        warn!("failed to write output: {e}");
    }
}

impl<P: Player, W: Write> Organizer<P, W> {
    /// An organizer with no tracks.
    pub fn empty(player: P, out: W, rng: StdRng) -> Self {
        Self {
            tracks: Vec::new(),
            player,
            out,
            rng,
        }
    }

    /// Create an organizer and load the library folder through `reader`.
    pub fn new<R: TrackReader>(
        reader: &R,
        library: &LibrarySettings,
        player: P,
        out: W,
        rng: StdRng,
    ) -> Self {
        let mut organizer = Self::empty(player, out, rng);
        organizer.read_library(reader, &library.dir, &library.extension);

        let n = organizer.count();
        say(&mut organizer.out, format_args!("Music library loaded. {n} tracks."));
        say(&mut organizer.out, "");
        organizer
    }

    fn read_library<R: TrackReader>(&mut self, reader: &R, dir: &Path, extension: &str) {
        let loaded = reader.read_tracks(dir, extension);
        info!("loaded {} tracks from {}", loaded.len(), dir.display());
        for track in loaded {
            self.add_track(track);
        }
    }

    pub fn add_track(&mut self, track: Track) {
        debug!("adding {}", track.details());
        self.tracks.push(track);
    }

    /// Add a track known only by its file name.
    pub fn add_file(&mut self, filename: impl Into<PathBuf>) {
        self.add_track(Track::from_filename(filename));
    }

    pub fn count(&self) -> usize {
        self.tracks.len()
    }

    /// Whether `index` addresses a track. No output.
    pub fn valid_index(&self, index: isize) -> bool {
        check_index(index, self.tracks.len()).is_ok()
    }

    /// Whether `index` addresses a track, printing why not when it doesn't.
    pub fn index_valid(&mut self, index: isize) -> bool {
        self.checked(index).is_some()
    }

    fn checked(&mut self, index: isize) -> Option<usize> {
        check_index(index, self.tracks.len())
            .inspect_err(|e: &IndexError| say(&mut self.out, e))
            .ok()
    }

    fn in_range(&mut self, index: isize) -> Option<usize> {
        let checked = check_index(index, self.tracks.len()).ok();
        if checked.is_none() {
            say(&mut self.out, range_message(self.tracks.len()));
        }
        checked
    }

    /// Remove and return the track at `index`; later tracks shift down by one.
    pub fn remove_track(&mut self, index: isize) -> Option<Track> {
        let i = self.in_range(index)?;
        let removed = self.tracks.remove(i);
        debug!("removed {}", removed.details());
        Some(removed)
    }

    pub fn list_track(&mut self, index: isize) {
        if let Some(i) = self.in_range(index) {
            say(
                &mut self.out,
                format_args!("Track {index}: {}", self.tracks[i].details()),
            );
        }
    }

    /// All tracks in insertion order.
    pub fn tracks(&self) -> impl Iterator<Item = &Track> {
        self.tracks.iter()
    }

    /// Tracks whose artist contains `artist` (case-sensitive).
    pub fn tracks_by_artist<'a>(&'a self, artist: &'a str) -> impl Iterator<Item = &'a Track> {
        by_artist(&self.tracks, artist)
    }

    pub fn list_all_tracks(&mut self) {
        say(&mut self.out, "Track listing: ");
        for track in &self.tracks {
            say(&mut self.out, track.details());
        }
        say(&mut self.out, "");
    }

    /// Print every track by a matching artist. Prints nothing when none match.
    pub fn list_by_artist(&mut self, artist: &str) {
        for track in by_artist(&self.tracks, artist) {
            say(&mut self.out, track.details());
        }
    }

    /// Preview the track at `index`.
    pub fn play_track(&mut self, index: isize) {
        let Some(i) = self.checked(index) else {
            return;
        };
        let track = &self.tracks[i];
        self.player.play_sample(track.filename());
        say(
            &mut self.out,
            format_args!("Now playing: {} - {}", track.artist(), track.title()),
        );
    }

    pub fn play_first(&mut self) {
        if let Some(track) = self.tracks.first() {
            self.player.start_playing(track.filename());
        }
    }

    pub fn stop_playing(&mut self) {
        self.player.stop();
    }

    /// Start one uniformly random track.
    pub fn shuffle(&mut self) {
        if self.tracks.is_empty() {
            say(&mut self.out, EMPTY_MESSAGE);
            return;
        }

        let i = self.rng.gen_range(0..self.tracks.len());
        let track = &self.tracks[i];
        self.player.start_playing(track.filename());
        say(&mut self.out, format_args!("Now Playing: {}", track.details()));
    }

    /// Play every track once, in random order, each to completion.
    pub fn shuffle_all(&mut self) {
        if self.tracks.is_empty() {
            say(&mut self.out, EMPTY_MESSAGE);
            return;
        }

        let mut remaining: Vec<usize> = (0..self.tracks.len()).collect();
        while !remaining.is_empty() {
            let pick = self.rng.gen_range(0..remaining.len());
            let track = &self.tracks[remaining.swap_remove(pick)];
            say(&mut self.out, format_args!("Now Playing: {}", track.details()));
            self.player.play_whole(track.filename());
        }
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn player(&self) -> &P {
        &self.player
    }
}
