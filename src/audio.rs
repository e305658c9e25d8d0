//! Playback collaborator.
//!
//! The organizer only talks to the [`Player`] trait; [`RodioPlayer`] is the
//! real implementation backed by the default output device.

use std::path::Path;

mod player;
mod sink;

pub use player::RodioPlayer;
pub use sink::SinkError;

/// Capabilities the organizer needs from an audio engine.
///
/// Implementations handle their own failures (missing device, unreadable
/// file); nothing is reported back to the caller.
pub trait Player {
    /// Start playing `filename` and return immediately.
    fn start_playing(&mut self, filename: &Path);
    /// Play a short preview of `filename` and return immediately.
    fn play_sample(&mut self, filename: &Path);
    /// Play `filename` to completion, blocking until it ends.
    fn play_whole(&mut self, filename: &Path);
    /// Halt whatever is currently playing.
    fn stop(&mut self);
}

#[cfg(test)]
mod tests;
