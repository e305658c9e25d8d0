use std::path::Path;
use std::time::Duration;

use log::{debug, error, warn};
use rodio::{OutputStream, OutputStreamBuilder, Sink};

use super::Player;
use super::sink::create_sink;

/// [`Player`] on the default output device, one track at a time.
///
/// The device is opened on first use. If that fails every call turns into a
/// no-op so the library stays usable without sound.
pub struct RodioPlayer {
    stream: Option<OutputStream>,
    stream_failed: bool,
    sink: Option<Sink>,
    sample: Duration,
}

impl RodioPlayer {
    pub fn new(sample: Duration) -> Self {
        Self {
            stream: None,
            stream_failed: false,
            sink: None,
            sample,
        }
    }

    fn stream(&mut self) -> Option<&OutputStream> {
        if self.stream.is_none() && !self.stream_failed {
            match OutputStreamBuilder::open_default_stream() {
                Ok(mut stream) => {
                    // rodio prints to stderr when the stream is dropped.
                    stream.log_on_drop(false);
                    self.stream = Some(stream);
                }
                Err(e) => {
                    error!("no audio output device, playback disabled: {e}");
                    self.stream_failed = true;
                }
            }
        }
        self.stream.as_ref()
    }

    /// Stop the current sink and start `filename` on a fresh one.
    fn replace_sink(&mut self, filename: &Path, limit: Option<Duration>) -> Option<&Sink> {
        self.stop();
        let stream = self.stream()?;
        match create_sink(stream, filename, limit) {
            Ok(sink) => {
                debug!("playing {}", filename.display());
                self.sink = Some(sink);
                self.sink.as_ref()
            }
            Err(e) => {
                warn!("{e}");
                None
            }
        }
    }
}

impl Player for RodioPlayer {
    fn start_playing(&mut self, filename: &Path) {
        self.replace_sink(filename, None);
    }

    fn play_sample(&mut self, filename: &Path) {
        let sample = self.sample;
        self.replace_sink(filename, Some(sample));
    }

    fn play_whole(&mut self, filename: &Path) {
        if let Some(sink) = self.replace_sink(filename, None) {
            sink.sleep_until_end();
        }
    }

    fn stop(&mut self) {
        if let Some(sink) = self.sink.take() {
            debug!("stopping playback");
            sink.stop();
        }
    }
}
