//! Opening files as `rodio` sources and sinks.

use std::fmt;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::time::Duration;

use rodio::decoder::DecoderError;
use rodio::{Decoder, OutputStream, Sink, Source};

#[derive(Debug)]
pub enum SinkError {
    Open { path: PathBuf, source: io::Error },
    Decode { path: PathBuf, source: DecoderError },
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open { path, source } => {
                write!(f, "failed to open {}: {source}", path.display())
            }
            Self::Decode { path, source } => {
                write!(f, "failed to decode {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for SinkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Open { source, .. } => Some(source),
            Self::Decode { source, .. } => Some(source),
        }
    }
}

pub(super) fn open_decoder(path: &Path) -> Result<Decoder<BufReader<File>>, SinkError> {
    let file = File::open(path).map_err(|source| SinkError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    Decoder::new(BufReader::new(file)).map_err(|source| SinkError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Create a playing `Sink` for `path`, cut off after `limit` when given.
pub(super) fn create_sink(
    stream: &OutputStream,
    path: &Path,
    limit: Option<Duration>,
) -> Result<Sink, SinkError> {
    let source = open_decoder(path)?;

    let sink = Sink::connect_new(stream.mixer());
    match limit {
        Some(limit) => sink.append(source.take_duration(limit)),
        None => sink.append(source),
    }
    Ok(sink)
}
