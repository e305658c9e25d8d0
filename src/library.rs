//! Track records and the reader that builds them from a folder on disk.

mod display;
mod model;
mod scan;

pub use model::*;
pub use scan::{FolderReader, TrackReader};
