//! Track collection manager: the ordered, index-addressed list of tracks
//! and the listing, filtering and playback operations over it.

mod index;
mod model;

pub use index::IndexError;
pub use model::*;
