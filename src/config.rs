//! Settings for the organizer: where the library lives, how tracks are
//! previewed and shuffled, and how chatty the logger is.
//!
//! Values come from an optional TOML file and `ORGANIZER__*` environment
//! variables layered over struct defaults.

mod load;
mod schema;

pub use schema::*;
