//! Tracker log model and loader.
//!
//! A tracker log is the JSON document an object tracker writes after
//! processing a recording: the frame count of the video plus one position
//! track per tracked object.

mod document;
mod loader;

pub use document::{Document, RawSample, RawTrack, TrackerId};
pub use loader::{LoadError, load_path, parse};

#[cfg(test)]
mod testing;
