//! The music radio: random tracks from a local library played in a voice channel.

pub mod library;
pub mod radio;

pub use library::{MusicLibrary, TrackInfo};
pub use radio::{Radio, RadioState};
