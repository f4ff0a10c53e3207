//! Session data model
//!
//! The playlist and the spin state are plain data here; the engine owns
//! both and is the only thing that moves the state forward.

mod playlist;
mod spin;

pub use playlist::Playlist;
pub use spin::SpinState;
