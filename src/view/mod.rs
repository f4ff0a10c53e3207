//! View models for the render collaborators
//!
//! Plain serialisable data describing what a front end should draw. No
//! rendering happens in this crate.

mod cylinder;
mod listing;
mod player;
mod snapshot;

pub use cylinder::{CylinderSlot, CylinderView, DEFAULT_SLOT_COUNT};
pub use listing::{playlist_rows, PlaylistRow};
pub use player::PlayerView;
pub use snapshot::SessionSnapshot;
