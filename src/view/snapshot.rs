//! Whole-session snapshot for machine-readable output

use super::{CylinderView, PlayerView, PlaylistRow};
use crate::model::SpinState;
use serde::Serialize;

/// Everything a front end needs to redraw, in one value
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub playlist: Vec<PlaylistRow>,
    pub state: SpinState,
    pub cylinder: CylinderView,
    pub player: PlayerView,
}
