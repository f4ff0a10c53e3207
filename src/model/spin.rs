use crate::resolver::VideoId;
use serde::Serialize;

/// Where a spin currently stands
///
/// `Idle -> Spinning -> Revealing -> Settled -> Spinning -> ...`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SpinState {
    /// No spin has completed yet
    #[default]
    Idle,

    /// Animation running, nothing chosen yet
    Spinning,

    /// Entry chosen, identifier not shown yet
    Revealing { index: usize },

    /// Spin finished. `video_id` is `None` when the chosen entry could not
    /// be resolved at reveal time.
    Settled {
        index: usize,
        video_id: Option<VideoId>,
    },
}

impl SpinState {
    /// Whether a spin is between trigger and settle
    pub fn is_in_progress(&self) -> bool {
        matches!(self, SpinState::Spinning | SpinState::Revealing { .. })
    }

    /// Whether the animation itself is running
    pub fn is_spinning(&self) -> bool {
        matches!(self, SpinState::Spinning)
    }

    /// Chosen index, only once one has been picked
    pub fn selected_index(&self) -> Option<usize> {
        match self {
            SpinState::Revealing { index } | SpinState::Settled { index, .. } => Some(*index),
            SpinState::Idle | SpinState::Spinning => None,
        }
    }

    /// Revealed identifier, only once settled
    pub fn video_id(&self) -> Option<&VideoId> {
        match self {
            SpinState::Settled { video_id, .. } => video_id.as_ref(),
            _ => None,
        }
    }
}
