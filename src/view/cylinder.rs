//! Revolver-cylinder spin visualisation

use serde::Serialize;

/// Slots drawn when asked for a cylinder with zero songs
pub const DEFAULT_SLOT_COUNT: usize = 6;

/// One chamber of the cylinder
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CylinderSlot {
    /// 1-based label
    pub number: usize,

    /// Rotation around the centre, in degrees
    pub angle_degrees: f64,

    /// Lit up as the chosen slot
    pub highlighted: bool,
}

/// Everything needed to draw the cylinder
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CylinderView {
    pub is_spinning: bool,
    pub selected_index: Option<usize>,
    pub song_count: usize,
    pub slots: Vec<CylinderSlot>,
}

impl CylinderView {
    /// Lay out `song_count` equally spaced slots
    ///
    /// The selected slot is only highlighted once the animation stops.
    pub fn new(is_spinning: bool, selected_index: Option<usize>, song_count: usize) -> Self {
        let slot_count = if song_count == 0 {
            DEFAULT_SLOT_COUNT
        } else {
            song_count
        };
        let step = 360.0 / slot_count as f64;

        let slots = (0..slot_count)
            .map(|i| CylinderSlot {
                number: i + 1,
                angle_degrees: step * i as f64,
                highlighted: !is_spinning && selected_index == Some(i),
            })
            .collect();

        Self {
            is_spinning,
            selected_index,
            song_count,
            slots,
        }
    }

    /// The lit slot, if any
    pub fn highlighted_slot(&self) -> Option<&CylinderSlot> {
        self.slots.iter().find(|slot| slot.highlighted)
    }
}
