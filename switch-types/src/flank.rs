//! Edges of a debounced signal.
use postcard::experimental::max_size::MaxSize;
use serde::{Deserialize, Serialize};

use crate::level::Level;

/// The flank produced by one debounce update.
///
/// The discriminants are the signed difference `new - old` of the debounced
/// level, so `Falling = -1`, `None = 0` and `Rising = 1`.
#[repr(i8)]
#[derive(Serialize, Deserialize, Clone, Copy, Debug, MaxSize, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Flank {
    /// Debounced state went from high to low, or a keypad switch was released
    Falling = -1,
    /// No change
    #[default]
    None = 0,
    /// Debounced state went from low to high, or a keypad switch was pressed
    Rising = 1,
}

impl Flank {
    /// Flank produced by a transition from `old` to `new`.
    pub const fn from_levels(old: Level, new: Level) -> Self {
        match (old, new) {
            (Level::Low, Level::High) => Flank::Rising,
            (Level::High, Level::Low) => Flank::Falling,
            _ => Flank::None,
        }
    }

    pub const fn is_none(self) -> bool {
        matches!(self, Flank::None)
    }
}

impl From<Flank> for i8 {
    fn from(flank: Flank) -> Self {
        flank as i8
    }
}
