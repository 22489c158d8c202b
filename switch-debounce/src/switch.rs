//! Debouncing of a single two-level switch.
use switch_types::{Flank, Level};

use crate::clock::{Clock, EmbassyClock};
use crate::config::DEFAULT_DEBOUNCE_TIME;
use crate::debounce::{BounceState, DebounceState};

/// A debounced two-level switch.
///
/// Feed it one raw reading per poll with [`update_state`](Switch::update_state)
/// or [`update_flank`](Switch::update_flank). The debounced state only changes
/// once a differing reading has been seen continuously for at least the
/// debounce time. A reading equal to the debounced state cancels a pending
/// change.
pub struct Switch<C: Clock = EmbassyClock> {
    /// Time source for bounce timing
    clock: C,
    /// Time a differing reading has to persist before it's accepted
    debounce_time: C::Ticks,
    /// Debounce tracking of the raw reading
    bounce: BounceState<C::Ticks>,
    /// Debounced state
    state: Level,
}

impl Switch<EmbassyClock> {
    /// Create a switch with the default debounce time of 250us.
    pub fn new(initial: Level) -> Self {
        Self::with_debounce_time(initial, DEFAULT_DEBOUNCE_TIME.into())
    }

    /// Create a switch with the given debounce time, in microseconds.
    pub fn with_debounce_time(initial: Level, debounce_time: u32) -> Self {
        Self::with_clock(initial, debounce_time, EmbassyClock)
    }
}

impl<C: Clock> Switch<C> {
    /// Create a switch timed by `clock`, `debounce_time` is in ticks of that clock.
    pub fn with_clock(initial: Level, debounce_time: C::Ticks, clock: C) -> Self {
        Self {
            clock,
            debounce_time,
            bounce: BounceState::Idle,
            state: initial,
        }
    }

    /// Debounced state
    pub fn state(&self) -> Level {
        self.state
    }

    /// Whether a differing reading is currently being timed
    pub fn is_bouncing(&self) -> bool {
        self.bounce.is_bouncing()
    }

    pub fn debounce_time(&self) -> C::Ticks {
        self.debounce_time
    }

    /// Update the switch with the latest raw reading and return the debounced state.
    pub fn update_state(&mut self, raw: Level) -> Level {
        if raw == self.state {
            self.bounce.settle();
            return self.state;
        }

        let now = self.clock.now();
        match self.bounce.detect_change(now, self.debounce_time) {
            DebounceState::Debounced => {
                debug!("Switch debounced: {:?} -> {:?}", self.state, raw);
                self.state = raw;
            }
            DebounceState::InProgress => {
                trace!("Switch bouncing towards {:?}", raw);
            }
        }
        self.state
    }

    /// Update the switch with the latest raw reading and return the flank it produced.
    ///
    /// This calls [`update_state`](Switch::update_state) once, so don't call both
    /// for the same reading.
    pub fn update_flank(&mut self, raw: Level) -> Flank {
        let old = self.state;
        let new = self.update_state(raw);
        Flank::from_levels(old, new)
    }
}
