//! Debouncing of a keypad where at most one switch is pressed at a time.
//!
//! The keypad reading is the id of the pressed switch, or `None` when no
//! switch is pressed. Simultaneous presses of several switches aren't
//! supported: going straight from one pressed switch to another is taken as a
//! release of the first one.
use switch_types::Flank;
use switch_types::keypad::{switch_from_raw, switch_to_raw};

use crate::clock::{Clock, EmbassyClock};
use crate::config::DEFAULT_DEBOUNCE_TIME;
use crate::debounce::{BounceState, DebounceState};

/// A debounced single-press keypad.
pub struct SwitchKeypad<C: Clock = EmbassyClock> {
    /// Time source for bounce timing
    clock: C,
    /// Time a differing reading has to persist before it's accepted
    debounce_time: C::Ticks,
    /// Debounce tracking of the raw reading
    bounce: BounceState<C::Ticks>,
    /// Debounced pressed switch
    state: Option<u8>,
}

impl SwitchKeypad<EmbassyClock> {
    /// Create a keypad with the default debounce time of 250us.
    pub fn new(initial: Option<u8>) -> Self {
        Self::with_debounce_time(initial, DEFAULT_DEBOUNCE_TIME.into())
    }

    /// Create a keypad with the given debounce time, in microseconds.
    pub fn with_debounce_time(initial: Option<u8>, debounce_time: u32) -> Self {
        Self::with_clock(initial, debounce_time, EmbassyClock)
    }
}

impl<C: Clock> SwitchKeypad<C> {
    /// Create a keypad timed by `clock`, `debounce_time` is in ticks of that clock.
    pub fn with_clock(initial: Option<u8>, debounce_time: C::Ticks, clock: C) -> Self {
        Self {
            clock,
            debounce_time,
            bounce: BounceState::Idle,
            state: initial,
        }
    }

    /// Debounced pressed switch, `None` if no switch is pressed
    pub fn state(&self) -> Option<u8> {
        self.state
    }

    /// Whether a differing reading is currently being timed
    pub fn is_bouncing(&self) -> bool {
        self.bounce.is_bouncing()
    }

    pub fn debounce_time(&self) -> C::Ticks {
        self.debounce_time
    }

    /// Update the keypad with the switch currently read as pressed and return
    /// the debounced pressed switch.
    ///
    /// If `raw` is a switch other than the debounced pressed one, the
    /// debounced switch is released immediately and `raw` is dropped.
    pub fn update_state(&mut self, raw: Option<u8>) -> Option<u8> {
        if raw == self.state {
            self.bounce.settle();
            return self.state;
        }

        if let (Some(pressed), Some(other)) = (self.state, raw) {
            debug!("Keypad switch {} replaced by {}, releasing {}", pressed, other, pressed);
            self.bounce.settle();
            self.state = None;
            return self.state;
        }

        let now = self.clock.now();
        match self.bounce.detect_change(now, self.debounce_time) {
            DebounceState::Debounced => {
                debug!("Keypad debounced: {:?} -> {:?}", self.state, raw);
                self.state = raw;
            }
            DebounceState::InProgress => {
                trace!("Keypad bouncing towards {:?}", raw);
            }
        }
        self.state
    }

    /// Update the keypad with the switch currently read as pressed and return
    /// the flank it produced, along with the switch the flank belongs to.
    ///
    /// - `Rising`: the returned switch was pressed
    /// - `Falling`: the returned switch was released
    /// - `None`: the returned switch is still pressed, or `None` if no switch is
    ///
    /// This calls [`update_state`](SwitchKeypad::update_state) once, so don't
    /// call both for the same reading.
    pub fn update_flank(&mut self, raw: Option<u8>) -> (Flank, Option<u8>) {
        let old = self.state;
        let new = self.update_state(raw);
        match (old, new) {
            (old, new) if old == new => (Flank::None, new),
            (None, Some(pressed)) => (Flank::Rising, Some(pressed)),
            // Direct switch to switch changes are never committed, so any other
            // change is a release of the old switch
            (released, _) => (Flank::Falling, released),
        }
    }

    /// [`update_state`](SwitchKeypad::update_state) with switches encoded as
    /// raw bytes, where [`SWITCH_NONE`](switch_types::SWITCH_NONE) means no switch.
    pub fn update_state_raw(&mut self, raw: u8) -> u8 {
        switch_to_raw(self.update_state(switch_from_raw(raw)))
    }

    /// [`update_flank`](SwitchKeypad::update_flank) with switches encoded as
    /// raw bytes, where [`SWITCH_NONE`](switch_types::SWITCH_NONE) means no switch.
    pub fn update_flank_raw(&mut self, raw: u8) -> (Flank, u8) {
        let (flank, switch) = self.update_flank(switch_from_raw(raw));
        (flank, switch_to_raw(switch))
    }
}
