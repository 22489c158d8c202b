//! Bounce tracking shared by [`Switch`](crate::Switch) and [`SwitchKeypad`](crate::SwitchKeypad).
use crate::clock::Timestamp;

/// Tracks whether a reading that differs from the debounced state is being timed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BounceState<T> {
    /// The reading matches the debounced state.
    #[default]
    Idle,
    /// The reading differs from the debounced state.
    /// The payload is the timestamp at which it started to differ.
    Bouncing(T),
}

/// Result of feeding a differing reading to a [`BounceState`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DebounceState {
    /// The differing reading persisted long enough and should be committed
    Debounced,
    /// The differing reading is still being timed
    InProgress,
}

impl<T: Timestamp> BounceState<T> {
    pub fn is_bouncing(&self) -> bool {
        matches!(self, BounceState::Bouncing(_))
    }

    /// Timestamp of the start of the current bounce, if any.
    pub fn started_at(&self) -> Option<T> {
        match self {
            BounceState::Idle => None,
            BounceState::Bouncing(start) => Some(*start),
        }
    }

    /// The reading is back to the debounced state, drop any bounce in progress.
    pub fn settle(&mut self) {
        *self = BounceState::Idle;
    }

    /// Feed a reading that differs from the debounced state, observed at `now`.
    ///
    /// The first differing reading only starts timing. A later one is
    /// debounced when at least `debounce_time` ticks have passed since the
    /// start, and tracking goes back to idle.
    pub fn detect_change(&mut self, now: T, debounce_time: T) -> DebounceState {
        match *self {
            BounceState::Idle => {
                *self = BounceState::Bouncing(now);
                DebounceState::InProgress
            }
            BounceState::Bouncing(start) => {
                if now.wrapping_elapsed(start) >= debounce_time {
                    *self = BounceState::Idle;
                    DebounceState::Debounced
                } else {
                    DebounceState::InProgress
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_change_starts_timing() {
        let mut state = BounceState::<u32>::Idle;
        assert_eq!(state.detect_change(1000, 250), DebounceState::InProgress);
        assert_eq!(state, BounceState::Bouncing(1000));
        assert_eq!(state.started_at(), Some(1000));
    }

    #[test]
    fn test_change_debounced_after_threshold() {
        let mut state = BounceState::<u32>::Idle;
        state.detect_change(0, 250);
        assert_eq!(state.detect_change(249, 250), DebounceState::InProgress);
        // Start time is kept while bouncing
        assert_eq!(state.started_at(), Some(0));
        assert_eq!(state.detect_change(250, 250), DebounceState::Debounced);
        assert!(!state.is_bouncing());
    }

    #[test]
    fn test_settle_restarts_timing() {
        let mut state = BounceState::<u32>::Idle;
        state.detect_change(0, 250);
        state.settle();
        assert_eq!(state.detect_change(200, 250), DebounceState::InProgress);
        assert_eq!(state.detect_change(300, 250), DebounceState::InProgress);
        assert_eq!(state.detect_change(450, 250), DebounceState::Debounced);
    }

    #[test]
    fn test_counter_wraparound() {
        let mut state = BounceState::<u16>::Idle;
        state.detect_change(u16::MAX - 100, 250);
        // 200 ticks elapsed across the overflow
        assert_eq!(state.detect_change(99, 250), DebounceState::InProgress);
        // 251 ticks elapsed across the overflow
        assert_eq!(state.detect_change(150, 250), DebounceState::Debounced);
    }

    #[test]
    fn test_zero_debounce_time() {
        let mut state = BounceState::<u32>::Idle;
        assert_eq!(state.detect_change(7, 0), DebounceState::InProgress);
        assert_eq!(state.detect_change(7, 0), DebounceState::Debounced);
    }
}
