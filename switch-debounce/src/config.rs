use embassy_time::Duration;

use crate::clock::Timestamp;

/// Default time a differing reading has to persist before it's accepted, in clock ticks.
///
/// With [`EmbassyClock`](crate::EmbassyClock) a tick is one microsecond.
pub const DEFAULT_DEBOUNCE_TIME: u8 = 250;

/// Default interval between two pin reads while waiting for an edge.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_micros(100);

/// Config for debounced pins and keypads
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DebounceConfig<T: Timestamp = u32> {
    /// Time a differing reading has to persist before it's accepted, in clock ticks
    pub debounce_time: T,
    /// Whether a low pin means the switch is active (pressed)
    pub active_low: bool,
    /// Interval between pin reads in async waits
    pub poll_interval: Duration,
}

impl<T: Timestamp> Default for DebounceConfig<T> {
    fn default() -> Self {
        Self {
            debounce_time: T::from(DEFAULT_DEBOUNCE_TIME),
            active_low: false,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl<T: Timestamp> DebounceConfig<T> {
    pub fn new(debounce_time: T) -> Self {
        Self {
            debounce_time,
            ..Default::default()
        }
    }

    pub fn active_low(mut self) -> Self {
        self.active_low = true;
        self
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }
}
