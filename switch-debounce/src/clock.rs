//! Timestamp sources used for debouncing.
//!
//! A clock only ever has to answer "how many ticks have passed since then".
//! Tick counters are fixed-width and wrap around, so elapsed time is always
//! computed with modular subtraction.
use embassy_time::Instant;

/// A fixed-width unsigned tick counter.
pub trait Timestamp: Copy + PartialEq + PartialOrd + From<u8> {
    /// Ticks elapsed from `since` to `self`, modulo the counter width.
    ///
    /// A counter overflow between the two readings doesn't matter as long as
    /// less than one full counter period has passed.
    fn wrapping_elapsed(self, since: Self) -> Self;
}

macro_rules! impl_timestamp {
    ($($t:ty),*) => {
        $(
            impl Timestamp for $t {
                #[inline]
                fn wrapping_elapsed(self, since: Self) -> Self {
                    self.wrapping_sub(since)
                }
            }
        )*
    };
}

impl_timestamp!(u8, u16, u32, u64, usize);

/// A monotonic source of timestamps.
pub trait Clock {
    type Ticks: Timestamp;

    /// Read the current timestamp.
    fn now(&mut self) -> Self::Ticks;
}

impl<T: Timestamp, F: FnMut() -> T> Clock for F {
    type Ticks = T;

    fn now(&mut self) -> T {
        self()
    }
}

/// Clock backed by the embassy time driver, in microseconds.
///
/// The 64-bit embassy instant is truncated to 32 bits, so the tick counter
/// wraps about every 71.6 minutes.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    type Ticks = u32;

    fn now(&mut self) -> u32 {
        Instant::now().as_micros() as u32
    }
}
