/// Errors of debounced pins and keypads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Reading an input pin failed
    Pin(E),
    /// The switch id doesn't belong to the keypad
    InvalidSwitch(u8),
}

impl<E: core::fmt::Debug> core::fmt::Display for Error<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Pin(e) => write!(f, "input pin read failed: {e:?}"),
            Error::InvalidSwitch(id) => write!(f, "invalid keypad switch id {id}"),
        }
    }
}

impl<E: core::fmt::Debug> core::error::Error for Error<E> {}
