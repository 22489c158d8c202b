//! # Switch Debounce
//!
//! Debouncing of mechanical switches and single-press keypads for code that
//! polls its inputs from a control loop.
//!
//! - [`Switch`] debounces one two-level input and reports its debounced
//!   [`Level`] and [`Flank`].
//! - [`SwitchKeypad`] debounces "which one switch of a group is pressed" and
//!   reports the debounced switch id and the flank together with the switch
//!   it belongs to.
//!
//! Both read time from a [`Clock`], which defaults to [`EmbassyClock`]. Any
//! `FnMut() -> T` over an unsigned tick counter is a clock too, which makes
//! it easy to plug a hardware timer in. The [`pin`] module wires both
//! debouncers to `embedded-hal` input pins.
//!
//! ## Feature flags
#![doc = document_features::document_features!()]
#![no_std]

// This mod MUST go first, so that the others see its macros.
#[macro_use]
pub(crate) mod fmt;

pub mod clock;
pub mod config;
pub mod debounce;
pub mod error;
pub mod keypad;
pub mod pin;
pub mod switch;

pub use clock::{Clock, EmbassyClock, Timestamp};
pub use config::{DEFAULT_DEBOUNCE_TIME, DebounceConfig};
pub use error::Error;
pub use keypad::SwitchKeypad;
pub use pin::{DebouncedPin, KeypadPins};
pub use switch::Switch;
pub use switch_types::{Flank, Level, SWITCH_NONE};
