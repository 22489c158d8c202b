//! Debounced `embedded-hal` input pins.
//!
//! [`DebouncedPin`] reads one pin into a [`Switch`], [`KeypadPins`] reads a
//! group of pins into a [`SwitchKeypad`]. Both map the pin's active level to
//! "pressed", so with `active_low` a low pin reads as [`Level::High`].
use embassy_time::{Duration, Timer};
use embedded_hal::digital::InputPin;
use switch_types::{Flank, Level, SWITCH_NONE};

use crate::clock::{Clock, EmbassyClock};
use crate::config::DebounceConfig;
use crate::error::Error;
use crate::keypad::SwitchKeypad;
use crate::switch::Switch;

/// Read whether `pin` is at its active level.
fn read_active<P: InputPin>(pin: &mut P, active_low: bool) -> Result<bool, P::Error> {
    if active_low { pin.is_low() } else { pin.is_high() }
}

/// An input pin debounced by a [`Switch`].
pub struct DebouncedPin<P: InputPin, C: Clock = EmbassyClock> {
    pin: P,
    switch: Switch<C>,
    /// Pin active level
    active_low: bool,
    /// Interval between reads in `wait_for_flank`
    poll_interval: Duration,
}

impl<P: InputPin> DebouncedPin<P, EmbassyClock> {
    /// Create a debounced pin timed by the embassy time driver.
    ///
    /// The debounced state starts at the pin's inactive level.
    pub fn new(pin: P, config: DebounceConfig) -> Self {
        Self::with_clock(pin, config, EmbassyClock)
    }
}

impl<P: InputPin, C: Clock> DebouncedPin<P, C> {
    pub fn with_clock(pin: P, config: DebounceConfig<C::Ticks>, clock: C) -> Self {
        Self {
            pin,
            switch: Switch::with_clock(Level::Low, config.debounce_time, clock),
            active_low: config.active_low,
            poll_interval: config.poll_interval,
        }
    }

    /// Read the pin without debouncing.
    pub fn read_raw(&mut self) -> Result<Level, Error<P::Error>> {
        read_active(&mut self.pin, self.active_low)
            .map(Level::from)
            .map_err(Error::Pin)
    }

    /// Debounced state, as of the last update
    pub fn state(&self) -> Level {
        self.switch.state()
    }

    pub fn is_pressed(&self) -> bool {
        self.switch.state().is_high()
    }

    /// Read the pin and update the debounced state.
    pub fn update_state(&mut self) -> Result<Level, Error<P::Error>> {
        let raw = self.read_raw()?;
        Ok(self.switch.update_state(raw))
    }

    /// Read the pin and return the flank produced by the update.
    pub fn update_flank(&mut self) -> Result<Flank, Error<P::Error>> {
        let raw = self.read_raw()?;
        Ok(self.switch.update_flank(raw))
    }

    /// Poll the pin until the debounced state changes.
    pub async fn wait_for_flank(&mut self) -> Result<Flank, Error<P::Error>> {
        loop {
            let flank = self.update_flank()?;
            if !flank.is_none() {
                return Ok(flank);
            }
            Timer::after(self.poll_interval).await;
        }
    }

    /// Give the pin back.
    pub fn release(self) -> P {
        self.pin
    }
}

/// A group of `N` input pins debounced by a [`SwitchKeypad`].
///
/// Switch `i` is the `i`-th pin. Only one pressed switch is tracked: when
/// several pins are active at once, the lowest one wins.
pub struct KeypadPins<P: InputPin, const N: usize, C: Clock = EmbassyClock> {
    pins: [P; N],
    keypad: SwitchKeypad<C>,
    /// Pin active level
    active_low: bool,
    /// Interval between reads in `wait_for_event`
    poll_interval: Duration,
}

impl<P: InputPin, const N: usize> KeypadPins<P, N, EmbassyClock> {
    /// Create a debounced keypad timed by the embassy time driver.
    pub fn new(pins: [P; N], initial: Option<u8>, config: DebounceConfig) -> Result<Self, Error<P::Error>> {
        Self::with_clock(pins, initial, config, EmbassyClock)
    }
}

impl<P: InputPin, const N: usize, C: Clock> KeypadPins<P, N, C> {
    const VALID_SIZE: () = assert!(N < SWITCH_NONE as usize, "A keypad supports at most 254 switches");

    pub fn with_clock(
        pins: [P; N],
        initial: Option<u8>,
        config: DebounceConfig<C::Ticks>,
        clock: C,
    ) -> Result<Self, Error<P::Error>> {
        let () = Self::VALID_SIZE;

        if let Some(id) = initial.filter(|&id| id as usize >= N) {
            error!("Keypad of {} switches can't start with switch {}", N, id);
            return Err(Error::InvalidSwitch(id));
        }

        Ok(Self {
            pins,
            keypad: SwitchKeypad::with_clock(initial, config.debounce_time, clock),
            active_low: config.active_low,
            poll_interval: config.poll_interval,
        })
    }

    /// Read which switch is pressed, without debouncing.
    pub fn read_raw(&mut self) -> Result<Option<u8>, Error<P::Error>> {
        let mut pressed = None;
        for (id, pin) in self.pins.iter_mut().enumerate() {
            if read_active(pin, self.active_low).map_err(Error::Pin)? {
                match pressed {
                    None => pressed = Some(id as u8),
                    Some(first) => trace!("Keypad switches {} and {} both active, ignoring {}", first, id, id),
                }
            }
        }
        Ok(pressed)
    }

    /// Debounced pressed switch, as of the last update
    pub fn state(&self) -> Option<u8> {
        self.keypad.state()
    }

    /// Read the pins and update the debounced pressed switch.
    pub fn update_state(&mut self) -> Result<Option<u8>, Error<P::Error>> {
        let raw = self.read_raw()?;
        Ok(self.keypad.update_state(raw))
    }

    /// Read the pins and return the flank produced by the update, along with
    /// the switch it belongs to.
    pub fn update_flank(&mut self) -> Result<(Flank, Option<u8>), Error<P::Error>> {
        let raw = self.read_raw()?;
        Ok(self.keypad.update_flank(raw))
    }

    /// Poll the pins until a switch is pressed or released.
    pub async fn wait_for_event(&mut self) -> Result<(Flank, Option<u8>), Error<P::Error>> {
        loop {
            let (flank, switch) = self.update_flank()?;
            if !flank.is_none() {
                return Ok((flank, switch));
            }
            Timer::after(self.poll_interval).await;
        }
    }

    /// Give the pins back.
    pub fn release(self) -> [P; N] {
        self.pins
    }
}
