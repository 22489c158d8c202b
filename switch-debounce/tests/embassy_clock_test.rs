mod common;
pub(crate) use crate::common::*;

use embassy_futures::block_on;
use embassy_futures::select::{Either, select};
use embassy_futures::yield_now;
use embassy_time::{Duration, MockDriver};
use switch_debounce::{DebounceConfig, DebouncedPin, Flank, KeypadPins, Level, Switch, SwitchKeypad};

fn advance_micros(micros: u64) {
    MockDriver::get().advance(Duration::from_micros(micros));
}

#[test]
fn test_switch_default_debounce_time() {
    let _time = lock_mock_time();
    let mut switch = Switch::new(Level::Low);
    assert_eq!(switch.debounce_time(), 250);

    assert_eq!(switch.update_flank(Level::High), Flank::None);
    advance_micros(100);
    assert_eq!(switch.update_flank(Level::High), Flank::None);
    advance_micros(160);
    assert_eq!(switch.update_flank(Level::High), Flank::Rising);
}

#[test]
fn test_keypad_with_debounce_time() {
    let _time = lock_mock_time();
    let mut keypad = SwitchKeypad::with_debounce_time(None, 5_000);

    keypad.update_state(Some(0));
    advance_micros(4_999);
    assert_eq!(keypad.update_flank(Some(0)), (Flank::None, None));
    advance_micros(1);
    assert_eq!(keypad.update_flank(Some(0)), (Flank::Rising, Some(0)));
}

#[test]
fn test_wait_for_flank() {
    let _time = lock_mock_time();
    let pin = TestPin::new(true);
    let mut debounced = DebouncedPin::new(pin, DebounceConfig::default());

    let result = block_on(async {
        let drive = async {
            for _ in 0..100 {
                advance_micros(50);
                yield_now().await;
            }
        };
        match select(debounced.wait_for_flank(), drive).await {
            Either::First(flank) => flank,
            Either::Second(_) => panic!("Pin was never debounced"),
        }
    });
    assert_eq!(result, Ok(Flank::Rising));
    assert_eq!(debounced.state(), Level::High);
}

#[test]
fn test_wait_for_keypad_event() {
    let _time = lock_mock_time();
    let pins = [TestPin::new(false), TestPin::new(false), TestPin::new(true)];
    let mut keypad = KeypadPins::new(pins, None, DebounceConfig::default()).unwrap();

    let result = block_on(async {
        let drive = async {
            for _ in 0..100 {
                advance_micros(50);
                yield_now().await;
            }
        };
        match select(keypad.wait_for_event(), drive).await {
            Either::First(event) => event,
            Either::Second(_) => panic!("Keypad was never debounced"),
        }
    });
    assert_eq!(result, Ok((Flank::Rising, Some(2))));
}
