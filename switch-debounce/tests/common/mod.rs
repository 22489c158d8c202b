use core::cell::Cell;
use std::rc::Rc;
use std::sync::{Mutex, MutexGuard};

use embedded_hal::digital::{ErrorKind, ErrorType, InputPin};

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// The embassy mock time driver is global, tests that advance it must not overlap.
static MOCK_TIME: Mutex<()> = Mutex::new(());

pub fn lock_mock_time() -> MutexGuard<'static, ()> {
    MOCK_TIME.lock().unwrap_or_else(|e| e.into_inner())
}

/// Error of a [`TestPin`] that has been disconnected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Disconnected;

impl embedded_hal::digital::Error for Disconnected {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Input pin whose level is set by the test, `None` makes reads fail.
#[derive(Clone)]
pub struct TestPin {
    level: Rc<Cell<Option<bool>>>,
}

impl TestPin {
    pub fn new(high: bool) -> Self {
        Self {
            level: Rc::new(Cell::new(Some(high))),
        }
    }

    pub fn set_high(&self, high: bool) {
        self.level.set(Some(high));
    }

    pub fn disconnect(&self) {
        self.level.set(None);
    }
}

impl ErrorType for TestPin {
    type Error = Disconnected;
}

impl InputPin for TestPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.level.get().ok_or(Disconnected)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.level.get().map(|high| !high).ok_or(Disconnected)
    }
}

/// Manually advanced clock for deterministic debounce timing
#[derive(Clone, Default)]
pub struct TestClock {
    ticks: Rc<Cell<u32>>,
}

impl TestClock {
    pub fn set(&self, ticks: u32) {
        self.ticks.set(ticks);
    }

    pub fn source(&self) -> impl FnMut() -> u32 + use<> {
        let ticks = self.ticks.clone();
        move || ticks.get()
    }
}
