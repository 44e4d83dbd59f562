//! Time-of-day source for the "last break" timestamps.

use std::cell::Cell;

use chrono::{Local, NaiveTime};

/// Supplies the current wall-clock time of day.
pub trait Clock {
    fn time_of_day(&self) -> NaiveTime;
}

/// Local wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn time_of_day(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// A clock that always reports the time it was last set to.
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Cell<NaiveTime>,
}

impl FixedClock {
    pub fn new(now: NaiveTime) -> Self {
        Self { now: Cell::new(now) }
    }

    pub fn set(&self, now: NaiveTime) {
        self.now.set(now);
    }
}

impl Clock for FixedClock {
    fn time_of_day(&self) -> NaiveTime {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn time_of_day(&self) -> NaiveTime {
        (**self).time_of_day()
    }
}
