use chrono::{Local, Timelike};

use super::time::TimeValue;

/// Provider of the instant the clock should display.
pub trait TimeSource {
    fn now(&self) -> TimeValue;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now(&self) -> TimeValue {
        (**self).now()
    }
}

impl<T: TimeSource + ?Sized> TimeSource for Box<T> {
    fn now(&self) -> TimeValue {
        (**self).now()
    }
}

/// Local wall-clock time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> TimeValue {
        from_timelike(&Local::now())
    }
}

/// Always reports the same instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock {
    time: TimeValue,
}

impl FixedClock {
    pub fn new(time: TimeValue) -> Self {
        Self { time }
    }

    pub fn set(&mut self, time: TimeValue) {
        self.time = time;
    }
}

impl TimeSource for FixedClock {
    fn now(&self) -> TimeValue {
        self.time
    }
}

/// Converts any chrono time, folding a leap second into second 59.
pub fn from_timelike<T: Timelike>(time: &T) -> TimeValue {
    TimeValue::new(time.hour(), time.minute(), time.second().min(59))
        .unwrap_or(TimeValue::MIDNIGHT)
}
