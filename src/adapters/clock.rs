//! System clock adapter.

use chrono::{Local, NaiveDate};

use crate::ports::Clock;

/// Clock backed by the machine's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
