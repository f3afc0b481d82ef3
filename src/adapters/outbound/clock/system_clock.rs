use crate::package_export::domain::ExportDate;
use crate::ports::outbound::Clock;
use chrono::Local;

/// SystemClock adapter reading the local wall-clock date
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn today(&self) -> ExportDate {
        ExportDate::new(Local::now().date_naive())
    }
}
