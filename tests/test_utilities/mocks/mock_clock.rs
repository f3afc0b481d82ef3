use freeze_export::prelude::*;

/// Mock Clock that always returns the same date
pub struct MockClock {
    pub date: ExportDate,
}

impl MockClock {
    pub fn on(date: &str) -> Self {
        Self {
            date: ExportDate::parse(date).unwrap(),
        }
    }
}

impl Clock for MockClock {
    fn today(&self) -> ExportDate {
        self.date
    }
}
