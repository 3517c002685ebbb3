use chrono::{Duration, NaiveDateTime};

/// The reference date the page is showing: "now" moved by whole days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DaySelection {
    offset_days: i64,
}

impl DaySelection {
    pub fn offset_days(&self) -> i64 {
        self.offset_days
    }

    pub fn next_day(&mut self) {
        self.offset_days = self.offset_days.saturating_add(1);
    }

    pub fn prev_day(&mut self) {
        self.offset_days = self.offset_days.saturating_sub(1);
    }

    pub fn back_to_today(&mut self) {
        self.offset_days = 0;
    }

    /// Keeps the clock's time of day and shifts only the date.
    pub fn resolve(&self, now: NaiveDateTime) -> NaiveDateTime {
        now.checked_add_signed(Duration::days(self.offset_days))
            .unwrap_or(now)
    }
}
