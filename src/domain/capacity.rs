use chrono::Weekday;

/// Weekdays the studio opens. Sunday is never schedulable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkingDays {
    pub mon: bool,
    pub tue: bool,
    pub wed: bool,
    pub thu: bool,
    pub fri: bool,
    pub sat: bool,
}

impl WorkingDays {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn monday_to_friday() -> Self {
        Self {
            mon: true,
            tue: true,
            wed: true,
            thu: true,
            fri: true,
            sat: false,
        }
    }

    pub fn is_working(&self, day: Weekday) -> bool {
        match day {
            Weekday::Mon => self.mon,
            Weekday::Tue => self.tue,
            Weekday::Wed => self.wed,
            Weekday::Thu => self.thu,
            Weekday::Fri => self.fri,
            Weekday::Sat => self.sat,
            Weekday::Sun => false,
        }
    }

    pub fn set(&mut self, day: Weekday, working: bool) {
        match day {
            Weekday::Mon => self.mon = working,
            Weekday::Tue => self.tue = working,
            Weekday::Wed => self.wed = working,
            Weekday::Thu => self.thu = working,
            Weekday::Fri => self.fri = working,
            Weekday::Sat => self.sat = working,
            Weekday::Sun => {}
        }
    }

    pub fn days(&self) -> Vec<Weekday> {
        SCHEDULABLE_DAYS
            .iter()
            .copied()
            .filter(|day| self.is_working(*day))
            .collect()
    }

    pub fn count(&self) -> usize {
        self.days().len()
    }
}

pub const SCHEDULABLE_DAYS: [Weekday; 6] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Capacity {
    pub clients_per_hour: f64,
    pub hours_per_day: f64,
    pub working_days: WorkingDays,
    /// Percentage of theoretical slots actually booked.
    pub occupancy_rate: f64,
}
