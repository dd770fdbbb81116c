use serde::Serialize;
use std::ops::{Add, AddAssign};

/// Duration (minutes) and distance accumulated for one bucket.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
pub struct Totals {
    pub minutes: i64,
    pub distance: f64,
}

impl Add for Totals {
    type Output = Totals;

    fn add(self, rhs: Totals) -> Totals {
        Totals {
            minutes: self.minutes + rhs.minutes,
            distance: self.distance + rhs.distance,
        }
    }
}

impl AddAssign for Totals {
    fn add_assign(&mut self, rhs: Totals) {
        *self = *self + rhs;
    }
}

/// Per-day sums for one walked calendar day.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyAggregate {
    pub walk: Totals,
    pub bicycle: Totals,
    pub drive: Totals,
    pub passenger: Totals,
    pub has_activity: bool,
    pub unclassified: usize,
}

impl DailyAggregate {
    /// walk + bicycle
    pub fn active(&self) -> Totals {
        self.walk + self.bicycle
    }

    /// drive + passenger
    pub fn passive(&self) -> Totals {
        self.drive + self.passenger
    }
}
