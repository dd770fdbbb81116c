use crate::models::activity::Activity;
use chrono::NaiveDate;

/// All activities sharing one calendar date, in input row order.
#[derive(Debug, Clone, PartialEq)]
pub struct DayGroup {
    pub date: NaiveDate,
    pub activities: Vec<Activity>,
}

impl DayGroup {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            activities: Vec::new(),
        }
    }
}
