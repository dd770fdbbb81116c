//! Day-by-day walk over the calendar range covered by a ledger.

use crate::core::ledger::ActivityLedger;
use crate::errors::{AppError, AppResult};
use crate::models::day_group::DayGroup;
use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How the first and last day of the walk are chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RangeMode {
    /// First and last date in input order.
    #[default]
    Insertion,
    /// Earliest and latest date.
    Chronological,
}

/// One walked day. `group` is `None` for days without records.
#[derive(Debug, Clone, Copy)]
pub struct CalendarDay<'a> {
    /// 1-based
    pub index: usize,
    pub date: NaiveDate,
    pub group: Option<&'a DayGroup>,
}

/// Iterator over every calendar day from `start` to `end` inclusive.
pub struct CalendarWalk<'a> {
    ledger: &'a ActivityLedger,
    next: Option<NaiveDate>,
    end: NaiveDate,
    index: usize,
}

impl<'a> Iterator for CalendarWalk<'a> {
    type Item = CalendarDay<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let date = self.next?;
        self.index += 1;

        self.next = if date == self.end {
            None
        } else {
            date.succ_opt()
        };

        Some(CalendarDay {
            index: self.index,
            date,
            group: self.ledger.get(date),
        })
    }
}

/// Start walking `ledger` according to `mode`.
///
/// Fails on an empty ledger, and in insertion mode when the last inserted
/// date lies before the first one (the forward walk would never reach it).
pub fn walk(ledger: &ActivityLedger, mode: RangeMode) -> AppResult<CalendarWalk<'_>> {
    let bounds = match mode {
        RangeMode::Insertion => ledger.first_date().zip(ledger.last_date()),
        RangeMode::Chronological => ledger.min_date().zip(ledger.max_date()),
    };

    let (start, end) = bounds.ok_or(AppError::EmptyLedger)?;

    if end < start {
        return Err(AppError::InvalidRange {
            first: start.to_string(),
            last: end.to_string(),
        });
    }

    Ok(CalendarWalk {
        ledger,
        next: Some(start),
        end,
        index: 0,
    })
}
