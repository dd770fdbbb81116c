//! Grouping of parsed activities by calendar date.

use crate::config::Config;
use crate::core::parser::parse_row;
use crate::errors::AppResult;
use crate::import::RawRow;
use crate::models::activity::Activity;
use crate::models::day_group::DayGroup;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Day groups in the order their dates were first seen.
#[derive(Debug, Default, Clone)]
pub struct ActivityLedger {
    groups: Vec<DayGroup>,
    index: HashMap<NaiveDate, usize>,
}

impl ActivityLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append to the group for `date`, creating it on first sight.
    pub fn insert(&mut self, date: NaiveDate, activity: Activity) {
        let pos = *self.index.entry(date).or_insert_with(|| {
            self.groups.push(DayGroup::new(date));
            self.groups.len() - 1
        });
        self.groups[pos].activities.push(activity);
    }

    pub fn get(&self, date: NaiveDate) -> Option<&DayGroup> {
        self.index.get(&date).map(|&pos| &self.groups[pos])
    }

    pub fn groups(&self) -> &[DayGroup] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Date of the first inserted group.
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.groups.first().map(|g| g.date)
    }

    /// Date of the last inserted group.
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.groups.last().map(|g| g.date)
    }

    pub fn min_date(&self) -> Option<NaiveDate> {
        self.groups.iter().map(|g| g.date).min()
    }

    pub fn max_date(&self) -> Option<NaiveDate> {
        self.groups.iter().map(|g| g.date).max()
    }
}

/// Counters collected while ingesting the input rows.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IngestStats {
    pub rows_read: usize,
    pub rows_skipped: usize,
    pub activities: usize,
    /// 1-based row numbers whose duration cell could not be decoded.
    pub undecoded_durations: Vec<usize>,
}

/// Single ingestion pass: skip header rows and rows without a date, parse
/// the rest and group them by date.
pub fn ingest(rows: &[RawRow], cfg: &Config) -> AppResult<(ActivityLedger, IngestStats)> {
    let mut ledger = ActivityLedger::new();
    let mut stats = IngestStats::default();

    for (i, row) in rows.iter().enumerate().skip(cfg.header_rows) {
        stats.rows_read += 1;

        match parse_row(row, i + 1, &cfg.columns)? {
            Some(parsed) => {
                if !parsed.duration_decoded {
                    stats.undecoded_durations.push(i + 1);
                }
                ledger.insert(parsed.date, parsed.activity);
                stats.activities += 1;
            }
            None => stats.rows_skipped += 1,
        }
    }

    Ok((ledger, stats))
}
