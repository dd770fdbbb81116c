#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use calamine::{Data, Reader, open_workbook_auto};
use chrono::NaiveDate;
use rust_xlsxwriter::{Format, Workbook};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub fn tsum() -> Command {
    cargo_bin_cmd!("travelsum")
}

/// Create (and empty) a per-test directory inside the system temp dir
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("travelsum_{}", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Value of the duration column in a fixture row
pub enum Duration {
    /// Stored as a time-of-day serial, like spreadsheet apps do
    Minutes(u32),
    Text(&'static str),
    Blank,
}

/// One input row: (date, mode, duration, distance)
pub struct InputRow {
    pub date: Option<NaiveDate>,
    pub mode: &'static str,
    pub duration: Duration,
    pub distance: &'static str,
}

pub fn row(
    date: Option<NaiveDate>,
    mode: &'static str,
    duration: Duration,
    distance: &'static str,
) -> InputRow {
    InputRow {
        date,
        mode,
        duration,
        distance,
    }
}

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn excel_serial(d: NaiveDate) -> f64 {
    (d - ymd(1899, 12, 30)).num_days() as f64
}

/// Write an input workbook laid out as date | - | mode | - | duration | distance
pub fn write_input(path: &Path, rows: &[InputRow]) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    let date_fmt = Format::new().set_num_format("yyyy-mm-dd");
    let time_fmt = Format::new().set_num_format("h:mm");

    for (col, h) in ["Date", "Start", "Mode", "End", "Duration", "Distance"]
        .iter()
        .enumerate()
    {
        sheet.write(0, col as u16, *h).expect("write header");
    }

    for (i, r) in rows.iter().enumerate() {
        let row = i as u32 + 1;
        if let Some(d) = r.date {
            sheet
                .write_with_format(row, 0, excel_serial(d), &date_fmt)
                .expect("write date");
        }
        if !r.mode.is_empty() {
            sheet.write(row, 2, r.mode).expect("write mode");
        }
        match r.duration {
            Duration::Minutes(m) => {
                sheet
                    .write_with_format(row, 4, m as f64 / 1440.0, &time_fmt)
                    .expect("write duration");
            }
            Duration::Text(t) => {
                sheet.write(row, 4, t).expect("write duration");
            }
            Duration::Blank => {}
        }
        if !r.distance.is_empty() {
            sheet.write(row, 5, r.distance).expect("write distance");
        }
    }

    workbook.save(path).expect("save input workbook");
}

/// All rows of the first worksheet of a produced workbook
pub fn read_output(path: &Path) -> Vec<Vec<Data>> {
    let mut workbook = open_workbook_auto(path).expect("open output");
    let name = workbook.sheet_names()[0].clone();
    let range = workbook.worksheet_range(&name).expect("read sheet");
    range.rows().map(|r| r.to_vec()).collect()
}

pub fn as_f64(d: &Data) -> f64 {
    match d {
        Data::Float(f) => *f,
        Data::Int(i) => *i as f64,
        Data::DateTime(dt) => dt.as_f64(),
        other => panic!("not a number: {other:?}"),
    }
}

pub fn as_text(d: &Data) -> String {
    match d {
        Data::String(s) => s.clone(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}
