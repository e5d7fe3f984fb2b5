//! Batch input: a CSV roster with one person-month per row.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use csv::{ReaderBuilder, Trim, Writer};
use serde::Deserialize;
use tracing::{info, warn};

use crate::calendar::CalendarEvent;
use crate::error::RequestError;
use crate::request::{self, ScheduleRequest};
use crate::session::{CalendarSession, ViewState};

pub const HEADERS: [&str; 4] = ["이름", "년도", "월", "근무코드"];

#[derive(Debug, Deserialize)]
pub struct RosterRecord {
    #[serde(rename = "이름", default)]
    pub name: String,
    /// Either `2024` or `2024년`.
    #[serde(rename = "년도", default)]
    pub year: String,
    /// Either `7` or `7월`.
    #[serde(rename = "월", default)]
    pub month: String,
    #[serde(rename = "근무코드", default)]
    pub code: String,
}

impl RosterRecord {
    pub fn to_request(&self) -> Result<ScheduleRequest, RequestError> {
        let year = request::parse_year(&self.year)?;
        let month = request::parse_month(&self.month)?;
        ScheduleRequest::new(self.name.clone(), year, month, self.code.clone())
    }
}

/// A roster row that produced no calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based data row, not counting the header.
    pub row: usize,
    pub reason: String,
}

#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub calendars: Vec<(ScheduleRequest, Vec<CalendarEvent>)>,
    pub skipped: Vec<SkippedRow>,
}

fn roster_path(filename: &str) -> PathBuf {
    if filename.ends_with(".csv") {
        PathBuf::from(filename)
    } else {
        PathBuf::from(format!("{filename}.csv"))
    }
}

/// Creates an empty roster with the expected headers and returns its path.
pub fn init_roster(filename: &str) -> Result<PathBuf> {
    let path = roster_path(filename);
    let mut wtr = Writer::from_path(&path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    wtr.write_record(HEADERS)?;
    wtr.flush()?;
    info!(path = %path.display(), "roster template created");
    Ok(path)
}

pub fn load_roster<P: AsRef<Path>>(path: P) -> Result<Vec<RosterRecord>> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    read_roster(file).with_context(|| format!("failed to read roster {}", path.display()))
}

pub fn read_roster<R: io::Read>(reader: R) -> Result<Vec<RosterRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();
    for result in rdr.deserialize() {
        records.push(result?);
    }
    Ok(records)
}

/// Runs every row through a fresh submission. Invalid rows are skipped and
/// reported; they never stop the others.
pub fn build_all(records: &[RosterRecord]) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();
    for (idx, record) in records.iter().enumerate() {
        let row = idx + 1;
        let request = match record.to_request() {
            Ok(r) => r,
            Err(e) => {
                warn!(row, error = %e, "skipping roster row");
                outcome.skipped.push(SkippedRow {
                    row,
                    reason: e.to_string(),
                });
                continue;
            }
        };

        let mut session = CalendarSession::new();
        match session.submit(request) {
            ViewState::Shown { request, events } => {
                outcome.calendars.push((request.clone(), events.clone()));
            }
            ViewState::Rejected(e) => {
                warn!(row, error = %e, "skipping roster row");
                outcome.skipped.push(SkippedRow {
                    row,
                    reason: e.to_string(),
                });
            }
            ViewState::Hidden => {
                warn!(row, "skipping roster row with empty shift code");
                outcome.skipped.push(SkippedRow {
                    row,
                    reason: "empty shift code".to_string(),
                });
            }
        }
    }
    outcome
}
