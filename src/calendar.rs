//! Turns a day-code string into one calendar event per day of the month.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::error::LengthMismatch;
use crate::request::ScheduleRequest;
use crate::shift;

/// Gregorian leap year: divisible by 4, except centuries not divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`.
///
/// # Panics
///
/// Panics if `month` is not in `1..=12`. Callers validate the month at the
/// input boundary (see [`ScheduleRequest::new`]).
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => panic!("month must be in 1..=12, got {month}"),
    }
}

/// A single day's shift, ready for a month-grid widget. `date` serializes
/// as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarEvent {
    pub date: NaiveDate,
    pub title: &'static str,
    pub color: &'static str,
}

/// Validates the code length against the month and builds the events in
/// date order. Either every day gets an event or none does.
pub fn build_schedule(request: &ScheduleRequest) -> Result<Vec<CalendarEvent>, LengthMismatch> {
    let expected = days_in_month(request.year(), request.month());
    let actual = request.code().chars().count();
    if actual != expected as usize {
        debug!(
            year = request.year(),
            month = request.month(),
            expected,
            actual,
            "code length does not match month"
        );
        return Err(LengthMismatch { expected, actual });
    }

    let events: Vec<CalendarEvent> = request
        .first_day()
        .iter_days()
        .zip(request.code().chars())
        .map(|(date, code)| {
            let style = shift::resolve(code);
            CalendarEvent {
                date,
                title: style.label,
                color: style.color,
            }
        })
        .collect();

    debug!(
        year = request.year(),
        month = request.month(),
        events = events.len(),
        "built schedule"
    );
    Ok(events)
}
