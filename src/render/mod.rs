//! Presentation: month grids for the terminal and for spreadsheets, plus a
//! plain event listing for external calendar widgets.

pub mod events;
pub mod sheet;
pub mod text;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::calendar::CalendarEvent;

/// One calendar week; `None` marks padding days outside the month.
pub type Week<'a> = [Option<&'a CalendarEvent>; 7];

/// Column order for a week starting on `week_start`.
pub fn weekday_columns(week_start: Weekday) -> [Weekday; 7] {
    let mut days = [week_start; 7];
    for i in 1..7 {
        days[i] = days[i - 1].succ();
    }
    days
}

/// Splits `events` (one per day, in date order, starting on `first_day`)
/// into weeks. Only as many weeks as the month spans are produced.
pub fn month_grid<'a>(
    first_day: NaiveDate,
    events: &'a [CalendarEvent],
    week_start: Weekday,
) -> Vec<Week<'a>> {
    let offset = (first_day.weekday().num_days_from_monday() + 7
        - week_start.num_days_from_monday())
        % 7;
    let offset = offset as usize;
    let cells = offset + events.len();
    let n_weeks = cells.div_ceil(7);

    let mut weeks: Vec<Week<'a>> = vec![[None; 7]; n_weeks];
    for (i, ev) in events.iter().enumerate() {
        let slot = offset + i;
        weeks[slot / 7][slot % 7] = Some(ev);
    }
    weeks
}
