//! Month-view calendar drawn into an `.xlsx` workbook, one worksheet per
//! schedule.

use std::collections::HashSet;
use std::path::Path;

use anyhow::Result;
use chrono::Datelike;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, Worksheet};
use tracing::info;

use super::{month_grid, weekday_columns};
use crate::calendar::CalendarEvent;
use crate::config::CalendarConfig;
use crate::request::ScheduleRequest;
use crate::session;
use crate::shift;

const MAX_SHEET_NAME: usize = 31;
const INVALID_SHEET_CHARS: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];
const DAY_ROW_HEIGHT: f64 = 42.0;
const TITLE_ROW_HEIGHT: f64 = 30.0;
const COLUMN_WIDTH: f64 = 13.0;

struct SheetFormats {
    title: Format,
    header: Format,
    blank: Format,
    legend_name: Format,
}

impl SheetFormats {
    fn new() -> Self {
        Self {
            title: Format::new()
                .set_bold()
                .set_font_size(16)
                .set_align(FormatAlign::Center)
                .set_align(FormatAlign::VerticalCenter),
            header: Format::new()
                .set_bold()
                .set_border(FormatBorder::Thin)
                .set_align(FormatAlign::Center)
                .set_align(FormatAlign::VerticalCenter),
            blank: Format::new().set_border(FormatBorder::Thin),
            legend_name: Format::new()
                .set_bold()
                .set_align(FormatAlign::Left)
                .set_align(FormatAlign::VerticalCenter),
        }
    }

    fn day(color: &str) -> Format {
        Format::new()
            .set_bold()
            .set_border(FormatBorder::Thin)
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter)
            .set_text_wrap()
            .set_background_color(hex_color(color))
    }
}

fn hex_color(hex: &str) -> Color {
    u32::from_str_radix(hex.trim_start_matches('#'), 16)
        .map(Color::RGB)
        .unwrap_or(Color::White)
}

/// Excel sheet names: at most 31 characters, none of `[]:*?/\`, no
/// surrounding apostrophes, unique within the workbook (case-insensitive).
pub fn sheet_name(request: &ScheduleRequest, used: &mut HashSet<String>) -> String {
    let month = format!("{}-{:02}", request.year(), request.month());
    let person: String = request
        .name()
        .chars()
        .filter(|c| !INVALID_SHEET_CHARS.contains(c))
        .collect();
    let person = person.trim().trim_matches('\'').trim();
    let raw = if person.is_empty() {
        month
    } else {
        format!("{person} {month}")
    };
    let base: String = raw.chars().take(MAX_SHEET_NAME).collect();

    let mut candidate = base.clone();
    let mut n = 2;
    while used.contains(&candidate.to_lowercase()) {
        let suffix = format!(" ({n})");
        let keep = MAX_SHEET_NAME - suffix.chars().count();
        candidate = base.chars().take(keep).collect::<String>() + &suffix;
        n += 1;
    }
    used.insert(candidate.to_lowercase());
    candidate
}

fn write_calendar(
    ws: &mut Worksheet,
    request: &ScheduleRequest,
    events: &[CalendarEvent],
    cfg: &CalendarConfig,
    fmt: &SheetFormats,
) -> Result<u32> {
    ws.set_row_height(0, TITLE_ROW_HEIGHT)?;
    ws.merge_range(0, 0, 0, 6, &session::heading(request, cfg.language), &fmt.title)?;

    let columns = weekday_columns(cfg.week_start.weekday());
    for (col, day) in columns.iter().enumerate() {
        let name = cfg.language.weekday_name(*day);
        ws.write_string_with_format(1, col as u16, name, &fmt.header)?;
    }

    let mut row: u32 = 2;
    for week in month_grid(request.first_day(), events, cfg.week_start.weekday()) {
        ws.set_row_height(row, DAY_ROW_HEIGHT)?;
        for (col, cell) in week.iter().enumerate() {
            match cell {
                Some(ev) => {
                    let text = format!("{}\n{}", ev.date.day(), ev.title);
                    let day_fmt = SheetFormats::day(ev.color);
                    ws.write_string_with_format(row, col as u16, text, &day_fmt)?;
                }
                None => {
                    ws.write_blank(row, col as u16, &fmt.blank)?;
                }
            }
        }
        row += 1;
    }
    Ok(row)
}

fn write_legend(
    ws: &mut Worksheet,
    start_row: u32,
    cfg: &CalendarConfig,
    fmt: &SheetFormats,
) -> Result<u32> {
    let mut row = start_row;
    for entry in shift::legend(cfg.language) {
        ws.write_string_with_format(
            row,
            0,
            entry.kind.code().to_string(),
            &SheetFormats::day(entry.color),
        )?;
        ws.write_string_with_format(row, 1, entry.name, &fmt.legend_name)?;
        row += 1;
    }
    Ok(row)
}

fn set_column_widths(ws: &mut Worksheet) -> Result<()> {
    for col in 0..7u16 {
        ws.set_column_width(col, COLUMN_WIDTH)?;
    }
    Ok(())
}

/// Writes every schedule to its own worksheet and saves the workbook.
pub fn write_workbook(
    path: &Path,
    schedules: &[(ScheduleRequest, Vec<CalendarEvent>)],
    cfg: &CalendarConfig,
) -> Result<()> {
    let mut workbook = Workbook::new();
    let fmt = SheetFormats::new();
    let mut used = HashSet::new();

    for (request, events) in schedules {
        let name = sheet_name(request, &mut used);
        let ws = workbook.add_worksheet();
        ws.set_name(&name)?;
        let row = write_calendar(ws, request, events, cfg, &fmt)?;
        write_legend(ws, row + 1, cfg, &fmt)?;
        set_column_widths(ws)?;
    }

    workbook.save(path)?;
    info!(path = %path.display(), sheets = schedules.len(), "workbook saved");
    Ok(())
}
