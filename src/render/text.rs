//! Plain-text month grid for the terminal.

use std::fmt::Write;

use chrono::{Datelike, NaiveDate};

use super::{month_grid, weekday_columns};
use crate::calendar::CalendarEvent;
use crate::config::CalendarConfig;
use crate::shift;

const CELL_WIDTH: usize = 8;

/// Pads by character count. Hangul renders double width in most terminals,
/// so columns holding `기타` come out slightly wider.
fn pad(s: &str) -> String {
    let len = s.chars().count();
    let fill = CELL_WIDTH.saturating_sub(len);
    format!("{s}{}", " ".repeat(fill))
}

pub fn render_month(
    first_day: NaiveDate,
    events: &[CalendarEvent],
    cfg: &CalendarConfig,
) -> String {
    let lang = cfg.language;
    let columns = weekday_columns(cfg.week_start.weekday());
    let mut out = String::new();

    let title = lang.month_title(first_day.year(), first_day.month());
    let _ = writeln!(out, "{title}");

    let header: String = columns
        .iter()
        .map(|d| pad(lang.weekday_name(*d)))
        .collect();
    let _ = writeln!(out, "{}", header.trim_end());

    for week in month_grid(first_day, events, cfg.week_start.weekday()) {
        let line: String = week
            .iter()
            .map(|cell| match cell {
                Some(ev) => pad(&format!("{:>2} {}", ev.date.day(), ev.title)),
                None => pad(""),
            })
            .collect();
        let _ = writeln!(out, "{}", line.trim_end());
    }

    out.push('\n');
    out.push_str(&render_legend(cfg));
    out
}

/// `D=Day  N=Night  E=Evening  X=Off  P=교육`
pub fn render_legend(cfg: &CalendarConfig) -> String {
    let items: Vec<String> = shift::legend(cfg.language)
        .iter()
        .map(|e| format!("{}={}", e.kind.code(), e.name))
        .collect();
    format!("{}\n", items.join("  "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::build_schedule;
    use crate::config::{Language, WeekStart};
    use crate::request::ScheduleRequest;

    #[test]
    fn renders_july_2024() {
        let req =
            ScheduleRequest::new("", 2024, 7, "DDNEXXPPDDNEXXPPDDNEXXPPDDNEXXP").unwrap();
        let events = build_schedule(&req).unwrap();
        let text = render_month(req.first_day(), &events, &CalendarConfig::default());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "2024년 7월");
        assert!(lines[1].starts_with("일"));
        // First week: Sunday is padding, Monday the 1st.
        assert!(lines[2].starts_with(&" ".repeat(CELL_WIDTH)));
        assert!(lines[2].contains(" 1 D"));
        assert!(lines[2].contains(" 5 OFF"));
        assert!(text.ends_with("D=Day  N=Night  E=Evening  X=Off  P=교육\n"));
    }

    #[test]
    fn english_monday_layout() {
        let req = ScheduleRequest::new("", 2024, 7, "Z".repeat(31)).unwrap();
        let events = build_schedule(&req).unwrap();
        let cfg = CalendarConfig {
            week_start: WeekStart::Monday,
            language: Language::En,
        };
        let text = render_month(req.first_day(), &events, &cfg);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "2024-07");
        assert!(lines[1].starts_with("Mon"));
        assert!(lines[2].starts_with(" 1 기타"));
        assert!(text.contains("P=Education"));
    }
}
