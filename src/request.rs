//! Input boundary: turns user-entered values into a [`ScheduleRequest`].

use std::ops::RangeInclusive;

use chrono::{Datelike, Local, NaiveDate};

use crate::error::RequestError;

/// Years offered by the input form.
pub const YEAR_RANGE: RangeInclusive<i32> = 2020..=2100;

/// The longest month has 31 days.
pub const MAX_CODE_LEN: usize = 31;

/// A validated submission. Year, month and code length are checked on
/// construction; whether the code fits the month is checked by the builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRequest {
    name: String,
    first_day: NaiveDate,
    code: String,
}

impl ScheduleRequest {
    pub fn new(
        name: impl Into<String>,
        year: i32,
        month: u32,
        code: impl Into<String>,
    ) -> Result<Self, RequestError> {
        if !YEAR_RANGE.contains(&year) {
            return Err(RequestError::YearOutOfRange {
                year,
                min: *YEAR_RANGE.start(),
                max: *YEAR_RANGE.end(),
            });
        }
        let first_day = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(RequestError::MonthOutOfRange { month })?;
        let code = code.into();
        let len = code.chars().count();
        if len > MAX_CODE_LEN {
            return Err(RequestError::CodeTooLong {
                len,
                max: MAX_CODE_LEN,
            });
        }
        Ok(Self {
            name: name.into(),
            first_day,
            code,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }
}

/// Parses `"2024"` or `"2024년"`. The range is checked by
/// [`ScheduleRequest::new`].
pub fn parse_year(input: &str) -> Result<i32, RequestError> {
    let trimmed = input.trim();
    let digits = trimmed.strip_suffix('년').unwrap_or(trimmed).trim();
    digits.parse().map_err(|_| RequestError::InvalidYear {
        input: input.to_string(),
    })
}

/// Parses `"7"`, `"07"` or `"7월"`.
pub fn parse_month(input: &str) -> Result<u32, RequestError> {
    let trimmed = input.trim();
    let digits = trimmed.strip_suffix('월').unwrap_or(trimmed).trim();
    let month: u32 = digits.parse().map_err(|_| RequestError::InvalidMonth {
        input: input.to_string(),
    })?;
    if !(1..=12).contains(&month) {
        return Err(RequestError::MonthOutOfRange { month });
    }
    Ok(month)
}

/// The form preselects the current year, clamped into [`YEAR_RANGE`].
pub fn default_year() -> i32 {
    Local::now()
        .year()
        .clamp(*YEAR_RANGE.start(), *YEAR_RANGE.end())
}

pub const DEFAULT_MONTH: u32 = 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_request() {
        let req = ScheduleRequest::new("홍길동", 2024, 7, "DDN").unwrap();
        assert_eq!(req.name(), "홍길동");
        assert_eq!(req.year(), 2024);
        assert_eq!(req.month(), 7);
        assert_eq!(req.code(), "DDN");
        assert_eq!(req.first_day(), NaiveDate::from_ymd_opt(2024, 7, 1).unwrap());
    }

    #[test]
    fn rejects_year_outside_form_range() {
        assert_eq!(
            ScheduleRequest::new("", 2019, 1, "").unwrap_err(),
            RequestError::YearOutOfRange {
                year: 2019,
                min: 2020,
                max: 2100
            }
        );
        assert!(ScheduleRequest::new("", 2101, 1, "").is_err());
        assert!(ScheduleRequest::new("", 2100, 12, "").is_ok());
    }

    #[test]
    fn rejects_bad_month() {
        assert_eq!(
            ScheduleRequest::new("", 2024, 0, "").unwrap_err(),
            RequestError::MonthOutOfRange { month: 0 }
        );
        assert_eq!(
            ScheduleRequest::new("", 2024, 13, "").unwrap_err(),
            RequestError::MonthOutOfRange { month: 13 }
        );
    }

    #[test]
    fn code_limit_counts_characters() {
        let korean = "가".repeat(31);
        assert!(ScheduleRequest::new("", 2024, 1, korean).is_ok());
        assert_eq!(
            ScheduleRequest::new("", 2024, 1, "D".repeat(32)).unwrap_err(),
            RequestError::CodeTooLong { len: 32, max: 31 }
        );
    }

    #[test]
    fn year_parsing() {
        assert_eq!(parse_year("2024"), Ok(2024));
        assert_eq!(parse_year(" 2025년 "), Ok(2025));
        assert_eq!(
            parse_year(""),
            Err(RequestError::InvalidYear {
                input: "".to_string()
            })
        );
        assert!(matches!(
            parse_year("이천이십사"),
            Err(RequestError::InvalidYear { .. })
        ));
    }

    #[test]
    fn month_parsing() {
        assert_eq!(parse_month("7"), Ok(7));
        assert_eq!(parse_month("07"), Ok(7));
        assert_eq!(parse_month("12월"), Ok(12));
        assert_eq!(parse_month(" 3 월 "), Ok(3));
        assert_eq!(
            parse_month("13월"),
            Err(RequestError::MonthOutOfRange { month: 13 })
        );
        assert!(matches!(
            parse_month("July"),
            Err(RequestError::InvalidMonth { .. })
        ));
    }

    #[test]
    fn default_year_is_in_range() {
        assert!(YEAR_RANGE.contains(&default_year()));
    }
}
