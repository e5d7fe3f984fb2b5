//! End-to-end behaviour of the builder on user-style submissions.

use chrono::{Datelike, NaiveDate};
use shiftcal::shift::{FALLBACK_COLOR, FALLBACK_LABEL};
use shiftcal::{LengthMismatch, ScheduleRequest, build_schedule, days_in_month, resolve};

const JULY_CODE: &str = "DDNEXXPPDDNEXXPPDDNEXXPPDDNEXXP";

#[test]
fn july_example_code() {
    let req = ScheduleRequest::new("홍길동", 2024, 7, JULY_CODE).unwrap();
    let events = build_schedule(&req).unwrap();

    assert_eq!(events.len(), 31);
    assert_eq!(events[0].title, "D");
    assert_eq!(events[0].color, "#FDBA74");
    assert_eq!(events[4].title, "OFF");
    assert_eq!(events[4].color, "#F87171");
    assert_eq!(events[6].title, "P");
    assert_eq!(events[6].date, NaiveDate::from_ymd_opt(2024, 7, 7).unwrap());
}

#[test]
fn short_code_in_leap_february() {
    let req = ScheduleRequest::new("", 2024, 2, "D".repeat(28)).unwrap();
    assert_eq!(
        build_schedule(&req),
        Err(LengthMismatch {
            expected: 29,
            actual: 28
        })
    );
}

#[test]
fn unknown_characters_fall_back() {
    let req = ScheduleRequest::new("", 2024, 2, "Z".repeat(29)).unwrap();
    let events = build_schedule(&req).unwrap();
    assert_eq!(events.len(), 29);
    assert!(
        events
            .iter()
            .all(|e| e.title == FALLBACK_LABEL && e.color == FALLBACK_COLOR)
    );
}

#[test]
fn single_character_resolution() {
    assert_eq!(resolve('X').label, "OFF");
    assert_eq!(resolve('X').color, "#F87171");
    assert_eq!(resolve('D').label, "D");
    assert_eq!(resolve('D').color, "#FDBA74");
    assert_eq!(resolve('q').label, "기타");
    assert_eq!(resolve('q').color, "#E5E7EB");
}

#[test]
fn every_valid_month_covers_each_day_once() {
    for year in [2020, 2023, 2024, 2100] {
        for month in 1..=12 {
            let n = days_in_month(year, month);
            let req = ScheduleRequest::new("", year, month, "E".repeat(n as usize)).unwrap();
            let events = build_schedule(&req).unwrap();
            assert_eq!(events.len(), n as usize);
            let days: Vec<u32> = events.iter().map(|e| e.date.day()).collect();
            let expected: Vec<u32> = (1..=n).collect();
            assert_eq!(days, expected, "{year}-{month}");
            assert!(events.iter().all(|e| e.date.month() == month));
        }
    }
}

#[test]
fn every_wrong_length_is_rejected_with_expected_count() {
    for month in 1..=12 {
        let n = days_in_month(2023, month) as usize;
        for len in [0, 1, n - 1, n + 1, 31] {
            if len == n {
                continue;
            }
            let req = ScheduleRequest::new("", 2023, month, "D".repeat(len)).unwrap();
            let err = build_schedule(&req).unwrap_err();
            assert_eq!(err.expected as usize, n);
            assert_eq!(err.actual, len);
        }
    }
}

#[test]
fn length_is_counted_in_characters() {
    // 30 Hangul syllables are 90 bytes but 30 days.
    let req = ScheduleRequest::new("", 2024, 4, "가".repeat(30)).unwrap();
    let events = build_schedule(&req).unwrap();
    assert_eq!(events.len(), 30);
    assert_eq!(events[0].title, FALLBACK_LABEL);
}

#[test]
fn building_twice_gives_identical_events() {
    let req = ScheduleRequest::new("", 2024, 7, JULY_CODE).unwrap();
    assert_eq!(build_schedule(&req), build_schedule(&req));
}
