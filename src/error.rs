//! Error types for shiftcal.

use std::path::PathBuf;

/// The code string does not have one character per day of the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("입력한 근무코드 길이({actual}자)가 {expected}일과 다릅니다.")]
pub struct LengthMismatch {
    /// Number of days in the selected month.
    pub expected: u32,
    /// Number of characters in the submitted code.
    pub actual: usize,
}

/// Rejected at the input boundary, before the builder is called.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("year must be between {min} and {max}, got {year}")]
    YearOutOfRange { year: i32, min: i32, max: i32 },

    #[error("unrecognised year {input:?}, expected e.g. 2024 or 2024년")]
    InvalidYear { input: String },

    #[error("month must be between 1 and 12, got {month}")]
    MonthOutOfRange { month: u32 },

    #[error("unrecognised month {input:?}, expected 1-12 or 1월-12월")]
    InvalidMonth { input: String },

    #[error("shift code is {len} characters long, at most {max} are allowed")]
    CodeTooLong { len: usize, max: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
