//! Monthly shift calendars from a one-character-per-day code string.
//!
//! ```
//! use shiftcal::{ScheduleRequest, build_schedule};
//!
//! let code = "DDNEXXPPDDNEXXPPDDNEXXPPDDNEXXP";
//! let req = ScheduleRequest::new("홍길동", 2024, 7, code).unwrap();
//! let events = build_schedule(&req).unwrap();
//! assert_eq!(events.len(), 31);
//! assert_eq!(events[4].title, "OFF");
//! ```

pub mod calendar;
pub mod config;
pub mod error;
pub mod render;
pub mod request;
pub mod roster;
pub mod session;
pub mod shift;

pub use calendar::{CalendarEvent, build_schedule, days_in_month, is_leap_year};
pub use config::{Config, Language, WeekStart};
pub use error::{ConfigError, LengthMismatch, RequestError};
pub use request::ScheduleRequest;
pub use session::{CalendarSession, ViewState};
pub use shift::{ShiftKind, ShiftStyle, resolve};
