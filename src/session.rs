//! Display state owned by the front end: what was submitted, whether it
//! passed validation, and the events currently on screen.

use tracing::{info, warn};

use crate::calendar::{self, CalendarEvent};
use crate::config::Language;
use crate::error::LengthMismatch;
use crate::request::ScheduleRequest;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    /// Nothing submitted yet.
    #[default]
    Hidden,
    /// Last submission had the wrong length; no calendar is shown.
    Rejected(LengthMismatch),
    Shown {
        request: ScheduleRequest,
        events: Vec<CalendarEvent>,
    },
}

#[derive(Debug, Default)]
pub struct CalendarSession {
    state: ViewState,
}

impl CalendarSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a submission. An empty code leaves the state untouched, a
    /// length mismatch hides any previously shown calendar.
    pub fn submit(&mut self, request: ScheduleRequest) -> &ViewState {
        if request.code().is_empty() {
            return &self.state;
        }
        self.state = match calendar::build_schedule(&request) {
            Ok(events) => {
                info!(
                    person = request.name(),
                    year = request.year(),
                    month = request.month(),
                    "calendar generated"
                );
                ViewState::Shown { request, events }
            }
            Err(e) => {
                warn!(
                    year = request.year(),
                    month = request.month(),
                    expected = e.expected,
                    actual = e.actual,
                    "code length mismatch"
                );
                ViewState::Rejected(e)
            }
        };
        &self.state
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn is_visible(&self) -> bool {
        matches!(self.state, ViewState::Shown { .. })
    }

    pub fn events(&self) -> &[CalendarEvent] {
        match &self.state {
            ViewState::Shown { events, .. } => events,
            _ => &[],
        }
    }

    pub fn request(&self) -> Option<&ScheduleRequest> {
        match &self.state {
            ViewState::Shown { request, .. } => Some(request),
            _ => None,
        }
    }

    /// Success banner shown above the calendar.
    pub fn heading(&self, lang: Language) -> Option<String> {
        self.request().map(|req| heading(req, lang))
    }

    pub fn error_message(&self) -> Option<String> {
        match &self.state {
            ViewState::Rejected(e) => Some(e.to_string()),
            _ => None,
        }
    }
}

pub fn heading(request: &ScheduleRequest, lang: Language) -> String {
    match lang {
        Language::Ko => format!(
            "{}년 {}월 {}님의 근무 달력",
            request.year(),
            request.month(),
            request.name()
        ),
        Language::En => format!(
            "Shift calendar for {}, {}",
            request.name(),
            lang.month_title(request.year(), request.month())
        ),
    }
}
