//! Shift code table: one character per day mapped to a label and a color.

use crate::config::Language;

/// Label used for any character outside the shift alphabet.
pub const FALLBACK_LABEL: &str = "기타";

/// Neutral gray used for any character outside the shift alphabet.
pub const FALLBACK_COLOR: &str = "#E5E7EB";

/// A recognised shift code. Matching is exact, so `d` is not `D`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShiftKind {
    Day,
    Night,
    Evening,
    Off,
    Education,
}

impl ShiftKind {
    pub const ALL: [ShiftKind; 5] = [
        ShiftKind::Day,
        ShiftKind::Night,
        ShiftKind::Evening,
        ShiftKind::Off,
        ShiftKind::Education,
    ];

    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'D' => Some(ShiftKind::Day),
            'N' => Some(ShiftKind::Night),
            'E' => Some(ShiftKind::Evening),
            'X' => Some(ShiftKind::Off),
            'P' => Some(ShiftKind::Education),
            _ => None,
        }
    }

    pub fn code(self) -> char {
        match self {
            ShiftKind::Day => 'D',
            ShiftKind::Night => 'N',
            ShiftKind::Evening => 'E',
            ShiftKind::Off => 'X',
            ShiftKind::Education => 'P',
        }
    }

    /// Text shown inside the calendar cell.
    ///
    /// Every kind shows its own code except `Off`, which shows `"OFF"`.
    pub fn label(self) -> &'static str {
        match self {
            ShiftKind::Day => "D",
            ShiftKind::Night => "N",
            ShiftKind::Evening => "E",
            ShiftKind::Off => "OFF",
            ShiftKind::Education => "P",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            ShiftKind::Day => "#FDBA74",
            ShiftKind::Night => "#A78BFA",
            ShiftKind::Evening => "#F9A8D4",
            ShiftKind::Off => "#F87171",
            ShiftKind::Education => "#60A5FA",
        }
    }

    pub fn legend_name(self, lang: Language) -> &'static str {
        match (self, lang) {
            (ShiftKind::Day, _) => "Day",
            (ShiftKind::Night, _) => "Night",
            (ShiftKind::Evening, _) => "Evening",
            (ShiftKind::Off, _) => "Off",
            (ShiftKind::Education, Language::Ko) => "교육",
            (ShiftKind::Education, Language::En) => "Education",
        }
    }
}

/// Resolved display attributes for one day's code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftStyle {
    pub label: &'static str,
    pub color: &'static str,
}

/// Resolves a single code character. Never fails: unknown characters get
/// [`FALLBACK_LABEL`] and [`FALLBACK_COLOR`].
pub fn resolve(code: char) -> ShiftStyle {
    match ShiftKind::from_code(code) {
        Some(kind) => ShiftStyle {
            label: kind.label(),
            color: kind.color(),
        },
        None => ShiftStyle {
            label: FALLBACK_LABEL,
            color: FALLBACK_COLOR,
        },
    }
}

/// One legend entry, in the order the legend is drawn.
#[derive(Debug, Clone, Copy)]
pub struct LegendEntry {
    pub kind: ShiftKind,
    pub name: &'static str,
    pub color: &'static str,
}

pub fn legend(lang: Language) -> [LegendEntry; 5] {
    ShiftKind::ALL.map(|kind| LegendEntry {
        kind,
        name: kind.legend_name(lang),
        color: kind.color(),
    })
}
