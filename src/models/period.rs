//! Distribution period representation
//!
//! A period is a calendar month canonicalized to a "Month Year" label
//! (e.g., "June 2025"). Source spreadsheets spell months many ways: ISO date
//! strings, locale date strings, Excel date serials, or already-canonical
//! labels. Anything that parses to a calendar date canonicalizes to the long
//! month name plus four-digit year; anything else is kept verbatim (trimmed).

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Excel's day-serial epoch (serial 1 is 1900-01-01, with the leap-year bug
/// folded in by anchoring at 1899-12-30).
const EXCEL_EPOCH: (i32, u32, u32) = (1899, 12, 30);

/// Day serials outside this range are treated as opaque labels, so that bare
/// years ("2026") and small codes are not misread as 1900s dates.
const SERIAL_RANGE: std::ops::RangeInclusive<i64> = 10_000..=100_000;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const DATE_FORMATS: [&str; 6] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d-%m-%Y",
    "%d/%m/%Y",
    "%d %B %Y",
    "%B %d, %Y",
];

const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// A distribution period: a calendar month, or an opaque label for source
/// values that do not parse as dates
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    /// A calendar month (displays as "June 2025")
    Month { year: i32, month: u32 },

    /// A non-date label kept verbatim from the source
    Label(String),
}

impl Period {
    /// Create a calendar-month period
    pub fn month(year: i32, month: u32) -> Self {
        Self::Month { year, month }
    }

    /// Canonicalize a raw cell value into a period
    ///
    /// Returns `None` for empty/whitespace values (the row is skipped).
    /// Canonicalization is idempotent: a value that already displays as
    /// "June 2025" parses back to the same period.
    pub fn canonicalize(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        if let Some(period) = parse_month_label(trimmed) {
            return Some(period);
        }

        if let Some(date) = parse_excel_serial(trimmed) {
            return Some(Self::from_date(date));
        }

        for fmt in DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(trimmed, fmt) {
                return Some(Self::from_date(date));
            }
        }

        for fmt in DATETIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
                return Some(Self::from_date(dt.date()));
            }
        }

        Some(Self::Label(trimmed.to_string()))
    }

    /// Reduce a calendar date to its month period
    pub fn from_date(date: NaiveDate) -> Self {
        Self::Month {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Month { year, month } => {
                write!(f, "{} {}", MONTH_NAMES[(*month as usize) - 1], year)
            }
            Self::Label(label) => write!(f, "{}", label),
        }
    }
}

impl Ord for Period {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match (self, other) {
            (
                Self::Month { year, month },
                Self::Month {
                    year: oy,
                    month: om,
                },
            ) => (year, month).cmp(&(oy, om)),
            (Self::Month { .. }, Self::Label(_)) => std::cmp::Ordering::Less,
            (Self::Label(_), Self::Month { .. }) => std::cmp::Ordering::Greater,
            (Self::Label(a), Self::Label(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for Period {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Parse "June 2025" / "june 2025" / "Jun 2025" style labels
fn parse_month_label(s: &str) -> Option<Period> {
    let mut tokens = s.split_whitespace();
    let name = tokens.next()?;
    let year_token = tokens.next()?;
    if tokens.next().is_some() {
        return None;
    }

    let month = month_from_name(name)?;
    let year: i32 = year_token.parse().ok()?;
    if !(1000..=9999).contains(&year) {
        return None;
    }

    Some(Period::Month { year, month })
}

fn month_from_name(name: &str) -> Option<u32> {
    let lower = name.to_lowercase();
    MONTH_NAMES
        .iter()
        .position(|m| {
            let full = m.to_lowercase();
            full == lower || (lower.len() == 3 && full.starts_with(&lower))
        })
        .map(|i| i as u32 + 1)
}

/// Interpret an Excel day serial (possibly fractional for datetimes)
fn parse_excel_serial(s: &str) -> Option<NaiveDate> {
    let value: f64 = s.parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    let days = value.floor() as i64;
    if !SERIAL_RANGE.contains(&days) {
        return None;
    }
    let (y, m, d) = EXCEL_EPOCH;
    let epoch = NaiveDate::from_ymd_opt(y, m, d)?;
    epoch.checked_add_signed(Duration::days(days))
}
