use crate::language::Language;
use chrono::{DateTime, Datelike, Timelike, Weekday};
use chrono_tz::Tz;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;
use tracing::warn;

pub const DEFAULT_SCHEDULE_PATH: &str = "lib/schedule.json";

/// Literal used in the schedule file for a day without opening hours.
pub const CLOSED: &str = "Closed";

/// Shown instead of the schedule whenever the file cannot be used.
pub const FALLBACK_HOURS_INFO: &str = "Lunes a Viernes: 10:00-18:00\nSabado y Domingo: Cerrado";

const FALLBACK_OPEN_HOUR: u32 = 10;
const FALLBACK_CLOSE_HOUR: u32 = 18;

pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Failed to read schedule: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse schedule: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid hours range: {0:?}")]
    InvalidRange(String),
}

/// English weekday name as used for the schedule keys.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Weekly business hours, in the order the file lists them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    entries: Vec<(String, String)>,
}

impl Schedule {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScheduleError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parses a schedule document. The root must be an object; a missing
    /// `business_hours` key is an empty schedule.
    pub fn from_json(content: &str) -> Result<Self, ScheduleError> {
        let mut root: Map<String, Value> = serde_json::from_str(content)?;
        let business_hours: Map<String, Value> = match root.remove("business_hours") {
            Some(value) => serde_json::from_value(value)?,
            None => Map::new(),
        };

        // Non-string values are kept as their JSON text; they render as-is
        // and fail the range parse if the open check reaches them.
        let entries = business_hours
            .into_iter()
            .map(|(day, value)| match value {
                Value::String(hours) => (day, hours),
                value => (day, value.to_string()),
            })
            .collect();

        Ok(Self { entries })
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(day, hours)| (day.as_str(), hours.as_str()))
    }

    pub fn get(&self, day: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == day)
            .map(|(_, hours)| hours.as_str())
    }

    /// Hours for a weekday, `"Closed"` when the file does not mention it.
    pub fn hours_for(&self, weekday: Weekday) -> &str {
        self.get(weekday_name(weekday)).unwrap_or(CLOSED)
    }

    /// One `"<Day>: <hours>"` line per entry, closed days in Spanish.
    pub fn render(&self) -> String {
        self.entries()
            .map(|(day, hours)| {
                if hours == CLOSED {
                    format!("{}: Cerrado", day)
                } else {
                    format!("{}: {}", day, hours)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn is_open_at(&self, now: &DateTime<Tz>) -> Result<bool, ScheduleError> {
        Ok(self.day_status(now)? == DayStatus::Open)
    }

    pub fn day_status(&self, now: &DateTime<Tz>) -> Result<DayStatus, ScheduleError> {
        let hours = self.hours_for(now.weekday());
        if hours == CLOSED {
            return Ok(DayStatus::Closed);
        }
        let range: HoursRange = hours.parse()?;
        Ok(range.status_at(now.hour()))
    }

    /// First day after `weekday` with opening hours, wrapping around the week.
    pub fn next_open_after(&self, weekday: Weekday) -> Option<NextOpen> {
        let start = weekday.num_days_from_monday() as usize;
        (1..=WEEK.len())
            .map(|offset| WEEK[(start + offset) % WEEK.len()])
            .find_map(|day| {
                let name = weekday_name(day);
                match self.get(name) {
                    Some(hours) if !hours.is_empty() && hours != CLOSED => Some(NextOpen {
                        day: name.to_string(),
                        hours: hours.to_string(),
                    }),
                    _ => None,
                }
            })
    }

    pub fn weekly(&self) -> Vec<WeekdayHours> {
        WEEK.iter()
            .map(|&weekday| {
                // Days absent from the file count as closed, not open.
                let hours = self.hours_for(weekday);
                WeekdayHours {
                    day: weekday_name(weekday),
                    hours: hours.to_string(),
                    is_open: hours != CLOSED,
                }
            })
            .collect()
    }

    pub fn summary(&self, language: Language) -> HoursSummary {
        let (open, closed): (Vec<_>, Vec<_>) =
            self.entries().partition(|(_, hours)| *hours != CLOSED);

        HoursSummary {
            open_days: open
                .into_iter()
                .map(|(day, hours)| format!("{}: {}", day, hours))
                .collect(),
            closed_days: closed.into_iter().map(|(day, _)| day.to_string()).collect(),
            summary: language.hours_summary(),
        }
    }

    /// The entries as a JSON object, keeping file order.
    pub fn to_json(&self) -> Value {
        Value::Object(
            self.entries()
                .map(|(day, hours)| (day.to_string(), Value::String(hours.to_string())))
                .collect(),
        )
    }
}

/// An `"HH:MM-HH:MM"` range reduced to whole hours.
///
/// Minutes are dropped on purpose: `"10:00-18:30"` closes at 18:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoursRange {
    pub start_hour: u32,
    pub end_hour: u32,
}

impl HoursRange {
    pub fn contains(&self, hour: u32) -> bool {
        self.start_hour <= hour && hour < self.end_hour
    }

    pub fn status_at(&self, hour: u32) -> DayStatus {
        if self.contains(hour) {
            DayStatus::Open
        } else if hour < self.start_hour {
            DayStatus::OpensLater
        } else {
            DayStatus::ClosedForToday
        }
    }
}

impl FromStr for HoursRange {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ScheduleError::InvalidRange(s.to_string());
        let mut parts = s.split('-');
        let (Some(start), Some(end), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(invalid());
        };

        Ok(Self {
            start_hour: leading_hour(start).ok_or_else(invalid)?,
            end_hour: leading_hour(end).ok_or_else(invalid)?,
        })
    }
}

fn leading_hour(token: &str) -> Option<u32> {
    token.split(':').next()?.trim().parse().ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    Open,
    OpensLater,
    ClosedForToday,
    Closed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NextOpen {
    pub day: String,
    pub hours: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekdayHours {
    pub day: &'static str,
    pub hours: String,
    pub is_open: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HoursSummary {
    pub open_days: Vec<String>,
    pub closed_days: Vec<String>,
    pub summary: &'static str,
}

/// Rendered schedule, or [`FALLBACK_HOURS_INFO`] if the file is unusable.
pub fn business_hours_info(path: &Path) -> String {
    match Schedule::load(path) {
        Ok(schedule) => schedule.render(),
        Err(err) => {
            log_fallback(path, &err);
            FALLBACK_HOURS_INFO.to_string()
        }
    }
}

/// Whether the salon is open at `now`, falling back to weekday 10-18 when
/// the schedule cannot be used.
pub fn is_business_hours(path: &Path, now: &DateTime<Tz>) -> bool {
    match Schedule::load(path).and_then(|schedule| schedule.is_open_at(now)) {
        Ok(open) => open,
        Err(err) => {
            log_fallback(path, &err);
            fallback_is_open(now)
        }
    }
}

pub fn fallback_is_open(now: &DateTime<Tz>) -> bool {
    now.weekday().num_days_from_monday() <= 4
        && (FALLBACK_OPEN_HOUR..FALLBACK_CLOSE_HOUR).contains(&now.hour())
}

fn log_fallback(path: &Path, err: &ScheduleError) {
    let path = path.display();
    match err {
        ScheduleError::Io(_) => {
            warn!(%path, error = %err, "Schedule unavailable, using default hours")
        }
        ScheduleError::Parse(_) => {
            warn!(%path, error = %err, "Schedule malformed, using default hours")
        }
        ScheduleError::InvalidRange(_) => {
            warn!(%path, error = %err, "Schedule has an unreadable range, using default hours")
        }
    }
}
