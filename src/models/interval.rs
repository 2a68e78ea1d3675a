//! Weekly time interval model.
//!
//! Timetables repeat weekly, so an interval is a weekday plus a
//! minute-resolution time-of-day range. Intervals are half-open
//! `[start, end)`: two meetings that touch at a boundary (one ends at
//! 10:30, the next starts at 10:30) do not conflict.
//!
//! # Reference
//! Schaerf (1999), "A Survey of Automated Timetabling", Sec. 2

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SlotError;

/// Teaching days, Monday through Friday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl DayOfWeek {
    /// All teaching days, in calendar order.
    pub const ALL: [DayOfWeek; 5] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
    ];

    /// Parses a day name.
    ///
    /// Accepts full names and 3-letter abbreviations, case-insensitive
    /// (`"Monday"`, `"monday"`, `"Mon"`, `"MON"`). Catalog data has
    /// historically used both forms.
    pub fn parse(s: &str) -> Result<Self, SlotError> {
        match s.to_ascii_lowercase().as_str() {
            "monday" | "mon" => Ok(DayOfWeek::Monday),
            "tuesday" | "tue" => Ok(DayOfWeek::Tuesday),
            "wednesday" | "wed" => Ok(DayOfWeek::Wednesday),
            "thursday" | "thu" => Ok(DayOfWeek::Thursday),
            "friday" | "fri" => Ok(DayOfWeek::Friday),
            _ => Err(SlotError::UnknownDay(s.to_string())),
        }
    }

    /// Canonical 3-letter form, used in signatures and display output.
    pub fn short_name(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Mon",
            DayOfWeek::Tuesday => "Tue",
            DayOfWeek::Wednesday => "Wed",
            DayOfWeek::Thursday => "Thu",
            DayOfWeek::Friday => "Fri",
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// A weekly meeting interval: weekday plus `[start, end)` minutes of day.
///
/// # Examples
///
/// ```
/// use u_timetable::models::{DayOfWeek, TimeInterval};
///
/// let a = TimeInterval::parse("Mon 09:00-10:30").unwrap();
/// let b = TimeInterval::parse("Monday 10:30-12:00").unwrap();
/// assert_eq!(a.day, DayOfWeek::Monday);
/// assert!(!a.overlaps(&b)); // touching boundary, no conflict
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInterval {
    /// Meeting day.
    pub day: DayOfWeek,
    /// Start, in minutes from midnight (inclusive).
    pub start_min: u16,
    /// End, in minutes from midnight (exclusive).
    pub end_min: u16,
}

impl TimeInterval {
    /// Creates an interval, rejecting empty or out-of-day ranges.
    pub fn new(day: DayOfWeek, start_min: u16, end_min: u16) -> Result<Self, SlotError> {
        if start_min >= end_min || end_min > 24 * 60 {
            return Err(SlotError::EmptyInterval {
                start: fmt_time(start_min),
                end: fmt_time(end_min),
            });
        }
        Ok(Self {
            day,
            start_min,
            end_min,
        })
    }

    /// Parses a slot string of the form `<day> <HH:MM>-<HH:MM>`,
    /// e.g. `"Mon 09:00-10:30"` or `"Wednesday 11:00-12:00"`.
    pub fn parse(slot: &str) -> Result<Self, SlotError> {
        let mut parts = slot.split_whitespace();
        let (day, range) = match (parts.next(), parts.next(), parts.next()) {
            (Some(day), Some(range), None) => (day, range),
            _ => return Err(SlotError::Malformed(slot.to_string())),
        };
        let day = DayOfWeek::parse(day)?;
        let (start, end) = range
            .split_once('-')
            .ok_or_else(|| SlotError::Malformed(slot.to_string()))?;
        Self::new(day, parse_time(start)?, parse_time(end)?)
    }

    /// Whether two intervals overlap.
    ///
    /// Different days never overlap. Same-day comparison is strict on
    /// both ends, so touching boundaries are not a conflict.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.day == other.day && self.start_min < other.end_min && other.start_min < self.end_min
    }

    /// Duration in minutes.
    #[inline]
    pub fn duration_min(&self) -> u16 {
        self.end_min - self.start_min
    }

    /// The time range as `HH:MM-HH:MM`, without the day.
    pub fn time_range(&self) -> String {
        format!("{}-{}", fmt_time(self.start_min), fmt_time(self.end_min))
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day, self.time_range())
    }
}

/// Parses `HH:MM` into minutes from midnight.
fn parse_time(s: &str) -> Result<u16, SlotError> {
    let (hours, minutes) = s
        .split_once(':')
        .ok_or_else(|| SlotError::InvalidTime(s.to_string()))?;
    let hours: u16 = hours
        .parse()
        .map_err(|_| SlotError::InvalidTime(s.to_string()))?;
    let minutes: u16 = minutes
        .parse()
        .map_err(|_| SlotError::InvalidTime(s.to_string()))?;
    if hours > 23 || minutes > 59 {
        return Err(SlotError::InvalidTime(s.to_string()));
    }
    Ok(hours * 60 + minutes)
}

fn fmt_time(min: u16) -> String {
    format!("{:02}:{:02}", min / 60, min % 60)
}
