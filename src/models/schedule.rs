//! Schedule (solution) model.
//!
//! A schedule is a set of offerings placed at concrete weekly intervals,
//! with the invariant that no two placements overlap. Schedules are
//! assembled through [`ScheduleBuilder`](crate::generator::ScheduleBuilder)
//! and immutable once built.
//!
//! # Signature
//! Each schedule has a canonical content signature: one
//! `<Day>:<HH:MM>-<HH:MM>:<code>` token per placement, sorted
//! lexicographically and joined with `|`. Two schedules with the same
//! placements produce the same signature regardless of insertion order,
//! which is what multi-generation deduplicates on.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{CourseOffering, DayOfWeek, TimeInterval};

/// An offering bound to a concrete weekly interval.
///
/// The interval may differ from the offering's nominal slot when the
/// nominal slot was unavailable and the fallback search placed it
/// elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedOffering {
    /// The placed offering.
    pub offering: CourseOffering,
    /// Where it ended up.
    pub interval: TimeInterval,
}

impl PlacedOffering {
    /// Creates a placement.
    pub fn new(offering: CourseOffering, interval: TimeInterval) -> Self {
        Self { offering, interval }
    }

    /// Canonical signature token: `<Day>:<HH:MM>-<HH:MM>:<code>`.
    pub fn signature_token(&self) -> String {
        format!(
            "{}:{}:{}",
            self.interval.day,
            self.interval.time_range(),
            self.offering.code
        )
    }
}

impl fmt::Display for PlacedOffering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.interval, self.offering.code)
    }
}

/// A non-conflicting weekly schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub(crate) placed: Vec<PlacedOffering>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Placed offerings, in placement order.
    pub fn placed(&self) -> &[PlacedOffering] {
        &self.placed
    }

    /// Number of placed offerings.
    pub fn len(&self) -> usize {
        self.placed.len()
    }

    /// Whether the schedule has no placements.
    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }

    /// Whether an offering with the given code is placed.
    pub fn contains_code(&self, code: &str) -> bool {
        self.placed.iter().any(|p| p.offering.code == code)
    }

    /// Placements on one day, in placement order.
    pub fn by_day(&self, day: DayOfWeek) -> Vec<&PlacedOffering> {
        self.placed
            .iter()
            .filter(|p| p.interval.day == day)
            .collect()
    }

    /// Whether a candidate interval conflicts with any placement.
    ///
    /// Scans in placement order and short-circuits on the first overlap.
    pub fn conflicts_with(&self, candidate: &TimeInterval) -> bool {
        conflicts_with_any(candidate, &self.placed)
    }

    /// Canonical content signature (see module docs).
    pub fn signature(&self) -> String {
        let mut tokens: Vec<String> = self.placed.iter().map(|p| p.signature_token()).collect();
        tokens.sort();
        tokens.join("|")
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.placed.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{p}")?;
        }
        Ok(())
    }
}

/// Whether a candidate interval overlaps any of the given placements.
///
/// Short-circuits on the first overlap found.
pub fn conflicts_with_any(candidate: &TimeInterval, placed: &[PlacedOffering]) -> bool {
    placed.iter().any(|p| p.interval.overlaps(candidate))
}
