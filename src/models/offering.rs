//! Course offering model.
//!
//! An offering is one schedulable course section as supplied by the
//! catalog collaborator. The core reads its code and nominal slot;
//! administrative fields (credits, capacity) are carried through
//! untouched for the calling layer.

use serde::{Deserialize, Serialize};

use crate::error::SlotError;

use super::TimeInterval;

/// A course section offered in the catalog.
///
/// The nominal slot is kept as the raw catalog string and parsed lazily:
/// catalog data is external and may be malformed, and a bad slot must not
/// prevent the offering from being scheduled elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseOffering {
    /// Unique course code (e.g. `"CS101"`).
    pub code: String,
    /// Display title.
    pub title: String,
    /// Owning instructor identifier.
    pub instructor: String,
    /// Credit weight.
    pub credits: u32,
    /// Nominal weekly slot, e.g. `"Mon 09:00-10:30"`.
    pub slot: String,
    /// Seat capacity. Not interpreted by the core.
    pub capacity: u32,
}

impl CourseOffering {
    /// Creates a new offering with the given code and title.
    pub fn new(code: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            title: title.into(),
            instructor: String::new(),
            credits: 0,
            slot: String::new(),
            capacity: 0,
        }
    }

    /// Sets the instructor identifier.
    pub fn with_instructor(mut self, instructor: impl Into<String>) -> Self {
        self.instructor = instructor.into();
        self
    }

    /// Sets the credit weight.
    pub fn with_credits(mut self, credits: u32) -> Self {
        self.credits = credits;
        self
    }

    /// Sets the nominal weekly slot string.
    pub fn with_slot(mut self, slot: impl Into<String>) -> Self {
        self.slot = slot.into();
        self
    }

    /// Sets the seat capacity.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Parses the nominal slot into an interval.
    pub fn nominal_interval(&self) -> Result<TimeInterval, SlotError> {
        TimeInterval::parse(&self.slot)
    }
}
