//! Timetabling domain models.
//!
//! Provides the core data types for representing course catalogs and
//! generated timetables.
//!
//! # Types
//!
//! | Type | Role |
//! |------|------|
//! | [`DayOfWeek`], [`TimeInterval`] | Weekly meeting times and overlap tests |
//! | [`CourseOffering`] | Catalog record with a nominal weekly slot |
//! | [`PlacedOffering`], [`Schedule`] | A generated, conflict-free timetable |
//! | [`TimeBlock`], [`SlotGrid`] | Fixed fallback placement grid |

mod grid;
mod interval;
mod offering;
mod schedule;

pub use grid::{SlotGrid, TimeBlock};
pub use interval::{DayOfWeek, TimeInterval};
pub use offering::CourseOffering;
pub use schedule::{conflicts_with_any, PlacedOffering, Schedule};
