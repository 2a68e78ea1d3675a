//! Incremental schedule assembly.
//!
//! The builder enforces the no-overlap invariant at every insertion, so
//! any [`Schedule`] it produces is conflict-free by construction. A
//! failed placement leaves the builder untouched, which lets the
//! generator probe candidate slots speculatively and discard misses.

use crate::models::{conflicts_with_any, CourseOffering, PlacedOffering, Schedule, TimeInterval};

/// Builds a [`Schedule`] one placement at a time.
///
/// # Examples
///
/// ```
/// use u_timetable::generator::ScheduleBuilder;
/// use u_timetable::models::{CourseOffering, TimeInterval};
///
/// let intro = CourseOffering::new("CS101", "Intro to Programming");
/// let algo = CourseOffering::new("CS201", "Algorithms");
///
/// let mut builder = ScheduleBuilder::new();
/// assert!(builder.try_place(&intro, TimeInterval::parse("Mon 09:00-10:30").unwrap()));
/// // Overlapping slot is refused, builder unchanged:
/// assert!(!builder.try_place(&algo, TimeInterval::parse("Mon 10:00-11:00").unwrap()));
///
/// let schedule = builder.build();
/// assert_eq!(schedule.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScheduleBuilder {
    placed: Vec<PlacedOffering>,
}

impl ScheduleBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempts to place an offering at the given interval.
    ///
    /// Returns `true` and appends the placement if the interval is free;
    /// returns `false` and leaves the builder unchanged if it conflicts
    /// with any placement made so far.
    pub fn try_place(&mut self, offering: &CourseOffering, interval: TimeInterval) -> bool {
        if conflicts_with_any(&interval, &self.placed) {
            return false;
        }
        self.placed.push(PlacedOffering::new(offering.clone(), interval));
        true
    }

    /// Number of placements so far.
    pub fn len(&self) -> usize {
        self.placed.len()
    }

    /// Whether nothing has been placed yet.
    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }

    /// Freezes the builder into an immutable [`Schedule`].
    pub fn build(self) -> Schedule {
        Schedule {
            placed: self.placed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offering(code: &str) -> CourseOffering {
        CourseOffering::new(code, code)
    }

    fn interval(slot: &str) -> TimeInterval {
        TimeInterval::parse(slot).unwrap()
    }

    #[test]
    fn test_place_and_build() {
        let mut builder = ScheduleBuilder::new();
        assert!(builder.is_empty());
        assert!(builder.try_place(&offering("CS101"), interval("Mon 09:00-10:30")));
        assert!(builder.try_place(&offering("CS102"), interval("Tue 09:00-10:30")));
        assert_eq!(builder.len(), 2);

        let schedule = builder.build();
        assert!(schedule.contains_code("CS101"));
        assert!(schedule.contains_code("CS102"));
    }

    #[test]
    fn test_conflict_leaves_builder_unchanged() {
        let mut builder = ScheduleBuilder::new();
        assert!(builder.try_place(&offering("CS101"), interval("Mon 09:00-10:30")));
        assert!(!builder.try_place(&offering("CS102"), interval("Mon 10:00-11:30")));
        assert_eq!(builder.len(), 1);

        let schedule = builder.build();
        assert!(!schedule.contains_code("CS102"));
    }

    #[test]
    fn test_touching_boundary_placeable() {
        let mut builder = ScheduleBuilder::new();
        assert!(builder.try_place(&offering("CS101"), interval("Mon 09:00-10:30")));
        assert!(builder.try_place(&offering("CS102"), interval("Mon 10:30-12:00")));
        assert_eq!(builder.len(), 2);
    }

    #[test]
    fn test_same_time_different_day_placeable() {
        let mut builder = ScheduleBuilder::new();
        assert!(builder.try_place(&offering("CS101"), interval("Mon 09:00-10:30")));
        assert!(builder.try_place(&offering("CS102"), interval("Tue 09:00-10:30")));
        assert_eq!(builder.len(), 2);
    }
}
