//! Single-schedule generation.
//!
//! # Algorithm
//!
//! 1. Copy the catalog and shuffle it, then stable-sort so that
//!    preference-listed offerings come first. The preference list is a
//!    priority flag, not a total order: relative order among preferred
//!    offerings stays whatever the shuffle produced, which is what makes
//!    repeated calls discover different arrangements.
//! 2. For each offering, try its nominal slot first. If that conflicts
//!    (or the slot string is malformed), search the fallback grid: days
//!    in shuffled order, blocks per day in shuffled order, first free
//!    cell wins.
//! 3. An offering with no free cell anywhere is dropped from this
//!    schedule. Dropping is best-effort policy, not an error: a schedule
//!    may legitimately hold fewer offerings than the catalog.
//!
//! # Complexity
//! O(n² · g) worst case, where n=catalog size and g=grid cells; both are
//! small and fixed, so every call is bounded.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{CourseOffering, DayOfWeek, Schedule, SlotGrid, TimeInterval};

use super::ScheduleBuilder;

/// Result of one generation run.
///
/// The schedule is conflict-free by construction. `dropped` lists the
/// codes of offerings that could not be placed anywhere, so callers can
/// tell a tight schedule apart from a short catalog.
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    /// The generated schedule.
    pub schedule: Schedule,
    /// Codes of offerings that found no free slot, in drop order.
    pub dropped: Vec<String>,
}

/// Randomized timetable generator.
///
/// Placement is randomized at both the ordering stage and the fallback
/// search, so repeated calls with the same inputs explore different
/// valid timetables. The randomness source is passed explicitly: seed a
/// [`rand::rngs::SmallRng`] for reproducible output, or pass
/// [`rand::rng()`] for platform-default behavior.
///
/// # Examples
///
/// ```
/// use u_timetable::generator::TimetableGenerator;
/// use u_timetable::models::CourseOffering;
///
/// let catalog = vec![
///     CourseOffering::new("CS101", "Intro to Programming").with_slot("Mon 09:00-10:30"),
///     CourseOffering::new("CS102", "Data Structures").with_slot("Tue 10:30-12:00"),
/// ];
///
/// let generator = TimetableGenerator::new();
/// let outcome = generator.generate(&catalog, &[], &mut rand::rng());
/// assert_eq!(outcome.schedule.len(), 2);
/// assert!(outcome.dropped.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TimetableGenerator {
    grid: SlotGrid,
}

impl TimetableGenerator {
    /// Creates a generator over the standard weekday grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom fallback grid.
    pub fn with_grid(mut self, grid: SlotGrid) -> Self {
        self.grid = grid;
        self
    }

    /// The fallback grid in use.
    pub fn grid(&self) -> &SlotGrid {
        &self.grid
    }

    /// Generates one schedule from the catalog.
    ///
    /// Offerings whose code appears in `preferences` are placed first;
    /// duplicate and unknown preference codes are tolerated. An empty
    /// catalog yields an empty schedule.
    pub fn generate<R: Rng>(
        &self,
        catalog: &[CourseOffering],
        preferences: &[String],
        rng: &mut R,
    ) -> GenerationOutcome {
        let preferred: HashSet<&str> = preferences.iter().map(String::as_str).collect();

        let mut order: Vec<&CourseOffering> = catalog.iter().collect();
        order.shuffle(rng);
        // Stable sort keeps the shuffled order within each class.
        order.sort_by_key(|offering| !preferred.contains(offering.code.as_str()));

        let mut builder = ScheduleBuilder::new();
        let mut dropped = Vec::new();

        for offering in order {
            let mut placed = match offering.nominal_interval() {
                Ok(interval) => builder.try_place(offering, interval),
                Err(err) => {
                    tracing::warn!(
                        "offering {} has unusable nominal slot ({}), trying fallback grid",
                        offering.code,
                        err
                    );
                    false
                }
            };
            if !placed {
                placed = self.place_fallback(offering, &mut builder, rng);
            }
            if !placed {
                dropped.push(offering.code.clone());
            }
        }

        GenerationOutcome {
            schedule: builder.build(),
            dropped,
        }
    }

    /// Searches the grid for any free cell, days and blocks both in
    /// shuffled order. Returns `true` on the first successful placement.
    fn place_fallback<R: Rng>(
        &self,
        offering: &CourseOffering,
        builder: &mut ScheduleBuilder,
        rng: &mut R,
    ) -> bool {
        let mut days = DayOfWeek::ALL;
        days.shuffle(rng);
        let mut blocks = self.grid.blocks().to_vec();

        for day in days {
            blocks.shuffle(rng);
            for block in &blocks {
                let interval = match TimeInterval::new(day, block.start_min, block.end_min) {
                    Ok(interval) => interval,
                    // Misconfigured block, nothing can meet here.
                    Err(_) => continue,
                };
                if builder.try_place(offering, interval) {
                    return true;
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn offering(code: &str, slot: &str) -> CourseOffering {
        CourseOffering::new(code, code).with_slot(slot)
    }

    fn assert_no_overlaps(schedule: &Schedule) {
        let placed = schedule.placed();
        for (i, a) in placed.iter().enumerate() {
            for b in &placed[i + 1..] {
                assert!(
                    !a.interval.overlaps(&b.interval),
                    "{a} overlaps {b} in {schedule}"
                );
            }
        }
    }

    #[test]
    fn test_empty_catalog() {
        let generator = TimetableGenerator::new();
        let mut rng = SmallRng::seed_from_u64(1);
        let outcome = generator.generate(&[], &[], &mut rng);
        assert!(outcome.schedule.is_empty());
        assert!(outcome.dropped.is_empty());
    }

    #[test]
    fn test_non_conflicting_catalog_placed_at_nominal() {
        let catalog = vec![
            offering("CS101", "Mon 09:00-10:00"),
            offering("CS102", "Tue 10:00-11:00"),
            offering("CS103", "Wed 11:00-12:00"),
            offering("CS104", "Thu 13:00-14:00"),
        ];
        let generator = TimetableGenerator::new();

        // Nominal slots never clash, so every seed places all four as-is.
        for seed in 0..20 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let outcome = generator.generate(&catalog, &[], &mut rng);
            assert_eq!(outcome.schedule.len(), 4);
            assert!(outcome.dropped.is_empty());
            for course in &catalog {
                let placement = outcome
                    .schedule
                    .placed()
                    .iter()
                    .find(|p| p.offering.code == course.code)
                    .unwrap();
                assert_eq!(placement.interval, course.nominal_interval().unwrap());
            }
        }
    }

    #[test]
    fn test_conflicting_nominals_use_fallback() {
        let catalog = vec![
            offering("CS101", "Mon 09:00-10:30"),
            offering("CS102", "Mon 09:00-10:30"),
        ];
        let generator = TimetableGenerator::new();

        for seed in 0..20 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let outcome = generator.generate(&catalog, &[], &mut rng);
            assert_eq!(outcome.schedule.len(), 2);
            assert!(outcome.dropped.is_empty());
            assert_no_overlaps(&outcome.schedule);
            // Exactly one of the two keeps the contested nominal slot.
            let nominal = TimeInterval::parse("Mon 09:00-10:30").unwrap();
            let at_nominal = outcome
                .schedule
                .placed()
                .iter()
                .filter(|p| p.interval == nominal)
                .count();
            assert_eq!(at_nominal, 1);
        }
    }

    #[test]
    fn test_malformed_slot_goes_to_fallback() {
        let catalog = vec![offering("CS101", "whenever works")];
        let generator = TimetableGenerator::new();
        let mut rng = SmallRng::seed_from_u64(7);

        let outcome = generator.generate(&catalog, &[], &mut rng);
        assert_eq!(outcome.schedule.len(), 1);
        assert!(outcome.dropped.is_empty());

        // The placement must come from the grid.
        let placement = &outcome.schedule.placed()[0];
        let block_minutes: Vec<(u16, u16)> = generator
            .grid()
            .blocks()
            .iter()
            .map(|b| (b.start_min, b.end_min))
            .collect();
        assert!(block_minutes
            .contains(&(placement.interval.start_min, placement.interval.end_min)));
    }

    #[test]
    fn test_unplaceable_offering_dropped() {
        // No fallback capacity at all: the second offering has nowhere to go.
        let catalog = vec![
            offering("CS101", "Mon 09:00-10:30"),
            offering("CS102", "Mon 09:00-10:30"),
        ];
        let generator = TimetableGenerator::new().with_grid(SlotGrid::empty());

        for seed in 0..20 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let outcome = generator.generate(&catalog, &[], &mut rng);
            assert_eq!(outcome.schedule.len(), 1);
            assert_eq!(outcome.dropped.len(), 1);
        }
    }

    #[test]
    fn test_preferred_offering_wins_contested_slot() {
        let catalog = vec![
            offering("CS101", "Mon 09:00-10:30"),
            offering("CS202", "Mon 09:00-10:30"),
        ];
        let preferences = vec!["CS202".to_string()];
        let generator = TimetableGenerator::new().with_grid(SlotGrid::empty());

        // The preference flag beats any shuffle outcome.
        for seed in 0..20 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let outcome = generator.generate(&catalog, &preferences, &mut rng);
            assert!(outcome.schedule.contains_code("CS202"));
            assert_eq!(outcome.dropped, vec!["CS101".to_string()]);
        }
    }

    #[test]
    fn test_unknown_and_duplicate_preferences_tolerated() {
        let catalog = vec![offering("CS101", "Mon 09:00-10:00")];
        let preferences = vec![
            "CS101".to_string(),
            "CS101".to_string(),
            "NOPE42".to_string(),
        ];
        let generator = TimetableGenerator::new();
        let mut rng = SmallRng::seed_from_u64(3);

        let outcome = generator.generate(&catalog, &preferences, &mut rng);
        assert_eq!(outcome.schedule.len(), 1);
        assert!(outcome.dropped.is_empty());
    }

    #[test]
    fn test_generated_schedules_never_overlap() {
        // Heavily contended catalog: eight offerings over two nominal slots.
        let catalog: Vec<CourseOffering> = (0..8)
            .map(|i| {
                let slot = if i % 2 == 0 {
                    "Mon 09:00-10:30"
                } else {
                    "Tue 10:30-12:00"
                };
                offering(&format!("CS{i:03}"), slot)
            })
            .collect();
        let generator = TimetableGenerator::new();

        for seed in 0..50 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let outcome = generator.generate(&catalog, &[], &mut rng);
            assert_no_overlaps(&outcome.schedule);
            assert_eq!(outcome.schedule.len() + outcome.dropped.len(), catalog.len());
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let catalog = vec![
            offering("CS101", "Mon 09:00-10:30"),
            offering("CS102", "Mon 09:00-10:30"),
            offering("CS103", "Mon 09:00-10:30"),
        ];
        let generator = TimetableGenerator::new();

        let a = generator.generate(&catalog, &[], &mut SmallRng::seed_from_u64(99));
        let b = generator.generate(&catalog, &[], &mut SmallRng::seed_from_u64(99));
        assert_eq!(a.schedule.signature(), b.schedule.signature());
        assert_eq!(a.dropped, b.dropped);
    }
}
