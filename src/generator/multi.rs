//! Multi-option schedule generation.
//!
//! Repeatedly runs the single-schedule generator and keeps only
//! structurally distinct results, compared by schedule signature. The
//! attempt ceiling (`count * 10`) guarantees termination even when the
//! catalog's conflict structure admits fewer distinct arrangements than
//! requested — a short result means the variety is exhausted, not that
//! anything failed.

use std::collections::HashSet;

use rand::Rng;

use crate::models::CourseOffering;

use super::{GenerationOutcome, TimetableGenerator};

impl TimetableGenerator {
    /// Generates up to `count` structurally distinct schedules.
    ///
    /// Outcomes are deduplicated by [`Schedule::signature`]
    /// (insertion-order independent), so two attempts that place the
    /// same offerings at the same times count as one option. Returns
    /// fewer than `count` outcomes when the attempt ceiling is reached
    /// first.
    ///
    /// [`Schedule::signature`]: crate::models::Schedule::signature
    ///
    /// # Examples
    ///
    /// ```
    /// use u_timetable::generator::TimetableGenerator;
    /// use u_timetable::models::CourseOffering;
    ///
    /// let catalog = vec![
    ///     CourseOffering::new("CS101", "Intro to Programming").with_slot("Mon 09:00-10:30"),
    ///     CourseOffering::new("CS102", "Data Structures").with_slot("Mon 09:00-10:30"),
    /// ];
    ///
    /// let generator = TimetableGenerator::new();
    /// let options = generator.generate_multiple(&catalog, &[], 3, &mut rand::rng());
    /// assert!(!options.is_empty() && options.len() <= 3);
    /// ```
    pub fn generate_multiple<R: Rng>(
        &self,
        catalog: &[CourseOffering],
        preferences: &[String],
        count: usize,
        rng: &mut R,
    ) -> Vec<GenerationOutcome> {
        let max_attempts = count.saturating_mul(10);
        let mut seen = HashSet::new();
        let mut options = Vec::new();

        for _ in 0..max_attempts {
            if options.len() >= count {
                break;
            }
            let outcome = self.generate(catalog, preferences, rng);
            if seen.insert(outcome.schedule.signature()) {
                options.push(outcome);
            }
        }

        options
    }
}
