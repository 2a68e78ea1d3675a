//! Timetable generation.
//!
//! Provides incremental schedule assembly and the randomized generator
//! that turns a course catalog into one or more conflict-free timetables.
//!
//! # Algorithm
//!
//! [`TimetableGenerator`] is a randomized greedy placer: preference-first
//! ordering over a shuffled catalog, nominal slot first, then a shuffled
//! search over the fallback grid. [`TimetableGenerator::generate_multiple`]
//! repeats it with signature-based deduplication to collect distinct
//! schedule options. It is not optimal; it trades optimality for variety
//! across calls, which is the product requirement.
//!
//! # Reference
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling"
//! - Burke & Petrovic (2002), "Recent research directions in automated timetabling"

mod builder;
mod multi;
mod single;

pub use builder::ScheduleBuilder;
pub use single::{GenerationOutcome, TimetableGenerator};
