//! Course timetable generation for the U-Engine ecosystem.
//!
//! Assigns course offerings to weekly time slots without conflicts and
//! produces several structurally distinct schedule options for a student
//! to choose from. Catalog storage, enrollment bookkeeping, and timetable
//! rendering are the calling layer's concern — this crate only reads a
//! catalog and returns schedules.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `DayOfWeek`, `TimeInterval`,
//!   `CourseOffering`, `PlacedOffering`, `Schedule`, `SlotGrid`
//! - **`generator`**: `ScheduleBuilder` and the randomized
//!   `TimetableGenerator` (single- and multi-option generation)
//! - **`validation`**: Catalog integrity checks (duplicate codes,
//!   malformed slot strings)
//! - **`error`**: Slot parsing errors
//!
//! # Example
//!
//! ```
//! use u_timetable::generator::TimetableGenerator;
//! use u_timetable::models::CourseOffering;
//!
//! let catalog = vec![
//!     CourseOffering::new("CS101", "Intro to Programming").with_slot("Mon 09:00-10:30"),
//!     CourseOffering::new("CS102", "Data Structures").with_slot("Mon 09:00-10:30"),
//!     CourseOffering::new("CS103", "Algorithms").with_slot("Wed 11:00-12:30"),
//! ];
//! let preferences = vec!["CS101".to_string()];
//!
//! let generator = TimetableGenerator::new();
//! let options = generator.generate_multiple(&catalog, &preferences, 3, &mut rand::rng());
//!
//! for option in &options {
//!     println!("{}\n--", option.schedule);
//! }
//! ```
//!
//! # Determinism
//!
//! Every generating call takes an explicit `rand::Rng`, so tests can pin
//! a seeded [`rand::rngs::SmallRng`] and replay identical output, while
//! production callers pass [`rand::rng()`] for fresh arrangements on each
//! call.
//!
//! # References
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling"
//! - Burke & Petrovic (2002), "Recent research directions in automated timetabling"

pub mod error;
pub mod generator;
pub mod models;
pub mod validation;
