//! Slot parsing errors.
//!
//! Nominal slot strings come from an external catalog and are not trusted.
//! Every parsing path returns [`SlotError`] instead of panicking; the
//! generator downgrades these errors to warnings and retries the offering
//! through the fallback search.

use thiserror::Error;

/// Failure modes when parsing a weekly slot string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlotError {
    /// The slot string does not have the `<day> <start>-<end>` shape.
    #[error("malformed slot `{0}`: expected `<day> <HH:MM>-<HH:MM>`")]
    Malformed(String),

    /// The day token is not a weekday name or abbreviation.
    #[error("unknown day `{0}`")]
    UnknownDay(String),

    /// A time token is not a valid `HH:MM` time of day.
    #[error("invalid time `{0}`: expected `HH:MM`")]
    InvalidTime(String),

    /// The interval would be empty or inverted.
    #[error("interval start {start} must be before end {end}")]
    EmptyInterval {
        /// Formatted start time.
        start: String,
        /// Formatted end time.
        end: String,
    },
}
