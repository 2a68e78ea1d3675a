//! Input validation for course catalogs.
//!
//! Checks structural integrity of a catalog before generation. Detects:
//! - Duplicate course codes
//! - Empty course codes
//! - Malformed nominal slot strings
//!
//! Generation itself tolerates all of these (a malformed slot only costs
//! the offering its nominal placement); validation is for callers that
//! want to surface catalog problems up front instead.

use std::collections::HashSet;

use crate::models::CourseOffering;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two offerings share the same code.
    DuplicateCode,
    /// An offering has an empty code.
    EmptyCode,
    /// An offering's nominal slot string does not parse.
    MalformedSlot,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a course catalog.
///
/// Checks:
/// 1. No empty offering codes
/// 2. No duplicate offering codes
/// 3. Every nominal slot string parses
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_catalog(catalog: &[CourseOffering]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut codes = HashSet::new();

    for offering in catalog {
        if offering.code.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyCode,
                format!("Offering '{}' has an empty code", offering.title),
            ));
        } else if !codes.insert(offering.code.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateCode,
                format!("Duplicate offering code: {}", offering.code),
            ));
        }

        if let Err(err) = offering.nominal_interval() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MalformedSlot,
                format!("Offering '{}': {}", offering.code, err),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
