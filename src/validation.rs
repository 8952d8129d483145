//! Input validation for process batches.
//!
//! Checks structural integrity of a loaded batch before simulation.
//! Detects:
//! - Duplicate process IDs
//! - Non-positive burst durations
//! - Negative arrival times
//! - Timelines that cannot be represented in [`Ticks`]
//!
//! All problems are collected, not just the first one.

use crate::models::{Process, Ticks};
use std::collections::HashSet;

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
    /// Two processes share the same ID.
    DuplicateId,
    /// A process needs no CPU time (or negative time).
    NonPositiveBurst,
    /// A process arrives before t=0.
    NegativeArrival,
    /// The latest arrival plus the total burst exceeds the tick range.
    TimelineOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process batch.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_batch(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for p in processes {
        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("duplicate process id {}", p.id),
            ));
        }

        if p.burst <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("process {} has burst {}", p.id, p.burst),
            ));
        }

        if p.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("process {} arrives at {}", p.id, p.arrival),
            ));
        }
    }

    if timeline_end(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimelineOverflow,
            format!(
                "latest arrival plus total burst exceeds {} ticks",
                Ticks::MAX
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Upper bound on every clock reading a driver can reach: no schedule
/// runs past the latest arrival followed by every burst back to back.
fn timeline_end(processes: &[Process]) -> Option<Ticks> {
    let latest_arrival = processes.iter().map(|p| p.arrival.max(0)).max().unwrap_or(0);
    processes
        .iter()
        .try_fold(latest_arrival, |end, p| end.checked_add(p.burst.max(0)))
}
