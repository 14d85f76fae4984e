//! Input validation for balancing problems.
//!
//! Checks structural integrity of a problem definition before any
//! sampling happens. Detects:
//! - Weight/label length mismatches
//! - Empty problems
//! - Non-positive or non-finite weights
//! - Group counts outside `1..=N`
//!
//! All issues are collected and reported together rather than stopping
//! at the first one.

use std::fmt;

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
    /// Weights and labels have different lengths.
    LengthMismatch,
    /// No entities were supplied.
    EmptyProblem,
    /// An entity weight is zero or negative.
    NonPositiveWeight,
    /// An entity weight is NaN or infinite.
    NonFiniteWeight,
    /// Group count is zero or exceeds the number of entities.
    GroupCountOutOfRange,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates the input data for a balancing problem.
///
/// Checks:
/// 1. `weights` and `labels` have the same length
/// 2. At least one entity is present
/// 3. Every weight is finite and strictly positive
/// 4. `1 <= group_count <= N`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_problem(
    group_count: usize,
    weights: &[f64],
    labels: &[String],
) -> ValidationResult {
    let mut errors = Vec::new();

    if weights.len() != labels.len() {
        errors.push(ValidationError::new(
            ValidationErrorKind::LengthMismatch,
            format!("{} weights but {} labels", weights.len(), labels.len()),
        ));
    }

    if weights.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyProblem,
            "Problem has no entities",
        ));
    }

    for (idx, &w) in weights.iter().enumerate() {
        let name = labels.get(idx).map(String::as_str).unwrap_or("<unlabelled>");
        if !w.is_finite() {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonFiniteWeight,
                format!("Entity {} ('{}') has non-finite weight {}", idx, name, w),
            ));
        } else if w <= 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveWeight,
                format!("Entity {} ('{}') has non-positive weight {}", idx, name, w),
            ));
        }
    }

    let n = weights.len();
    if group_count == 0 || group_count > n {
        errors.push(ValidationError::new(
            ValidationErrorKind::GroupCountOutOfRange,
            format!("Group count {} is outside 1..={}", group_count, n),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
