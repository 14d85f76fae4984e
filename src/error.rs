//! Error types.

use thiserror::Error;

use crate::validation::ValidationError;

/// Result alias used throughout the crate.
pub type BalanceResult<T> = Result<T, BalanceError>;

/// Errors raised while building a problem or searching for a partition.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BalanceError {
    /// The problem definition failed validation. Fatal to construction.
    #[error("invalid problem definition: {}", join_messages(.0))]
    Configuration(Vec<ValidationError>),

    /// No sampled candidate used every group.
    ///
    /// Recoverable: retry with more tries or fewer groups.
    #[error("none of {tries} sampled candidates used all {group_count} groups")]
    EmptyResult { tries: usize, group_count: usize },

    /// A caller-supplied assignment does not fit the problem.
    #[error("invalid candidate: {reason}")]
    InvalidCandidate { reason: String },
}

impl BalanceError {
    /// Whether the caller can reasonably retry with different search parameters.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, BalanceError::EmptyResult { .. })
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_problem;

    #[test]
    fn test_configuration_message_lists_every_issue() {
        let labels = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let errors = validate_problem(5, &[1.0, -1.0, 2.0], &labels).unwrap_err();
        let err = BalanceError::Configuration(errors);
        let text = err.to_string();
        assert!(text.starts_with("invalid problem definition: "));
        assert!(text.contains("non-positive weight"));
        assert!(text.contains("Group count 5"));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_empty_result_is_recoverable() {
        let err = BalanceError::EmptyResult {
            tries: 1,
            group_count: 7,
        };
        assert!(err.is_recoverable());
        assert_eq!(
            err.to_string(),
            "none of 1 sampled candidates used all 7 groups"
        );
    }
}
