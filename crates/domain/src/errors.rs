//! Domain-level errors
//!
//! Display strings double as client-facing messages, so they name the
//! violated constraint and nothing else.

use thiserror::Error;

/// Errors that can occur validating a moderation request
#[derive(Debug, Error)]
pub enum DomainError {
    /// A required request field was absent
    #[error("Missing required parameters")]
    MissingParameters,

    /// The destination literal was outside the allowed set
    #[error("Destination must be 'quotes' or 'removed'")]
    InvalidDestination(String),

    /// The index did not address an entry of the source collection
    #[error("Index out of range")]
    IndexOutOfRange { index: i64, len: usize },
}

impl DomainError {
    /// Validate a zero-based index against the source collection length
    pub fn check_index(index: i64, len: usize) -> Result<usize, Self> {
        let in_range = usize::try_from(index)
            .ok()
            .filter(|&i| i < len);
        in_range.ok_or(Self::IndexOutOfRange { index, len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_parameters_message() {
        assert_eq!(
            DomainError::MissingParameters.to_string(),
            "Missing required parameters"
        );
    }

    #[test]
    fn invalid_destination_message() {
        let err = DomainError::InvalidDestination("trash".to_string());
        assert_eq!(err.to_string(), "Destination must be 'quotes' or 'removed'");
    }

    #[test]
    fn index_out_of_range_message() {
        let err = DomainError::IndexOutOfRange { index: 5, len: 3 };
        assert_eq!(err.to_string(), "Index out of range");
    }

    #[test]
    fn check_index_accepts_valid_positions() {
        assert_eq!(DomainError::check_index(0, 3).unwrap(), 0);
        assert_eq!(DomainError::check_index(2, 3).unwrap(), 2);
    }

    #[test]
    fn check_index_rejects_len() {
        assert!(DomainError::check_index(3, 3).is_err());
    }

    #[test]
    fn check_index_rejects_negative() {
        assert!(DomainError::check_index(-1, 3).is_err());
    }

    #[test]
    fn check_index_rejects_empty_collection() {
        assert!(DomainError::check_index(0, 0).is_err());
    }
}
