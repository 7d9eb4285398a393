//! Error types for request parsing, generation and text insertion.

use thiserror::Error;

/// Top-level error type.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Request(#[from] RequestError),

    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error(transparent)]
    Editor(#[from] EditorError),
}

/// Rejected `"<length>*<count>"` input. No batch is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("Empty request: expected [password length] * [create size]")]
    Empty,

    #[error("Malformed request {0:?}: expected [password length] * [create size]")]
    Malformed(String),

    #[error("Password length {0} is outside 1..=64")]
    LengthOutOfRange(String),

    #[error("Create size {0} is outside 1..=10000")]
    CountOutOfRange(String),
}

/// Failure while drawing passwords.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("Character pool is empty")]
    EmptyCharset,

    #[error("Password length must be at least 1")]
    ZeroLength,

    /// Fewer than two distinct candidates per requested password.
    #[error("Uniqueness space too small: {space} possible passwords for {count} requested")]
    SpaceTooSmall { space: u128, count: usize },

    #[error("No unique password found for slot {slot} after {attempts} attempts")]
    RetriesExhausted { slot: usize, attempts: usize },
}

/// Failure while placing text into a target.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("Selection {start}..{end} is outside the text (length {len})")]
    SelectionOutOfBounds { start: usize, end: usize, len: usize },

    #[error("Offset {0} is not on a character boundary")]
    NotCharBoundary(usize),

    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_errors_name_the_offending_value() {
        let err = RequestError::LengthOutOfRange("65".into());
        assert_eq!(err.to_string(), "Password length 65 is outside 1..=64");

        let err = RequestError::CountOutOfRange("10001".into());
        assert_eq!(err.to_string(), "Create size 10001 is outside 1..=10000");
    }

    #[test]
    fn space_too_small_reports_both_sides() {
        let err = GenerateError::SpaceTooSmall { space: 52, count: 40 };
        assert_eq!(
            err.to_string(),
            "Uniqueness space too small: 52 possible passwords for 40 requested"
        );
    }

    #[test]
    fn top_level_error_is_transparent() {
        let err: Error = RequestError::Empty.into();
        assert_eq!(err.to_string(), RequestError::Empty.to_string());
        assert!(matches!(err, Error::Request(RequestError::Empty)));
    }
}
