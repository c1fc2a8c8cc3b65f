use std::fmt;

/// Error type returned by mteval-rs public APIs.
#[derive(Debug)]
pub enum ScoreError {
    /// Profile string passed to the scorer factory is not a known metric.
    InvalidProfile(String),
    /// Operation is not meaningful for the chosen scorer.
    UnsupportedOperation(String),
    /// Caller-supplied corpora, sentence ids, or cached statistics were malformed.
    InvalidInput(String),
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreError::InvalidProfile(profile) => {
                write!(f, "invalid profile for scorer: {profile}")
            }
            ScoreError::UnsupportedOperation(message) => {
                write!(f, "unsupported operation: {message}")
            }
            ScoreError::InvalidInput(message) => write!(f, "invalid input: {message}"),
        }
    }
}

impl std::error::Error for ScoreError {}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ScoreError>;

#[cfg(test)]
mod error_tests {
    use super::ScoreError;

    #[test]
    fn display_messages_are_human_readable() {
        assert_eq!(
            ScoreError::InvalidProfile("foo".to_string()).to_string(),
            "invalid profile for scorer: foo"
        );
        assert_eq!(
            ScoreError::UnsupportedOperation("no sentence scores".to_string()).to_string(),
            "unsupported operation: no sentence scores"
        );
        assert_eq!(
            ScoreError::InvalidInput("5 != 4".to_string()).to_string(),
            "invalid input: 5 != 4"
        );
    }
}
