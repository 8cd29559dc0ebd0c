//! Error types for the gridgames crate

use thiserror::Error;

/// Main error type for the gridgames crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("illegal move {mv}: {reason}")]
    IllegalMove { mv: usize, reason: String },

    #[error("invalid search request: {reason}")]
    InvalidSearchRequest { reason: String },

    #[error("invariant violation: {message}")]
    InvariantViolation { message: String },

    #[error("no legal moves available")]
    NoLegalMoves,

    #[error("invalid board '{input}': {reason}")]
    InvalidBoard { input: String, reason: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to {operation}: {message}")]
    SerializationContext { operation: String, message: String },
}

impl Error {
    pub(crate) fn illegal_move(mv: usize, reason: impl Into<String>) -> Self {
        Error::IllegalMove {
            mv,
            reason: reason.into(),
        }
    }

    pub(crate) fn invariant(message: impl Into<String>) -> Self {
        Error::InvariantViolation {
            message: message.into(),
        }
    }

    pub(crate) fn invalid_search(reason: impl Into<String>) -> Self {
        Error::InvalidSearchRequest {
            reason: reason.into(),
        }
    }
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn illegal_move_display() {
        let err = Error::illegal_move(3, "column is full");
        assert_eq!(err.to_string(), "illegal move 3: column is full");
    }

    #[test]
    fn invariant_violation_display() {
        let err = Error::invariant("undo on empty cell 4");
        assert_eq!(err.to_string(), "invariant violation: undo on empty cell 4");
    }
}
