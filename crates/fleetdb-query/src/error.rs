//! Error types for fleetdb-query.

use thiserror::Error;

/// Result type alias for command-building operations.
pub type QueryResult<T> = Result<T, QueryError>;

/// Rejected-input errors raised while assembling a command.
///
/// Each variant names the argument category that failed validation and
/// carries the rejected input verbatim. A failing call appends nothing to
/// the command buffer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// Agent id containing anything other than ASCII digits.
    #[error("Invalid agent id: {0:?}")]
    InvalidAgentId(String),

    /// Table name outside the allowed character set.
    #[error("Invalid table name: {0:?}")]
    InvalidTableName(String),

    /// Column name outside the allowed character set.
    #[error("Invalid column name: {0:?}")]
    InvalidColumnName(String),

    /// Literal value outside the allowed character set.
    #[error("Invalid value: {0:?}")]
    InvalidValue(String),

    /// Command name outside the allowed character set.
    #[error("Invalid command: {0:?}")]
    InvalidCommand(String),
}

impl QueryError {
    /// The rejected input that triggered this error.
    pub fn rejected_input(&self) -> &str {
        match self {
            Self::InvalidAgentId(s)
            | Self::InvalidTableName(s)
            | Self::InvalidColumnName(s)
            | Self::InvalidValue(s)
            | Self::InvalidCommand(s) => s,
        }
    }
}
