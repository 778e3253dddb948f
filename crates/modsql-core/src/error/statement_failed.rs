use super::Error;

/// Error when a statement of a loaded script fails against the database.
///
/// Carries the statement text and the driver error.
#[derive(Debug)]
pub(super) struct StatementFailed {
    statement: Box<str>,
    cause: Error,
}

impl std::error::Error for StatementFailed {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.cause)
    }
}

impl core::fmt::Display for StatementFailed {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "SQL line: {}\n{}", self.statement, self.cause)
    }
}

impl Error {
    /// Creates an execution error for `statement`.
    pub fn statement_failed(statement: impl Into<String>, cause: Error) -> Error {
        Error::from(super::ErrorKind::StatementFailed(StatementFailed {
            statement: statement.into().into(),
            cause,
        }))
    }

    /// Returns `true` if this error is a failed script statement.
    pub fn is_statement_failed(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::StatementFailed(_))
    }

    /// The text of the failed statement, if this is a statement failure.
    pub fn statement(&self) -> Option<&str> {
        match self.kind() {
            super::ErrorKind::StatementFailed(err) => Some(&err.statement),
            _ => None,
        }
    }
}
