use super::Error;

/// Error when a column or table declares mutually exclusive constraints or
/// indexes.
#[derive(Debug)]
pub(super) struct ConstraintConflict {
    column: Box<str>,
    message: Box<str>,
}

impl std::error::Error for ConstraintConflict {}

impl core::fmt::Display for ConstraintConflict {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "constraint conflict on column `{}`: {}",
            self.column, self.message
        )
    }
}

impl Error {
    /// Creates a constraint conflict error.
    ///
    /// For table-level conflicts `column` is the table name.
    pub fn constraint_conflict(column: impl Into<String>, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::ConstraintConflict(ConstraintConflict {
            column: column.into().into(),
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a constraint conflict.
    pub fn is_constraint_conflict(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ConstraintConflict(_))
    }
}
