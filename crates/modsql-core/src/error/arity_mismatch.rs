use super::Error;

/// Error when an inserted row does not provide exactly one value per column.
#[derive(Debug)]
pub(super) struct ArityMismatch {
    table: Box<str>,
    expected: usize,
    actual: usize,
}

impl std::error::Error for ArityMismatch {}

impl core::fmt::Display for ArityMismatch {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "arity mismatch: table `{}` has {} columns, got {} values",
            self.table, self.expected, self.actual
        )
    }
}

impl Error {
    /// Creates an arity mismatch error.
    pub fn arity_mismatch(table: impl Into<String>, expected: usize, actual: usize) -> Error {
        Error::from(super::ErrorKind::ArityMismatch(ArityMismatch {
            table: table.into().into(),
            expected,
            actual,
        }))
    }

    /// Returns `true` if this error is an arity mismatch.
    pub fn is_arity_mismatch(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ArityMismatch(_))
    }
}
