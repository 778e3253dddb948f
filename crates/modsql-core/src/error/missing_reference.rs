use super::Error;

/// Error when a constraint, foreign key or index names a table or column that
/// has not been declared.
#[derive(Debug)]
pub(super) struct MissingReference {
    what: Box<str>,
}

impl std::error::Error for MissingReference {}

impl core::fmt::Display for MissingReference {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unknown {}", self.what)
    }
}

impl Error {
    /// Creates a referential error. `what` names the missing item, e.g.
    /// ``column `id` in table `user` ``.
    pub fn missing_reference(what: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingReference(MissingReference {
            what: what.into().into(),
        }))
    }

    /// Returns `true` if this error is a referential error.
    pub fn is_missing_reference(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingReference(_))
    }
}
