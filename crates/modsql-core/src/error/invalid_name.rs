use super::Error;

/// Error when a table or column name is not a plain SQL identifier, is
/// declared twice, or generates the same native name as another one.
#[derive(Debug)]
pub(super) struct InvalidName {
    name: Box<str>,
    reason: Box<str>,
}

impl std::error::Error for InvalidName {}

impl core::fmt::Display for InvalidName {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid name `{}`: {}", self.name, self.reason)
    }
}

impl Error {
    /// Creates an invalid name error.
    pub fn invalid_name(name: impl Into<String>, reason: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidName(InvalidName {
            name: name.into().into(),
            reason: reason.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid name error.
    pub fn is_invalid_name(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidName(_))
    }
}
