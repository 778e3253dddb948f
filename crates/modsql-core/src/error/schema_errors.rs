use super::Error;

/// Every build error outstanding when a table or the schema was requested.
///
/// Column-level errors are collected rather than raised one at a time, so a
/// single declaration pass can report all of them.
#[derive(Debug)]
pub(super) struct SchemaErrors {
    errors: Vec<Error>,
}

impl std::error::Error for SchemaErrors {}

impl core::fmt::Display for SchemaErrors {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match &self.errors[..] {
            [err] => core::fmt::Display::fmt(err, f),
            errors => {
                write!(f, "{} schema errors: ", errors.len())?;
                let mut s = "";
                for err in errors {
                    write!(f, "{s}{err}")?;
                    s = "; ";
                }
                Ok(())
            }
        }
    }
}

impl Error {
    /// Creates an error carrying every collected build error.
    pub fn schema_errors(errors: Vec<Error>) -> Error {
        Error::from(super::ErrorKind::SchemaErrors(SchemaErrors { errors }))
    }

    /// Returns `true` if this error is a collection of build errors.
    pub fn is_schema_errors(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::SchemaErrors(_))
    }

    /// The collected errors, or an empty slice for any other kind.
    pub fn errors(&self) -> &[Error] {
        match self.kind() {
            super::ErrorKind::SchemaErrors(err) => &err.errors,
            _ => &[],
        }
    }
}
