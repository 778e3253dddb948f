use super::Error;

/// Error built from a format string, for failures without a dedicated kind.
#[derive(Debug)]
pub(super) struct Adhoc {
    message: Box<str>,
}

impl std::error::Error for Adhoc {}

impl core::fmt::Display for Adhoc {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error {
    /// Creates an error from format arguments. Prefer the `err!` and `bail!`
    /// macros.
    pub fn from_args(args: core::fmt::Arguments<'_>) -> Error {
        Error::from(super::ErrorKind::Adhoc(Adhoc {
            message: args.to_string().into(),
        }))
    }
}
