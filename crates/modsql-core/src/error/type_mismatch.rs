use super::Error;
use crate::{schema::ScalarType, stmt::Value};

/// Error when a value does not belong to the type family of the column that
/// receives it.
///
/// Raised by column defaults and by seed/test rows.
#[derive(Debug)]
pub(super) struct TypeMismatch {
    column: Box<str>,
    ty: ScalarType,
    value: Value,
}

impl std::error::Error for TypeMismatch {}

impl core::fmt::Display for TypeMismatch {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "type mismatch: column `{}` of type {} cannot hold {:?}",
            self.column, self.ty, self.value
        )
    }
}

impl Error {
    /// Creates a type mismatch error for `value` assigned to `column`.
    pub fn type_mismatch(column: impl Into<String>, ty: ScalarType, value: &Value) -> Error {
        Error::from(super::ErrorKind::TypeMismatch(TypeMismatch {
            column: column.into().into(),
            ty,
            value: value.clone(),
        }))
    }

    /// Returns `true` if this error is a type mismatch.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::TypeMismatch(_))
    }
}
