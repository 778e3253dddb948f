use crate::Error;

use chrono::{DateTime, Utc};

/// A literal value: a column default, a cell of a seed or test row, or a bind
/// argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Signed 8-bit integer
    I8(i8),

    /// Signed 16-bit integer
    I16(i16),

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    /// 32-bit float
    F32(f32),

    /// 64-bit float
    F64(f64),

    /// String value
    String(String),

    /// A single byte
    Byte(u8),

    /// A single Unicode scalar value
    Rune(char),

    /// Binary blob
    Binary(Vec<u8>),

    /// Absolute timestamp
    DateTime(DateTime<Utc>),
}

impl Value {
    /// Returns the value as an `i64` if it is any of the integer variants.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::I8(v) => Some(i64::from(v)),
            Value::I16(v) => Some(i64::from(v)),
            Value::I32(v) => Some(i64::from(v)),
            Value::I64(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_integer(&self) -> bool {
        self.as_i64().is_some()
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Value::F32(_) | Value::F64(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }
}

macro_rules! impl_value_conversions {
    ($ty:ty, $name:ident, $lit:literal) => {
        impl From<$ty> for Value {
            fn from(value: $ty) -> Self {
                Self::$name(value)
            }
        }

        impl TryFrom<Value> for $ty {
            type Error = Error;

            fn try_from(value: Value) -> Result<Self, Self::Error> {
                match value {
                    Value::$name(value) => Ok(value),
                    value => Err(crate::err!("cannot convert {value:?} to {}", $lit)),
                }
            }
        }
    };
}

impl_value_conversions!(bool, Bool, "bool");
impl_value_conversions!(i8, I8, "i8");
impl_value_conversions!(i16, I16, "i16");
impl_value_conversions!(i32, I32, "i32");
impl_value_conversions!(i64, I64, "i64");
impl_value_conversions!(f32, F32, "f32");
impl_value_conversions!(f64, F64, "f64");
impl_value_conversions!(String, String, "String");
impl_value_conversions!(u8, Byte, "u8");
impl_value_conversions!(char, Rune, "char");
impl_value_conversions!(Vec<u8>, Binary, "Vec<u8>");
impl_value_conversions!(DateTime<Utc>, DateTime, "DateTime<Utc>");

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Self::String(value.clone())
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Self::Binary(value.to_vec())
    }
}
