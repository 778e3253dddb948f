use crate::{stmt::Value, Engine, Error};

use serde::Deserialize;
use std::{fmt, ops::RangeInclusive};

/// Canonical column type, independent of any one SQL dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    Bool,

    /// Signed integer as wide as the target's pointer: 32 or 64 bits.
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Float32,
    Float64,
    String,

    /// A single byte, stored as a one character string.
    Byte,

    /// A single Unicode scalar value.
    Rune,
    Binary,
    DateTime,
}

/// Width of [`ScalarType::Int`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "u8")]
pub enum IntWidth {
    W32,
    W64,
}

impl ScalarType {
    pub const ALL: [ScalarType; 13] = [
        ScalarType::Bool,
        ScalarType::Int,
        ScalarType::Int8,
        ScalarType::Int16,
        ScalarType::Int32,
        ScalarType::Int64,
        ScalarType::Float32,
        ScalarType::Float64,
        ScalarType::String,
        ScalarType::Byte,
        ScalarType::Rune,
        ScalarType::Binary,
        ScalarType::DateTime,
    ];

    /// Replaces `Int` with the fixed-width integer type for `width`.
    pub fn resolve(self, width: IntWidth) -> ScalarType {
        match (self, width) {
            (ScalarType::Int, IntWidth::W32) => ScalarType::Int32,
            (ScalarType::Int, IntWidth::W64) => ScalarType::Int64,
            (ty, _) => ty,
        }
    }

    /// The SQL type name of this type for `engine`.
    pub fn lexeme(self, engine: Engine, width: IntWidth) -> &'static str {
        use ScalarType::*;

        match engine {
            Engine::Mysql => match self.resolve(width) {
                Bool => "BOOL",
                Int8 => "TINYINT",
                Int16 => "SMALLINT",
                Int | Int32 => "INT",
                Int64 => "BIGINT",
                Float32 => "FLOAT",
                Float64 => "DOUBLE",
                String => "TEXT",
                Byte => "CHAR(1)",
                Rune => "CHAR(4)",
                Binary => "BLOB",
                DateTime => "TIMESTAMP",
            },
            Engine::Postgresql => match self.resolve(width) {
                Bool => "boolean",
                // PostgreSQL has no one byte integer
                Int8 | Int16 => "smallint",
                Int | Int32 => "integer",
                Int64 => "bigint",
                Float32 => "real",
                Float64 => "double precision",
                String => "text",
                Byte => "character",
                Rune => "character varying(4)",
                Binary => "bytea",
                DateTime => "timestamp with time zone",
            },
            Engine::Sqlite => match self.resolve(width) {
                Bool => "BOOL",
                Int | Int8 | Int16 | Int32 | Int64 => "INTEGER",
                Float32 | Float64 => "REAL",
                String | Byte | Rune => "TEXT",
                Binary => "BLOB",
                DateTime => "TEXT",
            },
        }
    }

    /// The Rust type that holds values of this type in generated records.
    pub fn native(self, width: IntWidth) -> &'static str {
        use ScalarType::*;

        match self.resolve(width) {
            Bool => "bool",
            Int8 => "i8",
            Int16 => "i16",
            Int | Int32 => "i32",
            Int64 => "i64",
            Float32 => "f32",
            Float64 => "f64",
            String => "String",
            Byte => "u8",
            Rune => "char",
            Binary => "Vec<u8>",
            DateTime => "chrono::DateTime<chrono::Utc>",
        }
    }

    pub fn is_integer(self) -> bool {
        self.int_range(IntWidth::W64).is_some()
    }

    /// Values representable by an integer type.
    pub fn int_range(self, width: IntWidth) -> Option<RangeInclusive<i64>> {
        match self.resolve(width) {
            ScalarType::Int8 => Some(i64::from(i8::MIN)..=i64::from(i8::MAX)),
            ScalarType::Int16 => Some(i64::from(i16::MIN)..=i64::from(i16::MAX)),
            ScalarType::Int32 => Some(i64::from(i32::MIN)..=i64::from(i32::MAX)),
            ScalarType::Int64 => Some(i64::MIN..=i64::MAX),
            _ => None,
        }
    }

    /// Returns `true` if `value` belongs to this type's family.
    ///
    /// Integer types accept any integer value within their range, float types
    /// accept either float width as long as it is finite; every other type
    /// accepts exactly its own variant.
    pub fn accepts(self, value: &Value, width: IntWidth) -> bool {
        use ScalarType::*;

        if let Some(range) = self.int_range(width) {
            return value.as_i64().is_some_and(|n| range.contains(&n));
        }

        match (self, value) {
            // SQL has no literal for NaN or the infinities
            (Float32 | Float64, Value::F32(v)) => v.is_finite(),
            (Float32 | Float64, Value::F64(v)) => v.is_finite(),
            _ => matches!(
                (self, value),
                (Bool, Value::Bool(_))
                    | (String, Value::String(_))
                    | (Byte, Value::Byte(_))
                    | (Rune, Value::Rune(_))
                    | (Binary, Value::Binary(_))
                    | (DateTime, Value::DateTime(_))
            ),
        }
    }

    /// Builds the integer value of this type holding `n`.
    pub fn integer(self, n: i64, width: IntWidth) -> Option<Value> {
        match self.resolve(width) {
            ScalarType::Int8 => i8::try_from(n).ok().map(Value::I8),
            ScalarType::Int16 => i16::try_from(n).ok().map(Value::I16),
            ScalarType::Int32 => i32::try_from(n).ok().map(Value::I32),
            ScalarType::Int64 => Some(Value::I64(n)),
            _ => None,
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl IntWidth {
    /// Width of the target this crate was compiled for.
    pub fn native() -> IntWidth {
        if cfg!(target_pointer_width = "64") {
            IntWidth::W64
        } else {
            IntWidth::W32
        }
    }

    pub fn bits(self) -> u8 {
        match self {
            IntWidth::W32 => 32,
            IntWidth::W64 => 64,
        }
    }
}

impl Default for IntWidth {
    fn default() -> Self {
        IntWidth::native()
    }
}

impl TryFrom<u8> for IntWidth {
    type Error = Error;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        match bits {
            32 => Ok(IntWidth::W32),
            64 => Ok(IntWidth::W64),
            _ => Err(Error::invalid_config(format!(
                "integer width must be 32 or 64, got {bits}"
            ))),
        }
    }
}
