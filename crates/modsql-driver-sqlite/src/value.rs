use chrono::SecondsFormat;
use modsql_core::stmt::Value as CoreValue;
use rusqlite::types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef};

/// A bind argument, stored the way the generated scripts store literals.
#[derive(Debug)]
pub(crate) struct Value<'a>(&'a CoreValue);

impl<'a> From<&'a CoreValue> for Value<'a> {
    fn from(value: &'a CoreValue) -> Self {
        Self(value)
    }
}

impl ToSql for Value<'_> {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        use CoreValue::*;

        Ok(match self.0 {
            Bool(v) => ToSqlOutput::Owned(SqlValue::Integer(i64::from(*v))),
            I8(v) => ToSqlOutput::Owned(SqlValue::Integer(i64::from(*v))),
            I16(v) => ToSqlOutput::Owned(SqlValue::Integer(i64::from(*v))),
            I32(v) => ToSqlOutput::Owned(SqlValue::Integer(i64::from(*v))),
            I64(v) => ToSqlOutput::Owned(SqlValue::Integer(*v)),
            F32(v) => ToSqlOutput::Owned(SqlValue::Real(f64::from(*v))),
            F64(v) => ToSqlOutput::Owned(SqlValue::Real(*v)),
            String(v) => ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes())),
            Byte(v) => ToSqlOutput::Owned(SqlValue::Text(char::from(*v).to_string())),
            Rune(v) => ToSqlOutput::Owned(SqlValue::Text(v.to_string())),
            Binary(v) => ToSqlOutput::Borrowed(ValueRef::Blob(&v[..])),
            DateTime(v) => ToSqlOutput::Owned(SqlValue::Text(
                v.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            )),
        })
    }
}
