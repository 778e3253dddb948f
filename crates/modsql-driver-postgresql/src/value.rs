use modsql_core::stmt::Value as CoreValue;
use tokio_postgres::types::{accepts, private::BytesMut, to_sql_checked, IsNull, ToSql, Type};

/// A bind argument, converted to the width of the parameter type the server
/// inferred.
#[derive(Debug)]
pub(crate) struct Value<'a>(&'a CoreValue);

impl<'a> From<&'a CoreValue> for Value<'a> {
    fn from(value: &'a CoreValue) -> Self {
        Self(value)
    }
}

type BoxError = Box<dyn std::error::Error + Sync + Send>;

impl ToSql for Value<'_> {
    fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, BoxError>
    where
        Self: Sized,
    {
        match self.0 {
            CoreValue::Bool(value) => value.to_sql(ty, out),
            CoreValue::I8(value) => integer(i64::from(*value), ty, out),
            CoreValue::I16(value) => integer(i64::from(*value), ty, out),
            CoreValue::I32(value) => integer(i64::from(*value), ty, out),
            CoreValue::I64(value) => integer(*value, ty, out),
            CoreValue::F32(value) => match *ty {
                Type::FLOAT8 => f64::from(*value).to_sql(ty, out),
                _ => value.to_sql(ty, out),
            },
            CoreValue::F64(value) => match *ty {
                // Narrowing to `real` is what the column stores anyway
                Type::FLOAT4 => (*value as f32).to_sql(ty, out),
                _ => value.to_sql(ty, out),
            },
            CoreValue::String(value) => value.to_sql(ty, out),
            CoreValue::Byte(value) => char::from(*value).to_string().to_sql(ty, out),
            CoreValue::Rune(value) => value.to_string().to_sql(ty, out),
            CoreValue::Binary(value) => value.to_sql(ty, out),
            CoreValue::DateTime(value) => value.to_sql(ty, out),
        }
    }

    accepts!(
        BOOL,
        INT2,
        INT4,
        INT8,
        FLOAT4,
        FLOAT8,
        TEXT,
        VARCHAR,
        BPCHAR,
        BYTEA,
        TIMESTAMPTZ
    );
    to_sql_checked!();
}

fn integer(value: i64, ty: &Type, out: &mut BytesMut) -> Result<IsNull, BoxError> {
    match *ty {
        Type::INT2 => i16::try_from(value)?.to_sql(ty, out),
        Type::INT4 => i32::try_from(value)?.to_sql(ty, out),
        _ => value.to_sql(ty, out),
    }
}
