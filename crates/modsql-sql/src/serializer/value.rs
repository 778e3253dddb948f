use super::{Flavor, Formatter, ToSql};

use chrono::SecondsFormat;
use modsql_core::{stmt::Value, Engine};
use std::fmt::Write;

/// A value rendered as an SQL literal.
pub(super) struct Literal<'a>(pub(super) &'a Value);

impl ToSql for Literal<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let engine = f.serializer.engine();
        let dst = &mut *f.dst;

        match self.0 {
            Value::Bool(value) => match f.serializer.flavor {
                Flavor::Dialect(profile) => dst.push_str(profile.bool_literal(*value)),
                Flavor::Canonical => dst.push_str(if *value { "TRUE" } else { "FALSE" }),
            },
            Value::I8(value) => push_display(dst, value),
            Value::I16(value) => push_display(dst, value),
            Value::I32(value) => push_display(dst, value),
            Value::I64(value) => push_display(dst, value),
            Value::F32(value) => push_display(dst, value),
            Value::F64(value) => push_display(dst, value),
            Value::String(value) => quoted(dst, value, engine),
            Value::Byte(value) => quoted(dst, char::from(*value).encode_utf8(&mut [0; 4]), engine),
            Value::Rune(value) => quoted(dst, value.encode_utf8(&mut [0; 4]), engine),
            Value::Binary(bytes) => {
                dst.push_str(match engine {
                    Some(Engine::Postgresql) => "'\\x",
                    _ => "X'",
                });
                for byte in bytes {
                    push_display(dst, format_args!("{byte:02x}"));
                }
                dst.push('\'');
            }
            Value::DateTime(value) => {
                let text = match engine {
                    Some(Engine::Mysql) => value.format("%Y-%m-%d %H:%M:%S%.f").to_string(),
                    _ => value.to_rfc3339_opts(SecondsFormat::AutoSi, true),
                };
                quoted(dst, &text, engine);
            }
        }
    }
}

fn push_display(dst: &mut String, value: impl std::fmt::Display) {
    // Writing to a `String` cannot fail
    let _ = write!(dst, "{value}");
}

/// Writes a single-quoted string literal. MySQL also treats `\` as an escape
/// character.
///
/// Literals never span lines: MySQL escapes line breaks, the other engines
/// concatenate them as `char(n)` (`chr(n)` on PostgreSQL) in parentheses.
fn quoted(dst: &mut String, value: &str, engine: Option<Engine>) {
    let concat = engine != Some(Engine::Mysql) && value.contains(|c| c == '\n' || c == '\r');
    let chr = match engine {
        Some(Engine::Postgresql) => "chr",
        _ => "char",
    };

    if concat {
        dst.push('(');
    }
    dst.push('\'');
    for c in value.chars() {
        match c {
            '\'' => dst.push_str("''"),
            '\\' if engine == Some(Engine::Mysql) => dst.push_str("\\\\"),
            '\n' if engine == Some(Engine::Mysql) => dst.push_str("\\n"),
            '\r' if engine == Some(Engine::Mysql) => dst.push_str("\\r"),
            '\n' | '\r' => push_display(dst, format_args!("' || {chr}({}) || '", u32::from(c))),
            c => dst.push(c),
        }
    }
    dst.push('\'');
    if concat {
        dst.push(')');
    }
}
