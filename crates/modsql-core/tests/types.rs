use modsql_core::{
    schema::{IntWidth, ScalarType},
    Engine,
};

#[test]
fn every_type_has_a_lexeme_for_every_engine() {
    for width in [IntWidth::W32, IntWidth::W64] {
        for engine in Engine::ALL {
            for ty in ScalarType::ALL {
                assert!(!ty.lexeme(engine, width).is_empty(), "{ty} on {engine}");
                assert!(!ty.native(width).is_empty(), "{ty}");
            }
        }
    }
}

#[test]
fn mysql_lexemes() {
    let lexeme = |ty: ScalarType| ty.lexeme(Engine::Mysql, IntWidth::W64);

    assert_eq!(lexeme(ScalarType::Bool), "BOOL");
    assert_eq!(lexeme(ScalarType::Int8), "TINYINT");
    assert_eq!(lexeme(ScalarType::Int16), "SMALLINT");
    assert_eq!(lexeme(ScalarType::Int32), "INT");
    assert_eq!(lexeme(ScalarType::Int64), "BIGINT");
    assert_eq!(lexeme(ScalarType::Float32), "FLOAT");
    assert_eq!(lexeme(ScalarType::Float64), "DOUBLE");
    assert_eq!(lexeme(ScalarType::String), "TEXT");
    assert_eq!(lexeme(ScalarType::Byte), "CHAR(1)");
    assert_eq!(lexeme(ScalarType::Rune), "CHAR(4)");
    assert_eq!(lexeme(ScalarType::Binary), "BLOB");
    assert_eq!(lexeme(ScalarType::DateTime), "TIMESTAMP");
}

#[test]
fn postgresql_lexemes() {
    let lexeme = |ty: ScalarType| ty.lexeme(Engine::Postgresql, IntWidth::W64);

    assert_eq!(lexeme(ScalarType::Bool), "boolean");
    assert_eq!(lexeme(ScalarType::Int8), "smallint");
    assert_eq!(lexeme(ScalarType::Int32), "integer");
    assert_eq!(lexeme(ScalarType::Int64), "bigint");
    assert_eq!(lexeme(ScalarType::Float32), "real");
    assert_eq!(lexeme(ScalarType::Float64), "double precision");
    assert_eq!(lexeme(ScalarType::Rune), "character varying(4)");
    assert_eq!(lexeme(ScalarType::Binary), "bytea");
    assert_eq!(lexeme(ScalarType::DateTime), "timestamp with time zone");
}

#[test]
fn sqlite_lexemes() {
    let lexeme = |ty: ScalarType| ty.lexeme(Engine::Sqlite, IntWidth::W64);

    assert_eq!(lexeme(ScalarType::Bool), "BOOL");
    assert_eq!(lexeme(ScalarType::Int16), "INTEGER");
    assert_eq!(lexeme(ScalarType::Float32), "REAL");
    assert_eq!(lexeme(ScalarType::String), "TEXT");
    assert_eq!(lexeme(ScalarType::Binary), "BLOB");
    assert_eq!(lexeme(ScalarType::DateTime), "TEXT");
}

#[test]
fn int_follows_width() {
    assert_eq!(ScalarType::Int.lexeme(Engine::Mysql, IntWidth::W32), "INT");
    assert_eq!(ScalarType::Int.lexeme(Engine::Mysql, IntWidth::W64), "BIGINT");
    assert_eq!(ScalarType::Int.lexeme(Engine::Postgresql, IntWidth::W32), "integer");
    assert_eq!(ScalarType::Int.lexeme(Engine::Postgresql, IntWidth::W64), "bigint");
    assert_eq!(ScalarType::Int.native(IntWidth::W32), "i32");
    assert_eq!(ScalarType::Int.native(IntWidth::W64), "i64");
}

#[test]
fn native_width_matches_target() {
    let expected = if cfg!(target_pointer_width = "64") {
        IntWidth::W64
    } else {
        IntWidth::W32
    };
    assert_eq!(IntWidth::native(), expected);
}

#[test]
fn integer_values_are_range_checked() {
    assert_eq!(
        ScalarType::Int8.integer(127, IntWidth::W64),
        Some(127i8.into())
    );
    assert_eq!(ScalarType::Int8.integer(128, IntWidth::W64), None);
    assert_eq!(
        ScalarType::Int.integer(1 << 40, IntWidth::W64),
        Some((1i64 << 40).into())
    );
    assert_eq!(ScalarType::Int.integer(1 << 40, IntWidth::W32), None);
    assert_eq!(ScalarType::String.integer(1, IntWidth::W64), None);
}
