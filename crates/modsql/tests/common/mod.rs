use chrono::{TimeZone, Utc};
use modsql::{column, Builder, Engine, IntWidth, ScalarType, Schema, Value};

/// The example model: every scalar type, defaults, composite keys and
/// constraints, seed rows, test rows and an enum table.
pub fn model(engines: impl IntoIterator<Item = Engine>) -> Schema {
    let mut builder = Builder::new(engines);
    builder.name("example").int_width(IntWidth::W64);

    builder
        .enumeration("sex", ScalarType::Int8, 0, ["female", "male"])
        .unwrap();

    builder
        .table(
            "types",
            [
                column("t_int", ScalarType::Int).primary_key(),
                column("t_bool", ScalarType::Bool),
                column("t_int8", ScalarType::Int8),
                column("t_int16", ScalarType::Int16),
                column("t_int32", ScalarType::Int32),
                column("t_int64", ScalarType::Int64),
                column("t_float32", ScalarType::Float32),
                column("t_float64", ScalarType::Float64),
                column("t_string", ScalarType::String),
                column("t_byte", ScalarType::Byte),
                column("t_rune", ScalarType::Rune),
                column("t_binary", ScalarType::Binary),
                column("t_datetime", ScalarType::DateTime),
            ],
        )
        .unwrap();

    builder
        .table(
            "default_value",
            [
                column("id", ScalarType::Int).primary_key(),
                column("d_bool", ScalarType::Bool).default(false),
                column("d_int8", ScalarType::Int8).default(1i8),
                column("d_float32", ScalarType::Float32).default(1.5f32),
                column("d_rune", ScalarType::Rune).default('a'),
            ],
        )
        .unwrap();

    builder
        .table(
            "times",
            [
                column("time_id", ScalarType::Int).primary_key(),
                column("created_at", ScalarType::DateTime).index(false),
            ],
        )
        .unwrap()
        .insert_test_data([
            Value::I64(1),
            Value::DateTime(Utc.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap()),
        ])
        .unwrap();

    builder
        .table(
            "account",
            [
                column("acc_id", ScalarType::Int).primary_key(),
                column("acc_name", ScalarType::String).unique(),
            ],
        )
        .unwrap();

    builder
        .table(
            "sub_account",
            [
                column("sub_acc_id", ScalarType::Int).primary_key(),
                column("acc_id", ScalarType::Int).foreign_key("account", "acc_id"),
                column("sub_acc_name", ScalarType::String),
            ],
        )
        .unwrap()
        .unique(&["acc_id", "sub_acc_name"])
        .unwrap();

    builder
        .table(
            "catalog",
            [
                column("catalog_id", ScalarType::Int32).primary_key(),
                column("catalog_name", ScalarType::String),
            ],
        )
        .unwrap()
        .insert([Value::I32(1), "Fiction".into()])
        .unwrap()
        .insert([Value::I32(2), "Poetry".into()])
        .unwrap();

    builder
        .table(
            "book",
            [
                column("book_id", ScalarType::Int).primary_key(),
                column("catalog_id", ScalarType::Int32).foreign_key("catalog", "catalog_id"),
                column("title", ScalarType::String),
            ],
        )
        .unwrap()
        .insert_test_data([Value::I64(1), Value::I32(1), "Dune".into()])
        .unwrap();

    builder
        .table(
            "chapter",
            [
                column("chapter_id", ScalarType::Int).primary_key(),
                column("book_id", ScalarType::Int).foreign_key("book", "book_id"),
                column("title", ScalarType::String),
            ],
        )
        .unwrap()
        .index(true, &["book_id", "title"])
        .unwrap();

    builder
        .table(
            "user",
            [
                column("user_id", ScalarType::Int).primary_key(),
                column("first_name", ScalarType::String),
                column("sex", ScalarType::Int8).foreign_key("sex", "id"),
            ],
        )
        .unwrap()
        .insert([Value::I64(1), "Ada".into(), Value::I8(0)])
        .unwrap();

    builder
        .table(
            "address",
            [
                column("address_id", ScalarType::Int).primary_key(),
                column("street", ScalarType::String),
                column("city", ScalarType::String),
            ],
        )
        .unwrap();

    builder
        .table(
            "user_address",
            [
                column("user_id", ScalarType::Int),
                column("address_id", ScalarType::Int),
            ],
        )
        .unwrap()
        .foreign_key("user", &[("user_id", "user_id")])
        .unwrap()
        .foreign_key("address", &[("address_id", "address_id")])
        .unwrap()
        .primary_key(&["user_id", "address_id"])
        .unwrap();

    builder.build().unwrap()
}
