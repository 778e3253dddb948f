use modsql_core::{
    schema::{Builder, ColumnDef, Constraint, IntWidth, ScalarType, TableKind},
    stmt::Value,
    Engine,
};

fn user(builder: &mut Builder) {
    builder
        .table(
            "user",
            [
                ColumnDef::new("user_id", ScalarType::Int64).primary_key(),
                ColumnDef::new("first_name", ScalarType::String),
            ],
        )
        .unwrap();
}

#[test]
fn column_foreign_key_to_missing_table() {
    let mut builder = Builder::new(Engine::ALL);

    let err = builder
        .table(
            "address",
            [ColumnDef::new("user_id", ScalarType::Int64).foreign_key("missing_table", "id")],
        )
        .unwrap_err();

    assert!(err.is_missing_reference());
    assert!(builder.build().unwrap_err().is_schema_errors());
}

#[test]
fn table_foreign_key_to_missing_table() {
    let mut builder = Builder::new(Engine::ALL);

    let err = builder
        .table("address", [ColumnDef::new("user_id", ScalarType::Int64)])
        .unwrap()
        .foreign_key("missing_table", &[("user_id", "user_id")])
        .unwrap_err();

    assert!(err.is_missing_reference());
}

#[test]
fn foreign_key_to_missing_target_column() {
    let mut builder = Builder::new(Engine::ALL);
    user(&mut builder);

    let err = builder
        .table("address", [ColumnDef::new("user_id", ScalarType::Int64)])
        .unwrap()
        .foreign_key("user", &[("user_id", "id")])
        .unwrap_err();

    assert!(err.is_missing_reference());
    assert_eq!(err.to_string(), "unknown column `id` in table `user`");
}

#[test]
fn primary_key_on_missing_column() {
    let mut builder = Builder::new(Engine::ALL);

    let err = builder
        .table("address", [ColumnDef::new("address_id", ScalarType::Int64)])
        .unwrap()
        .primary_key(&["missing_column"])
        .unwrap_err();

    assert!(err.is_missing_reference());

    // Ignoring the failure does not let the schema build.
    assert!(builder.build().is_err());
}

#[test]
fn composite_constraints_resolve_columns() {
    let mut builder = Builder::new(Engine::ALL);
    user(&mut builder);
    builder
        .table("address", [ColumnDef::new("address_id", ScalarType::Int64).primary_key()])
        .unwrap();

    builder
        .table(
            "user_address",
            [
                ColumnDef::new("user_id", ScalarType::Int64),
                ColumnDef::new("address_id", ScalarType::Int64),
            ],
        )
        .unwrap()
        .foreign_key("user", &[("user_id", "user_id")])
        .unwrap()
        .foreign_key("address", &[("address_id", "address_id")])
        .unwrap()
        .primary_key(&["user_id", "address_id"])
        .unwrap();

    let schema = builder.build().unwrap();
    let table = schema.table_by_name("user_address").unwrap();

    assert_eq!(table.foreign_keys.len(), 2);
    assert_eq!(
        table.primary_key.as_deref().map(|pk| pk.len()),
        Some(2)
    );
    assert_eq!(
        schema.column(table.foreign_keys[1].references[0]).name,
        "address_id"
    );
}

#[test]
fn table_primary_key_conflicts_with_column_primary_key() {
    let mut builder = Builder::new(Engine::ALL);

    let err = builder
        .table(
            "book",
            [
                ColumnDef::new("book_id", ScalarType::Int64).primary_key(),
                ColumnDef::new("title", ScalarType::String),
            ],
        )
        .unwrap()
        .primary_key(&["book_id", "title"])
        .unwrap_err();

    assert!(err.is_constraint_conflict());
}

#[test]
fn two_column_primary_keys_conflict() {
    let mut builder = Builder::new(Engine::ALL);

    let err = builder
        .table(
            "book",
            [
                ColumnDef::new("a", ScalarType::Int64).primary_key(),
                ColumnDef::new("b", ScalarType::Int64).primary_key(),
            ],
        )
        .unwrap_err();

    assert!(err.is_constraint_conflict());
}

#[test]
fn insert_requires_one_value_per_column() {
    let mut builder = Builder::new(Engine::ALL);
    user(&mut builder);

    let err = builder
        .table_mut("user")
        .unwrap()
        .insert([Value::I64(1)])
        .unwrap_err();

    assert!(err.is_arity_mismatch());
    assert_eq!(
        err.to_string(),
        "arity mismatch: table `user` has 2 columns, got 1 values"
    );
}

#[test]
fn insert_checks_value_types() {
    let mut builder = Builder::new(Engine::ALL);
    user(&mut builder);

    let err = builder
        .table_mut("user")
        .unwrap()
        .insert(["one".into(), "Ana".into()])
        .unwrap_err();

    assert!(err.is_type_mismatch());
}

#[test]
fn rows_and_test_rows_are_kept_apart() {
    let mut builder = Builder::new(Engine::ALL);
    user(&mut builder);

    builder
        .table_mut("user")
        .unwrap()
        .insert([1i64.into(), "Ana".into()])
        .unwrap()
        .insert_test_data([2i64.into(), "Test".into()])
        .unwrap();

    let schema = builder.build().unwrap();
    let table = schema.table_by_name("user").unwrap();
    assert_eq!(table.rows, vec![vec![Value::I64(1), Value::from("Ana")]]);
    assert_eq!(table.test_rows, vec![vec![Value::I64(2), Value::from("Test")]]);
}

#[test]
fn enumeration_declares_lookup_table() {
    let mut builder = Builder::new(Engine::ALL);
    let id = builder
        .enumeration("sex", ScalarType::Int8, 0, ["female", "male"])
        .unwrap();

    let schema = builder.build().unwrap();
    let table = schema.table(id);

    assert!(table.is_enum());
    assert_eq!(table.columns[0].constraint, Constraint::PrimaryKey);
    assert_eq!(
        table.rows,
        vec![
            vec![Value::I8(0), Value::from("female")],
            vec![Value::I8(1), Value::from("male")],
        ]
    );

    let TableKind::Enum(def) = &table.kind else {
        panic!("not an enum: {:?}", table.kind);
    };
    assert_eq!(
        def.variants().collect::<Vec<_>>(),
        vec![(0, "female"), (1, "male")]
    );
    assert_eq!(schema.models().count(), 0);
}

#[test]
fn enumeration_ids_must_fit() {
    let mut builder = Builder::new(Engine::ALL);
    let err = builder
        .enumeration("level", ScalarType::Int8, 127, ["high", "higher"])
        .unwrap_err();
    assert!(err.is_invalid_schema());

    let mut builder = Builder::new(Engine::ALL);
    let err = builder
        .enumeration("level", ScalarType::String, 0, ["high"])
        .unwrap_err();
    assert!(err.is_invalid_schema());

    // The last id of the widest type still fits; the next one overflows
    let mut builder = Builder::new(Engine::ALL);
    builder
        .enumeration("top", ScalarType::Int64, i64::MAX, ["last"])
        .unwrap();
    let err = builder
        .enumeration("past", ScalarType::Int64, i64::MAX, ["last", "beyond"])
        .unwrap_err();
    assert!(err.is_invalid_schema());
    assert!(builder.build().is_err());
}

#[test]
fn mysql_rejects_text_and_blob_defaults() {
    let mut builder = Builder::new(Engine::ALL);
    let err = builder
        .table("t", [ColumnDef::new("s", ScalarType::String).default("x")])
        .unwrap_err();
    assert!(err.is_invalid_schema());

    let mut builder = Builder::new([Engine::Postgresql, Engine::Sqlite]);
    builder
        .table("t", [ColumnDef::new("s", ScalarType::String).default("x")])
        .unwrap();
    assert!(builder.build().is_ok());
}

#[test]
fn int_defaults_follow_resolved_width() {
    let mut builder = Builder::new([Engine::Sqlite]);
    builder.int_width(IntWidth::W32);

    let err = builder
        .table("t", [ColumnDef::new("n", ScalarType::Int).default(1i64 << 40)])
        .unwrap_err();
    assert!(err.is_type_mismatch());

    let mut builder = Builder::new([Engine::Sqlite]);
    builder.int_width(IntWidth::W64);
    builder
        .table("t", [ColumnDef::new("n", ScalarType::Int).default(1i64 << 40)])
        .unwrap();
}

#[test]
fn names_are_unique() {
    let mut builder = Builder::new(Engine::ALL);
    user(&mut builder);
    let err = builder
        .table("user", [ColumnDef::new("id", ScalarType::Int64)])
        .unwrap_err();
    assert!(err.is_invalid_name());

    let mut builder = Builder::new(Engine::ALL);
    let err = builder
        .table(
            "t",
            [
                ColumnDef::new("id", ScalarType::Int64),
                ColumnDef::new("id", ScalarType::Int32),
            ],
        )
        .unwrap_err();
    assert!(err.is_invalid_name());
}

#[test]
fn generated_record_names_are_unique() {
    let mut builder = Builder::new(Engine::ALL);
    builder
        .table("user_address", [ColumnDef::new("id", ScalarType::Int64)])
        .unwrap();
    let err = builder
        .table("userAddress", [ColumnDef::new("id", ScalarType::Int64)])
        .unwrap_err();
    assert!(err.is_invalid_name());
    assert!(err.to_string().contains("`UserAddress`"));
    assert!(builder.build().is_err());

    // Enum tables generate no record type
    let mut builder = Builder::new(Engine::ALL);
    builder
        .enumeration("user_kind", ScalarType::Int8, 0, ["admin"])
        .unwrap();
    builder
        .table("userKind", [ColumnDef::new("id", ScalarType::Int64)])
        .unwrap();
    assert!(builder.build().is_ok());
}

#[test]
fn generated_constant_names_are_unique() {
    let mut builder = Builder::new(Engine::ALL);
    let err = builder
        .enumeration("t", ScalarType::Int8, 0, ["fooBar", "foo_bar"])
        .unwrap_err();
    assert!(err.is_invalid_name());
    assert!(err.to_string().contains("`T_FOO_BAR`"));

    let mut builder = Builder::new(Engine::ALL);
    builder
        .enumeration("a_b", ScalarType::Int8, 0, ["c"])
        .unwrap();
    let err = builder
        .enumeration("a", ScalarType::Int8, 0, ["b_c"])
        .unwrap_err();
    assert!(err.is_invalid_name());
}

#[test]
fn column_index_becomes_table_index() {
    let mut builder = Builder::new(Engine::ALL);
    builder
        .table(
            "book",
            [
                ColumnDef::new("book_id", ScalarType::Int64).primary_key(),
                ColumnDef::new("isbn", ScalarType::String).index(true),
                ColumnDef::new("year", ScalarType::Int16),
            ],
        )
        .unwrap()
        .index(false, &["year", "book_id"])
        .unwrap();

    let schema = builder.build().unwrap();
    let table = schema.table_by_name("book").unwrap();
    let names: Vec<_> = table.indices.iter().map(|i| i.name.as_str()).collect();

    assert_eq!(names, ["idx_book__isbn", "idx_book__year_book_id"]);
    assert!(table.indices[0].unique);
    assert!(!table.indices[1].unique);
}

#[test]
fn build_requires_an_engine() {
    let builder = Builder::new([]);
    assert!(builder.build().unwrap_err().is_invalid_config());
}

#[test]
fn help_mode_declares_help_tables() {
    let mut builder = Builder::new(Engine::ALL);
    builder.help(true);

    builder
        .table(
            "types",
            [
                ColumnDef::new("id", ScalarType::Int64).primary_key(),
                ColumnDef::new("t_int", ScalarType::Int32),
                ColumnDef::new("t_bool", ScalarType::Bool),
            ],
        )
        .unwrap()
        .insert_help(["en", "integer", "boolean"])
        .unwrap()
        .insert([Value::I64(1), Value::I32(10), Value::Bool(true)])
        .unwrap();

    builder
        .enumeration("sex", ScalarType::Int8, 0, ["female", "male"])
        .unwrap();

    let schema = builder.build().unwrap();
    let names: Vec<&str> = schema.tables.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["types", "_types", "sex"]);

    let types = schema.table_by_name("types").unwrap();
    let help = schema.table_by_name("_types").unwrap();
    assert_eq!(types.help, Some(help.id));
    assert_eq!(help.kind, TableKind::Help(types.id));
    assert!(!help.is_model());

    let columns: Vec<(&str, ScalarType, Constraint)> = help
        .columns
        .iter()
        .map(|c| (c.name.as_str(), c.ty, c.constraint))
        .collect();
    assert_eq!(
        columns,
        [
            ("id", ScalarType::String, Constraint::PrimaryKey),
            ("t_int", ScalarType::String, Constraint::None),
            ("t_bool", ScalarType::String, Constraint::None),
        ]
    );

    assert_eq!(
        help.rows,
        vec![vec![Value::from("en"), Value::from("integer"), Value::from("boolean")]]
    );
    assert_eq!(types.rows.len(), 1);
    assert_eq!(schema.models().count(), 1);
}

#[test]
fn help_rows_need_one_value_per_help_column() {
    let mut builder = Builder::new(Engine::ALL);
    builder.help(true);
    user(&mut builder);

    // language, then `user_id` and `first_name`
    let err = builder
        .table_mut("user")
        .unwrap()
        .insert_help(["en", "id"])
        .unwrap_err();
    assert!(err.is_arity_mismatch());
    assert!(builder.build().is_err());
}

#[test]
fn insert_help_requires_help_mode() {
    let mut builder = Builder::new(Engine::ALL);
    user(&mut builder);

    let err = builder
        .table_mut("user")
        .unwrap()
        .insert_help(["en", "id", "first name"])
        .unwrap_err();
    assert!(err.is_invalid_state());
    assert!(builder.build().is_err());
}

#[test]
fn help_table_names_are_reserved() {
    let mut builder = Builder::new(Engine::ALL);
    builder.help(true);
    user(&mut builder);

    let err = builder
        .table("_user", [ColumnDef::new("id", ScalarType::String)])
        .unwrap_err();
    assert!(err.is_invalid_name());

    let mut builder = Builder::new(Engine::ALL);
    builder
        .table("_user", [ColumnDef::new("id", ScalarType::String)])
        .unwrap();
    builder.help(true);
    let err = builder
        .table("user", [ColumnDef::new("user_id", ScalarType::Int64)])
        .unwrap_err();
    assert!(err.is_invalid_name());
}
