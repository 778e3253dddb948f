use modsql_core::Engine;
use modsql_sql::{rewrite, Statements};
use pretty_assertions::assert_eq;

const CANONICAL: &str = "INSERT INTO {Q}user{Q} (user_id, first_name) VALUES ({P}, {P})";

#[test]
fn placeholders_follow_the_engine() {
    assert_eq!(
        rewrite(CANONICAL, Engine::Postgresql),
        "INSERT INTO \"user\" (user_id, first_name) VALUES ($1, $2)"
    );
    assert_eq!(
        rewrite(CANONICAL, Engine::Mysql),
        "INSERT INTO `user` (user_id, first_name) VALUES (?, ?)"
    );
    assert_eq!(
        rewrite(CANONICAL, Engine::Sqlite),
        "INSERT INTO \"user\" (user_id, first_name) VALUES (?, ?)"
    );
}

#[test]
fn numbering_counts_every_placeholder() {
    let canonical = (0..12).map(|_| "{P}").collect::<Vec<_>>().join(", ");
    let expected = (1..=12).map(|n| format!("${n}")).collect::<Vec<_>>().join(", ");

    assert_eq!(rewrite(&canonical, Engine::Postgresql), expected);
}

#[test]
fn other_braces_are_kept() {
    assert_eq!(rewrite("SELECT '{x}', {P", Engine::Postgresql), "SELECT '{x}', {P");
    assert_eq!(rewrite("", Engine::Mysql), "");
}

#[test]
fn registry_rewrites_once() {
    let mut statements: Statements = [CANONICAL, "DELETE FROM t WHERE id = {P}"]
        .into_iter()
        .collect();

    assert_eq!(statements.engine(), None);
    statements.rewrite(Engine::Postgresql).unwrap();

    assert_eq!(statements.engine(), Some(Engine::Postgresql));
    assert_eq!(statements.get(1), Some("DELETE FROM t WHERE id = $1"));

    let err = statements.rewrite(Engine::Postgresql).unwrap_err();
    assert!(err.is_invalid_state());

    // The failed rewrite changed nothing.
    assert_eq!(statements.get(1), Some("DELETE FROM t WHERE id = $1"));
}

#[test]
fn ids_are_positions() {
    let mut statements = Statements::new();

    assert_eq!(statements.push("A {P}"), 0);
    assert_eq!(statements.push("B {P}"), 1);
    assert_eq!(statements.len(), 2);
    assert_eq!(
        statements.iter().collect::<Vec<_>>(),
        [(0, "A {P}"), (1, "B {P}")]
    );
}
