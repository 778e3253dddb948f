use modsql_core::{driver::Transaction, Connection, Error, Result};
use tracing::{debug, warn};

/// Runs a generated script in one transaction.
///
/// Blank lines and `--` comments are skipped. Lines accumulate into one
/// statement until a line ends with `;`. Transaction control inside the
/// script is ignored: the loader begins the transaction itself, commits once
/// every statement succeeded and rolls back otherwise.
pub async fn load<C: Connection>(conn: &mut C, script: &str) -> Result<()> {
    conn.transaction(Transaction::Start).await?;

    let result = match exec_all(conn, script).await {
        Ok(count) => conn.transaction(Transaction::Commit).await.map(|()| count),
        Err(err) => Err(err),
    };

    match result {
        Ok(count) => {
            debug!(statements = count, "loaded script");
            Ok(())
        }
        Err(err) => {
            if let Err(rollback) = conn.transaction(Transaction::Rollback).await {
                warn!(error = %rollback, "failed to roll back script");
            }
            Err(err)
        }
    }
}

async fn exec_all<C: Connection>(conn: &mut C, script: &str) -> Result<usize> {
    let mut count = 0;

    for stmt in split(script) {
        if is_transaction_control(&stmt) {
            continue;
        }

        debug!(sql = %stmt, "executing statement");
        conn.exec(&stmt)
            .await
            .map_err(|err| Error::statement_failed(&stmt, err))?;
        count += 1;
    }

    Ok(count)
}

/// Splits a script into statements, without their terminating `;`.
fn split(script: &str) -> Vec<String> {
    let mut statements = vec![];
    let mut current = String::new();

    for line in script.lines() {
        let line = line.trim_end();
        let trimmed = line.trim_start();

        if trimmed.is_empty() || trimmed.starts_with("--") {
            continue;
        }

        if !current.is_empty() {
            current.push('\n');
        }
        current.push_str(line);

        if let Some(stmt) = current.strip_suffix(';') {
            statements.push(stmt.to_string());
            current.clear();
        }
    }

    // Unterminated trailing statement
    if !current.is_empty() {
        statements.push(current);
    }

    statements
}

fn is_transaction_control(stmt: &str) -> bool {
    let words: Vec<String> = stmt
        .split_whitespace()
        .map(str::to_ascii_uppercase)
        .collect();
    let words: Vec<&str> = words.iter().map(String::as_str).collect();

    matches!(
        words[..],
        ["BEGIN"] | ["BEGIN", "TRANSACTION"] | ["START", "TRANSACTION"] | ["COMMIT"]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_statements() {
        let script = "-- header\n\nBEGIN;\nCREATE TABLE t (\n    x INTEGER\n);\n  -- note\nINSERT INTO t VALUES (1);\nCOMMIT;\nINSERT INTO t VALUES (2)";

        assert_eq!(
            split(script),
            [
                "BEGIN",
                "CREATE TABLE t (\n    x INTEGER\n)",
                "INSERT INTO t VALUES (1)",
                "COMMIT",
                "INSERT INTO t VALUES (2)",
            ]
        );
    }

    #[test]
    fn transaction_control() {
        assert!(is_transaction_control("BEGIN"));
        assert!(is_transaction_control("begin transaction"));
        assert!(is_transaction_control("START  TRANSACTION"));
        assert!(is_transaction_control("COMMIT"));
        assert!(!is_transaction_control("ROLLBACK"));
        assert!(!is_transaction_control("BEGIN; DROP TABLE t"));
    }
}
