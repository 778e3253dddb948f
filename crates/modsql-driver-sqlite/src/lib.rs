mod value;
use value::Value;

use modsql_core::{async_trait, driver::Transaction, stmt, Engine, Error, Result};
use rusqlite::Connection as RusqliteConnection;
use std::path::{Path, PathBuf};
use tracing::debug;
use url::Url;

/// Where a SQLite database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sqlite {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Parses a `sqlite:` connection URL. `sqlite::memory:` selects an
    /// in-memory database.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(Error::driver_operation_failed)?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={url_str}"
            )));
        }

        if url.path() == ":memory:" {
            Ok(Self::InMemory)
        } else {
            Ok(Self::File(PathBuf::from(url.path())))
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }

    pub fn connect(&self) -> Result<Connection> {
        match self {
            Sqlite::File(path) => Connection::open(path),
            Sqlite::InMemory => Connection::in_memory(),
        }
    }
}

#[derive(Debug)]
pub struct Connection {
    connection: RusqliteConnection,
}

/// A prepared statement.
///
/// SQLite statements borrow their connection, so the handle keeps the
/// validated text and executes through the connection's statement cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    sql: String,
}

impl Connection {
    pub fn in_memory() -> Result<Self> {
        let connection =
            RusqliteConnection::open_in_memory().map_err(Error::driver_operation_failed)?;
        Self::new(connection)
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = RusqliteConnection::open(path).map_err(Error::driver_operation_failed)?;
        Self::new(connection)
    }

    /// Wraps an open connection, enabling foreign key enforcement.
    pub fn new(connection: RusqliteConnection) -> Result<Self> {
        connection
            .pragma_update(None, "foreign_keys", true)
            .map_err(Error::driver_operation_failed)?;
        Ok(Self { connection })
    }

    /// The underlying rusqlite connection.
    pub fn raw(&self) -> &RusqliteConnection {
        &self.connection
    }
}

impl Statement {
    pub fn sql(&self) -> &str {
        &self.sql
    }
}

#[async_trait]
impl modsql_core::Connection for Connection {
    type Statement = Statement;

    fn engine(&self) -> Engine {
        Engine::Sqlite
    }

    async fn exec(&mut self, sql: &str) -> Result<u64> {
        let count = self
            .connection
            .execute(sql, [])
            .map_err(Error::driver_operation_failed)?;
        Ok(count as u64)
    }

    async fn prepare(&mut self, sql: &str) -> Result<Statement> {
        self.connection
            .prepare_cached(sql)
            .map_err(Error::driver_operation_failed)?;

        Ok(Statement {
            sql: sql.to_string(),
        })
    }

    async fn execute(&mut self, stmt: &Statement, args: &[stmt::Value]) -> Result<u64> {
        let mut prepared = self
            .connection
            .prepare_cached(&stmt.sql)
            .map_err(Error::driver_operation_failed)?;

        let count = prepared
            .execute(rusqlite::params_from_iter(args.iter().map(Value::from)))
            .map_err(Error::driver_operation_failed)?;

        Ok(count as u64)
    }

    async fn close_statement(&mut self, stmt: Statement) -> Result<()> {
        debug!(sql = %stmt.sql, "closing statement");
        Ok(())
    }

    async fn transaction(&mut self, op: Transaction) -> Result<()> {
        let sql = match op {
            Transaction::Start => "BEGIN",
            Transaction::Commit => "COMMIT",
            Transaction::Rollback => "ROLLBACK",
        };

        self.connection
            .execute(sql, [])
            .map_err(Error::driver_operation_failed)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modsql_core::Connection as _;

    #[test]
    fn parse_url() {
        assert_eq!(Sqlite::new("sqlite::memory:").unwrap(), Sqlite::InMemory);
        assert_eq!(
            Sqlite::new("sqlite:/tmp/model.db").unwrap(),
            Sqlite::File(PathBuf::from("/tmp/model.db"))
        );
        assert!(Sqlite::new("postgresql://localhost/db")
            .unwrap_err()
            .is_invalid_connection_url());
    }

    #[tokio::test]
    async fn prepare_and_execute() {
        let mut conn = Sqlite::in_memory().connect().unwrap();
        conn.exec("CREATE TABLE t (b BOOL, s TEXT, r TEXT, bin BLOB)")
            .await
            .unwrap();

        let stmt = conn
            .prepare("INSERT INTO t (b, s, r, bin) VALUES (?, ?, ?, ?)")
            .await
            .unwrap();
        let args = [
            stmt::Value::Bool(true),
            "it's".into(),
            stmt::Value::Rune('é'),
            stmt::Value::Binary(vec![1, 2]),
        ];
        assert_eq!(conn.execute(&stmt, &args).await.unwrap(), 1);
        conn.close_statement(stmt).await.unwrap();

        let (b, s, r): (i64, String, String) = conn
            .raw()
            .query_row("SELECT b, s, r FROM t", [], |row| {
                Ok((row.get(0)?, row.get(1)?, row.get(2)?))
            })
            .unwrap();
        assert_eq!((b, s.as_str(), r.as_str()), (1, "it's", "é"));
    }

    #[tokio::test]
    async fn prepare_rejects_invalid_sql() {
        let mut conn = Connection::in_memory().unwrap();
        let err = conn.prepare("INSERT INTO missing VALUES (?)").await.unwrap_err();
        assert!(err.is_driver_operation_failed());
    }
}
