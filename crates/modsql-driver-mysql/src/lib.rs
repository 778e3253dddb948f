mod value;
use value::Value;

use modsql_core::{async_trait, driver::Transaction, stmt, Engine, Error, Result};
use mysql_async::{
    prelude::{Queryable, ToValue},
    Conn, Opts, OptsBuilder, Params,
};
use tracing::debug;
use url::Url;

#[derive(Debug)]
pub struct MySQL {
    conn: Conn,
}

impl MySQL {
    /// Connects to a MySQL database using a `mysql://` URL.
    pub async fn connect(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(Error::driver_operation_failed)?;

        if url.scheme() != "mysql" {
            return Err(Error::invalid_connection_url(format!(
                "connection url does not have a `mysql` scheme; url={url}"
            )));
        }

        if url.host_str().is_none() {
            return Err(Error::invalid_connection_url(format!(
                "missing host in connection URL; url={url}"
            )));
        }

        if url.path().trim_start_matches('/').is_empty() {
            return Err(Error::invalid_connection_url(format!(
                "no database specified - missing path in connection URL; url={url}"
            )));
        }

        let opts = Opts::from_url(url.as_ref()).map_err(Error::driver_operation_failed)?;
        let opts = OptsBuilder::from_opts(opts).client_found_rows(true);

        let conn = Conn::new(opts)
            .await
            .map_err(Error::driver_operation_failed)?;
        debug!(host = ?url.host_str(), database = url.path(), "connected to mysql");
        Ok(Self::new(conn))
    }

    pub fn new(conn: Conn) -> Self {
        Self { conn }
    }
}

impl From<Conn> for MySQL {
    fn from(conn: Conn) -> Self {
        Self::new(conn)
    }
}

#[async_trait]
impl modsql_core::Connection for MySQL {
    type Statement = mysql_async::Statement;

    fn engine(&self) -> Engine {
        Engine::Mysql
    }

    async fn exec(&mut self, sql: &str) -> Result<u64> {
        self.conn
            .query_drop(sql)
            .await
            .map_err(Error::driver_operation_failed)?;
        Ok(self.conn.affected_rows())
    }

    async fn prepare(&mut self, sql: &str) -> Result<Self::Statement> {
        self.conn
            .prep(sql)
            .await
            .map_err(Error::driver_operation_failed)
    }

    async fn execute(&mut self, stmt: &Self::Statement, args: &[stmt::Value]) -> Result<u64> {
        let args = args
            .iter()
            .map(|value| Value::from(value).to_value())
            .collect::<Vec<_>>();

        self.conn
            .exec_drop(stmt, Params::Positional(args))
            .await
            .map_err(Error::driver_operation_failed)?;
        Ok(self.conn.affected_rows())
    }

    async fn close_statement(&mut self, stmt: Self::Statement) -> Result<()> {
        debug!(id = stmt.id(), params = stmt.num_params(), "closing statement");
        self.conn
            .close(stmt)
            .await
            .map_err(Error::driver_operation_failed)
    }

    async fn transaction(&mut self, op: Transaction) -> Result<()> {
        let sql = match op {
            Transaction::Start => "START TRANSACTION",
            Transaction::Commit => "COMMIT",
            Transaction::Rollback => "ROLLBACK",
        };

        self.conn
            .query_drop(sql)
            .await
            .map_err(Error::driver_operation_failed)
    }
}
