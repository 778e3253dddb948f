mod value;
use value::Value;

use modsql_core::{async_trait, driver::Transaction, stmt, Engine, Error, Result};
use tokio_postgres::{
    tls::MakeTlsConnect,
    types::ToSql,
    Client, Config, Socket,
};
use tracing::{debug, warn};
use url::Url;

#[derive(Debug)]
pub struct PostgreSQL {
    /// The PostgreSQL client.
    client: Client,
}

impl PostgreSQL {
    /// Wraps an initialized client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Connects to a PostgreSQL database using a `postgresql://` URL.
    pub async fn connect(url: &str) -> Result<Self> {
        let url = Url::parse(url).map_err(Error::driver_operation_failed)?;

        if url.scheme() != "postgresql" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `postgresql` scheme; url={url}"
            )));
        }

        let Some(host) = url.host_str() else {
            return Err(Error::invalid_connection_url(format!(
                "missing host in connection URL; url={url}"
            )));
        };

        let dbname = url.path().trim_start_matches('/');
        if dbname.is_empty() {
            return Err(Error::invalid_connection_url(format!(
                "no database specified - missing path in connection URL; url={url}"
            )));
        }

        let mut config = Config::new();
        config.host(host);
        config.dbname(dbname);

        if let Some(port) = url.port() {
            config.port(port);
        }

        if !url.username().is_empty() {
            config.user(url.username());
        }

        if let Some(password) = url.password() {
            config.password(password);
        }

        Self::connect_with_config(config, tokio_postgres::NoTls).await
    }

    /// Connects to a PostgreSQL database using a [`Config`].
    pub async fn connect_with_config<T>(config: Config, tls: T) -> Result<Self>
    where
        T: MakeTlsConnect<Socket> + 'static,
        T::Stream: Send,
    {
        let (client, connection) = config
            .connect(tls)
            .await
            .map_err(Error::driver_operation_failed)?;

        tokio::spawn(async move {
            if let Err(e) = connection.await {
                warn!(error = %e, "postgresql connection error");
            }
        });

        Ok(Self::new(client))
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}

#[async_trait]
impl modsql_core::Connection for PostgreSQL {
    type Statement = tokio_postgres::Statement;

    fn engine(&self) -> Engine {
        Engine::Postgresql
    }

    async fn exec(&mut self, sql: &str) -> Result<u64> {
        self.client
            .execute(sql, &[])
            .await
            .map_err(Error::driver_operation_failed)
    }

    async fn prepare(&mut self, sql: &str) -> Result<Self::Statement> {
        self.client
            .prepare(sql)
            .await
            .map_err(Error::driver_operation_failed)
    }

    async fn execute(&mut self, stmt: &Self::Statement, args: &[stmt::Value]) -> Result<u64> {
        let args: Vec<Value<'_>> = args.iter().map(Value::from).collect();
        let params: Vec<&(dyn ToSql + Sync)> =
            args.iter().map(|arg| arg as &(dyn ToSql + Sync)).collect();

        self.client
            .execute(stmt, &params)
            .await
            .map_err(Error::driver_operation_failed)
    }

    async fn close_statement(&mut self, stmt: Self::Statement) -> Result<()> {
        // The server side statement is closed when the last handle drops
        debug!(params = stmt.params().len(), "closing statement");
        drop(stmt);
        Ok(())
    }

    async fn transaction(&mut self, op: Transaction) -> Result<()> {
        let sql = match op {
            Transaction::Start => "BEGIN",
            Transaction::Commit => "COMMIT",
            Transaction::Rollback => "ROLLBACK",
        };

        self.client
            .batch_execute(sql)
            .await
            .map_err(Error::driver_operation_failed)
    }
}
