use crate::{async_trait, stmt::Value, Engine, Result};

use std::fmt::Debug;

/// Transaction control issued by the script loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transaction {
    Start,
    Commit,
    Rollback,
}

/// A live database connection.
///
/// Implemented by each driver crate. Every method takes `&mut self`: one
/// connection runs one statement at a time.
#[async_trait]
pub trait Connection: Debug + Send {
    /// Handle of a prepared statement.
    type Statement: Send + Sync;

    /// The engine this connection talks to. Selects the placeholder syntax
    /// statements are rewritten to before they are prepared.
    fn engine(&self) -> Engine;

    /// Executes one SQL statement without parameters, returning the number of
    /// affected rows.
    async fn exec(&mut self, sql: &str) -> Result<u64>;

    /// Prepares a statement in the engine's placeholder syntax.
    async fn prepare(&mut self, sql: &str) -> Result<Self::Statement>;

    /// Executes a prepared statement with positional arguments.
    async fn execute(&mut self, stmt: &Self::Statement, args: &[Value]) -> Result<u64>;

    /// Releases a prepared statement.
    async fn close_statement(&mut self, stmt: Self::Statement) -> Result<()>;

    async fn transaction(&mut self, op: Transaction) -> Result<()>;
}
