use modsql_core::{stmt::Value, Connection, Error, Result};
use modsql_sql::Prepared;

/// A record type generated for a model table.
pub trait Modeler {
    /// Id of the table's insert statement in the statement registry.
    const INSERT_ID: usize;

    /// The record's fields, in column order.
    fn args(&self) -> Vec<Value>;

    /// The prepared insert statement of this record's table.
    fn stmt_insert<'a, S>(&self, prepared: &'a Prepared<S>) -> Option<&'a S> {
        prepared.get(Self::INSERT_ID)
    }
}

/// Inserts `row` with its table's prepared insert statement, returning the
/// number of inserted rows.
pub async fn insert<C, M>(conn: &mut C, prepared: &Prepared<C::Statement>, row: &M) -> Result<u64>
where
    C: Connection,
    M: Modeler,
{
    let Some(stmt) = row.stmt_insert(prepared) else {
        return Err(Error::invalid_state(format!(
            "no prepared statement with id {}",
            M::INSERT_ID
        )));
    };

    conn.execute(stmt, &row.args()).await
}
