use super::Statement;

use modsql_core::schema::{Table, TableId};

/// Creates a table with its columns, column constraints and table-level
/// constraints. Indexes are separate [`CreateIndex`](super::CreateIndex)
/// statements.
#[derive(Debug, Clone)]
pub struct CreateTable {
    pub table: TableId,
}

impl Statement {
    pub fn create_table(table: &Table) -> Self {
        CreateTable { table: table.id }.into()
    }
}

impl From<CreateTable> for Statement {
    fn from(value: CreateTable) -> Self {
        Self::CreateTable(value)
    }
}
