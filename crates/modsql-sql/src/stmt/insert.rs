use super::Statement;

use modsql_core::{
    schema::{Table, TableId},
    stmt::Value,
};

/// Inserts one row, naming every column of the table.
#[derive(Debug, Clone)]
pub struct Insert {
    pub table: TableId,
    pub source: InsertSource,
}

#[derive(Debug, Clone)]
pub enum InsertSource {
    /// Literal values, one per column
    Values(Vec<Value>),

    /// One bind parameter per column
    Placeholders,
}

impl Statement {
    pub fn insert(table: &Table, row: &[Value]) -> Self {
        Insert {
            table: table.id,
            source: InsertSource::Values(row.to_vec()),
        }
        .into()
    }

    /// An insert statement binding every column to a parameter.
    pub fn insert_placeholders(table: &Table) -> Self {
        Insert {
            table: table.id,
            source: InsertSource::Placeholders,
        }
        .into()
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}
