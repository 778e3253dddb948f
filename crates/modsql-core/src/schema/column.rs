use super::{ScalarType, TableId};
use crate::stmt::Value;

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Uniquely identifies the column in the schema.
    pub id: ColumnId,

    /// The name of the column in the database.
    pub name: String,

    pub ty: ScalarType,

    /// Single-column constraint declared on the column itself.
    pub constraint: Constraint,

    /// Value used when an insert omits the column.
    pub default: Option<Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    None,
    PrimaryKey,
    Unique,

    /// References a column of an earlier table.
    ForeignKey(ColumnId),
}

#[derive(PartialEq, Eq, Clone, Copy, Hash)]
pub struct ColumnId {
    pub table: TableId,
    pub index: usize,
}

impl Column {
    pub fn is_primary_key(&self) -> bool {
        matches!(self.constraint, Constraint::PrimaryKey)
    }
}

impl From<&Column> for ColumnId {
    fn from(value: &Column) -> Self {
        value.id
    }
}

impl fmt::Debug for ColumnId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ColumnId({}/{})", self.table.0, self.index)
    }
}
