use super::{Column, ColumnId};
use crate::stmt::Value;

use std::fmt;

/// A database table
#[derive(Debug)]
pub struct Table {
    /// Uniquely identifies a table
    pub id: TableId,

    /// Name of the table
    pub name: String,

    pub kind: TableKind,

    /// The table's columns, in declaration order
    pub columns: Vec<Column>,

    /// Table-level primary key. Column-level primary keys live on the column.
    pub primary_key: Option<Vec<ColumnId>>,

    /// Table-level unique constraints
    pub uniques: Vec<Vec<ColumnId>>,

    /// Table-level foreign keys
    pub foreign_keys: Vec<ForeignKey>,

    /// Single-column and composite indexes, created after the table
    pub indices: Vec<Index>,

    /// Seed rows
    pub rows: Vec<Vec<Value>>,

    /// Rows only loaded into test databases
    pub test_rows: Vec<Vec<Value>>,

    /// Companion help table, declared in help mode
    pub help: Option<TableId>,
}

/// Uniquely identifies a table
#[derive(PartialEq, Eq, Clone, Copy, Hash)]
pub struct TableId(pub usize);

#[derive(Debug, Clone, PartialEq)]
pub enum TableKind {
    Plain,
    Enum(EnumDef),

    /// Localized descriptions of the columns of another table: a `TEXT` `id`
    /// naming the language, then one `TEXT` column per described column.
    Help(TableId),
}

/// Labels of an enum lookup table, numbered from `start`.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumDef {
    pub start: i64,
    pub labels: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForeignKey {
    pub columns: Vec<ColumnId>,
    pub references: Vec<ColumnId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Index {
    pub name: String,
    pub on: TableId,
    pub columns: Vec<ColumnId>,
    pub unique: bool,
}

impl Table {
    pub fn column(&self, id: impl Into<ColumnId>) -> &Column {
        &self.columns[id.into().index]
    }

    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn is_enum(&self) -> bool {
        matches!(self.kind, TableKind::Enum(_))
    }

    pub fn is_help(&self) -> bool {
        matches!(self.kind, TableKind::Help(_))
    }

    /// Returns `true` if the table gets a native record type.
    pub fn is_model(&self) -> bool {
        matches!(self.kind, TableKind::Plain)
    }

    pub(crate) fn new(id: TableId, name: String) -> Self {
        Self {
            id,
            name,
            kind: TableKind::Plain,
            columns: vec![],
            primary_key: None,
            uniques: vec![],
            foreign_keys: vec![],
            indices: vec![],
            rows: vec![],
            test_rows: vec![],
            help: None,
        }
    }
}

impl EnumDef {
    /// Id of the label at `position`, or `None` if it overflows `i64`.
    pub fn id(&self, position: usize) -> Option<i64> {
        i64::try_from(position)
            .ok()
            .and_then(|n| self.start.checked_add(n))
    }

    /// Labels paired with their ids. Labels whose id overflows are skipped;
    /// [`Builder::enumeration`](super::Builder::enumeration) rejects them.
    pub fn variants(&self) -> impl Iterator<Item = (i64, &str)> + '_ {
        self.labels
            .iter()
            .enumerate()
            .filter_map(|(position, label)| Some((self.id(position)?, label.as_str())))
    }
}

impl Index {
    /// Name of an index over `columns` of `table`: `idx_<table>__<col>[_<col>...]`.
    pub fn name_for<'a>(table: &str, columns: impl IntoIterator<Item = &'a str>) -> String {
        let columns: Vec<_> = columns.into_iter().collect();
        format!("idx_{table}__{}", columns.join("_"))
    }
}

impl fmt::Debug for TableId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "TableId({})", self.0)
    }
}
