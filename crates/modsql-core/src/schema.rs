pub mod builder;
pub use builder::{Builder, ColumnDef, TableBuilder};

mod column;
pub use column::{Column, ColumnId, Constraint};

mod name;
pub use name::{constant_name, is_identifier, record_name};

mod table;
pub use table::{EnumDef, ForeignKey, Index, Table, TableId, TableKind};

mod ty;
pub use ty::{IntWidth, ScalarType};

use crate::Engine;

/// A validated schema, produced by [`Builder::build`].
///
/// Immutable: generation reads it, nothing writes it.
#[derive(Debug)]
pub struct Schema {
    /// Name used to label generated artifacts.
    pub name: String,

    /// Engines to generate scripts for, in declaration order.
    pub engines: Vec<Engine>,

    /// Width of [`ScalarType::Int`] for this schema.
    pub int_width: IntWidth,

    /// Identifiers that are quoted wherever they are emitted.
    pub quoted_names: Vec<String>,

    /// Tables, in declaration order. A table's position is its [`TableId`].
    pub tables: Vec<Table>,
}

impl Schema {
    pub fn table(&self, id: impl Into<TableId>) -> &Table {
        &self.tables[id.into().0]
    }

    pub fn table_by_name(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|table| table.name == name)
    }

    pub fn column(&self, id: impl Into<ColumnId>) -> &Column {
        let id = id.into();
        self.table(id.table).column(id)
    }

    /// Returns `true` if `name` must be quoted when emitted.
    pub fn is_quoted(&self, name: &str) -> bool {
        self.quoted_names.iter().any(|quoted| quoted == name)
    }

    /// Tables that get a native record type and an insert statement.
    pub fn models(&self) -> impl Iterator<Item = &Table> + '_ {
        self.tables.iter().filter(|table| table.is_model())
    }
}
