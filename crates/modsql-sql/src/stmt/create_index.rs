use super::Statement;

use modsql_core::schema::{ColumnId, Index, TableId};

#[derive(Debug, Clone)]
pub struct CreateIndex {
    /// Name of the index
    pub name: String,

    /// Which table to index
    pub on: TableId,

    /// The columns to index
    pub columns: Vec<ColumnId>,

    /// When true, the index is unique
    pub unique: bool,
}

impl Statement {
    pub fn create_index(index: &Index) -> Self {
        CreateIndex {
            name: index.name.clone(),
            on: index.on,
            columns: index.columns.clone(),
            unique: index.unique,
        }
        .into()
    }
}

impl From<CreateIndex> for Statement {
    fn from(value: CreateIndex) -> Self {
        Self::CreateIndex(value)
    }
}
