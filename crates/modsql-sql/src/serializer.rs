#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::Comma;

mod flavor;
use flavor::Flavor;

mod ident;
use ident::Ident;

mod params;
use params::Placeholder;

// Fragment serializers
mod statement;
mod ty;
mod value;

use crate::stmt::Statement;

use modsql_core::{
    schema::{Column, ColumnId, Schema, Table, TableId},
    Engine,
};

/// Serialize a statement to a SQL string
#[derive(Debug)]
pub struct Serializer<'a> {
    /// Schema against which the statement is to be serialized
    schema: &'a Schema,

    /// Selects the engine's lexemes, literals, quoting and placeholders, or
    /// the canonical `{Q}`/`{P}` sentinels.
    flavor: Flavor,
}

struct Formatter<'a> {
    /// Handle to the serializer
    serializer: &'a Serializer<'a>,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Number of bind parameters written so far
    params: usize,
}

impl<'a> Serializer<'a> {
    /// Renders a statement without a terminator.
    ///
    /// Rendering has no side effects: the same statement always renders to
    /// the same text.
    pub fn render(&self, stmt: &Statement) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params: 0,
        };

        stmt.to_sql(&mut fmt);
        ret
    }

    /// Renders a statement followed by `;`.
    pub fn serialize(&self, stmt: &Statement) -> String {
        let mut ret = self.render(stmt);
        ret.push(';');
        ret
    }

    /// The engine rendered for, `None` in canonical mode.
    pub fn engine(&self) -> Option<Engine> {
        match self.flavor {
            Flavor::Dialect(profile) => Some(profile.engine),
            Flavor::Canonical => None,
        }
    }

    fn table(&self, id: impl Into<TableId>) -> &'a Table {
        self.schema.table(id.into())
    }

    fn column(&self, id: impl Into<ColumnId>) -> &'a Column {
        self.schema.column(id.into())
    }

    fn table_name(&self, id: impl Into<TableId>) -> Ident<&'a str> {
        Ident(&self.table(id).name)
    }

    fn column_name(&self, id: impl Into<ColumnId>) -> Ident<&'a str> {
        Ident(&self.column(id).name)
    }
}
