mod column;
pub use column::ColumnDef;
use column::Annotation;

mod table;
pub use table::TableBuilder;

use super::{
    constant_name, is_identifier, record_name, Column, ColumnId, Constraint, EnumDef, Index,
    IntWidth, ScalarType, Schema, Table, TableId, TableKind,
};
use crate::{Config, Engine, Error, Result};

use indexmap::IndexMap;
use tracing::debug;

/// Declares tables and validates them as they are declared.
///
/// Every failed declaration is remembered: once an error has been recorded,
/// [`Builder::table`] and [`Builder::build`] refuse to continue and report all
/// outstanding errors.
#[derive(Debug)]
pub struct Builder {
    name: String,

    engines: Vec<Engine>,

    int_width: IntWidth,

    quoted_names: Vec<String>,

    /// Declare a help table next to every table
    help: bool,

    /// Maps table names to identifiers
    table_lookup: IndexMap<String, TableId>,

    /// Tables as they are declared
    tables: Vec<Table>,

    /// Outstanding validation errors
    errors: Vec<Error>,
}

impl Builder {
    /// Creates a builder targeting `engines`, with the native `Int` width and
    /// `user` as the only quoted identifier.
    pub fn new(engines: impl IntoIterator<Item = Engine>) -> Self {
        Self::from_config(&Config::new().engines(engines))
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            name: config.name.clone(),
            engines: config.engines.clone(),
            int_width: config.int_width.unwrap_or_else(IntWidth::native),
            quoted_names: config.quoted_names.clone(),
            help: config.help,
            table_lookup: IndexMap::new(),
            tables: vec![],
            errors: vec![],
        }
    }

    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    /// Overrides the width of `Int`. Must be called before declaring tables.
    pub fn int_width(&mut self, width: IntWidth) -> &mut Self {
        self.int_width = width;
        self
    }

    /// Quotes `name` wherever it is emitted.
    pub fn quote_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.quoted_names.push(name.into());
        self
    }

    /// Turns help mode on or off. Must be called before declaring tables.
    ///
    /// In help mode every table `t` is followed by a help table `_t` holding
    /// localized descriptions of its columns, filled with
    /// [`TableBuilder::insert_help`].
    pub fn help(&mut self, enabled: bool) -> &mut Self {
        self.help = enabled;
        self
    }

    pub fn is_help(&self) -> bool {
        self.help
    }

    pub fn engines(&self) -> &[Engine] {
        &self.engines
    }

    pub fn resolved_int_width(&self) -> IntWidth {
        self.int_width
    }

    /// Outstanding validation errors.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// Declares a table.
    ///
    /// Errors recorded on `columns` move into the builder. Nothing is declared
    /// while any error is outstanding, from these columns or from earlier
    /// declarations.
    pub fn table(
        &mut self,
        name: &str,
        columns: impl IntoIterator<Item = ColumnDef>,
    ) -> Result<TableBuilder<'_>> {
        self.declare(name, columns, TableKind::Plain)
    }

    fn declare(
        &mut self,
        name: &str,
        columns: impl IntoIterator<Item = ColumnDef>,
        kind: TableKind,
    ) -> Result<TableBuilder<'_>> {
        let mut columns: Vec<ColumnDef> = columns.into_iter().collect();

        for column in &mut columns {
            self.errors.append(&mut column.errors);
        }

        if !self.errors.is_empty() {
            return Err(Error::schema_errors(self.errors.clone()));
        }

        if !is_identifier(name) {
            return Err(self.fail(Error::invalid_name(name, "not an SQL identifier")));
        }

        if self.table_lookup.contains_key(name) {
            return Err(self.fail(Error::invalid_name(name, "table declared twice")));
        }

        let help = (self.help && matches!(kind, TableKind::Plain)).then(|| format!("_{name}"));

        if let Some(help) = &help {
            if self.table_lookup.contains_key(help) {
                return Err(self.fail(Error::invalid_name(
                    help,
                    format!("help table of `{name}` is already declared"),
                )));
            }
        }

        if columns.is_empty() {
            return Err(self.fail(Error::invalid_schema(format!(
                "table `{name}` has no columns"
            ))));
        }

        if let Err(err) = self.check_generated_names(name, &kind) {
            return Err(self.fail(err));
        }

        let id = TableId(self.tables.len());
        let mut table = Table::new(id, name.to_string());
        table.kind = kind;

        for (index, def) in columns.into_iter().enumerate() {
            let id = ColumnId { table: id, index };

            match self.build_column(&table, id, def) {
                Ok((column, index)) => {
                    table.columns.push(column);
                    table.indices.extend(index);
                }
                Err(err) => return Err(self.fail(err)),
            }
        }

        if table.columns.iter().filter(|c| c.is_primary_key()).count() > 1 {
            return Err(self.fail(Error::constraint_conflict(
                name,
                "more than one column declares PRIMARY KEY; use a table-level primary key",
            )));
        }

        debug!(table = name, columns = table.columns.len(), "declared table");

        self.table_lookup.insert(name.to_string(), id);
        self.tables.push(table);

        if let Some(help) = help {
            self.declare_help(id, help);
        }

        Ok(TableBuilder::new(self, id))
    }

    /// Re-opens a declared table to add constraints or rows.
    pub fn table_mut(&mut self, name: &str) -> Result<TableBuilder<'_>> {
        match self.table_lookup.get(name) {
            Some(&id) => Ok(TableBuilder::new(self, id)),
            None => Err(self.fail(Error::missing_reference(format!("table `{name}`")))),
        }
    }

    /// Declares a lookup table `name (id <ty> PRIMARY KEY, name TEXT)` holding
    /// one row per label, numbered from `start`.
    ///
    /// Enum tables also produce a named integer constant per label in the
    /// generated source, and no record type.
    pub fn enumeration<I, S>(
        &mut self,
        name: &str,
        ty: ScalarType,
        start: i64,
        labels: I,
    ) -> Result<TableId>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if !ty.is_integer() {
            return Err(self.fail(Error::invalid_schema(format!(
                "enum `{name}` must be keyed by an integer type, not {ty}"
            ))));
        }

        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();

        if labels.is_empty() {
            return Err(self.fail(Error::invalid_schema(format!(
                "enum `{name}` has no labels"
            ))));
        }

        for (i, label) in labels.iter().enumerate() {
            if !is_identifier(label) {
                return Err(self.fail(Error::invalid_name(label, "not an identifier")));
            }
            if labels[..i].contains(label) {
                return Err(self.fail(Error::invalid_name(label, "enum label declared twice")));
            }
        }

        let width = self.int_width;
        let def = EnumDef { start, labels };

        let mut table = self.declare(
            name,
            [
                ColumnDef::new("id", ty).primary_key(),
                ColumnDef::new("name", ScalarType::String),
            ],
            TableKind::Enum(def.clone()),
        )?;

        for (position, label) in def.labels.iter().enumerate() {
            let Some(id) = def.id(position).and_then(|n| ty.integer(n, width)) else {
                return Err(table.fail(Error::invalid_schema(format!(
                    "enum `{name}`: id {start} + {position} of label `{label}` does not fit {ty}"
                ))));
            };
            table.insert([id, label.as_str().into()])?;
        }

        Ok(table.id())
    }

    /// Finishes declaration, returning the validated schema.
    pub fn build(self) -> Result<Schema> {
        if !self.errors.is_empty() {
            return Err(Error::schema_errors(self.errors));
        }

        if self.engines.is_empty() {
            return Err(Error::invalid_config("no target engines"));
        }

        Ok(Schema {
            name: self.name,
            engines: self.engines,
            int_width: self.int_width,
            quoted_names: self.quoted_names,
            tables: self.tables,
        })
    }

    /// Records `err` so later declarations refuse to continue.
    fn fail(&mut self, err: Error) -> Error {
        self.errors.push(err.clone());
        err
    }

    /// Declares the help table of `of`: the language `id`, then one column per
    /// column of `of` other than its own `id`.
    fn declare_help(&mut self, of: TableId, name: String) {
        let id = TableId(self.tables.len());
        let mut table = Table::new(id, name.clone());
        table.kind = TableKind::Help(of);

        let described = self.tables[of.0]
            .columns
            .iter()
            .map(|column| column.name.as_str())
            .filter(|name| *name != "id");

        table.columns = std::iter::once("id")
            .chain(described)
            .enumerate()
            .map(|(index, field)| Column {
                id: ColumnId { table: id, index },
                name: field.to_string(),
                ty: ScalarType::String,
                constraint: if index == 0 {
                    Constraint::PrimaryKey
                } else {
                    Constraint::None
                },
                default: None,
            })
            .collect();

        debug!(table = %name, columns = table.columns.len(), "declared help table");

        self.tables[of.0].help = Some(id);
        self.table_lookup.insert(name, id);
        self.tables.push(table);
    }

    /// Checks that the record type or the constants generated for a new
    /// table do not collide with those of the tables declared so far.
    fn check_generated_names(&self, name: &str, kind: &TableKind) -> Result<()> {
        match kind {
            TableKind::Plain => {
                let record = record_name(name);
                let taken = self
                    .tables
                    .iter()
                    .filter(|table| table.is_model())
                    .find(|table| record_name(&table.name) == record);

                if let Some(table) = taken {
                    return Err(Error::invalid_name(
                        name,
                        format!("record type `{record}` is already generated for `{}`", table.name),
                    ));
                }
            }
            TableKind::Enum(def) => {
                let mut taken: Vec<(String, String)> = vec![];
                for table in &self.tables {
                    if let TableKind::Enum(other) = &table.kind {
                        for label in &other.labels {
                            taken.push((
                                constant_name(&table.name, label),
                                format!("{}.{label}", table.name),
                            ));
                        }
                    }
                }

                for label in &def.labels {
                    let constant = constant_name(name, label);

                    if let Some((_, owner)) = taken.iter().find(|(taken, _)| *taken == constant) {
                        return Err(Error::invalid_name(
                            format!("{name}.{label}"),
                            format!("constant `{constant}` is already generated for `{owner}`"),
                        ));
                    }

                    taken.push((constant, format!("{name}.{label}")));
                }
            }
            TableKind::Help(_) => {}
        }

        Ok(())
    }

    fn lookup(&self, name: &str) -> Result<&Table> {
        self.table_lookup
            .get(name)
            .map(|id| &self.tables[id.0])
            .ok_or_else(|| Error::missing_reference(format!("table `{name}`")))
    }

    fn build_column(
        &self,
        table: &Table,
        id: ColumnId,
        def: ColumnDef,
    ) -> Result<(Column, Option<Index>)> {
        if table.column_by_name(&def.name).is_some() {
            return Err(Error::invalid_name(
                format!("{}.{}", table.name, def.name),
                "column declared twice",
            ));
        }

        if let Some(default) = &def.default {
            if !def.ty.accepts(default, self.int_width) {
                return Err(Error::type_mismatch(&def.name, def.ty, default));
            }

            if self.engines.contains(&Engine::Mysql)
                && matches!(def.ty, ScalarType::String | ScalarType::Binary)
            {
                return Err(Error::invalid_schema(format!(
                    "column `{}`: MySQL cannot hold a default on TEXT or BLOB columns",
                    def.name
                )));
            }
        }

        let mut index = None;

        let constraint = match def.annotation {
            Annotation::None => Constraint::None,
            Annotation::PrimaryKey => Constraint::PrimaryKey,
            Annotation::Unique => Constraint::Unique,
            Annotation::ForeignKey {
                table: target,
                column,
            } => {
                let target = self.lookup(&target)?;
                let Some(column) = target.column_by_name(&column) else {
                    return Err(Error::missing_reference(format!(
                        "column `{column}` in table `{}`",
                        target.name
                    )));
                };
                Constraint::ForeignKey(column.id)
            }
            Annotation::Index { unique } => {
                index = Some(Index {
                    name: Index::name_for(&table.name, [def.name.as_str()]),
                    on: table.id,
                    columns: vec![id],
                    unique,
                });
                Constraint::None
            }
        };

        let column = Column {
            id,
            name: def.name,
            ty: def.ty,
            constraint,
            default: def.default,
        };

        Ok((column, index))
    }
}
