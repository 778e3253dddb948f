use super::Builder;
use crate::{
    schema::{ColumnId, ForeignKey, Index, Table, TableId},
    stmt::Value,
    Error, Result,
};

/// Adds table-level constraints and rows to a declared table.
///
/// Every operation checks the names it is given and fails on the first one
/// that does not resolve. Failures are also recorded on the [`Builder`], so
/// the schema cannot be built after one is ignored.
#[derive(Debug)]
pub struct TableBuilder<'a> {
    builder: &'a mut Builder,
    id: TableId,
}

#[derive(Clone, Copy)]
enum Rows {
    Data,
    TestData,
}

impl<'a> TableBuilder<'a> {
    pub(super) fn new(builder: &'a mut Builder, id: TableId) -> Self {
        Self { builder, id }
    }

    pub fn id(&self) -> TableId {
        self.id
    }

    pub fn table(&self) -> &Table {
        &self.builder.tables[self.id.0]
    }

    /// Declares a table-level primary key, rendered after every column and
    /// foreign key.
    pub fn primary_key(&mut self, columns: &[&str]) -> Result<&mut Self> {
        let columns = self.resolve(columns)?;
        let table = self.table();

        if table.primary_key.is_some() {
            let name = table.name.clone();
            return Err(self.fail(Error::constraint_conflict(
                name,
                "table declares PRIMARY KEY twice",
            )));
        }

        if let Some(column) = table.columns.iter().find(|c| c.is_primary_key()) {
            let name = column.name.clone();
            return Err(self.fail(Error::constraint_conflict(
                name,
                "column-level PRIMARY KEY conflicts with a table-level PRIMARY KEY",
            )));
        }

        self.table_mut().primary_key = Some(columns);
        Ok(self)
    }

    pub fn unique(&mut self, columns: &[&str]) -> Result<&mut Self> {
        let columns = self.resolve(columns)?;
        self.table_mut().uniques.push(columns);
        Ok(self)
    }

    /// Creates an index over `columns`.
    pub fn index(&mut self, unique: bool, columns: &[&str]) -> Result<&mut Self> {
        let ids = self.resolve(columns)?;
        let table = self.table();
        let name = Index::name_for(&table.name, columns.iter().copied());

        if table.indices.iter().any(|index| index.name == name) {
            let table = table.name.clone();
            return Err(self.fail(Error::constraint_conflict(
                table,
                format!("index `{name}` declared twice"),
            )));
        }

        let on = self.id;
        self.table_mut().indices.push(Index {
            name,
            on,
            columns: ids,
            unique,
        });
        Ok(self)
    }

    /// References `target`, pairing each local column with a target column.
    /// `target` must already be declared.
    pub fn foreign_key(&mut self, target: &str, columns: &[(&str, &str)]) -> Result<&mut Self> {
        if columns.is_empty() {
            let err = Error::invalid_schema(format!(
                "foreign key on `{}` names no columns",
                self.table().name
            ));
            return Err(self.fail(err));
        }

        let target = match self.builder.lookup(target) {
            Ok(target) => target,
            Err(err) => return Err(self.fail(err)),
        };

        let mut references = Vec::with_capacity(columns.len());
        for (_, name) in columns {
            match target.column_by_name(name) {
                Some(column) => references.push(column.id),
                None => {
                    let err = Error::missing_reference(format!(
                        "column `{name}` in table `{}`",
                        target.name
                    ));
                    return Err(self.fail(err));
                }
            }
        }

        let local: Vec<&str> = columns.iter().map(|(local, _)| *local).collect();
        let columns = self.resolve(&local)?;

        self.table_mut().foreign_keys.push(ForeignKey {
            columns,
            references,
        });
        Ok(self)
    }

    /// Appends a seed row. One value per column, in column order.
    pub fn insert(&mut self, values: impl IntoIterator<Item = Value>) -> Result<&mut Self> {
        self.push_row(Rows::Data, values.into_iter().collect())
    }

    /// Appends a row that only goes into the test-data script.
    pub fn insert_test_data(&mut self, values: impl IntoIterator<Item = Value>) -> Result<&mut Self> {
        self.push_row(Rows::TestData, values.into_iter().collect())
    }

    /// Appends a row to the table's help table: the language id, then one
    /// description per column other than `id`, in column order.
    ///
    /// Fails unless the builder is in help mode.
    pub fn insert_help<I, S>(&mut self, values: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let Some(help) = self.table().help else {
            let err = Error::invalid_state(format!(
                "`{}` has no help table; help mode is off",
                self.table().name
            ));
            return Err(self.fail(err));
        };

        let values: Vec<Value> = values
            .into_iter()
            .map(|value| Value::String(value.into()))
            .collect();

        TableBuilder::new(&mut *self.builder, help).push_row(Rows::Data, values)?;
        Ok(self)
    }

    pub(super) fn fail(&mut self, err: Error) -> Error {
        self.builder.fail(err)
    }

    fn push_row(&mut self, rows: Rows, values: Vec<Value>) -> Result<&mut Self> {
        let width = self.builder.int_width;
        let table = self.table();

        if values.len() != table.columns.len() {
            let err = Error::arity_mismatch(&table.name, table.columns.len(), values.len());
            return Err(self.fail(err));
        }

        if let Some((column, value)) = table
            .columns
            .iter()
            .zip(&values)
            .find(|(column, value)| !column.ty.accepts(value, width))
        {
            let err = Error::type_mismatch(
                format!("{}.{}", table.name, column.name),
                column.ty,
                value,
            );
            return Err(self.fail(err));
        }

        let table = self.table_mut();
        match rows {
            Rows::Data => table.rows.push(values),
            Rows::TestData => table.test_rows.push(values),
        }
        Ok(self)
    }

    fn resolve(&mut self, names: &[&str]) -> Result<Vec<ColumnId>> {
        let table = self.table();

        if names.is_empty() {
            let err = Error::invalid_schema(format!(
                "constraint on `{}` names no columns",
                table.name
            ));
            return Err(self.fail(err));
        }

        let mut ids = Vec::with_capacity(names.len());
        for name in names {
            match table.column_by_name(name) {
                Some(column) => ids.push(column.id),
                None => {
                    let err = Error::missing_reference(format!(
                        "column `{name}` in table `{}`",
                        table.name
                    ));
                    return Err(self.fail(err));
                }
            }
        }
        Ok(ids)
    }

    fn table_mut(&mut self) -> &mut Table {
        &mut self.builder.tables[self.id.0]
    }
}
