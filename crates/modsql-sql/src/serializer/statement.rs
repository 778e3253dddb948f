use super::{value::Literal, Comma, Flavor, Formatter, Ident, Placeholder, ToSql};

use crate::stmt::{self, InsertSource, Transaction};
use modsql_core::{
    schema::{Column, ColumnId, Constraint, ForeignKey, Table},
    Engine,
};

impl ToSql for &stmt::Statement {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            stmt::Statement::CreateIndex(stmt) => stmt.to_sql(f),
            stmt::Statement::CreateTable(stmt) => stmt.to_sql(f),
            stmt::Statement::DropTable(stmt) => stmt.to_sql(f),
            stmt::Statement::Insert(stmt) => stmt.to_sql(f),
            stmt::Statement::Transaction(stmt) => stmt.to_sql(f),
        }
    }
}

/// Column definitions followed by the table-level constraints: composite
/// uniques, foreign keys and finally the primary key.
struct ColumnsWithConstraints<'a>(&'a Table);

impl ToSql for ColumnsWithConstraints<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let table = self.0;
        let mut s = "\n    ";

        for column in &table.columns {
            fmt!(f, s column);
            s = ",\n    ";
        }

        for unique in &table.uniques {
            fmt!(f, s "UNIQUE (" ColumnNames(unique) ")");
        }

        for foreign_key in &table.foreign_keys {
            fmt!(f, s foreign_key);
        }

        if let Some(primary_key) = &table.primary_key {
            fmt!(f, s "PRIMARY KEY (" ColumnNames(primary_key) ")");
        }

        fmt!(f, "\n");
    }
}

struct ColumnNames<'a>(&'a [ColumnId]);

impl ToSql for ColumnNames<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let serializer = f.serializer;
        fmt!(f, Comma(self.0.iter().map(|id| serializer.column_name(*id))));
    }
}

/// `REFERENCES table(column)`
struct References(ColumnId);

impl ToSql for References {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let table = f.serializer.table_name(self.0.table);
        let column = f.serializer.column_name(self.0);
        fmt!(f, "REFERENCES " table "(" column ")");
    }
}

impl ToSql for &Column {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let name = Ident(&self.name);

        fmt!(f, name " " self.ty);

        match self.constraint {
            Constraint::None => {}
            Constraint::PrimaryKey => fmt!(f, " PRIMARY KEY"),
            Constraint::Unique => fmt!(f, " UNIQUE"),
            Constraint::ForeignKey(target) => fmt!(f, " " References(target)),
        }

        if let Some(default) = &self.default {
            fmt!(f, " DEFAULT " Literal(default));
        }
    }
}

impl ToSql for &ForeignKey {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let table = f.serializer.table_name(self.references[0].table);

        fmt!(
            f, "FOREIGN KEY (" ColumnNames(&self.columns) ") REFERENCES "
            table "(" ColumnNames(&self.references) ")"
        );
    }
}

impl ToSql for &stmt::CreateTable {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let table = f.serializer.table(self.table);
        let name = Ident(&table.name);
        let columns = ColumnsWithConstraints(table);

        fmt!(f, "CREATE TABLE " name " (" columns ")");
    }
}

impl ToSql for &stmt::CreateIndex {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let table_name = f.serializer.table_name(self.on);
        let index_name = Ident(&self.name);
        let unique = if self.unique { "UNIQUE " } else { "" };

        fmt!(
            f, "CREATE " unique "INDEX " index_name " ON " table_name " (" ColumnNames(&self.columns) ")"
        );
    }
}

impl ToSql for &stmt::DropTable {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let name = f.serializer.table_name(self.table);
        let if_exists = if self.if_exists { "IF EXISTS " } else { "" };
        let cascade = match f.serializer.flavor {
            Flavor::Dialect(profile) if profile.engine == Engine::Postgresql => " CASCADE",
            _ => "",
        };

        fmt!(f, "DROP TABLE " if_exists name cascade);
    }
}

impl ToSql for &stmt::Insert {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let serializer = f.serializer;
        let table = serializer.table(self.table);
        let name = Ident(&table.name);
        let columns = Comma(table.columns.iter().map(|column| Ident(&column.name)));

        fmt!(f, "INSERT INTO " name " (" columns ") VALUES (");

        match &self.source {
            InsertSource::Values(values) => fmt!(f, Comma(values.iter().map(Literal))),
            InsertSource::Placeholders => {
                fmt!(f, Comma(table.columns.iter().map(|_| Placeholder)))
            }
        }

        fmt!(f, ")");
    }
}

impl ToSql for &Transaction {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let mysql = matches!(
            f.serializer.flavor,
            Flavor::Dialect(profile) if profile.engine == Engine::Mysql
        );

        match self {
            Transaction::Start if mysql => fmt!(f, "START TRANSACTION"),
            Transaction::Start => fmt!(f, "BEGIN"),
            Transaction::Commit => fmt!(f, "COMMIT"),
            Transaction::Rollback => fmt!(f, "ROLLBACK"),
        }
    }
}
