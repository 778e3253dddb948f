mod artifact;
pub use artifact::{Artifact, Scripts};

mod load;
pub use load::load;

mod model;
pub use model::{insert, Modeler};

pub use modsql_core::{
    async_trait, bail,
    driver::{self, Connection, Transaction},
    err,
    schema::{self, Builder, ColumnDef, IntWidth, ScalarType, Schema, TableBuilder},
    stmt::Value,
    Config, Engine, Error, Result,
};
pub use modsql_sql::{rewrite, Prepared, Serializer, Statement, Statements};

/// Re-exported for generated record types.
pub use chrono;

#[cfg(feature = "mysql")]
pub use modsql_driver_mysql as mysql;

#[cfg(feature = "postgresql")]
pub use modsql_driver_postgresql as postgresql;

#[cfg(feature = "sqlite")]
pub use modsql_driver_sqlite as sqlite;

/// Starts a column declaration. Shorthand for [`ColumnDef::new`].
pub fn column(name: impl Into<String>, ty: ScalarType) -> ColumnDef {
    ColumnDef::new(name, ty)
}
