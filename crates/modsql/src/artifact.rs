use indexmap::IndexMap;
use modsql_core::{
    schema::{Schema, Table},
    stmt::Value,
    Engine, Result,
};
use modsql_sql::{Serializer, Statement, Statements};
use tracing::{debug, info};

/// Everything generated from one schema.
///
/// Created once by [`Artifact::create`] and immutable afterwards.
#[derive(Debug)]
pub struct Artifact {
    /// Label of the schema the artifact was generated from
    pub name: String,

    /// SQL scripts per target engine, in configuration order
    pub scripts: IndexMap<Engine, Scripts>,

    /// Native record types, enum constants and the `statements()` constructor
    pub source: String,

    /// Canonical insert statement of every model table
    pub statements: Statements,
}

/// The SQL scripts generated for one engine. Each script runs in one
/// transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scripts {
    /// Creates every table and index
    pub create: String,

    /// Drops every table, dependents first
    pub drop: String,

    /// Seed rows. `None` when no table declares any.
    pub data: Option<String>,

    /// Rows of the help tables. `None` outside help mode or when no table
    /// declares any.
    pub help: Option<String>,

    /// Test rows. `None` when no table declares any.
    pub test_data: Option<String>,
}

impl Artifact {
    pub fn create(schema: &Schema) -> Result<Artifact> {
        let mut scripts = IndexMap::new();

        for &engine in &schema.engines {
            scripts.insert(engine, Scripts::render(schema, engine));
        }

        let source = modsql_codegen::source(schema)?;
        let statements = modsql_codegen::statements(schema);

        info!(
            name = %schema.name,
            engines = scripts.len(),
            tables = schema.tables.len(),
            statements = statements.len(),
            "created artifact"
        );

        Ok(Artifact {
            name: schema.name.clone(),
            scripts,
            source,
            statements,
        })
    }

    pub fn scripts(&self, engine: Engine) -> Option<&Scripts> {
        self.scripts.get(&engine)
    }
}

impl Scripts {
    fn render(schema: &Schema, engine: Engine) -> Scripts {
        let mut create = Script::new(schema, engine, "create");
        for table in &schema.tables {
            create.push(&Statement::create_table(table));
            for index in &table.indices {
                create.push(&Statement::create_index(index));
            }
            create.blank();
        }

        let mut drop = Script::new(schema, engine, "drop");
        for table in schema.tables.iter().rev() {
            drop.push(&Statement::drop_table_if_exists(table));
        }

        let scripts = Scripts {
            create: create.finish(),
            drop: drop.finish(),
            data: rows(schema, engine, "data", |table| {
                (!table.is_help()).then_some(&table.rows)
            }),
            help: rows(schema, engine, "help", |table| {
                table.is_help().then_some(&table.rows)
            }),
            test_data: rows(schema, engine, "test data", |table| Some(&table.test_rows)),
        };

        debug!(%engine, "rendered scripts");
        scripts
    }
}

/// Inserts for the rows `f` selects, or `None` if there are none.
fn rows(
    schema: &Schema,
    engine: Engine,
    kind: &str,
    f: impl Fn(&Table) -> Option<&Vec<Vec<Value>>>,
) -> Option<String> {
    if schema
        .tables
        .iter()
        .all(|table| f(table).map_or(true, Vec::is_empty))
    {
        return None;
    }

    let mut script = Script::new(schema, engine, kind);
    for table in &schema.tables {
        for row in f(table).into_iter().flatten() {
            script.push(&Statement::insert(table, row));
        }
    }
    Some(script.finish())
}

/// A script under construction: a header comment, then the statements
/// between a transaction start and a commit.
struct Script<'a> {
    serializer: Serializer<'a>,
    out: String,
}

impl<'a> Script<'a> {
    fn new(schema: &'a Schema, engine: Engine, kind: &str) -> Self {
        let serializer = Serializer::new(schema, engine);
        let out = format!(
            "-- {kind} script for `{}` ({engine})\n\n{}\n\n",
            schema.name,
            serializer.serialize(&Statement::begin()),
        );

        Script { serializer, out }
    }

    fn push(&mut self, stmt: &Statement) {
        self.out.push_str(&self.serializer.serialize(stmt));
        self.out.push('\n');
    }

    fn blank(&mut self) {
        self.out.push('\n');
    }

    fn finish(mut self) -> String {
        if !self.out.ends_with("\n\n") {
            self.blank();
        }
        self.out.push_str(&self.serializer.serialize(&Statement::commit()));
        self.out.push('\n');
        self.out
    }
}
