use super::Serializer;
use crate::DialectProfile;

use modsql_core::{schema::Schema, Engine};

#[derive(Debug, Clone, Copy)]
pub(super) enum Flavor {
    Dialect(DialectProfile),

    /// Engine independent text: `{Q}` quotes, `{P}` parameters.
    Canonical,
}

impl<'a> Serializer<'a> {
    pub fn new(schema: &'a Schema, engine: Engine) -> Serializer<'a> {
        Serializer {
            schema,
            flavor: Flavor::Dialect(DialectProfile::new(engine, schema.int_width)),
        }
    }

    pub fn sqlite(schema: &'a Schema) -> Serializer<'a> {
        Serializer::new(schema, Engine::Sqlite)
    }

    pub fn postgresql(schema: &'a Schema) -> Serializer<'a> {
        Serializer::new(schema, Engine::Postgresql)
    }

    pub fn mysql(schema: &'a Schema) -> Serializer<'a> {
        Serializer::new(schema, Engine::Mysql)
    }

    /// Serializes to canonical text, rewritten per engine at prepare time.
    ///
    /// Types and literals have no canonical form and render with their
    /// standard SQL spelling; canonical text is meant for parameterized
    /// statements.
    pub fn canonical(schema: &'a Schema) -> Serializer<'a> {
        Serializer {
            schema,
            flavor: Flavor::Canonical,
        }
    }
}
