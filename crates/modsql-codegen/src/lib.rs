mod expand;

use modsql_core::{Result, Schema};
use modsql_sql::{Serializer, Statement, Statements};
use proc_macro2::TokenStream;

/// Generates the native source of `schema`: one record type per model table,
/// one constant per enum label and a `statements()` function returning the
/// canonical statement registry.
pub fn generate(schema: &Schema) -> Result<TokenStream> {
    expand::schema(schema)
}

/// Same as [`generate`], as source text.
pub fn source(schema: &Schema) -> Result<String> {
    Ok(generate(schema)?.to_string())
}

/// The canonical insert statement of every model table. A model's statement
/// id is its position among the schema's models.
pub fn statements(schema: &Schema) -> Statements {
    let serializer = Serializer::canonical(schema);

    schema
        .models()
        .map(|table| serializer.render(&Statement::insert_placeholders(table)))
        .collect()
}
