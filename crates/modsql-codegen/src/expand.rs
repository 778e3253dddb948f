mod enumeration;
mod model;
mod statements;
mod util;

use modsql_core::{
    err,
    schema::{ScalarType, Schema, TableKind},
    Result,
};
use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    schema: &'a Schema,

    /// Path prefix for modsql types
    modsql: TokenStream,
}

pub(super) fn schema(schema: &Schema) -> Result<TokenStream> {
    Expand {
        schema,
        modsql: quote!(::modsql),
    }
    .expand()
}

impl Expand<'_> {
    fn expand(&self) -> Result<TokenStream> {
        let mut enums = vec![];
        let mut models = vec![];

        for table in &self.schema.tables {
            match &table.kind {
                TableKind::Enum(def) => enums.push(self.expand_enum(table, def)?),
                TableKind::Plain => models.push(self.expand_model(table, models.len())?),
                TableKind::Help(_) => {}
            }
        }

        let statements = self.expand_statements();

        Ok(quote! {
            #(#enums)*
            #(#models)*
            #statements
        })
    }

    /// The field type holding values of `ty`.
    fn native_ty(&self, ty: ScalarType) -> Result<TokenStream> {
        let modsql = &self.modsql;

        match ty {
            ScalarType::DateTime => Ok(quote!(#modsql::chrono::DateTime<#modsql::chrono::Utc>)),
            ty => {
                let native = ty.native(self.schema.int_width);
                let ty: syn::Type = syn::parse_str(native)
                    .map_err(|e| err!("`{native}` is not a type: {e}"))?;
                Ok(quote!(#ty))
            }
        }
    }
}
