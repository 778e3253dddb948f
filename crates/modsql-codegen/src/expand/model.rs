use super::{util, Expand};

use modsql_core::{
    schema::{ScalarType, Table},
    Result,
};
use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// A record type for `table` and its `Modeler` impl.
    pub(super) fn expand_model(&self, table: &Table, insert_id: usize) -> Result<TokenStream> {
        let modsql = &self.modsql;
        let model_ident = util::type_ident(&table.name);
        let insert_id = util::int(insert_id);
        let doc = format!(" A row of the `{}` table.", table.name);

        let mut fields = Vec::with_capacity(table.columns.len());
        let mut args = Vec::with_capacity(table.columns.len());

        for column in &table.columns {
            let field = util::ident(&column.name);
            let ty = self.native_ty(column.ty)?;

            fields.push(quote!(pub #field: #ty));
            args.push(match column.ty {
                ScalarType::String | ScalarType::Binary => {
                    quote!(#modsql::Value::from(self.#field.clone()))
                }
                _ => quote!(#modsql::Value::from(self.#field)),
            });
        }

        Ok(quote! {
            #[doc = #doc]
            #[derive(Debug, Clone, PartialEq)]
            pub struct #model_ident {
                #( #fields, )*
            }

            impl #modsql::Modeler for #model_ident {
                const INSERT_ID: usize = #insert_id;

                fn args(&self) -> Vec<#modsql::Value> {
                    vec![ #( #args ),* ]
                }
            }
        })
    }
}
