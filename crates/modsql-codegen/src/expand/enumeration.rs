use super::{util, Expand};

use modsql_core::{
    schema::{self, EnumDef, Table},
    Result,
};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

impl Expand<'_> {
    /// One constant per label, `<TABLE>_<LABEL>`, typed like the id column.
    pub(super) fn expand_enum(&self, table: &Table, def: &EnumDef) -> Result<TokenStream> {
        let ty = self.native_ty(table.columns[0].ty)?;

        let consts = def.variants().map(|(id, label)| {
            let name = format_ident!("{}", schema::constant_name(&table.name, label));
            let value = util::signed(id);
            let doc = format!(" `{label}` in the `{}` table.", table.name);

            quote! {
                #[doc = #doc]
                pub const #name: #ty = #value;
            }
        });

        Ok(quote!( #( #consts )* ))
    }
}
