use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// `statements()`, returning the canonical registry. Each model's
    /// `INSERT_ID` indexes into it.
    pub(super) fn expand_statements(&self) -> TokenStream {
        let modsql = &self.modsql;
        let statements = crate::statements(self.schema);
        let texts = statements.iter().map(|(_, text)| text);

        quote! {
            /// Canonical statements, rewritten for the connection's engine
            /// when prepared.
            pub fn statements() -> #modsql::Statements {
                const TEXTS: &[&str] = &[ #( #texts ),* ];
                TEXTS.iter().copied().collect()
            }
        }
    }
}
