use modsql_core::schema;
use proc_macro2::{Literal, TokenStream};
use quote::{format_ident, quote};

/// A field or function identifier for `name`. Keywords get a `_` suffix.
pub(super) fn ident(name: &str) -> syn::Ident {
    syn::parse_str::<syn::Ident>(name).unwrap_or_else(|_| format_ident!("{}_", name))
}

/// The record type identifier for table `name`.
pub(super) fn type_ident(name: &str) -> syn::Ident {
    ident(&schema::record_name(name))
}

pub(super) fn int(v: usize) -> TokenStream {
    let lit = Literal::usize_unsuffixed(v);
    quote!(#lit)
}

pub(super) fn signed(v: i64) -> TokenStream {
    let lit = Literal::u64_unsuffixed(v.unsigned_abs());

    if v < 0 {
        quote!(-#lit)
    } else {
        quote!(#lit)
    }
}
