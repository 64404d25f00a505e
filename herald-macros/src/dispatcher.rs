//! `#[derive(Dispatcher)]`.

use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Index, Member, parse_macro_input};

pub fn derive_dispatcher_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let member = match rules_member(&input) {
        Ok(member) => member,
        Err(err) => return err.to_compile_error().into(),
    };

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::herald::Dispatcher for #name #ty_generics #where_clause {
            fn notifiers_for(
                &self,
                event_type: ::herald::EventType,
            ) -> &[::herald::NotifierRef] {
                ::herald::RuleTable::notifiers_for(&self.#member, event_type)
            }
        }
    };

    TokenStream::from(expanded)
}

/// Locate the rule table: the `#[rules]` field, else the field named `rules`.
fn rules_member(input: &DeriveInput) -> syn::Result<Member> {
    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Dispatcher can only be derived for structs",
            ));
        }
    };

    let mut marked = fields
        .iter()
        .enumerate()
        .filter(|(_, field)| field.attrs.iter().any(|attr| attr.path().is_ident("rules")));

    if let Some((index, field)) = marked.next() {
        if let Some((_, extra)) = marked.next() {
            return Err(syn::Error::new_spanned(
                extra,
                "only one field may be marked #[rules]",
            ));
        }
        return Ok(match &field.ident {
            Some(ident) => Member::Named(ident.clone()),
            None => Member::Unnamed(Index::from(index)),
        });
    }

    if let Fields::Named(named) = fields {
        if let Some(ident) = named
            .named
            .iter()
            .filter_map(|field| field.ident.as_ref())
            .find(|ident| *ident == "rules")
        {
            return Ok(Member::Named(ident.clone()));
        }
    }

    Err(syn::Error::new_spanned(
        &input.ident,
        "Dispatcher needs a `rules: RuleTable` field or a field marked #[rules]",
    ))
}
