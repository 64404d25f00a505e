//! Derive macros for Herald.
//!
//! - `#[derive(Event)]` implements `herald::Event`
//! - `#[derive(Dispatcher)]` implements `herald::Dispatcher` by delegating to
//!   the struct's `RuleTable` field

use proc_macro::TokenStream;

mod dispatcher;
mod event;

/// Derive macro for implementing the `Event` trait.
#[proc_macro_derive(Event)]
pub fn derive_event(input: TokenStream) -> TokenStream {
    event::derive_event_impl(input)
}

/// Derive macro for implementing the `Dispatcher` trait.
///
/// The rule table is the field marked `#[rules]`, or the field named `rules`
/// when no field is marked.
///
/// ```rust,ignore
/// #[derive(Dispatcher)]
/// struct Mailer {
///     #[rules]
///     table: RuleTable,
/// }
/// ```
#[proc_macro_derive(Dispatcher, attributes(rules))]
pub fn derive_dispatcher(input: TokenStream) -> TokenStream {
    dispatcher::derive_dispatcher_impl(input)
}
