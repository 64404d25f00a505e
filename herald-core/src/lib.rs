//! # herald-core
//!
//! Core traits for the Herald event dispatch library.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! crates that only define events, notifiers or dispatchers, without pulling
//! in the standard rule table and registry from `herald-std`.
//!
//! # Building Blocks
//!
//! ## Events ([`Event`])
//!
//! Immutable value objects describing something that happened. Each concrete
//! event type is identified by an [`EventType`] key; routing matches that key
//! exactly, never a wrapped or wrapping type.
//!
//! ## Notifiers ([`Notifier`])
//!
//! Callables invoked with a raised event. A notifier is shared through a
//! [`NotifierRef`], whose pointer identity is what deduplicates subscriptions.
//!
//! ## Dispatchers ([`Dispatcher`])
//!
//! Types owning a routing table from event types to notifiers. The provided
//! [`Dispatcher::dispatch`] runs every subscribed notifier once and stops at
//! the first failure.
//!
//! # Error Types
//!
//! - [`HeraldError`] - Top-level error type
//! - [`DispatchError`] - A notifier failed during dispatch
//! - [`ConstructionError`] - An event could not be built from attributes

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod dispatcher;
mod error;
mod event;
mod notifier;

// Re-exports
pub use dispatcher::{Dispatcher, DispatcherId, notify_each};
pub use error::{BoxError, ConstructionError, DispatchError, HeraldError};
pub use event::{Event, EventType, IntoEventTypes};
pub use notifier::{IntoNotifiers, Notifier, NotifierRef};
