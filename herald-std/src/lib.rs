//! # herald-std
//!
//! Standard implementations for the Herald event dispatch library.
//!
//! This crate provides:
//! - **Rule tables**: [`RuleTable`], the per-dispatcher event type to notifier map
//! - **Registries**: [`Registry`] and the thread-safe [`SharedRegistry`]
//! - **Standard notifiers**: logging, closure adapters
//! - **Attribute construction**: building events from named values (`attributes` feature)
//! - **Testing**: recording and counting notifiers

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use herald_core;

// Modules
#[cfg(feature = "attributes")]
pub mod attributes;
pub mod notifiers;
pub mod registry;
pub mod rules;
pub mod testing;

pub use registry::{Registry, SharedRegistry};
pub use rules::RuleTable;
