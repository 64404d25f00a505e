//! Error types for Herald.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`HeraldError`] - Top-level error type for all Herald operations
//! - [`DispatchError`] - Errors surfaced while fanning out an event
//! - [`ConstructionError`] - Errors building an event from named attributes

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all Herald operations.
#[derive(Error, Debug)]
pub enum HeraldError {
    /// A notifier failed while an event was dispatched.
    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    /// An event could not be constructed.
    #[error("construction error: {0}")]
    Construction(#[from] ConstructionError),

    /// A custom error occurred.
    #[error(transparent)]
    Custom(BoxError),
}

/// Errors that can occur during event dispatch.
///
/// The error is produced by the first notifier that fails; no notifier after
/// it runs for the same event, and no later event of the same batch is raised.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// A notifier returned an error.
    #[error("notifier `{notifier}` failed while handling `{event}`")]
    Notifier {
        /// Type name of the event being dispatched.
        event: &'static str,
        /// Type name of the failing notifier.
        notifier: &'static str,
        /// The error returned by the notifier.
        #[source]
        source: BoxError,
    },
}

impl DispatchError {
    /// Type name of the event whose dispatch failed.
    pub fn event(&self) -> &'static str {
        match self {
            DispatchError::Notifier { event, .. } => event,
        }
    }

    /// Type name of the notifier that failed.
    pub fn notifier(&self) -> &'static str {
        match self {
            DispatchError::Notifier { notifier, .. } => notifier,
        }
    }

    /// Unwrap the error originally returned by the notifier.
    pub fn into_source(self) -> BoxError {
        match self {
            DispatchError::Notifier { source, .. } => source,
        }
    }
}

/// Errors that can occur when an event is built from named attributes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    /// A required field was absent.
    #[error("cannot construct `{event}`: missing field `{field}`")]
    MissingField {
        /// Type name of the event.
        event: &'static str,
        /// Name of the missing field.
        field: String,
    },

    /// A field was present but did not match the declared type.
    #[error("cannot construct `{event}`: {message}")]
    InvalidField {
        /// Type name of the event.
        event: &'static str,
        /// Description of the mismatch.
        message: String,
    },

    /// The attributes were not a name-to-value mapping.
    #[error("cannot construct `{event}`: attributes must be a mapping of field names to values")]
    NotAMapping {
        /// Type name of the event.
        event: &'static str,
    },
}

impl ConstructionError {
    /// Type name of the event that failed to construct.
    pub fn event(&self) -> &'static str {
        match self {
            ConstructionError::MissingField { event, .. }
            | ConstructionError::InvalidField { event, .. }
            | ConstructionError::NotAMapping { event } => event,
        }
    }
}

impl From<BoxError> for HeraldError {
    fn from(err: BoxError) -> Self {
        HeraldError::Custom(err)
    }
}
