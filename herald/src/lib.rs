//! # herald - Type-Routed Event Dispatch
//!
//! `herald` is an in-process publish/subscribe library. Events are plain
//! value types; dispatchers own a [`RuleTable`] that maps event types to
//! notifiers; raising an event runs every subscribed notifier synchronously,
//! once per (event, notifier) pair.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use herald::prelude::*;
//!
//! #[derive(Debug)]
//! struct OrderPlaced { id: u64 }
//! impl Event for OrderPlaced {}
//!
//! struct Orders { rules: RuleTable }
//!
//! impl Dispatcher for Orders {
//!     fn notifiers_for(&self, event_type: EventType) -> &[NotifierRef] {
//!         self.rules.notifiers_for(event_type)
//!     }
//! }
//!
//! let mailer = NotifierRef::from_fn(|event| { println!("{event:?}"); Ok(()) });
//! herald::register(Orders {
//!     rules: RuleTable::new().with_rule(types![OrderPlaced], mailer),
//! });
//!
//! herald::raise!(OrderPlaced { id: 1 })?;
//! ```
//!
//! ## Routing Rules
//!
//! - Matching is by the exact concrete event type.
//! - Dispatchers run in registration order; notifiers of one dispatcher run
//!   in declaration order.
//! - Registering a dispatcher type twice, or subscribing the same notifier to
//!   the same event type twice, has no additional effect.
//! - The first notifier error aborts the rest of the raise and is returned.
//!
//! ## Features
//!
//! - `attributes` (default): build events from named values, see [`attributes`]
//! - `macros`: `#[derive(Event)]`, `#[derive(Dispatcher)]`
//! - `tracing`: registration and dispatch diagnostics through `tracing`
//! - `inventory`: [`submit_dispatcher!`] for definition-site registration

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use herald_core::{
    // Error types
    BoxError,
    ConstructionError,
    DispatchError,
    // Dispatcher
    Dispatcher,
    DispatcherId,
    // Event
    Event,
    EventType,
    HeraldError,
    IntoEventTypes,
    IntoNotifiers,
    // Notifier
    Notifier,
    NotifierRef,
};

pub use herald_std::{Registry, RuleTable, SharedRegistry};

#[cfg(feature = "inventory")]
mod collected;
mod global;
mod macros;

#[cfg(feature = "inventory")]
pub use collected::DispatcherFactory;
pub use global::{raise, raise_one, register, registry};

/// Standard notifier implementations.
pub mod notifiers {
    pub use herald_std::notifiers::{
        FilterNotifier, LoggingNotifier, TypedNotifier, typed,
    };
}

/// Building events from named attributes.
#[cfg(feature = "attributes")]
pub mod attributes {
    pub use herald_std::attributes::{Attributes, FromAttributes, ToAttributes};
}

/// Testing utilities.
pub mod testing {
    pub use herald_std::testing::{
        CountingNotifier, FailingNotifier, OrderRecorder, RecordingNotifier,
    };
}

/// Prelude module - common imports for Herald.
///
/// # Usage
///
/// ```rust,ignore
/// use herald::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "attributes")]
    pub use crate::attributes::{FromAttributes, ToAttributes};
    pub use crate::{
        BoxError, DispatchError, Dispatcher, Event, EventType, Notifier, NotifierRef, Registry,
        RuleTable, SharedRegistry, types,
    };
}

#[cfg(feature = "macros")]
pub use herald_macros::{Dispatcher, Event};

#[cfg(feature = "inventory")]
pub use inventory;
