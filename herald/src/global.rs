//! The process-wide registry behind the free `register` and `raise`
//! functions.
//!
//! The registry is constructed on first use. With the `inventory` feature,
//! construction also registers every dispatcher submitted through
//! [`submit_dispatcher!`](crate::submit_dispatcher).

use crate::{DispatchError, Dispatcher, Event, SharedRegistry};
use std::sync::OnceLock;

static REGISTRY: OnceLock<SharedRegistry> = OnceLock::new();

/// The process-wide registry.
pub fn registry() -> &'static SharedRegistry {
    REGISTRY.get_or_init(|| {
        let registry = SharedRegistry::new();

        #[cfg(feature = "inventory")]
        crate::collected::register_collected(&registry);

        registry
    })
}

/// Register a dispatcher with the process-wide registry.
///
/// Returns `false` if a dispatcher of the same type was already registered.
pub fn register<D: Dispatcher>(dispatcher: D) -> bool {
    registry().register(dispatcher)
}

/// Raise events through the process-wide registry.
///
/// See [`raise!`](crate::raise!) for the variadic form.
pub fn raise<'a, I>(events: I) -> Result<(), DispatchError>
where
    I: IntoIterator<Item = &'a dyn Event>,
{
    registry().raise(events)
}

/// Raise a single event through the process-wide registry.
pub fn raise_one(event: &dyn Event) -> Result<(), DispatchError> {
    registry().raise_one(event)
}
