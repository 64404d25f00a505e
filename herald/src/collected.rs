//! Definition-site dispatcher registration through `inventory`.

use crate::{Dispatcher, SharedRegistry};
use std::sync::Arc;

/// A factory for a dispatcher submitted with
/// [`submit_dispatcher!`](crate::submit_dispatcher).
///
/// `inventory` collects static items, so dispatchers are collected as
/// factories and built when the process-wide registry is first used.
pub trait DispatcherFactory: Send + Sync + 'static {
    /// Build the dispatcher.
    fn create(&self) -> Arc<dyn Dispatcher>;
}

impl<F> DispatcherFactory for F
where
    F: Fn() -> Arc<dyn Dispatcher> + Send + Sync + 'static,
{
    fn create(&self) -> Arc<dyn Dispatcher> {
        (self)()
    }
}

inventory::collect!(&'static dyn DispatcherFactory);

pub(crate) fn register_collected(registry: &SharedRegistry) {
    for factory in inventory::iter::<&'static dyn DispatcherFactory> {
        registry.register_arc(factory.create());
    }
}

/// Submits a dispatcher to the process-wide registry from its definition
/// site.
///
/// The expression must evaluate to a [`Dispatcher`]. It is wrapped in a
/// factory and evaluated once, when the process-wide registry is first used.
///
/// # Example
/// ```rust,ignore
/// struct Orders { rules: RuleTable }
/// impl Dispatcher for Orders { ... }
///
/// herald::submit_dispatcher!(Orders::new());
/// ```
#[macro_export]
macro_rules! submit_dispatcher {
    ($dispatcher:expr) => {
        $crate::inventory::submit! {
            &(|| -> ::std::sync::Arc<dyn $crate::Dispatcher> {
                ::std::sync::Arc::new($dispatcher)
            }) as &'static dyn $crate::DispatcherFactory
        }
    };
}
