//! Notifier adapter for a single concrete event type.

use herald_core::{BoxError, Event, Notifier, NotifierRef};
use std::marker::PhantomData;

/// A notifier that handles events of type `E` and ignores every other type.
///
/// Useful when one closure should see the concrete event instead of
/// `&dyn Event`.
pub struct TypedNotifier<E, F> {
    handler: F,
    _event: PhantomData<fn(&E)>,
}

impl<E, F> TypedNotifier<E, F>
where
    E: Event,
    F: Fn(&E) -> Result<(), BoxError> + Send + Sync + 'static,
{
    /// Create a new typed notifier.
    pub fn new(handler: F) -> Self {
        Self {
            handler,
            _event: PhantomData,
        }
    }
}

impl<E, F> Notifier for TypedNotifier<E, F>
where
    E: Event,
    F: Fn(&E) -> Result<(), BoxError> + Send + Sync + 'static,
{
    fn notify(&self, event: &dyn Event) -> Result<(), BoxError> {
        match event.downcast_ref::<E>() {
            Some(event) => (self.handler)(event),
            None => Ok(()),
        }
    }
}

/// Wrap a closure over `&E` into a notifier handle.
pub fn typed<E, F>(handler: F) -> NotifierRef
where
    E: Event,
    F: Fn(&E) -> Result<(), BoxError> + Send + Sync + 'static,
{
    NotifierRef::new(TypedNotifier::new(handler))
}
