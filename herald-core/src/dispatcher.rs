//! Dispatcher core traits.

use crate::{
    error::DispatchError,
    event::{Event, EventType},
    notifier::NotifierRef,
};
use std::{any::TypeId, fmt};

/// A type that routes events to the notifiers it subscribed.
///
/// Implementors own their routing table and expose it through
/// [`notifiers_for`](Dispatcher::notifiers_for). Lookup is by the event's
/// exact concrete type.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `Dispatcher`",
    label = "missing `Dispatcher` implementation",
    note = "Hold a `RuleTable` and implement `notifiers_for`, or use `#[derive(Dispatcher)]`."
)]
pub trait Dispatcher: Send + Sync + 'static {
    /// The notifiers subscribed to `event_type`, in invocation order.
    ///
    /// An unknown event type yields an empty slice.
    fn notifiers_for(&self, event_type: EventType) -> &[NotifierRef];

    /// Identity used by registries to register a dispatcher only once.
    ///
    /// Defaults to the implementing type.
    fn id(&self) -> DispatcherId {
        DispatcherId::of::<Self>()
    }

    /// Invoke every notifier subscribed to the event's type, once each.
    ///
    /// The first notifier error aborts the remaining notifiers and is
    /// returned.
    fn dispatch(&self, event: &dyn Event) -> Result<(), DispatchError> {
        notify_each(self.notifiers_for(event.event_type()), event)
    }
}

/// Invoke each notifier with `event`, in slice order.
///
/// The first error is wrapped in [`DispatchError::Notifier`] and returned;
/// the notifiers after it do not run.
pub fn notify_each(notifiers: &[NotifierRef], event: &dyn Event) -> Result<(), DispatchError> {
    for notifier in notifiers {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            event = event.event_name(),
            notifier = notifier.name(),
            "invoking notifier"
        );

        notifier
            .notify(event)
            .map_err(|source| DispatchError::Notifier {
                event: event.event_name(),
                notifier: notifier.name(),
                source,
            })?;
    }
    Ok(())
}

/// Registration identity of a dispatcher.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DispatcherId {
    id: TypeId,
    name: &'static str,
}

impl DispatcherId {
    /// The identity of dispatcher type `D`.
    pub fn of<D: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<D>(),
            name: std::any::type_name::<D>(),
        }
    }

    /// The type name of the dispatcher.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Debug for DispatcherId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DispatcherId").field(&self.name).finish()
    }
}
