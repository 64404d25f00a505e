//! Event trait and the type key used for routing.

use std::{
    any::{Any, TypeId},
    fmt,
    hash::{Hash, Hasher},
};

/// An immutable value object describing something that happened.
///
/// Events are raised by shared reference only, so a notifier can never mutate
/// the instance other notifiers see. Each concrete type is its own routing key:
/// a dispatcher subscribed to `OrderPlaced` is not notified for a
/// `Priority<OrderPlaced>` wrapper, even if the wrapper dereferences to it.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Debug)]
/// struct OrderPlaced { id: u64 }
///
/// impl Event for OrderPlaced {}
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid Event",
    label = "must implement `Event`",
    note = "Events must be `Debug + Send + Sync + 'static`; add `impl Event for {Self} {}` or `#[derive(Event)]`."
)]
pub trait Event: Any + fmt::Debug + Send + Sync {
    /// The routing key of this event's concrete type.
    fn event_type(&self) -> EventType {
        EventType::of::<Self>()
    }

    /// Human readable name of this event's concrete type.
    fn event_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl dyn Event {
    /// Returns `true` if the event's concrete type is `E`.
    pub fn is<E: Event>(&self) -> bool {
        self.event_type() == EventType::of::<E>()
    }

    /// Returns the event as `&E` if its concrete type is `E`.
    pub fn downcast_ref<E: Event>(&self) -> Option<&E> {
        let any: &dyn Any = self;
        any.downcast_ref::<E>()
    }
}

/// Routing key identifying one concrete event type.
///
/// Equality and hashing only consider the [`TypeId`]; the name is carried for
/// diagnostics.
#[derive(Clone, Copy)]
pub struct EventType {
    id: TypeId,
    name: &'static str,
}

impl EventType {
    /// The key for the event type `E`.
    pub fn of<E: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<E>(),
            name: std::any::type_name::<E>(),
        }
    }

    /// The key of an event instance's concrete type.
    pub fn of_val(event: &dyn Event) -> Self {
        event.event_type()
    }

    /// The type name of the event.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The underlying [`TypeId`].
    pub fn type_id(&self) -> TypeId {
        self.id
    }
}

impl PartialEq for EventType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for EventType {}

impl Hash for EventType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EventType").field(&self.name).finish()
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Conversion into the list of event types a rule applies to.
///
/// Implemented for a single [`EventType`] and for arrays, slices and vectors
/// of them, so a rule can name one or several event types.
pub trait IntoEventTypes {
    /// Collect the event types.
    fn into_event_types(self) -> Vec<EventType>;
}

impl IntoEventTypes for EventType {
    fn into_event_types(self) -> Vec<EventType> {
        vec![self]
    }
}

impl<const N: usize> IntoEventTypes for [EventType; N] {
    fn into_event_types(self) -> Vec<EventType> {
        self.to_vec()
    }
}

impl IntoEventTypes for &[EventType] {
    fn into_event_types(self) -> Vec<EventType> {
        self.to_vec()
    }
}

impl IntoEventTypes for Vec<EventType> {
    fn into_event_types(self) -> Vec<EventType> {
        self
    }
}
