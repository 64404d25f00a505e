/// Raise one or more events.
///
/// Each argument is an event value (or a place holding one); it is borrowed
/// for the duration of the raise. Without a target the process-wide registry
/// is used; `in registry;` raises through any value with a `raise` method
/// taking `&dyn Event` items, such as [`Registry`](crate::Registry) or
/// [`SharedRegistry`](crate::SharedRegistry).
///
/// # Example
/// ```rust,ignore
/// herald::raise!(OrderPlaced { id: 1 }, OrderPaid { id: 1 })?;
///
/// let mut registry = Registry::new();
/// registry.register(Orders::new());
/// herald::raise!(in registry; OrderPlaced { id: 2 })?;
/// ```
#[macro_export]
macro_rules! raise {
    (in $registry:expr; $($event:expr),+ $(,)?) => {
        $registry.raise([$(&$event as &dyn $crate::Event),+])
    };
    ($($event:expr),+ $(,)?) => {
        $crate::raise([$(&$event as &dyn $crate::Event),+])
    };
}

/// Build an array of [`EventType`](crate::EventType) keys for a rule.
///
/// # Example
/// ```rust,ignore
/// rules.on(herald::types![OrderPlaced, OrderPaid], mailer);
/// ```
#[macro_export]
macro_rules! types {
    ($($event:ty),+ $(,)?) => {
        [$($crate::EventType::of::<$event>()),+]
    };
}
