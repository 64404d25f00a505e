//! Filter notifier for conditional event handling.

use herald_core::{BoxError, Event, Notifier, NotifierRef};

/// A notifier that forwards events to an inner notifier only when a predicate
/// holds.
pub struct FilterNotifier<F> {
    inner: NotifierRef,
    predicate: F,
}

impl<F> FilterNotifier<F>
where
    F: Fn(&dyn Event) -> bool + Send + Sync + 'static,
{
    /// Create a new filter notifier.
    pub fn new(inner: NotifierRef, predicate: F) -> Self {
        Self { inner, predicate }
    }
}

impl<F> Notifier for FilterNotifier<F>
where
    F: Fn(&dyn Event) -> bool + Send + Sync + 'static,
{
    fn notify(&self, event: &dyn Event) -> Result<(), BoxError> {
        if (self.predicate)(event) {
            self.inner.notify(event)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::CountingNotifier;

    #[derive(Debug)]
    struct Reading {
        celsius: i32,
    }

    impl Event for Reading {}

    #[test]
    fn forwards_only_matching_events() {
        let counter = CountingNotifier::new();
        let alarm = FilterNotifier::new(counter.notifier(), |event: &dyn Event| {
            event
                .downcast_ref::<Reading>()
                .is_some_and(|reading| reading.celsius > 40)
        });

        alarm.notify(&Reading { celsius: 20 }).unwrap();
        alarm.notify(&Reading { celsius: 45 }).unwrap();

        assert_eq!(counter.count(), 1);
    }
}
