//! Testing utilities for Herald.
//!
//! This module provides notifiers that make assertions about routing easy.
//!
//! # Features
//!
//! - [`RecordingNotifier`]: records every event of one type it receives
//! - [`CountingNotifier`]: counts invocations
//! - [`FailingNotifier`]: always fails, counting invocations
//! - [`OrderRecorder`]: records the order in which labelled notifiers run
//!
//! Except for [`OrderRecorder`], every helper hands out the *same* notifier
//! from each `notifier()` call, so subscribing it twice collapses into one
//! rule.

use herald_core::{BoxError, Event, Notifier, NotifierRef};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Recording Notifier
// ============================================================================

/// A notifier that records all events of type `E` it receives.
///
/// Events of other types are counted but not recorded.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingNotifier::<OrderPlaced>::new();
///
/// let mut rules = RuleTable::new();
/// rules.on_event::<OrderPlaced>(recorder.notifier());
/// rules.dispatch(&OrderPlaced { id: 7 })?;
///
/// assert_eq!(recorder.events(), vec![OrderPlaced { id: 7 }]);
/// ```
pub struct RecordingNotifier<E> {
    inner: Arc<Recording<E>>,
}

struct Recording<E> {
    events: Mutex<Vec<E>>,
    calls: AtomicUsize,
}

impl<E: Event + Clone> RecordingNotifier<E> {
    /// Create a new recording notifier.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Recording {
                events: Mutex::new(Vec::new()),
                calls: AtomicUsize::new(0),
            }),
        }
    }

    /// The notifier handle; every call returns the same notifier.
    pub fn notifier(&self) -> NotifierRef {
        NotifierRef::from_arc(self.inner.clone())
    }

    /// Get a clone of the recorded events.
    pub fn events(&self) -> Vec<E> {
        self.inner.events.lock().unwrap().clone()
    }

    /// Get the number of invocations, whatever the event type.
    pub fn calls(&self) -> usize {
        self.inner.calls.load(Ordering::SeqCst)
    }

    /// Clear all recorded events and the call count.
    pub fn clear(&self) {
        self.inner.events.lock().unwrap().clear();
        self.inner.calls.store(0, Ordering::SeqCst);
    }
}

impl<E: Event + Clone> Default for RecordingNotifier<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for RecordingNotifier<E> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<E: Event + Clone> Notifier for Recording<E> {
    fn notify(&self, event: &dyn Event) -> Result<(), BoxError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(event) = event.downcast_ref::<E>() {
            self.events.lock().unwrap().push(event.clone());
        }
        Ok(())
    }
}

// ============================================================================
// Counting Notifier
// ============================================================================

/// A notifier that counts invocations.
#[derive(Clone, Default)]
pub struct CountingNotifier {
    inner: Arc<Counter>,
}

#[derive(Default)]
struct Counter {
    count: AtomicUsize,
    fail_with: Option<String>,
}

impl CountingNotifier {
    /// Create a new counting notifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// The notifier handle; every call returns the same notifier.
    pub fn notifier(&self) -> NotifierRef {
        NotifierRef::from_arc(self.inner.clone())
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.inner.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.inner.count.store(0, Ordering::SeqCst);
    }
}

impl Notifier for Counter {
    fn notify(&self, _event: &dyn Event) -> Result<(), BoxError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        match &self.fail_with {
            Some(message) => Err(message.clone().into()),
            None => Ok(()),
        }
    }
}

// ============================================================================
// Failing Notifier
// ============================================================================

/// A notifier that fails on every invocation with a fixed message.
#[derive(Clone)]
pub struct FailingNotifier {
    inner: Arc<Counter>,
}

impl FailingNotifier {
    /// Create a notifier failing with `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(Counter {
                count: AtomicUsize::new(0),
                fail_with: Some(message.into()),
            }),
        }
    }

    /// The notifier handle; every call returns the same notifier.
    pub fn notifier(&self) -> NotifierRef {
        NotifierRef::from_arc(self.inner.clone())
    }

    /// Get the number of invocations.
    pub fn count(&self) -> usize {
        self.inner.count.load(Ordering::SeqCst)
    }
}

// ============================================================================
// Order Recorder
// ============================================================================

/// Records the labels of notifiers in the order they run.
///
/// Each [`notifier`](OrderRecorder::notifier) call creates a distinct notifier.
#[derive(Clone, Default)]
pub struct OrderRecorder {
    labels: Arc<Mutex<Vec<&'static str>>>,
}

impl OrderRecorder {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// A new notifier that appends `label` when invoked.
    pub fn notifier(&self, label: &'static str) -> NotifierRef {
        let labels = self.labels.clone();
        NotifierRef::from_fn(move |_| {
            labels.lock().unwrap().push(label);
            Ok(())
        })
    }

    /// The labels recorded so far.
    pub fn labels(&self) -> Vec<&'static str> {
        self.labels.lock().unwrap().clone()
    }
}
