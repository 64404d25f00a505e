//! Dispatcher registries and the raise fan-out.
//!
//! This module provides a plain [`Registry`] for explicit, isolated use and a
//! [`SharedRegistry`] that can be shared between threads and used as a
//! process-wide singleton.

use herald_core::{DispatchError, Dispatcher, DispatcherId, Event};
use std::{
    collections::HashSet,
    fmt,
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

/// An ordered set of dispatchers.
///
/// Dispatchers are traversed in registration order. Registering a dispatcher
/// whose [`DispatcherId`] is already present has no effect.
///
/// # Example
/// ```ignore
/// let mut registry = Registry::new();
/// registry.register(OrderDispatcher::new());
///
/// registry.raise([&OrderPlaced { id: 1 } as &dyn Event])?;
/// ```
#[derive(Default)]
pub struct Registry {
    dispatchers: Vec<Arc<dyn Dispatcher>>,
    ids: HashSet<DispatcherId>,
}

impl Registry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a dispatcher.
    ///
    /// Returns `false` if a dispatcher with the same id was already present.
    pub fn register<D: Dispatcher>(&mut self, dispatcher: D) -> bool {
        self.register_arc(Arc::new(dispatcher))
    }

    /// Register an already shared dispatcher.
    pub fn register_arc(&mut self, dispatcher: Arc<dyn Dispatcher>) -> bool {
        let id = dispatcher.id();
        if !self.ids.insert(id) {
            #[cfg(feature = "tracing")]
            tracing::debug!(dispatcher = id.name(), "dispatcher already registered");
            return false;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(dispatcher = id.name(), "registered dispatcher");

        self.dispatchers.push(dispatcher);
        true
    }

    /// Returns `true` if a dispatcher with this id is registered.
    pub fn contains(&self, id: DispatcherId) -> bool {
        self.ids.contains(&id)
    }

    /// Iterate over registered dispatchers in registration order.
    pub fn dispatchers(&self) -> impl Iterator<Item = &Arc<dyn Dispatcher>> {
        self.dispatchers.iter()
    }

    /// Get the number of registered dispatchers.
    pub fn len(&self) -> usize {
        self.dispatchers.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.dispatchers.is_empty()
    }

    /// Raise events in order, each through every dispatcher.
    ///
    /// The first notifier failure aborts the rest of the batch and is
    /// returned.
    pub fn raise<'a, I>(&self, events: I) -> Result<(), DispatchError>
    where
        I: IntoIterator<Item = &'a dyn Event>,
    {
        fan_out(&self.dispatchers, events)
    }

    /// Raise a single event.
    pub fn raise_one(&self, event: &dyn Event) -> Result<(), DispatchError> {
        self.raise([event])
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.dispatchers.iter().map(|d| d.id()))
            .finish()
    }
}

/// A [`Registry`] behind a read-write lock.
///
/// Raising snapshots the dispatcher list and releases the lock before any
/// notifier runs, so notifiers may register dispatchers or raise further
/// events through the same registry.
#[derive(Default)]
pub struct SharedRegistry {
    inner: RwLock<Registry>,
}

impl SharedRegistry {
    /// Create a new empty shared registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a dispatcher. See [`Registry::register`].
    pub fn register<D: Dispatcher>(&self, dispatcher: D) -> bool {
        self.write().register(dispatcher)
    }

    /// Register an already shared dispatcher.
    pub fn register_arc(&self, dispatcher: Arc<dyn Dispatcher>) -> bool {
        self.write().register_arc(dispatcher)
    }

    /// Returns `true` if a dispatcher with this id is registered.
    pub fn contains(&self, id: DispatcherId) -> bool {
        self.read().contains(id)
    }

    /// The registered dispatchers, in registration order.
    pub fn snapshot(&self) -> Vec<Arc<dyn Dispatcher>> {
        self.read().dispatchers.clone()
    }

    /// Get the number of registered dispatchers.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Raise events in order, each through every dispatcher registered at the
    /// time of the call.
    pub fn raise<'a, I>(&self, events: I) -> Result<(), DispatchError>
    where
        I: IntoIterator<Item = &'a dyn Event>,
    {
        let dispatchers = self.snapshot();
        fan_out(&dispatchers, events)
    }

    /// Raise a single event.
    pub fn raise_one(&self, event: &dyn Event) -> Result<(), DispatchError> {
        self.raise([event])
    }

    // Registration only appends, so data behind a poisoned lock is still whole.
    fn read(&self) -> RwLockReadGuard<'_, Registry> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Registry> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<Registry> for SharedRegistry {
    fn from(registry: Registry) -> Self {
        Self {
            inner: RwLock::new(registry),
        }
    }
}

impl fmt::Debug for SharedRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedRegistry").field(&*self.read()).finish()
    }
}

fn fan_out<'a, I>(dispatchers: &[Arc<dyn Dispatcher>], events: I) -> Result<(), DispatchError>
where
    I: IntoIterator<Item = &'a dyn Event>,
{
    for event in events {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            event = event.event_name(),
            dispatchers = dispatchers.len(),
            "raising event"
        );

        for dispatcher in dispatchers {
            let result = dispatcher.dispatch(event);

            #[cfg(feature = "tracing")]
            {
                if let Err(err) = &result {
                    tracing::warn!(
                        dispatcher = dispatcher.id().name(),
                        error = %err,
                        "notifier failed, aborting raise"
                    );
                }
            }

            result?;
        }
    }
    Ok(())
}
