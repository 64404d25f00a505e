//! Notifiers and their shared handles.

use crate::{error::BoxError, event::Event};
use std::{
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

/// A callable invoked with every event routed to it.
///
/// Returning an error aborts the fan-out the event is part of: the error is
/// handed back to whoever raised the event.
///
/// Closures taking `&dyn Event` are notifiers:
///
/// ```rust,ignore
/// let audit = NotifierRef::from_fn(|event| {
///     println!("{event:?}");
///     Ok(())
/// });
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `Notifier`",
    label = "missing `Notifier` implementation",
    note = "Notifiers implement `notify(&self, &dyn Event)` or are `Fn(&dyn Event) -> Result<(), BoxError>` closures."
)]
pub trait Notifier: Send + Sync + 'static {
    /// Handle one event.
    fn notify(&self, event: &dyn Event) -> Result<(), BoxError>;
}

impl<F> Notifier for F
where
    F: Fn(&dyn Event) -> Result<(), BoxError> + Send + Sync + 'static,
{
    fn notify(&self, event: &dyn Event) -> Result<(), BoxError> {
        self(event)
    }
}

/// A shared handle to a notifier.
///
/// Clones of a `NotifierRef` are the *same* notifier: equality and hashing use
/// the address of the shared allocation. Two handles created separately from
/// equal values are different notifiers.
#[derive(Clone)]
pub struct NotifierRef {
    inner: Arc<dyn Notifier>,
    name: &'static str,
}

impl NotifierRef {
    /// Wrap a notifier into a new handle with its own identity.
    pub fn new<N: Notifier>(notifier: N) -> Self {
        Self::from_arc(Arc::new(notifier))
    }

    /// Wrap a closure into a new handle.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&dyn Event) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        Self::new(f)
    }

    /// Wrap an already shared notifier; all handles made from clones of the
    /// same `Arc` compare equal.
    pub fn from_arc<N: Notifier>(notifier: Arc<N>) -> Self {
        Self {
            inner: notifier,
            name: std::any::type_name::<N>(),
        }
    }

    /// Invoke the notifier.
    pub fn notify(&self, event: &dyn Event) -> Result<(), BoxError> {
        self.inner.notify(event)
    }

    /// Type name of the wrapped notifier.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns `true` if both handles point at the same notifier.
    pub fn same(&self, other: &NotifierRef) -> bool {
        self.addr() == other.addr()
    }

    fn addr(&self) -> *const () {
        Arc::as_ptr(&self.inner) as *const ()
    }
}

impl PartialEq for NotifierRef {
    fn eq(&self, other: &Self) -> bool {
        self.same(other)
    }
}

impl Eq for NotifierRef {}

impl Hash for NotifierRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.addr().hash(state);
    }
}

impl fmt::Debug for NotifierRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotifierRef")
            .field("name", &self.name)
            .field("addr", &self.addr())
            .finish()
    }
}

impl<N: Notifier> From<Arc<N>> for NotifierRef {
    fn from(notifier: Arc<N>) -> Self {
        Self::from_arc(notifier)
    }
}

/// Conversion into the notifiers a rule subscribes.
///
/// A single notifier is normalised to a one-element list.
pub trait IntoNotifiers {
    /// Collect the notifiers.
    fn into_notifiers(self) -> Vec<NotifierRef>;
}

impl IntoNotifiers for NotifierRef {
    fn into_notifiers(self) -> Vec<NotifierRef> {
        vec![self]
    }
}

impl IntoNotifiers for &NotifierRef {
    fn into_notifiers(self) -> Vec<NotifierRef> {
        vec![self.clone()]
    }
}

impl<const N: usize> IntoNotifiers for [NotifierRef; N] {
    fn into_notifiers(self) -> Vec<NotifierRef> {
        self.into()
    }
}

impl IntoNotifiers for &[NotifierRef] {
    fn into_notifiers(self) -> Vec<NotifierRef> {
        self.to_vec()
    }
}

impl IntoNotifiers for Vec<NotifierRef> {
    fn into_notifiers(self) -> Vec<NotifierRef> {
        self
    }
}
