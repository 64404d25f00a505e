//! Per-dispatcher rule tables.
//!
//! A [`RuleTable`] maps each event type to the set of notifiers subscribed to
//! it. Sets keep declaration order and collapse duplicates, so declaring the
//! same (event type, notifier) pair again is a no-op.

use herald_core::{
    DispatchError, Event, EventType, IntoEventTypes, IntoNotifiers, NotifierRef, notify_each,
};
use std::collections::HashMap;

/// Routing table owned by one dispatcher.
///
/// # Example
///
/// ```rust,ignore
/// let mut rules = RuleTable::new();
/// rules
///     .on([EventType::of::<OrderPlaced>(), EventType::of::<OrderPaid>()], mailer.clone())
///     .on_event::<OrderShipped>([mailer, tracker]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct RuleTable {
    rules: HashMap<EventType, Vec<NotifierRef>>,
}

impl RuleTable {
    /// Create an empty rule table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe every given notifier to every given event type.
    ///
    /// Pairs that are already present are left untouched.
    pub fn on(
        &mut self,
        event_types: impl IntoEventTypes,
        notify: impl IntoNotifiers,
    ) -> &mut Self {
        let notifiers = notify.into_notifiers();
        for event_type in event_types.into_event_types() {
            let subscribed = self.rules.entry(event_type).or_default();
            for notifier in &notifiers {
                if !subscribed.contains(notifier) {
                    subscribed.push(notifier.clone());
                }
            }
        }
        self
    }

    /// Subscribe notifiers to the single event type `E`.
    pub fn on_event<E: Event>(&mut self, notify: impl IntoNotifiers) -> &mut Self {
        self.on(EventType::of::<E>(), notify)
    }

    /// Builder form of [`on`](RuleTable::on).
    pub fn with_rule(mut self, event_types: impl IntoEventTypes, notify: impl IntoNotifiers) -> Self {
        self.on(event_types, notify);
        self
    }

    /// The notifiers subscribed to `event_type`, in declaration order.
    pub fn notifiers_for(&self, event_type: EventType) -> &[NotifierRef] {
        self.rules
            .get(&event_type)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns `true` if `notifier` is subscribed to `event_type`.
    pub fn is_subscribed(&self, event_type: EventType, notifier: &NotifierRef) -> bool {
        self.notifiers_for(event_type).contains(notifier)
    }

    /// Invoke every notifier subscribed to the event's exact type, once each.
    ///
    /// Stops at, and returns, the first notifier error.
    pub fn dispatch(&self, event: &dyn Event) -> Result<(), DispatchError> {
        notify_each(self.notifiers_for(event.event_type()), event)
    }

    /// Event types that have at least one rule.
    pub fn event_types(&self) -> impl Iterator<Item = EventType> + '_ {
        self.rules.keys().copied()
    }

    /// Number of distinct (event type, notifier) pairs.
    pub fn rule_count(&self) -> usize {
        self.rules.values().map(Vec::len).sum()
    }

    /// Number of event types with rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if no rule has been declared.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
