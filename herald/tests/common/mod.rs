#![allow(dead_code)]

use herald::{Dispatcher, Event, EventType, IntoNotifiers, NotifierRef, Registry, RuleTable};

// ============================================================================
// Test Event Types
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct Event1;

impl Event for Event1 {}

#[derive(Clone, Debug, PartialEq)]
pub struct Event2;

impl Event for Event2 {}

#[derive(Clone, Debug, PartialEq)]
pub struct AccountOpened {
    pub owner: String,
}

impl Event for AccountOpened {}

/// Wraps another event; routed as its own type.
#[derive(Clone, Debug, PartialEq)]
pub struct Audited<E>(pub E);

impl<E: Event> Event for Audited<E> {}

// ============================================================================
// Test Dispatchers
// ============================================================================

pub struct Dispatcher1 {
    pub rules: RuleTable,
}

impl Dispatcher for Dispatcher1 {
    fn notifiers_for(&self, event_type: EventType) -> &[NotifierRef] {
        self.rules.notifiers_for(event_type)
    }
}

pub struct Dispatcher2 {
    pub rules: RuleTable,
}

impl Dispatcher for Dispatcher2 {
    fn notifiers_for(&self, event_type: EventType) -> &[NotifierRef] {
        self.rules.notifiers_for(event_type)
    }
}

/// Registry holding one `Dispatcher1` with every rule applied through `on`.
pub fn registry_with<T, N>(rulesets: Vec<(T, N)>) -> Registry
where
    T: herald::IntoEventTypes,
    N: IntoNotifiers,
{
    let mut rules = RuleTable::new();
    for (event_types, notifiers) in rulesets {
        rules.on(event_types, notifiers);
    }

    let mut registry = Registry::new();
    registry.register(Dispatcher1 { rules });
    registry
}
