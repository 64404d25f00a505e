//! The process-wide registry.
//!
//! Tests in this file share one registry, so each test uses its own
//! dispatcher and event types.

use herald::{
    Dispatcher, DispatcherId, Event, EventType, NotifierRef, RuleTable,
    testing::{CountingNotifier, RecordingNotifier},
    types,
};

macro_rules! dispatcher {
    ($name:ident) => {
        struct $name {
            rules: RuleTable,
        }

        impl Dispatcher for $name {
            fn notifiers_for(&self, event_type: EventType) -> &[NotifierRef] {
                self.rules.notifiers_for(event_type)
            }
        }
    };
}

macro_rules! event {
    ($name:ident) => {
        #[derive(Clone, Debug, PartialEq)]
        struct $name;

        impl Event for $name {}
    };
}

#[test]
fn raise_reaches_globally_registered_dispatcher() {
    dispatcher!(Greetings);
    event!(Hello);

    let notifier = RecordingNotifier::<Hello>::new();
    assert!(herald::register(Greetings {
        rules: RuleTable::new().with_rule(types![Hello], notifier.notifier()),
    }));

    herald::raise!(Hello, Hello).unwrap();

    assert_eq!(notifier.events(), vec![Hello, Hello]);
    assert!(herald::registry().contains(DispatcherId::of::<Greetings>()));
}

#[test]
fn raising_unsubscribed_event_is_a_no_op() {
    event!(Nobody);

    assert!(herald::raise_one(&Nobody).is_ok());
}

#[test]
fn global_registration_is_idempotent() {
    dispatcher!(RegisteredOnce);
    event!(Ping);

    let counter = CountingNotifier::new();
    herald::register(RegisteredOnce {
        rules: RuleTable::new().with_rule(types![Ping], counter.notifier()),
    });
    let again = herald::register(RegisteredOnce {
        rules: RuleTable::new().with_rule(types![Ping], counter.notifier()),
    });

    herald::raise([&Ping as &dyn Event]).unwrap();

    assert!(!again);
    assert_eq!(counter.count(), 1);
}

#[test]
fn notifier_may_raise_nested_events() {
    dispatcher!(Outer);
    dispatcher!(Inner);
    event!(Started);
    event!(Followup);

    let followups = CountingNotifier::new();
    herald::register(Outer {
        rules: RuleTable::new().with_rule(
            types![Started],
            NotifierRef::from_fn(|_| {
                herald::raise!(Followup)?;
                Ok(())
            }),
        ),
    });
    herald::register(Inner {
        rules: RuleTable::new().with_rule(types![Followup], followups.notifier()),
    });

    herald::raise!(Started, Started).unwrap();

    assert_eq!(followups.count(), 2);
}

#[test]
fn notifier_may_register_while_raising() {
    dispatcher!(Registrar);
    dispatcher!(Late);
    event!(Boot);

    let late = CountingNotifier::new();
    let late_notifier = late.notifier();
    herald::register(Registrar {
        rules: RuleTable::new().with_rule(
            types![Boot],
            NotifierRef::from_fn(move |_| {
                herald::register(Late {
                    rules: RuleTable::new().with_rule(types![Boot], late_notifier.clone()),
                });
                Ok(())
            }),
        ),
    });

    herald::raise!(Boot).unwrap();
    assert_eq!(late.count(), 0);

    herald::raise!(Boot).unwrap();
    assert_eq!(late.count(), 1);
}
