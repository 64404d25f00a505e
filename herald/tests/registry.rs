//! Composition of several dispatchers in one registry.

use herald::{
    DispatcherId, Event, NotifierRef, Registry, RuleTable, SharedRegistry,
    testing::{CountingNotifier, FailingNotifier, OrderRecorder, RecordingNotifier},
    types,
};
use std::sync::{Arc, Mutex};

mod common;
use common::{AccountOpened, Dispatcher1, Dispatcher2, Event1, Event2};

#[test]
fn independent_dispatchers_see_the_same_event() {
    let first = RecordingNotifier::<Event1>::new();
    let second = RecordingNotifier::<Event1>::new();
    let mut registry = Registry::new();
    registry.register(Dispatcher1 {
        rules: RuleTable::new().with_rule(types![Event1], first.notifier()),
    });
    registry.register(Dispatcher2 {
        rules: RuleTable::new().with_rule(types![Event1], second.notifier()),
    });

    herald::raise!(in registry; Event1).unwrap();

    assert_eq!(first.events(), vec![Event1]);
    assert_eq!(second.events(), vec![Event1]);
}

/// A notifier recording the address of every event it receives.
fn address_recorder(seen: &Arc<Mutex<Vec<(&'static str, usize)>>>, label: &'static str) -> NotifierRef {
    let seen = seen.clone();
    NotifierRef::from_fn(move |event| {
        let address = event as *const dyn Event as *const () as usize;
        seen.lock().unwrap().push((label, address));
        Ok(())
    })
}

#[test]
fn every_dispatcher_receives_the_raised_instance_itself() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let mut registry = Registry::new();
    registry.register(Dispatcher1 {
        rules: RuleTable::new().with_rule(types![AccountOpened], address_recorder(&seen, "d1")),
    });
    registry.register(Dispatcher2 {
        rules: RuleTable::new().with_rule(types![AccountOpened], address_recorder(&seen, "d2")),
    });
    let opened = AccountOpened {
        owner: "ada".to_string(),
    };
    let address = &opened as *const AccountOpened as *const () as usize;

    herald::raise!(in registry; opened, opened).unwrap();

    assert_eq!(
        *seen.lock().unwrap(),
        vec![("d1", address), ("d2", address), ("d1", address), ("d2", address)]
    );
}

#[test]
fn dispatchers_with_their_own_tables_all_run() {
    let a = CountingNotifier::new();
    let b = CountingNotifier::new();
    let mut registry = Registry::new();

    assert!(registry.register(Dispatcher1 {
        rules: RuleTable::new().with_rule(types![Event1], a.notifier()),
    }));
    assert!(registry.register(Dispatcher2 {
        rules: RuleTable::new().with_rule(types![Event1], b.notifier()),
    }));
    herald::raise!(in registry; Event1).unwrap();

    assert_eq!(registry.len(), 2);
    assert_eq!((a.count(), b.count()), (1, 1));
}

#[test]
fn shared_notifier_in_two_dispatchers_runs_once_per_dispatcher() {
    let counter = CountingNotifier::new();
    let mut registry = Registry::new();
    registry.register(Dispatcher1 {
        rules: RuleTable::new().with_rule(types![Event1], counter.notifier()),
    });
    registry.register(Dispatcher2 {
        rules: RuleTable::new().with_rule(types![Event1], counter.notifier()),
    });

    herald::raise!(in registry; Event1).unwrap();

    assert_eq!(counter.count(), 2);
}

#[test]
fn events_are_raised_in_order_through_dispatchers_in_registration_order() {
    let order = OrderRecorder::new();
    let mut registry = Registry::new();
    registry.register(Dispatcher2 {
        rules: RuleTable::new()
            .with_rule(types![Event1], order.notifier("d2:event1"))
            .with_rule(types![Event2], order.notifier("d2:event2")),
    });
    registry.register(Dispatcher1 {
        rules: RuleTable::new().with_rule(types![Event1, Event2], order.notifier("d1")),
    });

    herald::raise!(in registry; Event2, Event1).unwrap();

    assert_eq!(order.labels(), vec!["d2:event2", "d1", "d2:event1", "d1"]);
}

#[test]
fn second_registration_of_a_dispatcher_type_is_ignored() {
    let kept = CountingNotifier::new();
    let ignored = CountingNotifier::new();
    let mut registry = Registry::new();

    assert!(registry.register(Dispatcher1 {
        rules: RuleTable::new().with_rule(types![Event1], kept.notifier()),
    }));
    assert!(!registry.register(Dispatcher1 {
        rules: RuleTable::new().with_rule(types![Event1], ignored.notifier()),
    }));
    herald::raise!(in registry; Event1).unwrap();

    assert_eq!(registry.len(), 1);
    assert!(registry.contains(DispatcherId::of::<Dispatcher1>()));
    assert!(!registry.contains(DispatcherId::of::<Dispatcher2>()));
    assert_eq!(kept.count(), 1);
    assert_eq!(ignored.count(), 0);
}

#[test]
fn notifier_failure_propagates_and_aborts_the_batch() {
    let failing = FailingNotifier::new("mailbox full");
    let later = CountingNotifier::new();
    let mut registry = Registry::new();
    registry.register(Dispatcher1 {
        rules: RuleTable::new().with_rule(types![Event1], [failing.notifier(), later.notifier()]),
    });
    registry.register(Dispatcher2 {
        rules: RuleTable::new().with_rule(types![Event1, Event2], later.notifier()),
    });

    let err = herald::raise!(in registry; Event1, Event2).unwrap_err();

    assert!(err.event().ends_with("Event1"));
    assert_eq!(err.to_string(), format!(
        "notifier `{}` failed while handling `{}`",
        failing.notifier().name(),
        std::any::type_name::<Event1>(),
    ));
    assert_eq!(err.into_source().to_string(), "mailbox full");
    assert_eq!(failing.count(), 1);
    assert_eq!(later.count(), 0);
}

#[test]
fn isolated_registries_do_not_share_dispatchers() {
    let counter = CountingNotifier::new();
    let mut registry = Registry::new();
    registry.register(Dispatcher1 {
        rules: RuleTable::new().with_rule(types![Event1], counter.notifier()),
    });
    let other = Registry::new();

    herald::raise!(in other; Event1).unwrap();
    assert_eq!(counter.count(), 0);

    herald::raise!(in registry; Event1).unwrap();
    assert_eq!(counter.count(), 1);
}

#[test]
fn shared_registry_across_threads() {
    let counter = CountingNotifier::new();
    let shared = Arc::new(SharedRegistry::new());
    shared.register(Dispatcher1 {
        rules: RuleTable::new().with_rule(types![Event1], counter.notifier()),
    });

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let shared = shared.clone();
            std::thread::spawn(move || herald::raise!(in shared; Event1))
        })
        .collect();
    for handle in handles {
        handle.join().unwrap().unwrap();
    }

    assert_eq!(counter.count(), 4);
}

#[test]
fn registry_debug_lists_dispatchers() {
    let mut registry = Registry::new();
    registry.register(Dispatcher1 {
        rules: RuleTable::new(),
    });

    let rendered = format!("{registry:?}");

    assert!(rendered.contains("Dispatcher1"));
}
