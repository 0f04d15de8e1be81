use super::*;

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::mpsc;
use futures::executor::LocalPool;
use futures::task::LocalSpawnExt;

type Events = Rc<RefCell<Vec<Option<&'static str>>>>;

fn harness() -> (LocalPool, mpsc::UnboundedSender<Option<&'static str>>, AuthObserver, Events) {
    let pool = LocalPool::new();
    let (tx, rx) = mpsc::unbounded();
    let events: Events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    let (observer, subscription) = watch(rx, move |user| sink.borrow_mut().push(user));
    pool.spawner().spawn_local(subscription).expect("spawn subscription");
    (pool, tx, observer, events)
}

// --- status ---

#[test]
fn starts_loading_before_any_emission() {
    let (mut pool, _tx, observer, events) = harness();
    pool.run_until_stalled();
    assert_eq!(observer.status(), AuthStatus::Loading);
    assert!(events.borrow().is_empty());
}

#[test]
fn session_emission_reads_signed_in() {
    let (mut pool, tx, observer, events) = harness();
    tx.unbounded_send(Some("user-1")).expect("send");
    pool.run_until_stalled();
    assert_eq!(observer.status(), AuthStatus::SignedIn);
    assert_eq!(*events.borrow(), vec![Some("user-1")]);
}

#[test]
fn empty_emission_reads_signed_out() {
    let (mut pool, tx, observer, events) = harness();
    tx.unbounded_send(None).expect("send");
    pool.run_until_stalled();
    assert_eq!(observer.status(), AuthStatus::SignedOut);
    assert_eq!(*events.borrow(), vec![None]);
}

#[test]
fn status_tracks_the_latest_emission() {
    let (mut pool, tx, observer, _events) = harness();
    tx.unbounded_send(Some("user-1")).expect("send");
    tx.unbounded_send(None).expect("send");
    tx.unbounded_send(Some("user-2")).expect("send");
    pool.run_until_stalled();
    assert_eq!(observer.status(), AuthStatus::SignedIn);
}

#[test]
fn status_is_current_when_the_notification_runs() {
    let mut pool = LocalPool::new();
    let (tx, rx) = mpsc::unbounded::<Option<&'static str>>();
    let slot: Rc<RefCell<Option<AuthObserver>>> = Rc::new(RefCell::new(None));
    let seen: Rc<RefCell<Vec<AuthStatus>>> = Rc::new(RefCell::new(Vec::new()));
    let (slot_in, seen_in) = (Rc::clone(&slot), Rc::clone(&seen));
    let (observer, subscription) = watch(rx, move |_| {
        if let Some(observer) = slot_in.borrow().as_ref() {
            seen_in.borrow_mut().push(observer.status());
        }
    });
    *slot.borrow_mut() = Some(observer);
    pool.spawner().spawn_local(subscription).expect("spawn subscription");

    tx.unbounded_send(Some("user-1")).expect("send");
    tx.unbounded_send(None).expect("send");
    pool.run_until_stalled();

    assert_eq!(*seen.borrow(), vec![AuthStatus::SignedIn, AuthStatus::SignedOut]);
}

// --- notifications ---

#[test]
fn one_notification_per_emission_in_order() {
    let (mut pool, tx, _observer, events) = harness();
    tx.unbounded_send(Some("a")).expect("send");
    tx.unbounded_send(None).expect("send");
    tx.unbounded_send(Some("b")).expect("send");
    pool.run_until_stalled();
    assert_eq!(*events.borrow(), vec![Some("a"), None, Some("b")]);
}

// --- stream termination ---

#[test]
fn natural_termination_reads_signed_out() {
    let (mut pool, tx, observer, events) = harness();
    tx.unbounded_send(Some("user-1")).expect("send");
    drop(tx);
    pool.run_until_stalled();
    assert_eq!(observer.status(), AuthStatus::SignedOut);
    assert_eq!(*events.borrow(), vec![Some("user-1"), None]);
}

// --- disposal ---

#[test]
fn dropping_the_observer_stops_notifications() {
    let (mut pool, tx, observer, events) = harness();
    tx.unbounded_send(Some("user-1")).expect("send");
    pool.run_until_stalled();
    assert_eq!(events.borrow().len(), 1);

    drop(observer);
    tx.unbounded_send(None).expect("send while receiver still queued");
    pool.run_until_stalled();
    assert_eq!(*events.borrow(), vec![Some("user-1")], "no notification after disposal");
}

#[test]
fn disposal_releases_the_stream() {
    let (mut pool, tx, observer, _events) = harness();
    pool.run_until_stalled();
    drop(observer);
    pool.run_until_stalled();
    assert!(tx.unbounded_send(Some("late")).is_err(), "receiver should be gone");
}

#[test]
fn disposal_before_first_emission_stays_quiet() {
    let (mut pool, tx, observer, events) = harness();
    drop(observer);
    tx.unbounded_send(Some("user-1")).expect("send while receiver still queued");
    pool.run_until_stalled();
    assert!(events.borrow().is_empty());
}
