use std::cell::RefCell;
use std::rc::Rc;

use incrementer::ui::counter::{CounterIntent, CounterReducer, CounterState};
use incrementer::ui::mvi::Store;

fn store() -> Store<CounterReducer> {
    Store::new(CounterState::default())
}

#[test]
fn state_has_no_side_effects() {
    let store = store();
    let first = *store.state();
    let second = *store.state();
    assert_eq!(first, second);
    assert_eq!(first, CounterState::new(0, 1));
}

#[test]
fn listeners_run_in_registration_order() {
    let mut store = store();
    let calls = Rc::new(RefCell::new(Vec::new()));

    for name in ["first", "second", "third"] {
        let calls = Rc::clone(&calls);
        let _subscription = store.subscribe(move |_: &CounterState| calls.borrow_mut().push(name));
    }

    store.dispatch(CounterIntent::IncrementNumber { increment_by: 1 });
    assert_eq!(*calls.borrow(), vec!["first", "second", "third"]);
}

#[test]
fn listeners_are_notified_after_state_is_replaced() {
    let mut store = store();
    let seen = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&seen);
    let _subscription =
        store.subscribe(move |state: &CounterState| *sink.borrow_mut() = Some(*state));

    store.dispatch(CounterIntent::ChangeIncrementBy { value: Some(5) });
    assert_eq!(*seen.borrow(), Some(CounterState::new(0, 5)));
}

#[test]
fn noop_dispatch_still_notifies() {
    let mut store = store();
    let count = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&count);
    let _subscription = store.subscribe(move |_: &CounterState| *sink.borrow_mut() += 1);

    store.dispatch(CounterIntent::ChangeIncrementBy { value: None });
    assert_eq!(*count.borrow(), 1);
    assert_eq!(*store.state(), CounterState::default());
}

#[test]
fn unsubscribed_listener_stops_receiving() {
    let mut store = store();
    let count = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&count);
    let subscription = store.subscribe(move |_: &CounterState| *sink.borrow_mut() += 1);

    store.dispatch(CounterIntent::IncrementNumber { increment_by: 1 });
    assert!(store.unsubscribe(subscription));
    store.dispatch(CounterIntent::IncrementNumber { increment_by: 1 });

    assert_eq!(*count.borrow(), 1);
    assert_eq!(store.state().number, 2);
    assert_eq!(store.listener_count(), 0);
}

#[test]
fn unsubscribe_keeps_other_listeners() {
    let mut store = store();
    let calls = Rc::new(RefCell::new(Vec::new()));

    let a = Rc::clone(&calls);
    let first = store.subscribe(move |_: &CounterState| a.borrow_mut().push("a"));
    let b = Rc::clone(&calls);
    let _second = store.subscribe(move |_: &CounterState| b.borrow_mut().push("b"));

    assert!(store.unsubscribe(first));
    store.dispatch(CounterIntent::IncrementNumber { increment_by: 1 });
    assert_eq!(*calls.borrow(), vec!["b"]);
}
