//! State store: single owner of a reducer's state.

use std::marker::PhantomData;

use super::reducer::Reducer;

type Listener<S> = Box<dyn FnMut(&S)>;

/// Handle returned by [`Store::subscribe`].
///
/// Pass it back to [`Store::unsubscribe`] to stop receiving notifications.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "dropping a Subscription leaves the listener registered with no way to remove it"]
pub struct Subscription(u64);

/// Holds the current state of reducer `R` and a list of listeners.
///
/// `dispatch` runs the reducer, replaces the state with the result and
/// then calls every listener synchronously, in registration order.
pub struct Store<R: Reducer> {
    state: R::State,
    listeners: Vec<(u64, Listener<R::State>)>,
    next_id: u64,
    _reducer: PhantomData<R>,
}

impl<R: Reducer> Store<R> {
    pub fn new(initial: R::State) -> Self {
        Self {
            state: initial,
            listeners: Vec::new(),
            next_id: 0,
            _reducer: PhantomData,
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> &R::State {
        &self.state
    }

    pub fn dispatch(&mut self, intent: R::Intent) {
        tracing::trace!(?intent, "dispatch");
        let current = std::mem::take(&mut self.state);
        self.state = R::reduce(current, intent);
        tracing::trace!(state = ?self.state, "reduced");

        for (_, listener) in &mut self.listeners {
            listener(&self.state);
        }
    }

    pub fn subscribe<F>(&mut self, listener: F) -> Subscription
    where
        F: FnMut(&R::State) + 'static,
    {
        let id = self.next_id;
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        Subscription(id)
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(id, _)| *id != subscription.0);
        self.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new(R::State::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::counter::{CounterIntent, CounterReducer, CounterState};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn default_store_starts_from_default_state() {
        let store = Store::<CounterReducer>::default();
        assert_eq!(*store.state(), CounterState::default());
        assert_eq!(store.listener_count(), 0);
    }

    #[test]
    fn dispatch_replaces_state() {
        let mut store = Store::<CounterReducer>::default();
        store.dispatch(CounterIntent::IncrementNumber { increment_by: 4 });
        assert_eq!(store.state().number, 4);
    }

    #[test]
    fn listener_sees_new_state() {
        let mut store = Store::<CounterReducer>::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _sub =
            store.subscribe(move |state: &CounterState| sink.borrow_mut().push(state.number));

        store.dispatch(CounterIntent::IncrementNumber { increment_by: 2 });
        store.dispatch(CounterIntent::IncrementNumber { increment_by: 3 });

        assert_eq!(*seen.borrow(), vec![2, 5]);
    }

    #[test]
    fn unsubscribe_twice_reports_false() {
        let mut store = Store::<CounterReducer>::default();
        let sub = store.subscribe(|_| {});
        let id = sub.0;
        assert!(store.unsubscribe(sub));
        assert!(!store.unsubscribe(Subscription(id)));
    }
}
