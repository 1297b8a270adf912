//! Binds the incrementer view to the counter store.
//!
//! The view never reads the store while rendering. It renders the
//! [`IncrementerProps`] held by its [`Connection`], which are refreshed once
//! per frame from the latest store notification.

use std::cell::Cell;
use std::rc::Rc;

use crate::ui::counter::{CounterReducer, CounterState};
use crate::ui::mvi::{Store, Subscription};

/// Fields of the counter state the view is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncrementerProps {
    pub number: i64,
    pub increment_by: i64,
}

impl IncrementerProps {
    pub fn select(state: &CounterState) -> Self {
        Self {
            number: state.number,
            increment_by: state.increment_by,
        }
    }
}

/// A live subscription of the view to the store.
pub struct Connection {
    props: IncrementerProps,
    latest: Rc<Cell<Option<IncrementerProps>>>,
    subscription: Subscription,
}

impl Connection {
    pub fn connect(store: &mut Store<CounterReducer>) -> Self {
        let props = IncrementerProps::select(store.state());
        let latest = Rc::new(Cell::new(None));
        let sink = Rc::clone(&latest);
        let subscription = store.subscribe(move |state: &CounterState| {
            sink.set(Some(IncrementerProps::select(state)));
        });

        Self {
            props,
            latest,
            subscription,
        }
    }

    /// Props as of the last [`refresh`](Self::refresh).
    pub fn props(&self) -> IncrementerProps {
        self.props
    }

    /// Pick up the latest notified props.
    ///
    /// Returns true only if a bound field differs from the previous props.
    pub fn refresh(&mut self) -> bool {
        match self.latest.take() {
            Some(next) if next != self.props => {
                self.props = next;
                true
            }
            _ => false,
        }
    }

    pub fn disconnect(self, store: &mut Store<CounterReducer>) -> bool {
        store.unsubscribe(self.subscription)
    }
}
