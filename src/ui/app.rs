use crate::ui::binding::{Connection, IncrementerProps};
use crate::ui::counter::{CounterIntent, CounterReducer, CounterState};
use crate::ui::increment_field::IncrementField;
use crate::ui::layout::{body_rect, incrementer_regions};
use crate::ui::mvi::Store;
use ratatui::layout::{Position, Rect};

/// Which control receives keyboard input.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Button,
    IncrementBy,
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    size: Option<(u16, u16)>,
    /// Single owner of the counter state.
    store: Store<CounterReducer>,
    /// Props the view renders, refreshed once per frame.
    connection: Connection,
    increment_field: IncrementField,
    needs_redraw: bool,
}

impl App {
    pub fn new(initial: CounterState) -> Self {
        let mut store = Store::new(initial);
        let connection = Connection::connect(&mut store);
        Self {
            should_quit: false,
            focus: Focus::Button,
            size: None,
            store,
            connection,
            increment_field: IncrementField::new(initial.increment_by),
            needs_redraw: true,
        }
    }

    /// Live store state. Use [`props`](Self::props) for what is on screen.
    pub fn state(&self) -> &CounterState {
        self.store.state()
    }

    pub fn props(&self) -> IncrementerProps {
        self.connection.props()
    }

    pub fn increment_text(&self) -> &str {
        self.increment_field.text()
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_focus(&mut self, focus: Focus) {
        if self.focus == focus {
            return;
        }
        match focus {
            Focus::IncrementBy => self.increment_field.begin(),
            Focus::Button => {
                let live = self.store.state().increment_by;
                self.increment_field.finish(live);
            }
        }
        self.focus = focus;
        self.needs_redraw = true;
    }

    pub fn cycle_focus(&mut self) {
        let next = match self.focus {
            Focus::Button => Focus::IncrementBy,
            Focus::IncrementBy => Focus::Button,
        };
        self.set_focus(next);
    }

    /// The "Increment!" button.
    ///
    /// Reads the step from the store at press time, so an edit that has
    /// not been rendered yet still applies.
    pub fn press_increment(&mut self) {
        let increment_by = self.store.state().increment_by;
        self.dispatch(CounterIntent::IncrementNumber { increment_by });
    }

    pub fn edit_insert(&mut self, ch: char) {
        let parsed = self.increment_field.insert(ch);
        self.apply_edit(parsed);
    }

    pub fn edit_backspace(&mut self) {
        let parsed = self.increment_field.backspace();
        self.apply_edit(parsed);
    }

    /// Spinner step on the input, relative to the live store value.
    pub fn step_increment(&mut self, delta: i64) {
        let value = self.store.state().increment_by.saturating_add(delta);
        self.increment_field.finish(value);
        self.dispatch(CounterIntent::ChangeIncrementBy { value: Some(value) });
        self.needs_redraw = true;
    }

    /// Leave edit mode, showing the store's value again.
    pub fn commit_increment(&mut self) {
        let live = self.store.state().increment_by;
        self.increment_field.finish(live);
        self.needs_redraw = true;
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
        self.needs_redraw = true;
    }

    /// Control under a terminal cell, if any.
    pub fn control_at(&self, column: u16, row: u16) -> Option<Focus> {
        let (cols, rows) = self.size?;
        let regions = incrementer_regions(body_rect(Rect::new(0, 0, cols, rows)));
        let position = Position::new(column, row);
        if regions.button.contains(position) {
            Some(Focus::Button)
        } else if regions.input.contains(position) {
            Some(Focus::IncrementBy)
        } else {
            None
        }
    }

    /// Bring the view up to date with the store.
    ///
    /// Returns true when a frame should be drawn.
    pub fn sync_view(&mut self) -> bool {
        let changed = self.connection.refresh();
        if changed {
            self.increment_field.sync(self.connection.props().increment_by);
        }
        let redraw = changed || self.needs_redraw;
        self.needs_redraw = false;
        redraw
    }

    /// Disconnect the view and hand back the final state.
    pub fn shutdown(mut self) -> CounterState {
        let state = *self.store.state();
        self.connection.disconnect(&mut self.store);
        state
    }

    fn apply_edit(&mut self, parsed: Option<i64>) {
        self.needs_redraw = true;
        match parsed {
            Some(value) => self.dispatch(CounterIntent::ChangeIncrementBy { value: Some(value) }),
            None => tracing::debug!(
                text = self.increment_field.text(),
                "increment input is not a number, dropped"
            ),
        }
    }

    fn dispatch(&mut self, intent: CounterIntent) {
        self.store.dispatch(intent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn starts_focused_on_button_with_initial_props() {
        let app = App::new(CounterState::new(3, 1));
        assert_eq!(app.focus(), Focus::Button);
        assert_eq!(app.props().number, 3);
        assert_eq!(app.increment_text(), "1");
    }

    #[test]
    fn first_sync_requests_redraw_then_settles() {
        let mut app = App::new(CounterState::default());
        assert!(app.sync_view());
        assert!(!app.sync_view());
    }

    #[test]
    fn leaving_input_restores_store_value() {
        let mut app = App::new(CounterState::default());
        app.set_focus(Focus::IncrementBy);
        assert_eq!(app.increment_text(), "");
        app.edit_insert('z');
        assert_eq!(app.increment_text(), "z");

        app.set_focus(Focus::Button);
        assert_eq!(app.increment_text(), "1");
    }

    #[test]
    fn non_numeric_input_never_dispatches() {
        let mut app = App::new(CounterState::default());
        let dispatches = Rc::new(Cell::new(0));
        let counter = Rc::clone(&dispatches);
        let _subscription = app
            .store
            .subscribe(move |_: &CounterState| counter.set(counter.get() + 1));

        app.set_focus(Focus::IncrementBy);
        for ch in "abc".chars() {
            app.edit_insert(ch);
        }
        app.edit_backspace();

        assert_eq!(dispatches.get(), 0);
        assert_eq!(*app.state(), CounterState::default());
    }

    #[test]
    fn control_at_needs_a_known_size() {
        let app = App::new(CounterState::default());
        assert_eq!(app.control_at(0, 0), None);
    }
}
