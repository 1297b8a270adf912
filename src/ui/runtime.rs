use crate::ui::app::App;
use crate::ui::counter::CounterState;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::time::Duration;

/// Run the incrementer UI until the user quits. Returns the final state.
pub fn run(initial: CounterState) -> io::Result<CounterState> {
    let (mut terminal, guard) = setup_terminal()?;
    let poll_interval = Duration::from_millis(250);
    let mut app = App::new(initial);
    let events = EventHandler::new(poll_interval)?;
    let (cols, rows) = crossterm::terminal::size()?;
    app.on_resize(cols, rows);
    tracing::info!(
        number = initial.number,
        increment_by = initial.increment_by,
        "incrementer started"
    );

    loop {
        if app.sync_view() {
            terminal.draw(|frame| draw(frame, &app))?;
        }
        if app.should_quit() {
            break;
        }

        // Timeout: loop around and sync the view
        match events.next(poll_interval)? {
            Some(AppEvent::Key(key)) => handle_key(&mut app, key),
            Some(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse),
            Some(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            None => {}
        }
    }

    let state = app.shutdown();
    drop(guard);
    tracing::info!(
        number = state.number,
        increment_by = state.increment_by,
        "incrementer stopped"
    );
    Ok(state)
}
