use crate::ui::app::{App, Focus};
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
        app.cycle_focus();
        return;
    }

    match app.focus() {
        Focus::Button => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('+') => app.press_increment(),
            KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
            _ => {}
        },
        Focus::IncrementBy => match key.code {
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.edit_insert(ch)
            }
            KeyCode::Backspace => app.edit_backspace(),
            KeyCode::Up => app.step_increment(1),
            KeyCode::Down => app.step_increment(-1),
            KeyCode::Enter => app.commit_increment(),
            KeyCode::Esc => app.set_focus(Focus::Button),
            _ => {}
        },
    }
}

/// Left click focuses the control under the pointer; on the button it
/// also presses it.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }

    match app.control_at(mouse.column, mouse.row) {
        Some(Focus::Button) => {
            app.set_focus(Focus::Button);
            app.press_increment();
        }
        Some(Focus::IncrementBy) => app.set_focus(Focus::IncrementBy),
        None => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
