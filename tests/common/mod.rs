//! Shared test helpers.

#![allow(dead_code, unused_imports)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use incrementer::ui::app::App;
use incrementer::ui::input::handle_key;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

/// Terminal size used by UI tests.
pub const APP_SIZE: (u16, u16) = (80, 24);

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        handle_key(app, key(KeyCode::Char(ch)));
    }
}

pub fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// Write `contents` to `name` inside a fresh temp dir.
pub fn write_temp(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    (dir, path)
}
