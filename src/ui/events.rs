use crossterm::event::{self, Event, KeyEvent, MouseEvent};
use std::io;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
}

/// Reads terminal events on a background thread.
///
/// A failed poll or read is forwarded once and ends the thread.
pub struct EventHandler {
    rx: Receiver<io::Result<AppEvent>>,
}

impl EventHandler {
    pub fn new(poll_interval: Duration) -> io::Result<Self> {
        let (tx, rx) = mpsc::channel();

        thread::Builder::new()
            .name("terminal-events".to_string())
            .spawn(move || loop {
                let ready = match event::poll(poll_interval) {
                    Ok(ready) => ready,
                    Err(err) => {
                        let _ = tx.send(Err(err));
                        break;
                    }
                };
                if !ready {
                    continue;
                }

                let app_event = match event::read() {
                    Ok(Event::Key(key)) => AppEvent::Key(key),
                    Ok(Event::Mouse(mouse)) => AppEvent::Mouse(mouse),
                    Ok(Event::Resize(cols, rows)) => AppEvent::Resize(cols, rows),
                    Ok(_) => continue,
                    Err(err) => {
                        let _ = tx.send(Err(err));
                        break;
                    }
                };

                // Receiver gone: the UI loop has exited
                if tx.send(Ok(app_event)).is_err() {
                    break;
                }
            })?;

        Ok(Self { rx })
    }

    /// Next event, `Ok(None)` on timeout.
    ///
    /// Fails with the reader's error, or if the reader thread is gone.
    pub fn next(&self, timeout: Duration) -> io::Result<Option<AppEvent>> {
        match self.rx.recv_timeout(timeout) {
            Ok(event) => event.map(Some),
            Err(mpsc::RecvTimeoutError::Timeout) => Ok(None),
            Err(mpsc::RecvTimeoutError::Disconnected) => Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "terminal event reader stopped",
            )),
        }
    }
}
