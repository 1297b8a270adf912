//! Headless replay of textual actions through the counter store.
//!
//! One action per line:
//!
//! ```text
//! # comments and blank lines are skipped
//! INCREMENT_NUMBER 1
//! CHANGE_INCREMENT_BY 5
//! INCREMENT_NUMBER        # no payload: uses the current increment_by
//! CHANGE_INCREMENT_BY     # no payload: no-op
//! ```
//!
//! Unknown action types and malformed payloads are ignored.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::ui::counter::{CounterIntent, CounterReducer, CounterState};
use crate::ui::mvi::Store;

pub const INCREMENT_NUMBER: &str = "INCREMENT_NUMBER";
pub const CHANGE_INCREMENT_BY: &str = "CHANGE_INCREMENT_BY";

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("Failed to open replay script '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read replay script at line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayOutcome {
    pub state: CounterState,
    /// Lines turned into a dispatch.
    pub applied: usize,
    /// Lines with an unknown action type or a malformed payload.
    pub ignored: usize,
}

/// Replay the script at `path`, or stdin when `path` is `-`.
pub fn replay_path(
    path: &Path,
    store: &mut Store<CounterReducer>,
) -> Result<ReplayOutcome, ReplayError> {
    if path.as_os_str() == "-" {
        return replay(io::stdin().lock(), store);
    }

    let file = File::open(path).map_err(|source| ReplayError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    replay(BufReader::new(file), store)
}

pub fn replay<R: BufRead>(
    reader: R,
    store: &mut Store<CounterReducer>,
) -> Result<ReplayOutcome, ReplayError> {
    let mut applied = 0;
    let mut ignored = 0;

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| ReplayError::Read {
            line: index + 1,
            source,
        })?;
        let action = strip_comment(&line).trim();
        if action.is_empty() {
            continue;
        }

        match parse_action(action, store.state()) {
            Some(intent) => {
                store.dispatch(intent);
                applied += 1;
            }
            None => {
                tracing::debug!(line = index + 1, action, "ignoring unrecognized action");
                ignored += 1;
            }
        }
    }

    Ok(ReplayOutcome {
        state: *store.state(),
        applied,
        ignored,
    })
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(at) => &line[..at],
        None => line,
    }
}

/// Map one action line to an intent, reading defaults from `state`.
fn parse_action(action: &str, state: &CounterState) -> Option<CounterIntent> {
    let mut parts = action.split_whitespace();
    let kind = parts.next()?;
    let payload = match parts.next() {
        Some(raw) => Some(raw.parse::<i64>().ok()?),
        None => None,
    };
    if parts.next().is_some() {
        return None;
    }

    match kind {
        INCREMENT_NUMBER => Some(CounterIntent::IncrementNumber {
            increment_by: payload.unwrap_or(state.increment_by),
        }),
        CHANGE_INCREMENT_BY => Some(CounterIntent::ChangeIncrementBy { value: payload }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increment_without_payload_uses_current_step() {
        let state = CounterState::new(0, 4);
        assert_eq!(
            parse_action("INCREMENT_NUMBER", &state),
            Some(CounterIntent::IncrementNumber { increment_by: 4 })
        );
    }

    #[test]
    fn change_without_payload_is_absent_value() {
        assert_eq!(
            parse_action("CHANGE_INCREMENT_BY", &CounterState::default()),
            Some(CounterIntent::ChangeIncrementBy { value: None })
        );
    }

    #[test]
    fn malformed_lines_are_rejected() {
        let state = CounterState::default();
        assert_eq!(parse_action("INCREMENT_NUMBER abc", &state), None);
        assert_eq!(parse_action("INCREMENT_NUMBER 1 2", &state), None);
        assert_eq!(parse_action("DECREMENT_NUMBER 1", &state), None);
        assert_eq!(parse_action("increment_number 1", &state), None);
    }

    #[test]
    fn comments_are_stripped() {
        assert_eq!(strip_comment("INCREMENT_NUMBER 2 # twice"), "INCREMENT_NUMBER 2 ");
        assert_eq!(strip_comment("# only a comment"), "");
    }
}
