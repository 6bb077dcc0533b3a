/// Keyboard mapping for the terminal front end.
///
/// Movement is level-triggered: a `KeyTracker` remembers the frame each key
/// was last pressed or repeated and reports the held direction every frame.
/// Firing, quitting and restarting are edge-triggered commands returned from
/// `KeyTracker::record` on `Press` only.
///
/// Works on two classes of terminal:
/// * **Keyboard-enhancement capable** (kitty protocol): proper `Press` /
///   `Repeat` / `Release` events, keys are dropped on release.
/// * **Classic terminals**: only `Press` events (OS key-repeat shows up as
///   repeated `Press`).  Keys expire after `HOLD_WINDOW` frames of silence.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A key counts as held if its last press/repeat arrived within this many
/// frames.  Must stay longer than the OS key-repeat interval.
pub const HOLD_WINDOW: u64 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Fire,
    Quit,
    Restart,
}

#[derive(Debug, Default)]
pub struct KeyTracker {
    key_frame: HashMap<KeyCode, u64>,
}

fn is_up(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W'))
}

fn is_down(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S'))
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one key event seen during `frame`.
    pub fn record(&mut self, event: &KeyEvent, frame: u64) -> Option<Command> {
        match event.kind {
            KeyEventKind::Press => {
                self.key_frame.insert(event.code.clone(), frame);
                match event.code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
                    KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
                        Some(Command::Quit)
                    }
                    KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Restart),
                    KeyCode::Char(' ') => Some(Command::Fire),
                    _ => None,
                }
            }
            KeyEventKind::Repeat => {
                self.key_frame.insert(event.code.clone(), frame);
                None
            }
            KeyEventKind::Release => {
                self.key_frame.remove(&event.code);
                None
            }
        }
    }

    fn held(&self, frame: u64, wanted: fn(&KeyCode) -> bool) -> bool {
        self.key_frame
            .iter()
            .any(|(code, &last)| wanted(code) && frame.saturating_sub(last) <= HOLD_WINDOW)
    }

    /// `(move_up, move_down)` as of `frame`.
    pub fn intent(&self, frame: u64) -> (bool, bool) {
        (self.held(frame, is_up), self.held(frame, is_down))
    }

    /// Forget every held key, e.g. when a new duel starts.
    pub fn clear(&mut self) {
        self.key_frame.clear();
    }
}
