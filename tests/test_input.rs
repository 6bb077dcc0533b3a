use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use spell_duel::input::*;

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Press)
}

fn repeat(code: KeyCode) -> KeyEvent {
    KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Repeat)
}

fn release(code: KeyCode) -> KeyEvent {
    KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Release)
}

#[test]
fn space_press_fires_once() {
    let mut keys = KeyTracker::new();
    assert_eq!(keys.record(&press(KeyCode::Char(' ')), 1), Some(Command::Fire));
    // holding space does not keep firing
    assert_eq!(keys.record(&repeat(KeyCode::Char(' ')), 2), None);
    assert_eq!(keys.record(&release(KeyCode::Char(' ')), 3), None);
}

#[test]
fn quit_keys() {
    let mut keys = KeyTracker::new();
    assert_eq!(keys.record(&press(KeyCode::Char('q')), 1), Some(Command::Quit));
    assert_eq!(keys.record(&press(KeyCode::Char('Q')), 1), Some(Command::Quit));
    assert_eq!(keys.record(&press(KeyCode::Esc), 1), Some(Command::Quit));
    let ctrl_c = KeyEvent::new_with_kind(
        KeyCode::Char('c'),
        KeyModifiers::CONTROL,
        KeyEventKind::Press,
    );
    assert_eq!(keys.record(&ctrl_c, 1), Some(Command::Quit));
    assert_eq!(keys.record(&press(KeyCode::Char('c')), 1), None);
}

#[test]
fn restart_keys() {
    let mut keys = KeyTracker::new();
    assert_eq!(keys.record(&press(KeyCode::Char('r')), 1), Some(Command::Restart));
    assert_eq!(keys.record(&press(KeyCode::Char('R')), 1), Some(Command::Restart));
}

#[test]
fn held_arrow_sets_intent() {
    let mut keys = KeyTracker::new();
    assert_eq!(keys.intent(1), (false, false));
    keys.record(&press(KeyCode::Up), 1);
    assert_eq!(keys.intent(1), (true, false));
    keys.record(&press(KeyCode::Char('s')), 1);
    assert_eq!(keys.intent(1), (true, true));
}

#[test]
fn wasd_aliases() {
    let mut keys = KeyTracker::new();
    keys.record(&press(KeyCode::Char('W')), 1);
    assert_eq!(keys.intent(1), (true, false));
    keys.clear();
    keys.record(&press(KeyCode::Down), 1);
    assert_eq!(keys.intent(1), (false, true));
}

#[test]
fn held_key_expires_without_repeats() {
    let mut keys = KeyTracker::new();
    keys.record(&press(KeyCode::Up), 10);
    assert!(keys.intent(10 + HOLD_WINDOW).0);
    assert!(!keys.intent(11 + HOLD_WINDOW).0);
}

#[test]
fn repeat_refreshes_hold() {
    let mut keys = KeyTracker::new();
    keys.record(&press(KeyCode::Down), 10);
    keys.record(&repeat(KeyCode::Down), 13);
    assert!(keys.intent(13 + HOLD_WINDOW).1);
}

#[test]
fn release_clears_immediately() {
    let mut keys = KeyTracker::new();
    keys.record(&press(KeyCode::Up), 10);
    keys.record(&release(KeyCode::Up), 11);
    assert_eq!(keys.intent(11), (false, false));
}
