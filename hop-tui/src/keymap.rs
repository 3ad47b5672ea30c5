use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use hop_core::SelectorEvent;

/// Resolve a terminal key event into a selector event.
pub fn resolve(key: KeyEvent) -> Option<SelectorEvent> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(SelectorEvent::Cancel);
    }

    match key.code {
        KeyCode::Esc => Some(SelectorEvent::Cancel),
        KeyCode::Enter => Some(SelectorEvent::Confirm),
        KeyCode::Up => Some(SelectorEvent::MoveUp),
        KeyCode::Down => Some(SelectorEvent::MoveDown),
        KeyCode::Backspace => Some(SelectorEvent::Backspace),
        KeyCode::Char(c) => Some(SelectorEvent::Insert(c)),
        _ => None,
    }
}
