//! Keyboard shortcut handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Worksheet keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    NextCalculator,
    PrevCalculator,
    NextField,
    PrevField,
    /// A character typed into the focused field
    Input(char),
    Backspace,
    ClearField,
    ClearAll,
    LoadExamples,
    None,
}

/// Characters that can appear in a numeric field.
fn is_numeric_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '-' | ',' | '$')
}

/// Map a key event to an action.
pub fn map_key(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            KeyAction::ClearField
        }
        KeyCode::Esc | KeyCode::Char('q') => KeyAction::Quit,
        KeyCode::Char(c) if is_numeric_char(c) => KeyAction::Input(c),
        KeyCode::Char('x') => KeyAction::ClearAll,
        KeyCode::Char('e') => KeyAction::LoadExamples,
        KeyCode::Right => KeyAction::NextCalculator,
        KeyCode::Left => KeyAction::PrevCalculator,
        KeyCode::Down | KeyCode::Tab | KeyCode::Enter => KeyAction::NextField,
        KeyCode::Up | KeyCode::BackTab => KeyAction::PrevField,
        KeyCode::Backspace => KeyAction::Backspace,
        KeyCode::Delete => KeyAction::ClearField,
        _ => KeyAction::None,
    }
}
