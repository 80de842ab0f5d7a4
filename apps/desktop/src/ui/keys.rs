//! # Key Map
//!
//! Translates a key press into a [`Command`], given where focus is.
//!
//! ```text
//! ┌──────────────────┬──────────────────────────────────────────┐
//! │ Key              │ Command                                  │
//! ├──────────────────┼──────────────────────────────────────────┤
//! │ Ctrl-Q / Ctrl-C  │ quit                                     │
//! │ Tab / Shift-Tab  │ focus next / previous                    │
//! │ F2 F3 F4 F5      │ Add  Update  Delete  Search              │
//! │ F6 / F7          │ reload table / clear fields              │
//! │ Esc              │ dismiss notice                           │
//! ├──────────────────┼──────────────────────────────────────────┤
//! │ field focused    │ type, Backspace, Ctrl-U empties field    │
//! │ table focused    │ Up/Down or k/j select, Enter edits row   │
//! └──────────────────┴──────────────────────────────────────────┘
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::shell::Action;
use crate::state::Focus;

/// What a key press asks the window to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Dismiss,
    FocusNext,
    FocusPrev,
    Type(char),
    Backspace,
    ClearField,
    SelectNext,
    SelectPrev,
    Perform(Action),
}

/// Maps a key press to a command. Unbound keys map to `None`.
pub fn map_key(key: KeyEvent, focus: Focus) -> Option<Command> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    let global = match key.code {
        KeyCode::Char('q') | KeyCode::Char('c') if ctrl => Some(Command::Quit),
        KeyCode::Esc => Some(Command::Dismiss),
        KeyCode::Tab => Some(Command::FocusNext),
        KeyCode::BackTab => Some(Command::FocusPrev),
        KeyCode::F(2) => Some(Command::Perform(Action::Add)),
        KeyCode::F(3) => Some(Command::Perform(Action::Update)),
        KeyCode::F(4) => Some(Command::Perform(Action::Delete)),
        KeyCode::F(5) => Some(Command::Perform(Action::Search)),
        KeyCode::F(6) => Some(Command::Perform(Action::Reload)),
        KeyCode::F(7) => Some(Command::Perform(Action::ClearFields)),
        _ => None,
    };
    if global.is_some() {
        return global;
    }

    match focus {
        Focus::Table => match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(Command::SelectPrev),
            KeyCode::Down | KeyCode::Char('j') => Some(Command::SelectNext),
            KeyCode::Enter => Some(Command::Perform(Action::LoadSelection)),
            _ => None,
        },
        Focus::Field(_) => match key.code {
            KeyCode::Char('u') if ctrl => Some(Command::ClearField),
            KeyCode::Char(c) if !ctrl => Some(Command::Type(c)),
            KeyCode::Backspace => Some(Command::Backspace),
            KeyCode::Enter | KeyCode::Down => Some(Command::FocusNext),
            KeyCode::Up => Some(Command::FocusPrev),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Field;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    const NAME: Focus = Focus::Field(Field::Name);

    #[test]
    fn test_function_keys_work_everywhere() {
        for focus in [NAME, Focus::Table] {
            assert_eq!(
                map_key(press(KeyCode::F(2)), focus),
                Some(Command::Perform(Action::Add))
            );
            assert_eq!(
                map_key(press(KeyCode::F(5)), focus),
                Some(Command::Perform(Action::Search))
            );
            assert_eq!(map_key(ctrl('q'), focus), Some(Command::Quit));
        }
    }

    #[test]
    fn test_letters_type_into_fields() {
        assert_eq!(map_key(press(KeyCode::Char('j')), NAME), Some(Command::Type('j')));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT), NAME),
            Some(Command::Type('G'))
        );
        assert_eq!(map_key(ctrl('u'), NAME), Some(Command::ClearField));
        assert_eq!(map_key(ctrl('x'), NAME), None);
    }

    #[test]
    fn test_letters_navigate_table() {
        assert_eq!(
            map_key(press(KeyCode::Char('j')), Focus::Table),
            Some(Command::SelectNext)
        );
        assert_eq!(map_key(press(KeyCode::Up), Focus::Table), Some(Command::SelectPrev));
        assert_eq!(
            map_key(press(KeyCode::Enter), Focus::Table),
            Some(Command::Perform(Action::LoadSelection))
        );
        assert_eq!(map_key(press(KeyCode::Char('x')), Focus::Table), None);
    }
}
