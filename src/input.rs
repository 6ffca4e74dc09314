use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Keys the game reacts to. Everything else is dropped at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Backspace,
    Enter,
    Up,
    Down,
    Esc,
    /// Ctrl+C: leave the program from any screen.
    Interrupt,
}

impl Key {
    pub fn from_event(event: KeyEvent) -> Option<Key> {
        if event.kind == KeyEventKind::Release {
            return None;
        }

        let key = match event.code {
            KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
                Key::Interrupt
            }
            KeyCode::Char(_) if event.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                return None
            }
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Enter => Key::Enter,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Esc => Key::Esc,
            _ => return None,
        };
        Some(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn maps_basic_keys() {
        assert_eq!(Key::from_event(press(KeyCode::Char('x'))), Some(Key::Char('x')));
        assert_eq!(Key::from_event(press(KeyCode::Backspace)), Some(Key::Backspace));
        assert_eq!(Key::from_event(press(KeyCode::Enter)), Some(Key::Enter));
        assert_eq!(Key::from_event(press(KeyCode::Esc)), Some(Key::Esc));
        assert_eq!(Key::from_event(press(KeyCode::Up)), Some(Key::Up));
        assert_eq!(Key::from_event(press(KeyCode::Down)), Some(Key::Down));
    }

    #[test]
    fn shifted_letters_pass_through() {
        let ev = KeyEvent::new(KeyCode::Char('X'), KeyModifiers::SHIFT);
        assert_eq!(Key::from_event(ev), Some(Key::Char('X')));
    }

    #[test]
    fn ctrl_c_interrupts() {
        let ev = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(Key::from_event(ev), Some(Key::Interrupt));
    }

    #[test]
    fn other_chords_and_keys_are_dropped() {
        let ev = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
        assert_eq!(Key::from_event(ev), None);
        assert_eq!(Key::from_event(press(KeyCode::F(5))), None);
        assert_eq!(Key::from_event(press(KeyCode::Tab)), None);
    }

    #[test]
    fn releases_are_dropped() {
        let ev = KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(Key::from_event(ev), None);
    }
}
