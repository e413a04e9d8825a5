use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A direction in which the player wants the snake to go
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Intent {
    Left,
    Right,
    Up,
    Down,
}

impl Intent {
    /// Map a key to a direction.  Both the arrow keys and WASD are accepted;
    /// letters match regardless of case.
    pub(crate) fn from_key_code(code: KeyCode) -> Option<Intent> {
        match code {
            KeyCode::Left | KeyCode::Char('a' | 'A') => Some(Intent::Left),
            KeyCode::Right | KeyCode::Char('d' | 'D') => Some(Intent::Right),
            KeyCode::Up | KeyCode::Char('w' | 'W') => Some(Intent::Up),
            KeyCode::Down | KeyCode::Char('s' | 'S') => Some(Intent::Down),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Steer(Intent),
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Quit),
            (_, KeyCode::Esc) => Some(Command::Quit),
            (KeyModifiers::NONE, KeyCode::Char('q')) => Some(Command::Quit),
            (m, code) if normal_modifiers.contains(m) => {
                Intent::from_key_code(code).map(Command::Steer)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(KeyCode::Left, Some(Intent::Left))]
    #[case(KeyCode::Char('a'), Some(Intent::Left))]
    #[case(KeyCode::Char('A'), Some(Intent::Left))]
    #[case(KeyCode::Right, Some(Intent::Right))]
    #[case(KeyCode::Char('d'), Some(Intent::Right))]
    #[case(KeyCode::Up, Some(Intent::Up))]
    #[case(KeyCode::Char('w'), Some(Intent::Up))]
    #[case(KeyCode::Down, Some(Intent::Down))]
    #[case(KeyCode::Char('s'), Some(Intent::Down))]
    #[case(KeyCode::Char('S'), Some(Intent::Down))]
    #[case(KeyCode::Char('x'), None)]
    #[case(KeyCode::Char('h'), None)]
    #[case(KeyCode::Enter, None)]
    #[case(KeyCode::F(1), None)]
    fn test_from_key_code(#[case] code: KeyCode, #[case] r: Option<Intent>) {
        assert_eq!(Intent::from_key_code(code), r);
    }

    #[rstest]
    #[case(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), Some(Command::Quit))]
    #[case(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE), Some(Command::Quit))]
    #[case(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE), Some(Command::Quit))]
    #[case(
        KeyEvent::new(KeyCode::Up, KeyModifiers::NONE),
        Some(Command::Steer(Intent::Up))
    )]
    #[case(
        KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT),
        Some(Command::Steer(Intent::Left))
    )]
    #[case(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL), None)]
    #[case(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE), None)]
    fn test_from_key_event(#[case] ev: KeyEvent, #[case] r: Option<Command>) {
        assert_eq!(Command::from_key_event(ev), r);
    }
}
