use crossterm::event::KeyCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Left,
    Right,
    Rotate,
    SoftDrop,
    Restart,
    Quit,
}

impl Command {
    pub fn from_key(code: KeyCode) -> Option<Self> {
        let command = match code {
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Command::Left,
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Command::Right,
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Command::Rotate,
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Command::SoftDrop,
            KeyCode::Char('r') | KeyCode::Char('R') => Command::Restart,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Command::Quit,
            _ => return None,
        };
        Some(command)
    }
}
