use crossterm::event::{KeyCode, KeyEventKind};
use rand::Rng;

use crate::game::Game;
use crate::input::command::Command;

/// Applies a game command. `Quit` is left to the caller.
pub fn apply<R: Rng>(game: &mut Game<R>, command: Command) {
    match command {
        Command::Left => {
            game.move_left();
        }
        Command::Right => {
            game.move_right();
        }
        Command::Rotate => {
            game.rotate();
        }
        Command::SoftDrop => {
            game.soft_drop();
        }
        Command::Restart => game.reset(),
        Command::Quit => {}
    }
}

/// Maps a key press onto the game and returns the command it triggered.
/// Releases are ignored; held keys act through terminal auto-repeat.
pub fn handle_input<R: Rng>(game: &mut Game<R>, key_code: KeyCode, kind: KeyEventKind) -> Option<Command> {
    if kind == KeyEventKind::Release {
        return None;
    }
    let command = Command::from_key(key_code)?;
    apply(game, command);
    Some(command)
}
