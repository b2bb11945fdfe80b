use std::{
    io::{stdout, Stdout},
    time::{Duration, Instant},
};

use anyhow::Context as _;
use clap::Parser as _;
use crossterm::{
    cursor,
    event::{self, Event, KeyEvent},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use blockfall::cli::Cli;
use blockfall::game::{Game, GameEvent};
use blockfall::input::{handle_input, Command};
use blockfall::ui::ui;

const FLASH_DURATION: Duration = Duration::from_millis(150);

type Tui = Terminal<CrosstermBackend<Stdout>>;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut game = match cli.seed {
        Some(seed) => Game::with_seed(seed),
        None => Game::new(),
    };

    terminal::enable_raw_mode().context("failed to enable raw mode")?;

    let started = with_restore(
        || {
            execute!(stdout(), EnterAlternateScreen).context("failed to enter alternate screen")?;
            let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
            run(&mut terminal, &mut game, cli.tick_interval())
        },
        restore_terminal,
    );
    started?;

    eprintln!(
        "score {} | lines {} | pieces {}",
        game.score(),
        game.lines_cleared(),
        game.pieces_locked()
    );

    Ok(())
}

/// Runs `body`, then `restore` no matter how `body` ended. The body's error
/// wins over the restore's.
fn with_restore<T>(
    body: impl FnOnce() -> anyhow::Result<T>,
    restore: impl FnOnce() -> anyhow::Result<()>,
) -> anyhow::Result<T> {
    let result = body();
    let restored = restore();
    let value = result?;
    restored?;
    Ok(value)
}

fn restore_terminal() -> anyhow::Result<()> {
    let raw = terminal::disable_raw_mode().context("failed to disable raw mode");
    execute!(stdout(), LeaveAlternateScreen, cursor::Show).context("failed to leave alternate screen")?;
    raw
}

fn run(terminal: &mut Tui, game: &mut Game, tick_interval: Duration) -> anyhow::Result<()> {
    let mut last_tick = Instant::now();
    let mut flash_rows: Vec<usize> = Vec::new();
    let mut flash_until = Instant::now();

    loop {
        if Instant::now() >= flash_until {
            flash_rows.clear();
        }
        terminal
            .draw(|f| ui(f, game, &flash_rows))
            .context("failed to draw frame")?;

        let timeout = tick_interval.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(KeyEvent { code, kind, .. }) = event::read()? {
                if handle_input(game, code, kind) == Some(Command::Quit) {
                    return Ok(());
                }
            }
        }

        if last_tick.elapsed() >= tick_interval {
            game.tick();
            last_tick = Instant::now();
        }

        for game_event in game.drain_events() {
            match game_event {
                GameEvent::PieceLocked { cleared_rows } if !cleared_rows.is_empty() => {
                    flash_rows = cleared_rows;
                    flash_until = Instant::now() + FLASH_DURATION;
                }
                GameEvent::PieceLocked { .. } | GameEvent::GameOver => {}
            }
        }
    }
}
