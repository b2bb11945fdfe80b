use std::mem;

use rand::{rngs::StdRng, Rng};

use crate::constants::LINE_CLEAR_POINTS;
use crate::game::board::Board;
use crate::game::collision::piece_collides;
use crate::game::generator::PieceGenerator;
use crate::game::piece::Piece;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// State changes the presentation layer reacts to, in the order they happened.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum GameEvent {
    /// A piece was written into the board. `cleared_rows` lists the removed
    /// rows bottom first, numbered as they were before the clear.
    PieceLocked { cleared_rows: Vec<usize> },
    /// A freshly generated piece had no room at its spawn position.
    GameOver,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveOutcome {
    Moved,
    /// The piece is resting on something and has to be locked.
    Locked,
    /// No active piece; the game is over.
    Idle,
}

#[derive(Clone, PartialEq, Debug)]
pub struct LockReport {
    pub score_delta: u32,
    pub cleared_rows: Vec<usize>,
    /// `None` when the next piece could not spawn.
    pub next_piece: Option<Piece>,
}

impl LockReport {
    pub fn game_over(&self) -> bool {
        self.next_piece.is_none()
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum TickOutcome {
    Moved,
    Locked(LockReport),
    Idle,
}

/// Sole owner of the board, the falling piece and the score. Every command is
/// synchronous and fully applied before it returns.
#[derive(Debug, Clone)]
pub struct Game<R = StdRng> {
    board: Board,
    current_piece: Option<Piece>,
    generator: PieceGenerator<R>,
    status: GameStatus,
    score: u32,
    lines_cleared: u32,
    pieces_locked: u32,
    events: Vec<GameEvent>,
}

impl Default for Game<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl Game<StdRng> {
    pub fn new() -> Self {
        Self::with_generator(Board::new(), PieceGenerator::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_generator(Board::new(), PieceGenerator::from_seed(seed))
    }
}

impl<R: Rng> Game<R> {
    pub fn with_rng(rng: R) -> Self {
        Self::with_generator(Board::new(), PieceGenerator::new(rng))
    }

    /// Starts from a prepared board. The first piece spawns immediately, so a
    /// board with occupied spawn cells starts out as game over.
    pub fn with_board(board: Board, rng: R) -> Self {
        Self::with_generator(board, PieceGenerator::new(rng))
    }

    fn with_generator(board: Board, generator: PieceGenerator<R>) -> Self {
        let mut game = Self {
            board,
            current_piece: None,
            generator,
            status: GameStatus::Playing,
            score: 0,
            lines_cleared: 0,
            pieces_locked: 0,
            events: Vec::new(),
        };
        game.spawn_next();
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_piece(&self) -> Option<&Piece> {
        self.current_piece.as_ref()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    /// Hands over the events recorded since the last call.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        mem::take(&mut self.events)
    }

    /// Makes `piece` the falling piece. If it collides where it stands the game
    /// ends instead and the piece is discarded. A piece reaching above row 0
    /// is refused without touching the game.
    pub fn spawn_piece(&mut self, piece: Piece) -> bool {
        if self.is_game_over() || piece.get_blocks().iter().any(|&(_, y)| y < 0) {
            return false;
        }
        if piece_collides(&self.board, &piece) {
            self.current_piece = None;
            self.status = GameStatus::GameOver;
            self.events.push(GameEvent::GameOver);
            return false;
        }
        self.current_piece = Some(piece);
        true
    }

    fn spawn_next(&mut self) -> bool {
        let piece = self.generator.generate();
        self.spawn_piece(piece)
    }

    /// Replaces the falling piece with `candidate` unless it collides.
    fn try_commit(&mut self, candidate: Piece) -> bool {
        if piece_collides(&self.board, &candidate) {
            return false;
        }
        self.current_piece = Some(candidate);
        true
    }

    fn try_shift(&mut self, dx: i32, dy: i32) -> Option<bool> {
        let candidate = self.current_piece.as_ref()?.shifted(dx, dy);
        Some(self.try_commit(candidate))
    }

    pub fn move_down(&mut self) -> MoveOutcome {
        match self.try_shift(0, 1) {
            Some(true) => MoveOutcome::Moved,
            Some(false) => MoveOutcome::Locked,
            None => MoveOutcome::Idle,
        }
    }

    pub fn move_left(&mut self) -> bool {
        self.try_shift(-1, 0).unwrap_or(false)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_shift(1, 0).unwrap_or(false)
    }

    /// Clockwise quarter turn about the unchanged anchor. No kicks: a rotation
    /// that collides is dropped and the old orientation stays.
    pub fn rotate(&mut self) -> bool {
        let Some(piece) = self.current_piece.as_ref() else {
            return false;
        };
        let candidate = piece.rotate_clockwise();
        self.try_commit(candidate)
    }

    /// Writes the falling piece into the board, clears full rows and spawns the
    /// next piece. The piece must already sit at a legal position, which holds
    /// for anything reached through the movement commands.
    pub fn lock(&mut self) -> Option<LockReport> {
        let piece = self.current_piece.take()?;

        for (x, y) in piece.get_blocks() {
            let written = self.board.set_cell(x, y, piece.color);
            debug_assert!(written.is_ok(), "locked cell ({x}, {y}) lies outside the board");
        }
        self.pieces_locked += 1;

        let cleared_rows = self.board.clear_full_rows();
        let lines = cleared_rows.len() as u32;
        let score_delta = lines * LINE_CLEAR_POINTS;
        self.lines_cleared += lines;
        self.score += score_delta;

        self.events.push(GameEvent::PieceLocked {
            cleared_rows: cleared_rows.clone(),
        });

        self.spawn_next();

        Some(LockReport {
            score_delta,
            cleared_rows,
            next_piece: self.current_piece.clone(),
        })
    }

    /// Gravity step: one row down, locking when the piece can fall no further.
    pub fn tick(&mut self) -> TickOutcome {
        match self.move_down() {
            MoveOutcome::Moved => TickOutcome::Moved,
            MoveOutcome::Locked => match self.lock() {
                Some(report) => TickOutcome::Locked(report),
                None => TickOutcome::Idle,
            },
            MoveOutcome::Idle => TickOutcome::Idle,
        }
    }

    pub fn soft_drop(&mut self) -> TickOutcome {
        self.tick()
    }

    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_piece = None;
        self.status = GameStatus::Playing;
        self.score = 0;
        self.lines_cleared = 0;
        self.pieces_locked = 0;
        self.events.clear();
        self.spawn_next();
    }
}
