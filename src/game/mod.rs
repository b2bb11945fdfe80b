pub mod piece;
pub mod board;
pub mod collision;
pub mod generator;
pub mod state;

pub use board::{Board, Cell};
pub use piece::{Piece, PieceType};
pub use state::{Game, GameEvent, GameStatus, LockReport, MoveOutcome, TickOutcome};
