pub mod cli;
pub mod constants;
pub mod game;
pub mod input;
pub mod ui;

/// A grid coordinate outside `[0, BOARD_WIDTH) x [0, BOARD_HEIGHT)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("cell ({x}, {y}) is outside the board")]
pub struct OutOfBounds {
    pub x: i32,
    pub y: i32,
}
