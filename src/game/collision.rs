use crate::constants::{BOARD_WIDTH, BOARD_HEIGHT};
use crate::game::board::Board;
use crate::game::piece::{Piece, Shape};

/// Whether `shape` anchored at `(x, y)` leaves the board sideways, reaches past
/// the bottom, or overlaps a locked cell. There is no top bound: cells above
/// row 0 only collide with the walls.
pub fn collides(board: &Board, shape: &Shape, x: i32, y: i32) -> bool {
    for (dy, row) in shape.iter().enumerate() {
        for (dx, &cell) in row.iter().enumerate() {
            if !cell {
                continue;
            }
            let bx = x + dx as i32;
            let by = y + dy as i32;
            if bx < 0 || bx >= BOARD_WIDTH as i32 || by >= BOARD_HEIGHT as i32 {
                return true;
            }
            if by >= 0 && board.is_occupied(bx, by) {
                return true;
            }
        }
    }
    false
}

pub fn piece_collides(board: &Board, piece: &Piece) -> bool {
    collides(board, &piece.shape, piece.x, piece.y)
}
