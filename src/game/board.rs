use ratatui::style::Color;
use crate::constants::{BOARD_WIDTH, BOARD_HEIGHT};
use crate::OutOfBounds;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Cell {
    Empty,
    Filled(Color),
}

impl Cell {
    pub fn is_filled(self) -> bool {
        self != Cell::Empty
    }
}

pub type Row = [Cell; BOARD_WIDTH];

/// Locked cells, `rows[y][x]` with `y = 0` at the top.
#[derive(Clone, PartialEq, Debug)]
pub struct Board {
    rows: [Row; BOARD_HEIGHT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            rows: [[Cell::Empty; BOARD_WIDTH]; BOARD_HEIGHT],
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    fn index(x: i32, y: i32) -> Result<(usize, usize), OutOfBounds> {
        let in_bounds = (0..BOARD_WIDTH as i32).contains(&x) && (0..BOARD_HEIGHT as i32).contains(&y);
        if !in_bounds {
            return Err(OutOfBounds { x, y });
        }
        Ok((x as usize, y as usize))
    }

    pub fn cell_at(&self, x: i32, y: i32) -> Result<Cell, OutOfBounds> {
        let (x, y) = Self::index(x, y)?;
        Ok(self.rows[y][x])
    }

    /// Only the lock step writes cells.
    pub fn set_cell(&mut self, x: i32, y: i32, color: Color) -> Result<(), OutOfBounds> {
        let (x, y) = Self::index(x, y)?;
        self.rows[y][x] = Cell::Filled(color);
        Ok(())
    }

    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        self.cell_at(x, y).is_ok_and(Cell::is_filled)
    }

    /// # Panics
    ///
    /// Panics if `row` is not below `BOARD_HEIGHT`.
    pub fn is_row_full(&self, row: usize) -> bool {
        self.rows[row].iter().all(|cell| cell.is_filled())
    }

    /// Removes `row` and pushes an empty row in at the top. Rows above `row`
    /// move down by one; rows below it keep their index.
    ///
    /// # Panics
    ///
    /// Panics if `row` is not below `BOARD_HEIGHT`.
    pub fn clear_row(&mut self, row: usize) {
        self.rows[..=row].rotate_right(1);
        self.rows[0] = [Cell::Empty; BOARD_WIDTH];
    }

    /// Clears every full row and returns their indices, bottom first, as they
    /// were numbered before any row moved.
    pub fn clear_full_rows(&mut self) -> Vec<usize> {
        let full: Vec<usize> = (0..BOARD_HEIGHT)
            .rev()
            .filter(|&row| self.is_row_full(row))
            .collect();

        // Top-most first so the indices of the remaining full rows stay valid.
        for &row in full.iter().rev() {
            self.clear_row(row);
        }

        full
    }
}
