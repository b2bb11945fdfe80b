use ratatui::style::Color;
use crate::constants::BOARD_WIDTH;

/// Occupancy matrix of a piece orientation, indexed as `shape[row][column]`.
pub type Shape = Vec<Vec<bool>>;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PieceType {
    I, O, T, S, Z, J, L
}

const I_TEMPLATE: &[&[bool]] = &[
    &[true, true, true, true],
];
const O_TEMPLATE: &[&[bool]] = &[
    &[true, true],
    &[true, true],
];
const T_TEMPLATE: &[&[bool]] = &[
    &[false, true, false],
    &[true, true, true],
];
const S_TEMPLATE: &[&[bool]] = &[
    &[false, true, true],
    &[true, true, false],
];
const Z_TEMPLATE: &[&[bool]] = &[
    &[true, true, false],
    &[false, true, true],
];
const J_TEMPLATE: &[&[bool]] = &[
    &[true, false, false],
    &[true, true, true],
];
const L_TEMPLATE: &[&[bool]] = &[
    &[false, false, true],
    &[true, true, true],
];

impl PieceType {
    pub const ALL: [PieceType; 7] = [
        PieceType::I, PieceType::O, PieceType::T,
        PieceType::S, PieceType::Z, PieceType::J, PieceType::L,
    ];

    /// Spawn orientation of this kind. Never mutated; rotation works on a copy.
    pub fn template(self) -> &'static [&'static [bool]] {
        match self {
            PieceType::I => I_TEMPLATE,
            PieceType::O => O_TEMPLATE,
            PieceType::T => T_TEMPLATE,
            PieceType::S => S_TEMPLATE,
            PieceType::Z => Z_TEMPLATE,
            PieceType::J => J_TEMPLATE,
            PieceType::L => L_TEMPLATE,
        }
    }

    pub fn color(self) -> Color {
        match self {
            PieceType::I => Color::Cyan,
            PieceType::O => Color::Yellow,
            PieceType::T => Color::Magenta,
            PieceType::S => Color::Green,
            PieceType::Z => Color::Red,
            PieceType::J => Color::Blue,
            PieceType::L => Color::Rgb(255, 165, 0),
        }
    }
}

/// The falling piece: a working copy of a template plus its anchor on the board.
#[derive(Clone, PartialEq, Debug)]
pub struct Piece {
    pub piece_type: PieceType,
    pub shape: Shape,
    pub x: i32,
    pub y: i32,
    pub color: Color,
}

impl Piece {
    /// Unrotated piece at the spawn anchor (horizontally centered, top row).
    pub fn new(piece_type: PieceType) -> Self {
        Self::at(piece_type, BOARD_WIDTH as i32 / 2 - 1, 0)
    }

    pub fn at(piece_type: PieceType, x: i32, y: i32) -> Self {
        let shape = piece_type
            .template()
            .iter()
            .map(|row| row.to_vec())
            .collect();

        Self {
            piece_type,
            shape,
            x,
            y,
            color: piece_type.color(),
        }
    }

    /// Quarter turn clockwise. Dimensions swap: an `h x w` matrix becomes `w x h`.
    /// The anchor stays where it is.
    pub fn rotate_clockwise(&self) -> Self {
        let mut rotated = self.clone();
        rotated.shape = rotate_shape(&self.shape);
        rotated
    }

    pub fn shifted(&self, dx: i32, dy: i32) -> Self {
        let mut moved = self.clone();
        moved.x += dx;
        moved.y += dy;
        moved
    }

    /// Absolute board coordinates of every occupied cell.
    pub fn get_blocks(&self) -> Vec<(i32, i32)> {
        let mut blocks = Vec::new();
        for (i, row) in self.shape.iter().enumerate() {
            for (j, &cell) in row.iter().enumerate() {
                if cell {
                    blocks.push((self.x + j as i32, self.y + i as i32));
                }
            }
        }
        blocks
    }
}

fn rotate_shape(shape: &Shape) -> Shape {
    let old_height = shape.len();
    let old_width = shape.first().map_or(0, Vec::len);
    let mut new_shape = vec![vec![false; old_height]; old_width];

    for (y, new_row) in new_shape.iter_mut().enumerate() {
        for (x, cell) in new_row.iter_mut().enumerate() {
            *cell = shape[old_height - 1 - x][y];
        }
    }

    new_shape
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_template_has_four_cells() {
        for kind in PieceType::ALL {
            let count = kind
                .template()
                .iter()
                .flat_map(|row| row.iter())
                .filter(|&&cell| cell)
                .count();
            assert_eq!(count, 4, "{kind:?}");
        }
    }

    #[test]
    fn spawn_anchor_is_centered() {
        let piece = Piece::new(PieceType::O);
        assert_eq!((piece.x, piece.y), (4, 0));
        assert_eq!(piece.color, Color::Yellow);
    }

    #[test]
    fn rotating_t_points_it_right() {
        let rotated = Piece::new(PieceType::T).rotate_clockwise();
        assert_eq!(
            rotated.shape,
            vec![
                vec![true, false],
                vec![true, true],
                vec![true, false],
            ]
        );
    }

    #[test]
    fn rotating_i_makes_it_vertical() {
        let piece = Piece::new(PieceType::I);
        let rotated = piece.rotate_clockwise();
        assert_eq!(rotated.shape, vec![vec![true]; 4]);
        assert_eq!((rotated.x, rotated.y), (piece.x, piece.y));
    }

    #[test]
    fn rotation_leaves_the_template_untouched() {
        let piece = Piece::new(PieceType::L);
        let _ = piece.rotate_clockwise();
        assert_eq!(Piece::new(PieceType::L).shape, piece.shape);
    }
}
