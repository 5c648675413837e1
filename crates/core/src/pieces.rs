//! Pieces module - tetromino shape catalog and free rotation
//!
//! Each of the seven kinds has one immutable template: a square boolean
//! matrix (2x2 for O, 3x3 for J/L/S/T/Z, 4x4 for I) describing the filled
//! cells relative to the piece origin. Rotation is a pure matrix transform
//! (transpose plus a reversal) producing a new shape; there is no wall-kick
//! adjustment, so callers must collision-check the rotated shape and discard
//! it on failure.

use arrayvec::ArrayVec;

use tetris_sim_types::{PieceKind, RotationDir, SPAWN_X, SPAWN_Y};

/// Offset of a single filled cell relative to the piece origin
pub type MinoOffset = (i8, i8);

/// Largest template side length (the I piece)
const MAX_SIZE: usize = 4;

/// A piece shape: a size x size boolean matrix of filled cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    size: u8,
    mask: [[bool; MAX_SIZE]; MAX_SIZE],
}

impl Shape {
    /// Get a fresh copy of the canonical template for a piece kind
    pub fn template(kind: PieceKind) -> Self {
        match kind {
            PieceKind::I => Self::from_rows(&[
                &[false, false, false, false],
                &[true, true, true, true],
                &[false, false, false, false],
                &[false, false, false, false],
            ]),
            PieceKind::J => Self::from_rows(&[
                &[true, false, false],
                &[true, true, true],
                &[false, false, false],
            ]),
            PieceKind::L => Self::from_rows(&[
                &[false, false, true],
                &[true, true, true],
                &[false, false, false],
            ]),
            PieceKind::O => Self::from_rows(&[&[true, true], &[true, true]]),
            PieceKind::S => Self::from_rows(&[
                &[false, true, true],
                &[true, true, false],
                &[false, false, false],
            ]),
            PieceKind::T => Self::from_rows(&[
                &[false, true, false],
                &[true, true, true],
                &[false, false, false],
            ]),
            PieceKind::Z => Self::from_rows(&[
                &[true, true, false],
                &[false, true, true],
                &[false, false, false],
            ]),
        }
    }

    /// Build a shape from square row data
    pub fn from_rows(rows: &[&[bool]]) -> Self {
        let size = rows.len();
        assert!(size <= MAX_SIZE);
        assert!(rows.iter().all(|row| row.len() == size));

        let mut mask = [[false; MAX_SIZE]; MAX_SIZE];
        for (y, row) in rows.iter().enumerate() {
            for (x, &filled) in row.iter().enumerate() {
                mask[y][x] = filled;
            }
        }
        Self {
            size: size as u8,
            mask,
        }
    }

    /// Side length of the shape matrix
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Whether the local cell (x, y) is filled
    pub fn filled(&self, x: u8, y: u8) -> bool {
        x < self.size && y < self.size && self.mask[y as usize][x as usize]
    }

    /// Filled cell offsets relative to the piece origin, row-major
    pub fn cells(&self) -> ArrayVec<MinoOffset, { MAX_SIZE * MAX_SIZE }> {
        let mut out = ArrayVec::new();
        let n = self.size as usize;
        for y in 0..n {
            for x in 0..n {
                if self.mask[y][x] {
                    out.push((x as i8, y as i8));
                }
            }
        }
        out
    }

    /// Produce a new shape rotated a quarter turn.
    ///
    /// Clockwise is a transpose followed by reversing each row;
    /// counter-clockwise is a transpose followed by reversing the row order.
    pub fn rotated(&self, dir: RotationDir) -> Shape {
        let n = self.size as usize;
        let mut mask = [[false; MAX_SIZE]; MAX_SIZE];

        for y in 0..n {
            for x in 0..n {
                mask[y][x] = match dir {
                    RotationDir::Clockwise => self.mask[n - 1 - x][y],
                    RotationDir::CounterClockwise => self.mask[x][n - 1 - y],
                };
            }
        }

        Shape {
            size: self.size,
            mask,
        }
    }
}

/// Active falling piece: kind, current (post-rotation) shape, and
/// board-relative position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// Create a new tetromino of the given kind at the spawn position
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: Shape::template(kind),
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }
}
