//! Board module - the settled-cell grid
//!
//! The board is a 10x20 grid where each cell is empty or carries the kind of
//! the piece that settled there. Uses a flat array for cache locality.
//! Coordinates: (x, y) with x in 0..9 (left to right), y in 0..19 (top to
//! bottom).
//!
//! Transform operations (`merged`, `clear_full_rows`) are pure: they return a
//! new board and leave the receiver untouched, so a caller can keep reading
//! the previous snapshot while the next tick is computed.

use tetris_sim_types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

use crate::pieces::Shape;

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH * BOARD_HEIGHT) as usize;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Test whether a shape at the given position collides.
    ///
    /// A filled shape cell collides when its board coordinate is outside the
    /// horizontal bounds, at or beyond the bottom, or on an occupied cell.
    /// Rows above the visible top (board y < 0) are only bounds-checked
    /// horizontally: pieces may legally start partially above the board.
    pub fn collides(&self, shape: &Shape, x: i8, y: i8) -> bool {
        shape.cells().into_iter().any(|(dx, dy)| {
            let bx = x + dx;
            let by = y + dy;

            if bx < 0 || bx >= BOARD_WIDTH as i8 || by >= BOARD_HEIGHT as i8 {
                return true;
            }

            by >= 0 && self.is_occupied(bx, by)
        })
    }

    /// Return a new board with the shape written at (x, y) as `cell`.
    ///
    /// Filled shape cells that map outside the board are skipped. The
    /// receiver is never mutated.
    pub fn merged(&self, shape: &Shape, x: i8, y: i8, cell: Cell) -> Board {
        let mut next = self.clone();
        for (dx, dy) in shape.cells() {
            next.set(x + dx, y + dy, cell);
        }
        next
    }

    /// Remove every full row, shifting the rows above down and inserting
    /// empty rows at the top. Returns the new board and the number of rows
    /// removed. The receiver is never mutated; board dimensions are
    /// preserved.
    pub fn clear_full_rows(&self) -> (Board, u32) {
        let width = BOARD_WIDTH as usize;
        let mut cleared: u32 = 0;
        let mut next = Board::new();
        let mut write_y = BOARD_HEIGHT as usize;

        // Scan from bottom to top; surviving rows compact downwards, which
        // re-examines shifted content exactly like re-checking the same row
        // index after a removal.
        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                let src = read_y * width;
                let dst = write_y * width;
                next.cells[dst..dst + width].copy_from_slice(&self.cells[src..src + width]);
            }
        }

        // Rows above write_y stay empty (Board::new starts empty).
        (next, cleared)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate the board rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(BOARD_WIDTH as usize)
    }

    /// Create from a 2D vector (rows top to bottom)
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        assert_eq!(rows.len(), BOARD_HEIGHT as usize);
        assert!(rows.iter().all(|row| row.len() == BOARD_WIDTH as usize));

        let mut flat = [None; BOARD_SIZE];
        for (y, row) in rows.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                flat[y * BOARD_WIDTH as usize + x] = *cell;
            }
        }
        Self { cells: flat }
    }

    /// Convert to a 2D vector (rows top to bottom)
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.rows().map(|row| row.to_vec()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
