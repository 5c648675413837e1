//! Shared types module - pure data types and constants
//!
//! This module defines the fundamental types used throughout the simulation.
//! All types are plain data with no external dependencies, so they are usable
//! from any context (core logic, rendering collaborators, headless drivers).
//!
//! # Board Dimensions
//!
//! Standard playfield dimensions:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn position**: (4, 0) - horizontally centered, top row
//!
//! # Timing Constants
//!
//! Gravity timing is level-driven (milliseconds per row):
//!
//! | Level | Interval |
//! |-------|----------|
//! | 0 | 500ms |
//! | 1 | 450ms |
//! | 2 | 400ms |
//! | ... | -50ms per level |
//! | 6+ | 200ms (floor) |
//!
//! A soft drop advances the gravity timer by `NORMAL_DROP_MS - FAST_DROP_MS`
//! so the next gravity step fires sooner; it never moves the piece directly.
//!
//! # Scoring
//!
//! Clearing `n` rows at once awards `ROW_POINTS[n] * (level + 1)` points.
//! The level is derived from the score: one level per `POINTS_PER_LEVEL`
//! points.
//!
//! # Examples
//!
//! ```
//! use tetris_sim_types::{Intent, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceKind::T;
//! assert_eq!(PieceKind::from_str("t"), Some(piece));
//! assert_eq!(piece.color(), "#800080");
//!
//! let intent = Intent::from_str("moveLeft").unwrap();
//! assert_eq!(intent, Intent::MoveLeft);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Spawn position for new pieces: horizontally centered, top row
pub const SPAWN_X: i8 = (BOARD_WIDTH / 2 - 1) as i8;
pub const SPAWN_Y: i8 = 0;

/// Gravity interval at level 0 (milliseconds per row)
pub const NORMAL_DROP_MS: u32 = 500;

/// Fastest gravity interval; the per-level speedup floors here
pub const FAST_DROP_MS: u32 = 200;

/// Gravity speedup per level (milliseconds)
pub const LEVEL_STEP_MS: u32 = 50;

/// How far a soft drop advances the gravity timer
pub const SOFT_DROP_ADVANCE_MS: u32 = NORMAL_DROP_MS - FAST_DROP_MS;

/// Points for clearing 0-4 rows at once, before the level multiplier
pub const ROW_POINTS: [u32; 5] = [0, 100, 300, 500, 800];

/// Score required per level: level = score / POINTS_PER_LEVEL
pub const POINTS_PER_LEVEL: u32 = 1000;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

/// All seven piece kinds, in catalog order
pub const ALL_KINDS: [PieceKind; 7] = [
    PieceKind::I,
    PieceKind::J,
    PieceKind::L,
    PieceKind::O,
    PieceKind::S,
    PieceKind::T,
    PieceKind::Z,
];

impl PieceKind {
    /// Parse piece kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }

    /// Display color for this piece kind (hex, used at render time)
    pub fn color(&self) -> &'static str {
        match self {
            PieceKind::I => "#00FFFF",
            PieceKind::J => "#0000FF",
            PieceKind::L => "#FF8000",
            PieceKind::O => "#FFFF00",
            PieceKind::S => "#00FF00",
            PieceKind::T => "#800080",
            PieceKind::Z => "#FF0000",
        }
    }
}

/// Cell on the board (None = empty, Some = occupied by a piece kind)
///
/// The occupancy marker carries the piece kind so renderers can look up the
/// display color of settled cells.
pub type Cell = Option<PieceKind>;

/// Rotation direction for the free matrix rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationDir {
    Clockwise,
    CounterClockwise,
}

/// Discrete player intents consumed by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    MoveLeft,
    MoveRight,
    Rotate,
    SoftDrop,
}

impl Intent {
    /// Parse intent from string (for external control wiring)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" | "left" => Some(Intent::MoveLeft),
            "moveright" | "right" => Some(Intent::MoveRight),
            "rotate" => Some(Intent::Rotate),
            "softdrop" | "drop" => Some(Intent::SoftDrop),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::MoveLeft => "moveLeft",
            Intent::MoveRight => "moveRight",
            Intent::Rotate => "rotate",
            Intent::SoftDrop => "softDrop",
        }
    }
}

/// Simulation lifecycle phase
///
/// `Ready` until an explicit start, `Running` while ticks advance the game,
/// `GameOver` once a freshly spawned piece collides. `GameOver` is terminal
/// until a restart recreates the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Ready,
    Running,
    GameOver,
}
