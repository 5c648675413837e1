//! Core simulation module - pure, deterministic, and testable
//!
//! This crate is the rules engine of the falling-block game: the playfield
//! grid, the active piece, collision detection, line clears, scoring, and
//! level progression. It has **zero dependencies** on UI, audio, or I/O,
//! making it:
//!
//! - **Deterministic**: the same seed and tick sequence produce identical
//!   games
//! - **Pure**: `GameState::tick` is snapshot-in, snapshot-out; callers
//!   thread state across ticks and read the previous snapshot freely while
//!   computing the next one
//! - **Total**: every operation terminates; invalid geometry is answered
//!   with a boolean, never an error
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid with collision testing, pure merge, and row
//!   clearing
//! - [`pieces`]: the seven shape templates and the free matrix rotation
//! - [`rng`]: seeded uniform piece selection (independent draws, no bag)
//! - [`scoring`]: line-clear points, score-derived level, gravity intervals
//! - [`events`]: the ordered notification stream a tick returns
//! - [`game`]: the `Ready -> Running -> GameOver` state machine and the
//!   per-tick transition
//!
//! # Example
//!
//! ```
//! use tetris_sim_core::GameState;
//! use tetris_sim_types::Intent;
//!
//! let game = GameState::new(12345).start();
//!
//! // One frame: 16ms elapsed, one queued intent.
//! let (game, events) = game.tick(16, &[Intent::MoveRight]);
//!
//! assert!(!game.game_over());
//! assert!(!events.is_empty());
//! ```

pub mod board;
pub mod events;
pub mod game;
pub mod pieces;
pub mod rng;
pub mod scoring;

pub use tetris_sim_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use events::GameEvent;
pub use game::GameState;
pub use pieces::{Shape, Tetromino};
pub use rng::{PiecePicker, SimpleRng};
pub use scoring::{drop_interval_ms, level_for_score, line_clear_points};
