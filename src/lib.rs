//! Falling-block rules engine (workspace facade crate).
//!
//! This package keeps the `tetris_sim::{core, engine, types}` public API in
//! one place while the implementation lives in dedicated crates under
//! `crates/`.

pub use tetris_sim_core as core;
pub use tetris_sim_engine as engine;
pub use tetris_sim_types as types;
