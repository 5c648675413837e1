//! Engine module - the collaborator-facing command surface
//!
//! [`Session`] wraps the pure core transition behind the command set that
//! rendering/input collaborators drive: `start`/`restart`, `enqueue`, and
//! `tick`. It owns the intent queue and threads immutable state snapshots
//! across ticks; the caller reads the snapshot and consumes the events each
//! tick returns.
//!
//! Pausing needs no command: a caller that stops ticking freezes the game.

use tetris_sim_core::{GameEvent, GameState};
use tetris_sim_types::Intent;

/// A driver session: current state snapshot plus the queued intents for the
/// next tick
#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    queue: Vec<Intent>,
}

impl Session {
    /// Create a session in the `Ready` phase with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            state: GameState::new(seed),
            queue: Vec::new(),
        }
    }

    /// Start the game (resets the game state and spawns the first piece)
    pub fn start(&mut self) {
        self.queue.clear();
        self.state = self.state.start();
    }

    /// Restart after a game over (or mid-game): same as `start`
    pub fn restart(&mut self) {
        self.start();
    }

    /// Queue a discrete intent for the next tick
    pub fn enqueue(&mut self, intent: Intent) {
        self.queue.push(intent);
    }

    /// Advance the simulation by `elapsed_ms`, draining the intent queue.
    /// Returns the events emitted this tick, in order.
    pub fn tick(&mut self, elapsed_ms: u32) -> Vec<GameEvent> {
        let (state, events) = self.state.tick(elapsed_ms, &self.queue);
        self.state = state;
        self.queue.clear();
        events
    }

    /// The current state snapshot
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Number of intents waiting for the next tick
    pub fn pending_intents(&self) -> usize {
        self.queue.len()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(1)
    }
}
