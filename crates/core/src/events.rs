//! Events module - the notification stream emitted by the simulation
//!
//! The tick transition returns an ordered list of events instead of calling
//! into any playback or rendering capability. Collaborators (audio, UI)
//! consume the list after each tick; the core never depends on them.
//! At most one event is emitted per cause per tick; rejected intents emit
//! nothing.

use crate::board::Board;
use crate::pieces::Shape;

/// Externally observable simulation events, in emission order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// The active piece moved (successful left/right shift or gravity step)
    Moved { x: i8, y: i8 },
    /// The active piece rotated; carries the committed shape
    Rotated { shape: Shape },
    /// The active piece merged into the board
    Landed,
    /// One or more full rows were removed
    RowsCleared { count: u32 },
    /// Score (and possibly level) changed after a clear
    ScoreUpdated { score: u32, level: u32 },
    /// The settled grid changed (after merge and row clearing)
    BoardUpdated { board: Board },
    /// A freshly spawned piece collided; the game is over
    GameOver { score: u32 },
}

impl GameEvent {
    /// Short stable name for logging/diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::Moved { .. } => "moved",
            GameEvent::Rotated { .. } => "rotated",
            GameEvent::Landed => "landed",
            GameEvent::RowsCleared { .. } => "rows-cleared",
            GameEvent::ScoreUpdated { .. } => "score-updated",
            GameEvent::BoardUpdated { .. } => "board-updated",
            GameEvent::GameOver { .. } => "game-over",
        }
    }
}
