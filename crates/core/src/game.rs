//! Game state module - the per-tick transition function
//!
//! Ties together board, pieces, RNG, and scoring into one state machine:
//! `Ready -> Running -> GameOver`. The transition is pure: `tick` takes the
//! previous snapshot by reference and returns a new snapshot plus the
//! ordered events it emitted. The caller threads state across ticks and can
//! keep rendering the old snapshot while computing the next one.
//!
//! Per tick, gravity runs first and fully resolves (landing, clears,
//! scoring, respawn) before queued intents are applied, so an intent that
//! arrives in the same tick as a landing acts on the newly spawned piece.

use tetris_sim_types::{Intent, Phase, RotationDir, SOFT_DROP_ADVANCE_MS};

use crate::board::Board;
use crate::events::GameEvent;
use crate::pieces::Tetromino;
use crate::rng::PiecePicker;
use crate::scoring::{drop_interval_ms, level_for_score, line_clear_points};

/// Complete simulation state: the single aggregate external callers read
/// but never mutate directly
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    active: Option<Tetromino>,
    picker: PiecePicker,
    phase: Phase,
    score: u32,
    level: u32,
    /// Elapsed time since the last committed gravity step
    drop_timer_ms: u32,
}

impl GameState {
    /// Create a fresh state in the `Ready` phase with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            active: None,
            picker: PiecePicker::new(seed),
            phase: Phase::Ready,
            score: 0,
            level: 0,
            drop_timer_ms: 0,
        }
    }

    /// Start (or restart) the game: a fresh `Running` state with an empty
    /// board, zero score, and a newly drawn piece at the spawn position.
    /// The RNG stream continues from its current position so a restart does
    /// not replay the previous game's pieces.
    pub fn start(&self) -> GameState {
        let mut next = GameState::new(self.picker.seed());
        next.phase = Phase::Running;
        let kind = next.picker.draw();
        next.active = Some(Tetromino::new(kind));
        next
    }

    /// Build a `Running` state from explicit parts (scenario setup and
    /// replay drivers). The level is derived from the score.
    pub fn from_parts(board: Board, active: Option<Tetromino>, seed: u32, score: u32) -> Self {
        Self {
            board,
            active,
            picker: PiecePicker::new(seed),
            phase: Phase::Running,
            score,
            level: level_for_score(score),
            drop_timer_ms: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Elapsed time accumulated toward the next gravity step
    pub fn drop_timer_ms(&self) -> u32 {
        self.drop_timer_ms
    }

    /// Current gravity interval, derived from the level
    pub fn drop_interval_ms(&self) -> u32 {
        drop_interval_ms(self.level)
    }

    /// Advance the simulation by one tick.
    ///
    /// Applies gravity for the elapsed time, then the queued intents, and
    /// returns the new state plus the events emitted, in order. Outside the
    /// `Running` phase this is a no-op returning the state unchanged.
    pub fn tick(&self, elapsed_ms: u32, intents: &[Intent]) -> (GameState, Vec<GameEvent>) {
        if self.phase != Phase::Running {
            return (self.clone(), Vec::new());
        }

        let mut next = self.clone();
        let mut events = Vec::new();

        // A running state without an active piece degrades to a fresh draw
        // rather than failing the tick.
        if next.active.is_none() {
            let kind = next.picker.draw();
            next.active = Some(Tetromino::new(kind));
        }

        next.drop_timer_ms = next.drop_timer_ms.saturating_add(elapsed_ms);
        if next.drop_timer_ms > next.drop_interval_ms() {
            next.gravity_step(&mut events);
        }

        // A landing above already finalized and respawned, so intents act on
        // the current piece. After a spawn collision the tick stops.
        if next.phase == Phase::Running {
            for &intent in intents {
                next.apply_intent(intent, &mut events);
            }
        }

        (next, events)
    }

    /// One gravity evaluation: move the piece down a row, or land it
    fn gravity_step(&mut self, events: &mut Vec<GameEvent>) {
        let Some(active) = self.active else {
            return;
        };

        if !self.board.collides(&active.shape, active.x, active.y + 1) {
            let moved = Tetromino {
                y: active.y + 1,
                ..active
            };
            self.active = Some(moved);
            // The timer only resets on a committed step; a landing leaves it
            // running so the next piece gets its first gravity check
            // immediately.
            self.drop_timer_ms = 0;
            events.push(GameEvent::Moved {
                x: moved.x,
                y: moved.y,
            });
        } else {
            self.land(events);
        }
    }

    /// Finalize a landed piece: merge, clear rows, score, respawn
    fn land(&mut self, events: &mut Vec<GameEvent>) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.board = self
            .board
            .merged(&active.shape, active.x, active.y, Some(active.kind));
        events.push(GameEvent::Landed);

        let (board, cleared) = self.board.clear_full_rows();
        self.board = board;
        events.push(GameEvent::BoardUpdated {
            board: self.board.clone(),
        });

        if cleared > 0 {
            // The multiplier uses the level at clear time; the new level
            // only affects subsequent clears.
            self.score += line_clear_points(cleared, self.level);
            self.level = level_for_score(self.score);
            events.push(GameEvent::RowsCleared { count: cleared });
            events.push(GameEvent::ScoreUpdated {
                score: self.score,
                level: self.level,
            });
        }

        let kind = self.picker.draw();
        let piece = Tetromino::new(kind);
        if self.board.collides(&piece.shape, piece.x, piece.y) {
            // Spawn collision: terminal. Score and level stay as computed.
            self.phase = Phase::GameOver;
            events.push(GameEvent::GameOver { score: self.score });
        } else {
            self.active = Some(piece);
        }
    }

    /// Apply a single discrete intent; blocked intents are silent no-ops
    fn apply_intent(&mut self, intent: Intent, events: &mut Vec<GameEvent>) {
        match intent {
            Intent::MoveLeft => self.try_shift(-1, events),
            Intent::MoveRight => self.try_shift(1, events),
            Intent::Rotate => self.try_rotate(events),
            Intent::SoftDrop => {
                // Advance the gravity timer so the next check fires sooner.
                // Repeats re-accelerate but never stack past the fast floor.
                self.drop_timer_ms = self.drop_timer_ms.max(SOFT_DROP_ADVANCE_MS);
            }
        }
    }

    fn try_shift(&mut self, dx: i8, events: &mut Vec<GameEvent>) {
        let Some(active) = self.active else {
            return;
        };

        if !self.board.collides(&active.shape, active.x + dx, active.y) {
            let moved = Tetromino {
                x: active.x + dx,
                ..active
            };
            self.active = Some(moved);
            events.push(GameEvent::Moved {
                x: moved.x,
                y: moved.y,
            });
        }
    }

    fn try_rotate(&mut self, events: &mut Vec<GameEvent>) {
        let Some(active) = self.active else {
            return;
        };

        // Free rotation: commit only if the rotated shape fits, otherwise
        // leave the shape unchanged (no wall-kick fallback).
        let rotated = active.shape.rotated(RotationDir::Clockwise);
        if !self.board.collides(&rotated, active.x, active.y) {
            self.active = Some(Tetromino {
                shape: rotated,
                ..active
            });
            events.push(GameEvent::Rotated { shape: rotated });
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tetris_sim_types::{PieceKind, BOARD_WIDTH, SPAWN_X};

    fn running(seed: u32) -> GameState {
        GameState::new(seed).start()
    }

    #[test]
    fn test_new_state_is_ready() {
        let state = GameState::new(12345);
        assert_eq!(state.phase(), Phase::Ready);
        assert!(state.active().is_none());
        assert_eq!(state.score(), 0);
        assert_eq!(state.level(), 0);
    }

    #[test]
    fn test_ready_tick_is_noop() {
        let state = GameState::new(12345);
        let (next, events) = state.tick(1000, &[Intent::MoveLeft]);
        assert_eq!(next, state);
        assert!(events.is_empty());
    }

    #[test]
    fn test_start_spawns_centered_piece() {
        let state = running(12345);
        assert_eq!(state.phase(), Phase::Running);
        let active = state.active().unwrap();
        assert_eq!(active.x, SPAWN_X);
        assert_eq!(active.y, 0);
    }

    #[test]
    fn test_gravity_waits_for_interval() {
        let state = running(12345);
        let y0 = state.active().unwrap().y;

        let (next, events) = state.tick(100, &[]);
        assert_eq!(next.active().unwrap().y, y0);
        assert!(events.is_empty());
        assert_eq!(next.drop_timer_ms(), 100);
    }

    #[test]
    fn test_gravity_steps_after_interval() {
        let state = running(12345);
        let y0 = state.active().unwrap().y;

        let (next, events) = state.tick(501, &[]);
        assert_eq!(next.active().unwrap().y, y0 + 1);
        assert_eq!(next.drop_timer_ms(), 0);
        assert!(matches!(events.as_slice(), [GameEvent::Moved { .. }]));
    }

    #[test]
    fn test_tick_is_pure() {
        let state = running(12345);
        let before = state.clone();
        let _ = state.tick(501, &[Intent::MoveLeft, Intent::Rotate]);
        assert_eq!(state, before);
    }

    #[test]
    fn test_move_intents_respect_walls() {
        let mut state = running(12345);

        // Push the piece into the left wall; extra intents are silent no-ops.
        for _ in 0..BOARD_WIDTH {
            let (next, _) = state.tick(0, &[Intent::MoveLeft]);
            state = next;
        }
        let stuck_x = state.active().unwrap().x;
        let (next, events) = state.tick(0, &[Intent::MoveLeft]);
        assert_eq!(next.active().unwrap().x, stuck_x);
        assert!(events.is_empty());
    }

    #[test]
    fn test_rotation_blocked_keeps_shape() {
        // A vertical I in the leftmost free column cannot rotate when the
        // cells the horizontal orientation needs are occupied.
        let mut board = Board::new();
        for y in 0..20 {
            for x in 3..10 {
                board.set(x, y, Some(PieceKind::J));
            }
        }

        let mut piece = Tetromino::new(PieceKind::I);
        piece.shape = piece.shape.rotated(RotationDir::Clockwise);
        piece.x = 0; // vertical I occupies local x=2, so board column 2
        piece.y = 5;
        let state = GameState::from_parts(board, Some(piece), 1, 0);

        let shape_before = state.active().unwrap().shape;
        let (next, events) = state.tick(0, &[Intent::Rotate]);
        assert_eq!(next.active().unwrap().shape, shape_before);
        assert!(events.is_empty());
    }

    #[test]
    fn test_soft_drop_accelerates_without_stacking() {
        let state = running(12345);

        let (next, events) = state.tick(0, &[Intent::SoftDrop]);
        assert!(events.is_empty());
        assert_eq!(next.drop_timer_ms(), SOFT_DROP_ADVANCE_MS);

        // A second soft drop in the same window does not stack.
        let (next, _) = next.tick(0, &[Intent::SoftDrop, Intent::SoftDrop]);
        assert_eq!(next.drop_timer_ms(), SOFT_DROP_ADVANCE_MS);
    }

    #[test]
    fn test_missing_active_piece_is_synthesized() {
        let state = GameState::from_parts(Board::new(), None, 7, 0);
        let (next, _) = state.tick(0, &[]);
        assert!(next.active().is_some());
    }

    #[test]
    fn test_landing_merges_and_respawns() {
        // An O piece resting on the floor.
        let mut piece = Tetromino::new(PieceKind::O);
        piece.y = 18; // O fills local rows 0-1, so rows 18-19
        let state = GameState::from_parts(Board::new(), Some(piece), 3, 0);

        let (next, events) = state.tick(501, &[]);

        assert!(next.board().is_occupied(4, 18));
        assert!(next.board().is_occupied(5, 19));
        assert!(next.active().is_some());
        assert_eq!(next.active().unwrap().y, 0);

        let names: Vec<_> = events.iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["landed", "board-updated"]);
    }

    #[test]
    fn test_landing_scores_single_clear() {
        // Bottom row full except the two cells an O piece will fill.
        let mut board = Board::new();
        for x in 0..10 {
            if x != 4 && x != 5 {
                board.set(x, 19, Some(PieceKind::I));
            }
        }
        let mut piece = Tetromino::new(PieceKind::O);
        piece.y = 17; // fills rows 18 and 19 once landed at y=18
        let state = GameState::from_parts(board, Some(piece), 3, 0);

        // First gravity step moves to y=18; second one lands it.
        let (state, _) = state.tick(501, &[]);
        let (next, events) = state.tick(501, &[]);

        assert_eq!(next.score(), 100);
        assert_eq!(next.level(), 0);
        assert!(events.contains(&GameEvent::RowsCleared { count: 1 }));
        assert!(events.contains(&GameEvent::ScoreUpdated {
            score: 100,
            level: 0
        }));
        // Row 19 keeps only the shifted remnant of row 18.
        assert!(next.board().is_occupied(4, 19));
        assert!(next.board().is_occupied(5, 19));
        assert!(!next.board().is_row_full(19));
    }

    #[test]
    fn test_score_multiplier_uses_level_at_clear_time() {
        let mut board = Board::new();
        for x in 0..10 {
            if x != 4 && x != 5 {
                board.set(x, 19, Some(PieceKind::I));
            }
        }
        let mut piece = Tetromino::new(PieceKind::O);
        piece.y = 18;
        // Score 2000 puts the game at level 2: a single clear is worth 300.
        let state = GameState::from_parts(board, Some(piece), 3, 2000);
        assert_eq!(state.level(), 2);

        let (next, _) = state.tick(501, &[]);
        assert_eq!(next.score(), 2300);
        assert_eq!(next.level(), 2);
    }

    /// A running state whose active O piece is grounded at the top and whose
    /// respawn will collide: cells just below the spawn rows are occupied, so
    /// the landed piece fills the spawn area without completing any row.
    fn blocked_spawn_state(score: u32) -> GameState {
        let mut board = Board::new();
        board.set(4, 2, Some(PieceKind::Z));
        board.set(5, 2, Some(PieceKind::Z));

        let piece = Tetromino::new(PieceKind::O); // occupies rows 0-1
        GameState::from_parts(board, Some(piece), 3, score)
    }

    #[test]
    fn test_spawn_collision_ends_game() {
        let state = blocked_spawn_state(500);
        let score_before = state.score();

        let (next, events) = state.tick(501, &[Intent::MoveLeft]);

        assert!(next.game_over());
        assert!(next.active().is_none());
        assert_eq!(next.score(), score_before);
        assert_eq!(
            events.last(),
            Some(&GameEvent::GameOver { score: score_before })
        );
        // The spawn collision stops the tick; the queued move is skipped and
        // no piece ever moved this tick.
        assert!(!events.iter().any(|e| matches!(e, GameEvent::Moved { .. })));
    }

    #[test]
    fn test_game_over_tick_is_noop() {
        let (state, _) = blocked_spawn_state(0).tick(501, &[]);
        assert!(state.game_over());

        let (next, events) = state.tick(501, &[Intent::Rotate]);
        assert_eq!(next, state);
        assert!(events.is_empty());
    }

    #[test]
    fn test_restart_after_game_over() {
        let (state, _) = blocked_spawn_state(0).tick(501, &[]);
        assert!(state.game_over());

        let fresh = state.start();
        assert_eq!(fresh.phase(), Phase::Running);
        assert_eq!(fresh.score(), 0);
        assert!(fresh.board().cells().iter().all(|c| c.is_none()));
        assert!(fresh.active().is_some());
    }

    #[test]
    fn test_intent_after_landing_acts_on_new_piece() {
        // Land a piece and send a move intent in the same tick: the intent
        // must act on the respawned piece, not the landed one.
        let mut piece = Tetromino::new(PieceKind::O);
        piece.y = 18;
        let state = GameState::from_parts(Board::new(), Some(piece), 3, 0);

        let (next, events) = state.tick(501, &[Intent::MoveRight]);

        let active = next.active().unwrap();
        assert_eq!(active.y, 0);
        assert_eq!(active.x, SPAWN_X + 1);
        assert!(events.iter().any(|e| matches!(
            e,
            GameEvent::Moved { x, y: 0 } if *x == SPAWN_X + 1
        )));
    }
}
