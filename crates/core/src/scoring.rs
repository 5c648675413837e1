//! Scoring module - line-clear points, level progression, gravity speed
//!
//! Clearing `n` rows at once awards `ROW_POINTS[n] * (level + 1)`. Only 1-4
//! simultaneous clears are meaningful (a piece spans at most four rows). The
//! level is derived from the score - one level per 1000 points - and feeds
//! back into the gravity interval, which shrinks by 50ms per level down to a
//! 200ms floor.

use tetris_sim_types::{
    FAST_DROP_MS, LEVEL_STEP_MS, NORMAL_DROP_MS, POINTS_PER_LEVEL, ROW_POINTS,
};

/// Points awarded for clearing `rows` rows at the given level.
/// Returns 0 for 0 rows or out-of-range counts.
pub fn line_clear_points(rows: u32, level: u32) -> u32 {
    let Some(&base) = ROW_POINTS.get(rows as usize) else {
        return 0;
    };
    base * (level + 1)
}

/// Level derived from a score (no upper bound)
pub fn level_for_score(score: u32) -> u32 {
    score / POINTS_PER_LEVEL
}

/// Gravity interval for a level (milliseconds per row).
/// Shrinks with the level and floors at the fast interval.
pub fn drop_interval_ms(level: u32) -> u32 {
    let speedup = (level.saturating_mul(LEVEL_STEP_MS)).min(NORMAL_DROP_MS - FAST_DROP_MS);
    NORMAL_DROP_MS - speedup
}
