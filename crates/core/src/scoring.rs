//! Scoring module - points and level progression
//!
//! Every lock scores, whether or not it clears lines:
//! `PIECE_LOCK_SCORE + LINE_CLEAR_SCORE * lines`.
//!
//! Progression is only checked after a lock that cleared lines, and always
//! against the cumulative line count. Normal compares it with the current
//! level's threshold; Sprint with the fixed `SPRINT_LINES_PER_LEVEL`, so once
//! past it every further clear advances the level again.

use crate::levels::level_spec;
use crate::types::{GameMode, LINE_CLEAR_SCORE, PIECE_LOCK_SCORE, SPRINT_LINES_PER_LEVEL};

/// Points for locking a piece that cleared `lines` rows.
pub fn lock_score(lines: usize) -> u32 {
    PIECE_LOCK_SCORE.saturating_add(LINE_CLEAR_SCORE.saturating_mul(lines as u32))
}

/// Whether the level should go up after a lock that cleared `cleared` rows,
/// bringing the cumulative count to `total_lines`.
pub fn should_level_up(mode: GameMode, level: u32, total_lines: u32, cleared: usize) -> bool {
    if cleared == 0 {
        return false;
    }
    match mode {
        GameMode::Normal => total_lines >= level_spec(mode, level).line_threshold,
        GameMode::Sprint => total_lines >= SPRINT_LINES_PER_LEVEL,
    }
}
