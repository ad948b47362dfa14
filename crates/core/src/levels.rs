//! Level table - speed curve and line thresholds per mode
//!
//! Each mode has eleven entries; index 0 duplicates level 1 and every level
//! past the last entry reads the last one, so the table never runs out.

use crate::types::GameMode;

/// Parameters of one level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelSpec {
    /// Normal: cumulative cleared lines that end this level.
    /// Sprint: informational, the per-level goal is fixed.
    pub line_threshold: u32,
    pub fall_interval_ms: f64,
    pub move_interval_ms: f64,
    /// Sprint only: time allowed to finish the level.
    pub time_limit_ms: Option<f64>,
}

const fn normal(line_threshold: u32, fall_interval_ms: f64) -> LevelSpec {
    LevelSpec {
        line_threshold,
        fall_interval_ms,
        move_interval_ms: 80.0,
        time_limit_ms: None,
    }
}

const fn sprint(line_threshold: u32, fall_interval_ms: f64) -> LevelSpec {
    LevelSpec {
        line_threshold,
        fall_interval_ms,
        move_interval_ms: 100.0,
        time_limit_ms: Some(30_000.0),
    }
}

static NORMAL_LEVELS: [LevelSpec; 11] = [
    normal(1, 500.0),
    normal(1, 500.0),
    normal(10, 450.0),
    normal(15, 400.0),
    normal(20, 350.0),
    normal(25, 300.0),
    normal(30, 250.0),
    normal(35, 200.0),
    normal(40, 150.0),
    normal(45, 100.0),
    normal(999, 50.0),
];

static SPRINT_LEVELS: [LevelSpec; 11] = [
    sprint(5, 500.0),
    sprint(5, 500.0),
    sprint(10, 450.0),
    sprint(15, 400.0),
    sprint(20, 350.0),
    sprint(25, 300.0),
    sprint(30, 250.0),
    sprint(35, 200.0),
    sprint(40, 150.0),
    sprint(45, 100.0),
    sprint(999, 50.0),
];

/// Look up the parameters of `level` in `mode`.
///
/// ```
/// use blockfall_core::levels::level_spec;
/// use blockfall_core::types::GameMode;
///
/// assert_eq!(level_spec(GameMode::Normal, 1).fall_interval_ms, 500.0);
/// assert_eq!(level_spec(GameMode::Sprint, 1).time_limit_ms, Some(30_000.0));
/// // Past the end of the table the last level repeats.
/// assert_eq!(level_spec(GameMode::Normal, 42), level_spec(GameMode::Normal, 10));
/// ```
pub fn level_spec(mode: GameMode, level: u32) -> &'static LevelSpec {
    let table: &'static [LevelSpec; 11] = match mode {
        GameMode::Normal => &NORMAL_LEVELS,
        GameMode::Sprint => &SPRINT_LEVELS,
    };
    let idx = (level as usize).min(table.len() - 1);
    &table[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fall_interval_decreases_by_fifty() {
        for mode in [GameMode::Normal, GameMode::Sprint] {
            for level in 3..=10 {
                let prev = level_spec(mode, level - 1).fall_interval_ms;
                let cur = level_spec(mode, level).fall_interval_ms;
                assert_eq!(prev - cur, 50.0, "{:?} level {}", mode, level);
            }
        }
    }

    #[test]
    fn level_zero_duplicates_level_one() {
        assert_eq!(level_spec(GameMode::Normal, 0), level_spec(GameMode::Normal, 1));
        assert_eq!(level_spec(GameMode::Sprint, 0), level_spec(GameMode::Sprint, 1));
    }

    #[test]
    fn thresholds_match_mode() {
        assert_eq!(level_spec(GameMode::Normal, 1).line_threshold, 1);
        assert_eq!(level_spec(GameMode::Sprint, 1).line_threshold, 5);
        assert_eq!(level_spec(GameMode::Normal, 2).line_threshold, 10);
        assert_eq!(level_spec(GameMode::Normal, 9).line_threshold, 45);
        assert_eq!(level_spec(GameMode::Normal, 10).line_threshold, 999);
    }

    #[test]
    fn move_interval_and_time_limit() {
        let normal = level_spec(GameMode::Normal, 4);
        assert_eq!(normal.move_interval_ms, 80.0);
        assert_eq!(normal.time_limit_ms, None);

        let sprint = level_spec(GameMode::Sprint, 4);
        assert_eq!(sprint.move_interval_ms, 100.0);
        assert_eq!(sprint.time_limit_ms, Some(30_000.0));
    }

    #[test]
    fn levels_past_the_table_read_the_last_entry() {
        let last = level_spec(GameMode::Sprint, 10);
        assert_eq!(level_spec(GameMode::Sprint, 11), last);
        assert_eq!(level_spec(GameMode::Sprint, u32::MAX), last);
        assert_eq!(last.fall_interval_ms, 50.0);
    }
}
