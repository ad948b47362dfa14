//! Engine - game state and the timer-gated update step
//!
//! The engine owns the board, the falling piece, its ghost, the queued next
//! piece and the statistics of one session. It is advanced by
//! [`Engine::update`] with the elapsed real time and the intent snapshot of
//! the frame; nothing else moves the game forward.
//!
//! One step runs in a fixed order:
//!
//! 1. advance the fall, move and level timers;
//! 2. Sprint only: end the game once the level time limit is reached;
//! 3. look one row down to learn whether the piece is still descending;
//! 4. lateral moves and rotation, throttled by the move interval unless a
//!    left/right edge fired this step;
//! 5. the fall step, on the fall interval or every step while drop is held.
//!    A piece that cannot fall is locked, full lines are removed, the lock is
//!    scored and the next piece is promoted.

use log::{debug, info};
use rand::Rng;

use crate::board::Board;
use crate::config::EngineConfig;
use crate::error::ConfigError;
use crate::levels::{level_spec, LevelSpec};
use crate::piece::Piece;
use crate::pieces::spawn_column;
use crate::rng::{from_entropy, random_kind, seeded, GameRng};
use crate::scoring::{lock_score, should_level_up};
use crate::snapshot::GameSnapshot;
use crate::types::{
    GameMode, Intents, PieceKind, FIRST_MOVE_WINDOW_MS, SPRINT_INITIAL_GARBAGE,
    SPRINT_LEVEL_UP_GARBAGE,
};

/// A running game session.
#[derive(Debug, Clone)]
pub struct Engine<R = GameRng> {
    config: EngineConfig,
    board: Board,
    falling: Piece,
    ghost: Piece,
    next: Piece,
    rng: R,

    score: u32,
    level: u32,
    lines: u32,

    fall_elapsed: f64,
    move_elapsed: f64,
    level_elapsed: f64,

    game_over: bool,
    pending_cleared_rows: Vec<usize>,
    level_just_increased: bool,

    descending: bool,
    lateral: i8,
}

impl Engine<GameRng> {
    /// Create an engine and start a session.
    ///
    /// The random source is seeded from `config.seed`, or from the OS when no
    /// seed is given.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        let rng = match config.seed {
            Some(seed) => seeded(seed),
            None => from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> Engine<R> {
    /// Create an engine drawing from `rng` and start a session.
    pub fn with_rng(config: EngineConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let column = spawn_column(config.width);
        let placeholder = Piece::new(PieceKind::O, column);
        let mut engine = Self {
            config,
            board: Board::new(config.width, config.height),
            falling: placeholder,
            ghost: placeholder,
            next: placeholder,
            rng,
            score: 0,
            level: 1,
            lines: 0,
            fall_elapsed: 0.0,
            move_elapsed: 0.0,
            level_elapsed: 0.0,
            game_over: false,
            pending_cleared_rows: Vec::new(),
            level_just_increased: false,
            descending: false,
            lateral: 0,
        };
        engine.new_game();
        Ok(engine)
    }

    /// Start a fresh session in the configured mode.
    pub fn new_game(&mut self) {
        self.board.clear();
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.fall_elapsed = 0.0;
        self.move_elapsed = 0.0;
        self.level_elapsed = 0.0;
        self.game_over = false;
        self.pending_cleared_rows.clear();
        self.level_just_increased = false;
        self.descending = false;
        self.lateral = 0;

        self.falling = self.spawn_piece();
        self.ghost = self.falling;
        self.next = self.spawn_piece();

        if self.config.mode == GameMode::Sprint {
            self.board.insert_lines(SPRINT_INITIAL_GARBAGE, &mut self.rng);
        }

        info!(
            "new {} game on a {}x{} board",
            self.config.mode.as_str(),
            self.board.width(),
            self.board.height()
        );
    }

    /// Switch to `mode` and start a fresh session.
    pub fn start(&mut self, mode: GameMode) {
        self.config.mode = mode;
        self.new_game();
    }

    /// Advance the game by `elapsed_ms` using the intents of this frame.
    ///
    /// Consumed edges are cleared and rotation/drop are stopped on `intents`;
    /// clearing the remaining edges at the end of the frame is the caller's
    /// job. Negative or non-finite times count as zero. Once the game is over
    /// this does nothing.
    pub fn update(&mut self, elapsed_ms: f64, intents: &mut Intents) {
        if self.game_over {
            return;
        }

        let dt = if elapsed_ms.is_finite() && elapsed_ms > 0.0 {
            elapsed_ms
        } else {
            0.0
        };

        self.level_just_increased = false;
        self.fall_elapsed += dt;
        self.move_elapsed += dt;
        self.level_elapsed += dt;

        let spec = *self.level_spec();

        if let Some(limit) = spec.time_limit_ms {
            if self.level_elapsed >= limit {
                self.game_over = true;
                info!(
                    "time is up on level {} (score {}, lines {})",
                    self.level, self.score, self.lines
                );
                return;
            }
        }

        let mut below = self.falling;
        self.descending = below.translate(&self.board, 0, 1);

        if self.move_elapsed >= spec.move_interval_ms || intents.left.edge() || intents.right.edge()
        {
            self.move_step(&below, intents);
        }

        if intents.drop.held() || self.fall_elapsed >= spec.fall_interval_ms {
            self.fall_step(intents);
        }
    }

    fn move_step(&mut self, below: &Piece, intents: &mut Intents) {
        self.lateral = 0;
        let first_move = self.fall_elapsed < FIRST_MOVE_WINDOW_MS;

        // A piece spawned into the stack is frozen until it locks.
        if self.falling.is_valid(&self.board) {
            for (state, dx) in [(&mut intents.left, -1), (&mut intents.right, 1)] {
                if !state.held() {
                    continue;
                }
                state.clear_edge();
                let mut ahead = *below;
                if (first_move || ahead.translate(&self.board, dx, 0))
                    && self.falling.translate(&self.board, dx, 0)
                {
                    self.lateral = dx as i8;
                }
            }

            if intents.rotate.held() {
                intents.rotate.clear_edge();
                self.falling.rotate(&self.board, 1);
                intents.rotate.stop();
            }
        }

        self.ghost = self.falling.dropped(&self.board);
        self.move_elapsed = 0.0;
    }

    fn fall_step(&mut self, intents: &mut Intents) {
        intents.drop.clear_edge();
        self.fall_elapsed = 0.0;

        if self.falling.translate(&self.board, 0, 1) {
            return;
        }

        intents.drop.stop();
        self.lock_falling();
    }

    fn lock_falling(&mut self) {
        let piece = self.falling;
        piece.commit(&mut self.board);

        let full = self.board.search_full_lines();
        let cleared = full.len();
        if !full.is_empty() {
            self.board.delete_lines(&full);
            debug!("cleared rows {:?}", full);
            self.pending_cleared_rows = full;
        }

        self.score = self.score.saturating_add(lock_score(cleared));
        self.lines += cleared as u32;
        debug!(
            "locked {} at ({}, {}), score {}, lines {}",
            piece.kind().as_str(),
            piece.x(),
            piece.y(),
            self.score,
            self.lines
        );

        if should_level_up(self.config.mode, self.level, self.lines, cleared) {
            self.level_up();
        }

        if piece.y() == 0 {
            self.game_over = true;
            info!(
                "game over on level {} (score {}, lines {})",
                self.level, self.score, self.lines
            );
        }

        self.falling = self.next;
        self.ghost = self.falling;
        self.next = self.spawn_piece();
    }

    fn level_up(&mut self) {
        self.level += 1;
        self.level_just_increased = true;

        if self.config.mode == GameMode::Sprint {
            self.board.insert_lines(SPRINT_LEVEL_UP_GARBAGE, &mut self.rng);
        }

        info!("level up: {}", self.level);
    }

    fn spawn_piece(&mut self) -> Piece {
        let kind = random_kind(&mut self.rng);
        Piece::new(kind, spawn_column(self.board.width()))
    }

    /// Forget the rows removed by the last clearing lock.
    pub fn clear_pending_rows(&mut self) {
        self.pending_cleared_rows.clear();
    }

    /// Put a piece of `kind` at the spawn position in place of the falling one.
    pub fn replace_falling(&mut self, kind: PieceKind) {
        self.falling = Piece::new(kind, spawn_column(self.board.width()));
        self.ghost = self.falling;
    }

    pub fn replace_next(&mut self, kind: PieceKind) {
        self.next = Piece::new(kind, spawn_column(self.board.width()));
    }

    /// Mutable board access for setting up positions.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

impl<R> Engine<R> {
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn falling(&self) -> &Piece {
        &self.falling
    }

    pub fn ghost(&self) -> &Piece {
        &self.ghost
    }

    pub fn next(&self) -> &Piece {
        &self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn mode(&self) -> GameMode {
        self.config.mode
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Rows removed by the most recent clearing lock, ascending, until
    /// [`clear_pending_rows`](Self::clear_pending_rows) is called.
    pub fn pending_cleared_rows(&self) -> &[usize] {
        &self.pending_cleared_rows
    }

    /// True only for the step on which the level went up.
    pub fn level_just_increased(&self) -> bool {
        self.level_just_increased
    }

    pub fn level_spec(&self) -> &'static LevelSpec {
        level_spec(self.config.mode, self.level)
    }

    /// Fall timer over the fall interval, clamped to `0.0..=1.0`.
    pub fn fall_progress(&self) -> f64 {
        (self.fall_elapsed / self.level_spec().fall_interval_ms).clamp(0.0, 1.0)
    }

    pub fn move_progress(&self) -> f64 {
        (self.move_elapsed / self.level_spec().move_interval_ms).clamp(0.0, 1.0)
    }

    /// Whether the falling piece could move down at the start of the last step.
    pub fn is_descending(&self) -> bool {
        self.descending
    }

    /// Direction of the lateral move made by the last move step (-1, 0, 1).
    pub fn lateral(&self) -> i8 {
        self.lateral
    }

    pub fn level_elapsed_ms(&self) -> f64 {
        self.level_elapsed
    }

    /// Time left before the Sprint limit; `None` in Normal mode.
    pub fn time_remaining_ms(&self) -> Option<f64> {
        self.level_spec()
            .time_limit_ms
            .map(|limit| (limit - self.level_elapsed).max(0.0))
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from_engine(self)
    }
}
