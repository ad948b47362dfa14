//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no game logic, making them usable from the
//! engine, the input layer and the terminal front end alike.
//!
//! # Board Dimensions
//!
//! Default playfield dimensions (configurable per session):
//!
//! - **Width**: 12 columns (indexed 0-11)
//! - **Height**: 22 rows (indexed 0-21, row 0 at the top)
//! - **Spawn column**: `width / 2 - 2`, row 0
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FIRST_MOVE_WINDOW_MS` | 20 | Unthrottled lateral move window after a fall step |
//! | `LINE_CLEAR_FLASH_MS` | 300 | Line-clear flash animation |
//! | `LINE_CLEAR_PHASE_MS` | 100 | Length of one flash phase |
//! | `LEVEL_TRANSITION_MS` | 1000 | Sprint "next level" screen |
//! | `GAME_OVER_SCREEN_MS` | 2000 | Game-over screen before returning to title |
//!
//! Fall and move intervals depend on mode and level and live in the core
//! crate's level table.
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameMode, Intent, PieceKind, Rotation, DEFAULT_BOARD_WIDTH};
//!
//! let piece = PieceKind::from_str("t").unwrap();
//! assert_eq!(piece, PieceKind::T);
//!
//! assert_eq!(Rotation::North.rotated(1), Rotation::East);
//! assert_eq!(Rotation::North.rotated(-1), Rotation::West);
//!
//! let intent: Intent = "rotate".parse().unwrap();
//! assert_eq!(intent, Intent::Rotate);
//!
//! assert_eq!(GameMode::default(), GameMode::Normal);
//! assert_eq!(DEFAULT_BOARD_WIDTH, 12);
//! ```

use serde::{Deserialize, Serialize};

pub mod intent;

pub use intent::{Intent, IntentState, Intents, UnknownIntent};

/// Default board width in cells (12 columns)
pub const DEFAULT_BOARD_WIDTH: u16 = 12;

/// Default board height in cells (22 rows)
pub const DEFAULT_BOARD_HEIGHT: u16 = 22;

/// A lateral move is never throttled while the fall timer is below this value.
pub const FIRST_MOVE_WINDOW_MS: f64 = 20.0;

/// Score for every locked piece.
pub const PIECE_LOCK_SCORE: u32 = 1;

/// Score for every cleared line.
pub const LINE_CLEAR_SCORE: u32 = 100;

/// Cumulative lines at which Sprint starts advancing a level per clear.
pub const SPRINT_LINES_PER_LEVEL: u32 = 5;

/// Garbage rows pushed under the stack when a Sprint session starts.
pub const SPRINT_INITIAL_GARBAGE: usize = 5;

/// Garbage rows pushed under the stack on every Sprint level-up.
pub const SPRINT_LEVEL_UP_GARBAGE: usize = 10;

/// Line-clear flash animation (300ms)
pub const LINE_CLEAR_FLASH_MS: f64 = 300.0;

/// One phase of the line-clear flash (100ms)
pub const LINE_CLEAR_PHASE_MS: f64 = 100.0;

/// Sprint level transition screen (1000ms)
pub const LEVEL_TRANSITION_MS: f64 = 1000.0;

/// Game-over screen before going back to the title (2000ms)
pub const GAME_OVER_SCREEN_MS: f64 = 2000.0;


/// The seven tetromino piece kinds
///
/// Declaration order is the order of the geometry table and of random
/// selection: O, T, Z, S, I, L, J.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    O,
    T,
    Z,
    S,
    I,
    L,
    J,
}

impl PieceKind {
    /// All kinds in table order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::O,
        PieceKind::T,
        PieceKind::Z,
        PieceKind::S,
        PieceKind::I,
        PieceKind::L,
        PieceKind::J,
    ];

    /// Position of the kind in [`PieceKind::ALL`].
    pub fn index(self) -> usize {
        match self {
            PieceKind::O => 0,
            PieceKind::T => 1,
            PieceKind::Z => 2,
            PieceKind::S => 3,
            PieceKind::I => 4,
            PieceKind::L => 5,
            PieceKind::J => 6,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            "s" => Some(PieceKind::S),
            "i" => Some(PieceKind::I),
            "l" => Some(PieceKind::L),
            "j" => Some(PieceKind::J),
            _ => None,
        }
    }

    /// Single uppercase letter, as shown in the next-piece panel.
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::Z => "Z",
            PieceKind::S => "S",
            PieceKind::I => "I",
            PieceKind::L => "L",
            PieceKind::J => "J",
        }
    }
}

/// Rotation states, indexed 0 to 3
///
/// - **North**: Spawn orientation
/// - **East**: One step clockwise
/// - **South**: Two steps
/// - **West**: Three steps
///
/// There is no kick table: a rotation is either accepted in place or rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    pub const COUNT: usize = 4;

    pub fn index(self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Rotation for `index` modulo 4.
    pub fn from_index(index: usize) -> Self {
        match index % Self::COUNT {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }

    /// Advance by `dir` steps (negative turns the other way), wrapping modulo 4.
    pub fn rotated(self, dir: i32) -> Self {
        let next = (self.index() as i32 + dir).rem_euclid(Self::COUNT as i32);
        Self::from_index(next as usize)
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Rotation::North => "north",
            Rotation::East => "east",
            Rotation::South => "south",
            Rotation::West => "west",
        }
    }
}

/// Game mode variants
///
/// - **Normal**: endless play, the level rises with the cumulative line count.
/// - **Sprint**: the board starts with garbage, play runs against a time limit,
///   and every level-up pushes more garbage under the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameMode {
    #[default]
    Normal,
    Sprint,
}

impl GameMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "normal" => Some(GameMode::Normal),
            "sprint" => Some(GameMode::Sprint),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Normal => "normal",
            GameMode::Sprint => "sprint",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell occupied by the specified piece kind
pub type Cell = Option<PieceKind>;
