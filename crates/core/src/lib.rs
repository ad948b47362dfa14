//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the game rules, state management and simulation step.
//! It has no dependency on terminals or I/O; given the same seed and the same
//! sequence of `(elapsed, intents)` it produces the same game.
//!
//! # Module Structure
//!
//! - [`board`]: variable-size grid with line search, deletion and garbage insertion
//! - [`pieces`]: the static geometry table (7 kinds x 4 rotations, no kicks)
//! - [`piece`]: a placed piece with atomic translate/rotate and commit
//! - [`levels`]: per-mode speed curve and line thresholds
//! - [`scoring`]: lock score and level progression
//! - [`engine`]: the session state and the timer-gated update step
//! - [`snapshot`]: serializable read-only view for front ends
//! - [`config`] / [`error`]: construction parameters and their validation
//! - [`rng`]: seeded random source and uniform piece selection
//!
//! # Example
//!
//! ```
//! use blockfall_core::{Engine, EngineConfig};
//! use blockfall_core::types::{Intent, Intents};
//!
//! let mut engine = Engine::new(EngineConfig::default().with_seed(7)).unwrap();
//! let mut intents = Intents::default();
//!
//! intents.press(Intent::Left);
//! engine.update(16.0, &mut intents);
//! intents.end_step();
//! assert_eq!(engine.falling().x(), 3);
//!
//! // Hold drop until the piece locks.
//! intents.press(Intent::Drop);
//! while engine.score() == 0 {
//!     engine.update(16.0, &mut intents);
//!     intents.end_step();
//! }
//! assert_eq!(engine.score(), 1);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod levels;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

pub use board::Board;
pub use config::EngineConfig;
pub use engine::Engine;
pub use error::ConfigError;
pub use levels::{level_spec, LevelSpec};
pub use piece::Piece;
pub use pieces::{get_shape, spawn_column};
pub use rng::GameRng;
pub use snapshot::{GameSnapshot, PieceSnapshot};
