//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto the closed intent vocabulary and keeps
//! the per-frame held/edge snapshot, including on terminals that never send
//! key releases.

pub mod handler;
pub mod map;

pub use blockfall_types as types;

pub use handler::IntentTracker;
pub use map::{intent_for_key, should_quit};
