//! Terminal front end.
//!
//! A small, game-oriented rendering layer: the view draws into a plain
//! framebuffer, the renderer diffs it against the previous frame and writes
//! the changes through crossterm. The flow decides which screen is up and
//! drives the engine; the clock measures frame times.

pub mod clock;
pub mod fb;
pub mod flow;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use clock::FrameClock;
pub use fb::{FrameBuffer, Glyph, GlyphStyle, Rect, Rgb, Weight};
pub use flow::{FlashPhase, Flow, Screen, ScreenState};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
