//! Read-only, serializable view of an engine.
//!
//! The board is flattened row-major into bytes: `0` is an empty cell and
//! `1..=7` is `PieceKind::index() + 1`.

use serde::{Deserialize, Serialize};

use crate::engine::Engine;
use crate::piece::Piece;
use crate::types::{Cell, GameMode, PieceKind, Rotation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i32,
    pub y: i32,
    pub cells: [(i32, i32); 4],
}

impl From<&Piece> for PieceSnapshot {
    fn from(value: &Piece) -> Self {
        Self {
            kind: value.kind(),
            rotation: value.rotation(),
            x: value.x(),
            y: value.y(),
            cells: value.cells(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub mode: GameMode,
    pub width: u16,
    pub height: u16,
    pub board: Vec<u8>,
    pub falling: PieceSnapshot,
    pub ghost: PieceSnapshot,
    pub next: PieceSnapshot,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub game_over: bool,
    pub pending_cleared_rows: Vec<usize>,
    pub level_just_increased: bool,
    pub time_remaining_ms: Option<f64>,
    /// Fraction of the fall interval elapsed, in `0.0..=1.0`.
    pub fall_progress: f64,
    /// Fraction of the move interval elapsed, in `0.0..=1.0`.
    pub move_progress: f64,
    pub descending: bool,
}

pub fn encode_cell(cell: Cell) -> u8 {
    match cell {
        None => 0,
        Some(kind) => kind.index() as u8 + 1,
    }
}

pub fn decode_cell(byte: u8) -> Cell {
    byte.checked_sub(1)
        .and_then(|i| PieceKind::from_index(usize::from(i)))
}

impl GameSnapshot {
    pub fn from_engine<R>(engine: &Engine<R>) -> Self {
        let board = engine.board();
        Self {
            mode: engine.mode(),
            width: board.width(),
            height: board.height(),
            board: board.cells().iter().copied().map(encode_cell).collect(),
            falling: engine.falling().into(),
            ghost: engine.ghost().into(),
            next: engine.next().into(),
            score: engine.score(),
            lines: engine.lines(),
            level: engine.level(),
            game_over: engine.is_game_over(),
            pending_cleared_rows: engine.pending_cleared_rows().to_vec(),
            level_just_increased: engine.level_just_increased(),
            time_remaining_ms: engine.time_remaining_ms(),
            fall_progress: engine.fall_progress(),
            move_progress: engine.move_progress(),
            descending: engine.is_descending(),
        }
    }

    /// Cell at (x, y); empty outside the board.
    pub fn cell(&self, x: i32, y: i32) -> Cell {
        if x < 0 || y < 0 || x >= i32::from(self.width) || y >= i32::from(self.height) {
            return None;
        }
        let idx = y as usize * usize::from(self.width) + x as usize;
        self.board.get(idx).copied().and_then(decode_cell)
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }
}
