//! Piece module - a tetromino placed on a board
//!
//! A piece is a kind, a rotation and the position of its reference point.
//! Moves are tentative: the piece is shifted, checked against the board and
//! put back when the new placement is invalid, so a rejected move never
//! leaves a trace.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::pieces::get_shape;
use crate::types::{PieceKind, Rotation};

/// Falling, ghost or queued piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    kind: PieceKind,
    rotation: Rotation,
    x: i32,
    y: i32,
}

impl Piece {
    /// Create a new piece in spawn orientation at column `x`, row 0
    pub fn new(kind: PieceKind, x: i32) -> Self {
        Self::at(kind, Rotation::North, x, 0)
    }

    pub fn at(kind: PieceKind, rotation: Rotation, x: i32, y: i32) -> Self {
        Self {
            kind,
            rotation,
            x,
            y,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    /// Board coordinates of the four minos.
    pub fn cells(&self) -> [(i32, i32); 4] {
        get_shape(self.kind, self.rotation)
            .map(|(dx, dy)| (self.x + i32::from(dx), self.y + i32::from(dy)))
    }

    /// Check if all minos are inside (or above) the board on empty cells
    pub fn is_valid(&self, board: &Board) -> bool {
        self.cells()
            .iter()
            .all(|&(x, y)| board.is_inside_or_above(x, y) && board.get(x, y).is_none())
    }

    /// Shift by (dx, dy) if the result is valid. Returns whether it moved.
    pub fn translate(&mut self, board: &Board, dx: i32, dy: i32) -> bool {
        self.x += dx;
        self.y += dy;

        if !self.is_valid(board) {
            self.x -= dx;
            self.y -= dy;
            return false;
        }

        true
    }

    /// Turn by `dir` steps in place (no kicks). Returns whether it turned.
    pub fn rotate(&mut self, board: &Board, dir: i32) -> bool {
        let previous = self.rotation;
        self.rotation = previous.rotated(dir);

        if !self.is_valid(board) {
            self.rotation = previous;
            return false;
        }

        true
    }

    /// Lock the piece: write its kind into every mino cell.
    ///
    /// Minos above the field have nowhere to go and are dropped.
    pub fn commit(&self, board: &mut Board) {
        for (x, y) in self.cells() {
            board.set(x, y, Some(self.kind));
        }
    }

    /// Same piece moved straight down as far as it can go.
    pub fn dropped(&self, board: &Board) -> Self {
        let mut ghost = *self;
        while ghost.translate(board, 0, 1) {}
        ghost
    }
}
