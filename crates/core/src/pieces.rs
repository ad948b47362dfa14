//! Pieces module - the geometry table
//!
//! One immutable table: 7 kinds x 4 rotations x 4 cell offsets relative to
//! the piece's reference point. Kinds with fewer distinct orientations (O has
//! one; S, Z and I have two) still store four entries so every lookup is a
//! plain index.

use crate::types::{PieceKind, Rotation};

/// Offset of a single mino relative to piece origin
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from piece origin
pub type PieceShape = [MinoOffset; 4];

const O_SHAPE: PieceShape = [(0, 0), (1, 0), (0, 1), (1, 1)];

const Z_FLAT: PieceShape = [(0, 0), (1, 0), (-1, 1), (0, 1)];
const Z_UPRIGHT: PieceShape = [(-1, -1), (-1, 0), (0, 0), (0, 1)];

const S_FLAT: PieceShape = [(-1, 0), (0, 0), (0, 1), (1, 1)];
const S_UPRIGHT: PieceShape = [(0, 0), (0, 1), (1, 0), (1, -1)];

const I_FLAT: PieceShape = [(-1, -1), (0, -1), (1, -1), (2, -1)];
const I_UPRIGHT: PieceShape = [(1, -2), (1, -1), (1, 0), (1, 1)];

/// Indexed by `[PieceKind::index()][Rotation::index()]`.
static SHAPES: [[PieceShape; 4]; 7] = [
    // O
    [O_SHAPE, O_SHAPE, O_SHAPE, O_SHAPE],
    // T
    [
        [(-1, 0), (0, 0), (1, 0), (0, 1)],
        [(0, -1), (0, 0), (0, 1), (-1, 0)],
        [(-1, 1), (0, 1), (1, 1), (0, 0)],
        [(0, -1), (0, 0), (0, 1), (1, 0)],
    ],
    // Z
    [Z_FLAT, Z_UPRIGHT, Z_FLAT, Z_UPRIGHT],
    // S
    [S_FLAT, S_UPRIGHT, S_FLAT, S_UPRIGHT],
    // I
    [I_FLAT, I_UPRIGHT, I_FLAT, I_UPRIGHT],
    // L
    [
        [(-1, 0), (0, 0), (1, 0), (-1, 1)],
        [(-1, -1), (0, -1), (0, 0), (0, 1)],
        [(-1, 1), (0, 1), (1, 1), (1, 0)],
        [(0, -1), (0, 0), (0, 1), (1, 1)],
    ],
    // J
    [
        [(-1, 0), (0, 0), (1, 0), (1, 1)],
        [(0, -1), (0, 0), (0, 1), (-1, 1)],
        [(-1, 0), (-1, 1), (0, 1), (1, 1)],
        [(0, -1), (0, 0), (0, 1), (1, -1)],
    ],
];

/// Get the shape (mino offsets) for a piece kind and rotation
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> &'static PieceShape {
    &SHAPES[kind.index()][rotation.index()]
}

/// Column where new pieces appear on a board of the given width.
pub fn spawn_column(width: u16) -> i32 {
    i32::from(width) / 2 - 2
}
