//! RNG module - random piece and garbage generation
//!
//! Randomness is injected: the engine is generic over any [`rand::Rng`], and
//! the default source is a PCG32 generator so a fixed seed replays the same
//! game bit for bit.
//!
//! Piece kinds are drawn uniformly and independently from the seven kinds
//! (no bag).

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::types::PieceKind;

/// Default random source of the engine.
pub type GameRng = Pcg32;

/// Deterministic generator for the given seed.
pub fn seeded(seed: u64) -> GameRng {
    Pcg32::seed_from_u64(seed)
}

/// Generator seeded from the thread-local OS-backed source.
pub fn from_entropy() -> GameRng {
    Pcg32::from_rng(&mut rand::rng())
}

/// Uniformly random piece kind.
pub fn random_kind<R: Rng + ?Sized>(rng: &mut R) -> PieceKind {
    PieceKind::ALL[rng.random_range(0..PieceKind::ALL.len())]
}
