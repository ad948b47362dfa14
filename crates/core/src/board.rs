//! Board module - manages the game grid
//!
//! The board is a `width x height` grid where each cell is empty or holds a
//! piece kind. Cells live in one flat row-major vector; the dimensions are
//! fixed at construction.
//! Coordinates: (x, y) where x grows to the right and y grows downwards,
//! row 0 being the top row. Negative y is "above the field": reads there are
//! empty and writes are dropped, which lets pieces spawn partially hidden.

use rand::seq::index;
use rand::Rng;

use crate::rng::random_kind;
use crate::types::{Cell, PieceKind};

/// The game board using flat vector storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u16,
    height: u16,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![None; usize::from(width) * usize::from(height)],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.is_inside(x, y) {
            return None;
        }
        Some((y as usize) * usize::from(self.width) + (x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Get height of the board
    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn is_inside(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < i32::from(self.width) && y >= 0 && y < i32::from(self.height)
    }

    /// Like [`is_inside`](Self::is_inside) but any row above the field counts.
    pub fn is_inside_or_above(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < i32::from(self.width) && y < i32::from(self.height)
    }

    /// Get cell at position (x, y). Outside the board every cell is empty.
    pub fn get(&self, x: i32, y: i32) -> Cell {
        self.index(x, y).and_then(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false (and changes nothing) if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .is_some_and(|row| row.iter().all(|cell| cell.is_some()))
    }

    /// Cells of row `y`, left to right.
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= usize::from(self.height) {
            return None;
        }
        let width = usize::from(self.width);
        let start = y * width;
        Some(&self.cells[start..start + width])
    }

    /// Row indices without a single empty cell, in ascending order.
    pub fn search_full_lines(&self) -> Vec<usize> {
        (0..usize::from(self.height))
            .filter(|&y| self.is_row_full(y))
            .collect()
    }

    /// Delete the given rows, inserting one empty row at the top per deletion.
    ///
    /// Rows are processed in the order given; every deletion shifts the rows
    /// above it down by one. Ascending order (as returned by
    /// [`search_full_lines`](Self::search_full_lines)) therefore removes
    /// exactly the listed rows. Rows outside the board are skipped.
    pub fn delete_lines(&mut self, rows: &[usize]) {
        let width = usize::from(self.width);
        for &y in rows {
            if y >= usize::from(self.height) {
                continue;
            }
            // copy_within handles the overlapping ranges
            self.cells.copy_within(0..y * width, width);
            self.cells[..width].fill(None);
        }
    }

    /// Push `count` garbage rows in from the bottom.
    ///
    /// Every insertion discards row 0 unconditionally, whatever it holds.
    pub fn insert_lines<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) {
        let width = usize::from(self.width);
        if self.cells.is_empty() {
            return;
        }
        for _ in 0..count {
            let line = self.random_line(rng, self.default_empty_count());
            self.cells.copy_within(width.., 0);
            let last = self.cells.len() - width;
            self.cells[last..].copy_from_slice(&line);
        }
    }

    /// Number of holes in a garbage row: a third of the width, rounded down.
    pub fn default_empty_count(&self) -> usize {
        usize::from(self.width) / 3
    }

    /// Build a garbage row with exactly `empty_count` holes (capped at the
    /// width) at uniformly random columns; every other cell gets an
    /// independently chosen random kind.
    pub fn random_line<R: Rng + ?Sized>(&self, rng: &mut R, empty_count: usize) -> Vec<Cell> {
        let width = usize::from(self.width);
        let filled = width - empty_count.min(width);
        let mut line: Vec<Cell> = vec![None; width];
        for x in index::sample(rng, width, filled).iter() {
            line[x] = Some(random_kind(rng));
        }
        line
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Fill row `y` with `kind`, leaving the listed columns empty.
    ///
    /// Convenience for building puzzle positions.
    pub fn fill_row_except(&mut self, y: i32, kind: PieceKind, holes: &[i32]) {
        for x in 0..i32::from(self.width) {
            let cell = if holes.contains(&x) { None } else { Some(kind) };
            self.set(x, y, cell);
        }
    }

    /// Count of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(
            crate::types::DEFAULT_BOARD_WIDTH,
            crate::types::DEFAULT_BOARD_HEIGHT,
        )
    }
}
