//! Evidence matrix
//!
//! Records, per (term, entity) cell, which stem nodes carried the term.
//! Used alongside the occurrence matrices so every score can name the stems
//! that produced it.

use conceptmatch_core::StemId;

/// `rows × cols` grid of stem id lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvidenceMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<StemId>>,
}

impl EvidenceMatrix {
    /// Empty evidence for every cell
    pub fn new(rows: usize, cols: usize) -> Self {
        EvidenceMatrix {
            rows,
            cols,
            cells: vec![Vec::new(); rows * cols],
        }
    }

    /// Row count
    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Column count
    pub fn column_count(&self) -> usize {
        self.cols
    }

    /// Append a stem to a cell
    pub fn push(&mut self, row: usize, col: usize, stem: StemId) {
        debug_assert!(row < self.rows && col < self.cols, "cell out of bounds");
        self.cells[row * self.cols + col].push(stem);
    }

    /// Stems recorded for a cell, in insertion order
    pub fn get(&self, row: usize, col: usize) -> &[StemId] {
        debug_assert!(row < self.rows && col < self.cols, "cell out of bounds");
        &self.cells[row * self.cols + col]
    }
}
