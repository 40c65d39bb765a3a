//! Read-only window over the engine's cell storage.

use std::ops::Index;

use thiserror::Error;

use crate::types::CellState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ViewError {
    /// The backing region is shorter than the requested length.
    #[error("cell view out of bounds: requested {requested} cells, backing region holds {available}")]
    OutOfBounds { requested: usize, available: usize },
}

/// A borrowed, zero-copy view of `len` cells.
///
/// The view borrows the engine, so it cannot outlive any `&mut` call into it.
/// Re-acquire it after every such call; the engine may have moved its storage.
#[derive(Debug, Clone, Copy)]
pub struct CellBufferView<'a> {
    cells: &'a [CellState],
}

impl<'a> CellBufferView<'a> {
    /// Build a view of the first `len` cells of `backing`.
    pub fn acquire(backing: &'a [CellState], len: usize) -> Result<Self, ViewError> {
        match backing.get(..len) {
            Some(cells) => Ok(Self { cells }),
            None => Err(ViewError::OutOfBounds {
                requested: len,
                available: backing.len(),
            }),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn get(&self, offset: usize) -> Option<CellState> {
        self.cells.get(offset).copied()
    }
}

impl Index<usize> for CellBufferView<'_> {
    type Output = CellState;

    #[inline(always)]
    fn index(&self, offset: usize) -> &CellState {
        &self.cells[offset]
    }
}
