//! Dense best-mode matrix.

use crate::models::TransportMode;

/// A dense n×n matrix of the transport mode chosen for each city pair.
///
/// `None` marks pairs connected by neither network, and the diagonal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeMatrix {
    data: Vec<Option<TransportMode>>,
    size: usize,
}

impl ModeMatrix {
    /// Creates a matrix with no mode for any pair.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![None; size * size],
            size,
        }
    }

    /// Returns the mode chosen between `from` and `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> Option<TransportMode> {
        self.data[from * self.size + to]
    }

    /// Sets the mode chosen between `from` and `to`.
    pub fn set(&mut self, from: usize, to: usize, mode: Option<TransportMode>) {
        self.data[from * self.size + to] = mode;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }
}
