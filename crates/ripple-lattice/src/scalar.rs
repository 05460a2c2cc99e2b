//! Scalar (potential) field storage.

use crate::grid::Grid;

/// One `f32` value per lattice site, row-major.
///
/// Holds the scalar potential. Written only by the potential generator
/// (startup and preset change); no boundary restriction applies.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarField {
    n: usize,
    data: Vec<f32>,
}

impl ScalarField {
    /// Create an all-zero field for `grid`.
    pub fn new(grid: &Grid) -> Self {
        Self {
            n: grid.side(),
            data: vec![0.0; grid.site_count()],
        }
    }

    /// Lattice side length.
    pub fn side(&self) -> usize {
        self.n
    }

    /// Read the field as a flat slice.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Write the field as a flat slice.
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Set every site to `value`.
    pub fn fill(&mut self, value: f32) {
        self.data.fill(value);
    }

    /// Value at `(x, y)`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[y * self.n + x]
    }
}
