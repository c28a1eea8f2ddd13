//! A simple dense 3d grid type
//! Backed by ndarray so that bulk iteration and the parallel read-only reductions
//! come for free. Indexing is always (x, y, z) with y pointing up.
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use ndarray::Array3;
use thiserror::Error;

use super::vectors::{Dimensions, XyzVector};

/// A simple dense 3d grid type
#[derive(Clone, Debug)]
pub struct Grid3<T>(Array3<T>);

/* =================
 * Initialization
 * ================= */
impl<T> Grid3<T> {
    /// Create a new grid where each cell is built from its own coordinate
    pub fn new_from_fn<F>(dims: Dimensions, mut f: F) -> Self
    where
        F: FnMut(XyzVector) -> T,
    {
        Self(Array3::from_shape_fn(dims.shape(), |(x, y, z)| {
            f(XyzVector { x, y, z })
        }))
    }
}

/* ======================================
 * Simple Getters
 * Access basic attributes of the struct
 * ====================================== */
impl<T> Grid3<T> {
    /// Get the data as an ndarray
    pub fn get_data(&self) -> &Array3<T> {
        &self.0
    }
}

/// Defines when the user has simply exceeded the bounds of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{0} went outside the constraints of the grid")]
pub struct GridOutOfBoundsError(pub XyzVector);

/* ======================================
 * Position Based Getters
 * Access data at a position
 * ====================================== */
impl<T> Grid3<T> {
    /// Gets the value at the given coordinate
    /// Panics if out of bounds, so only use it with coordinates that were already checked
    pub fn get(&self, idx: XyzVector) -> &T {
        &self.0[idx.to_array()]
    }
    /// Gets the value at the given coordinate, or returns an error if the coordinate is out of bounds
    pub fn checked_get(&self, idx: XyzVector) -> Result<&T, GridOutOfBoundsError> {
        self.0.get(idx.to_array()).ok_or(GridOutOfBoundsError(idx))
    }
    /// Gets the value at the given coordinate, mutably
    pub fn get_mut(&mut self, idx: XyzVector) -> &mut T {
        &mut self.0[idx.to_array()]
    }
    /// Gets the value at the given coordinate mutably, or returns an error if out of bounds
    pub fn checked_get_mut(&mut self, idx: XyzVector) -> Result<&mut T, GridOutOfBoundsError> {
        self.0.get_mut(idx.to_array()).ok_or(GridOutOfBoundsError(idx))
    }
    /// Exchange the values of two cells in place
    pub fn swap(&mut self, a: XyzVector, b: XyzVector) {
        self.0.swap(a.to_array(), b.to_array());
    }
}

/// Iteration
impl<T> Grid3<T> {
    /// Get an iterator over the grid in logical (x, y, z) order
    pub fn iter(&self) -> ndarray::iter::Iter<'_, T, ndarray::Ix3> {
        self.0.iter()
    }

    /// Get a mutable iterator over the grid in logical (x, y, z) order
    pub fn iter_mut(&mut self) -> ndarray::iter::IterMut<'_, T, ndarray::Ix3> {
        self.0.iter_mut()
    }
}
