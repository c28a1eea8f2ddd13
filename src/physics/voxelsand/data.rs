//! The data module contains the data structures for the voxel automaton.
//! These are where the actual grid of voxels is stored.

pub mod voxel;
pub mod voxel_grid;
