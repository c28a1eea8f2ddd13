//! Useful functions and structs for voxelsand calculations.

pub mod directions;
pub mod grid;
pub mod vectors;
