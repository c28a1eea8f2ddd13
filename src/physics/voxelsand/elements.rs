//! This module contains the materials and the rules that move them.

pub mod element;
pub mod material;
pub mod movement;
pub mod sand;
pub mod water;
