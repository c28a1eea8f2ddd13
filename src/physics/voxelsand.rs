//! Voxel sand physics engine.
//! A cellular automaton over a dense 3d grid where sand piles up and water levels out.
//! The grid is an explicit value, callers build one, paint a scene into it and hand it
//! to a [stepper::Stepper] once per tick.

pub mod config;
pub mod data;
pub mod elements;
pub mod stepper;
pub mod terrain;
pub mod util;
