//! This module contains all the physics related code.
//!
//! When contributing to this module, please keep the following things in mind:
//! * Keep it as "game engine agnostic" as possible. Bevy shows up for colors, logging
//!   and the clock's time bookkeeping, never for scheduling. The engine glue lives in
//!   [crate::entities].
//! * Physics should be highly unit tested.

pub mod util;
pub mod voxelsand;
