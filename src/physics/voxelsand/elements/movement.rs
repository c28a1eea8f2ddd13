//! Movement of water in the world.
//! The two interchangeable flow models the water rule dispatches to.
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Whole cell swaps with bounded pushing
pub mod displacement;
/// Partial transfers between neighbors
pub mod fluid;
