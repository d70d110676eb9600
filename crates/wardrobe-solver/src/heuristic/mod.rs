//! Heuristic components for local search.
//!
//! Moves flip catalog items in and out of the working selection; the
//! selector draws them at random.

pub mod r#move;
pub mod selector;

pub use r#move::{Move, SwapMove, ToggleMove, WardrobeMove};
pub use selector::{MoveSelector, RandomMoveIter, ToggleSwapMoveSelector};
