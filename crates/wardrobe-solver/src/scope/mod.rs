//! Scope hierarchy for solver state.
//!
//! - [`SolverScope`]: state for one run (director, best selection, RNG, termination)
//! - [`PhaseScope`]: counters for one phase, borrowing the solver scope

mod phase;
mod solver;

#[cfg(test)]
mod tests;

pub use phase::PhaseScope;
pub use solver::SolverScope;
