//! Solver phases.
//!
//! Phases run in order over the same solver scope:
//! - Construction heuristic: one greedy pass to build a starting selection
//! - Local search: random moves until a termination condition holds

pub mod construction;
pub mod localsearch;

use std::fmt::Debug;

use wardrobe_core::Result;

use crate::scope::SolverScope;
use crate::termination::TerminationReason;

/// A phase of the solving process.
pub trait Phase: Send + Debug {
    /// Runs the phase.
    ///
    /// Returns the reason if a termination condition stopped the phase, or
    /// `None` if the phase ran to completion and the next phase should run.
    fn solve(
        &mut self,
        solver_scope: &mut SolverScope,
        phase_index: usize,
    ) -> Result<Option<TerminationReason>>;

    /// Name used in logs and statistics.
    fn phase_type_name(&self) -> &'static str;
}

impl<P: Phase + ?Sized> Phase for Box<P> {
    fn solve(
        &mut self,
        solver_scope: &mut SolverScope,
        phase_index: usize,
    ) -> Result<Option<TerminationReason>> {
        (**self).solve(solver_scope, phase_index)
    }

    fn phase_type_name(&self) -> &'static str {
        (**self).phase_type_name()
    }
}
