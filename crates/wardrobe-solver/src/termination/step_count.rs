//! Step count termination.

use super::{Termination, TerminationReason};
use crate::scope::SolverScope;

/// Terminates after a fixed number of steps across all phases.
#[derive(Debug, Clone, Copy)]
pub struct StepCountTermination {
    limit: u64,
}

impl StepCountTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }
}

impl Termination for StepCountTermination {
    fn check(&self, solver_scope: &SolverScope) -> Option<TerminationReason> {
        (solver_scope.total_step_count() >= self.limit)
            .then_some(TerminationReason::StepLimitReached)
    }
}
