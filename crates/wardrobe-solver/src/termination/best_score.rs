//! Best score termination.

use wardrobe_core::HardSoftScore;

use super::{Termination, TerminationReason};
use crate::scope::SolverScope;

/// Terminates when the best score reaches a target.
///
/// Without an explicit target it stops at the first feasible best score.
#[derive(Debug, Clone, Copy)]
pub struct BestScoreTermination {
    target: Option<HardSoftScore>,
}

impl BestScoreTermination {
    pub fn new(target: HardSoftScore) -> Self {
        Self {
            target: Some(target),
        }
    }

    /// Stops as soon as the best selection violates no hard constraint.
    pub fn feasible() -> Self {
        Self { target: None }
    }

    pub fn target(&self) -> Option<HardSoftScore> {
        self.target
    }

    fn is_reached(&self, best: HardSoftScore) -> bool {
        match self.target {
            Some(target) => best >= target,
            None => best.is_feasible(),
        }
    }
}

impl Termination for BestScoreTermination {
    fn check(&self, solver_scope: &SolverScope) -> Option<TerminationReason> {
        solver_scope
            .best_score()
            .filter(|&best| self.is_reached(best))
            .map(|_| TerminationReason::Converged)
    }
}
