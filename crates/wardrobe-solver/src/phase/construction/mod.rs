//! Construction heuristic phase.
//!
//! Walks the catalog once in order and includes an item only if that
//! strictly improves the score.

use tracing::{info, trace};
use wardrobe_core::Result;

use crate::phase::Phase;
use crate::scope::{PhaseScope, SolverScope};
use crate::termination::TerminationReason;

#[cfg(test)]
mod tests;

/// Greedy first-fit construction over the catalog order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstructionHeuristicPhase;

impl ConstructionHeuristicPhase {
    pub fn new() -> Self {
        Self
    }
}

impl Phase for ConstructionHeuristicPhase {
    fn solve(
        &mut self,
        solver_scope: &mut SolverScope,
        phase_index: usize,
    ) -> Result<Option<TerminationReason>> {
        let mut phase_scope = PhaseScope::new(solver_scope, phase_index);
        let item_count = phase_scope.score_director().selection().len();

        info!(
            event = "phase_start",
            phase = "Construction Heuristic",
            phase_index = phase_index,
            items = item_count,
        );

        let mut stopped = None;
        for idx in 0..item_count {
            if let Some(reason) = phase_scope.solver_scope().check_termination() {
                stopped = Some(reason);
                break;
            }
            if phase_scope.score_director().selection().is_included(idx) {
                continue;
            }

            let before = phase_scope.score_director().score();
            let after = phase_scope.score_director_mut().toggle(idx);
            let kept = after > before;
            if !kept {
                phase_scope.score_director_mut().toggle(idx);
            }
            phase_scope.record_move(kept);
            phase_scope.solver_scope().assert_score()?;
            if kept {
                phase_scope.update_best_solution();
            }
            let step = phase_scope.increment_step_count();

            trace!(
                event = "step",
                step = step,
                item = idx,
                score = %phase_scope.score_director().score(),
                accepted = kept,
            );
        }

        let stats = phase_scope.finish(self.phase_type_name());
        info!(
            event = "phase_end",
            phase = "Construction Heuristic",
            phase_index = phase_index,
            duration_ms = stats.duration.as_millis() as u64,
            steps = stats.step_count,
            score = %stats.ending_score,
        );
        Ok(stopped)
    }

    fn phase_type_name(&self) -> &'static str {
        "Construction Heuristic"
    }
}
