//! LocalSearchPhase implementation.

use std::fmt::Debug;
use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, trace};
use wardrobe_core::Result;

use crate::heuristic::{Move, MoveSelector};
use crate::phase::localsearch::Acceptor;
use crate::phase::Phase;
use crate::scope::{PhaseScope, SolverScope};
use crate::termination::TerminationReason;

/// Local search phase that improves the selection step by step.
///
/// Each iteration draws one move, applies it, and asks the acceptor whether
/// to keep it. Rejected moves are undone. Every iteration counts as a step.
///
/// # Type Parameters
/// * `MS` - The move selector type
/// * `A` - The acceptor type
pub struct LocalSearchPhase<MS, A> {
    move_selector: MS,
    acceptor: A,
}

impl<MS, A> LocalSearchPhase<MS, A> {
    pub fn new(move_selector: MS, acceptor: A) -> Self {
        Self {
            move_selector,
            acceptor,
        }
    }
}

impl<MS: Debug, A: Debug> Debug for LocalSearchPhase<MS, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalSearchPhase")
            .field("move_selector", &self.move_selector)
            .field("acceptor", &self.acceptor)
            .finish()
    }
}

impl<MS, A> Phase for LocalSearchPhase<MS, A>
where
    MS: MoveSelector,
    A: Acceptor,
{
    fn solve(
        &mut self,
        solver_scope: &mut SolverScope,
        phase_index: usize,
    ) -> Result<Option<TerminationReason>> {
        let mut phase_scope = PhaseScope::new(solver_scope, phase_index);
        let mut last_step_score = phase_scope.score_director().score();
        self.acceptor.phase_started(&last_step_score);

        info!(
            event = "phase_start",
            phase = "Local Search",
            phase_index = phase_index,
        );

        let index = Arc::clone(phase_scope.score_director().index());
        let mut move_rng = ChaCha8Rng::from_rng(phase_scope.solver_scope_mut().rng());
        let mut acceptor_rng = ChaCha8Rng::from_rng(phase_scope.solver_scope_mut().rng());
        let mut moves = self.move_selector.iter_moves(&index, &mut move_rng);

        let mut last_progress_time = Instant::now();
        let mut last_progress_steps = 0u64;

        let reason = loop {
            if let Some(reason) = phase_scope.solver_scope().check_termination() {
                break reason;
            }
            let Some(m) = moves.next() else {
                break TerminationReason::Exhausted;
            };
            if !m.is_doable(phase_scope.score_director()) {
                continue;
            }

            self.acceptor
                .step_started(phase_scope.solver_scope().time_gradient());
            let move_score = m.do_move(phase_scope.score_director_mut());
            let accepted =
                self.acceptor
                    .is_accepted(&last_step_score, &move_score, &mut acceptor_rng);
            if accepted {
                self.acceptor.step_ended(&move_score);
                last_step_score = move_score;
            } else {
                m.undo_move(phase_scope.score_director_mut());
            }
            phase_scope.record_move(accepted);
            phase_scope.solver_scope().assert_score()?;
            if accepted {
                phase_scope.update_best_solution();
            }
            let step = phase_scope.increment_step_count();

            trace!(
                event = "step",
                step = step,
                kind = m.kind(),
                score = %move_score,
                accepted = accepted,
            );

            if last_progress_time.elapsed() >= Duration::from_secs(1) {
                let steps_in_period = step - last_progress_steps;
                let speed = (steps_in_period as f64 / last_progress_time.elapsed().as_secs_f64()) as u64;
                debug!(
                    event = "progress",
                    steps = step,
                    speed = speed,
                    score = %phase_scope
                        .solver_scope()
                        .best_score()
                        .unwrap_or(last_step_score),
                );
                last_progress_time = Instant::now();
                last_progress_steps = step;
            }
        };

        self.acceptor.phase_ended();

        let stats = phase_scope.finish(self.phase_type_name());
        let secs = stats.duration.as_secs_f64();
        let speed = if secs > 0.0 {
            (stats.step_count as f64 / secs) as u64
        } else {
            0
        };
        info!(
            event = "phase_end",
            phase = "Local Search",
            phase_index = phase_index,
            duration_ms = stats.duration.as_millis() as u64,
            steps = stats.step_count,
            speed = speed,
            acceptance_rate = stats.acceptance_rate(),
            score = %stats.ending_score,
            reason = reason.as_str(),
        );
        Ok(Some(reason))
    }

    fn phase_type_name(&self) -> &'static str {
        "Local Search"
    }
}
