//! Phase-level scope.

use std::time::{Duration, Instant};

use wardrobe_core::HardSoftScore;
use wardrobe_scoring::ScoreDirector;

use super::SolverScope;
use crate::statistics::PhaseStatistics;

/// Scope for a single phase.
pub struct PhaseScope<'a> {
    solver_scope: &'a mut SolverScope,
    phase_index: usize,
    starting_score: HardSoftScore,
    start_time: Instant,
    step_count: u64,
    moves_evaluated: u64,
    moves_accepted: u64,
}

impl<'a> PhaseScope<'a> {
    pub fn new(solver_scope: &'a mut SolverScope, phase_index: usize) -> Self {
        let starting_score = solver_scope.score_director().score();
        Self {
            solver_scope,
            phase_index,
            starting_score,
            start_time: Instant::now(),
            step_count: 0,
            moves_evaluated: 0,
            moves_accepted: 0,
        }
    }

    pub fn phase_index(&self) -> usize {
        self.phase_index
    }

    pub fn starting_score(&self) -> HardSoftScore {
        self.starting_score
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Counts one step in this phase and in the run; returns the phase count.
    pub fn increment_step_count(&mut self) -> u64 {
        self.step_count += 1;
        self.solver_scope.increment_step_count();
        self.step_count
    }

    pub fn record_move(&mut self, accepted: bool) {
        self.moves_evaluated += 1;
        if accepted {
            self.moves_accepted += 1;
        }
        self.solver_scope.statistics_mut().record_move(accepted);
    }

    pub fn solver_scope(&self) -> &SolverScope {
        &*self.solver_scope
    }

    pub fn solver_scope_mut(&mut self) -> &mut SolverScope {
        &mut *self.solver_scope
    }

    pub fn score_director(&self) -> &ScoreDirector {
        self.solver_scope.score_director()
    }

    pub fn score_director_mut(&mut self) -> &mut ScoreDirector {
        self.solver_scope.score_director_mut()
    }

    pub fn update_best_solution(&mut self) -> bool {
        self.solver_scope.update_best_solution()
    }

    /// Records this phase's statistics in the run and returns them.
    pub fn finish(self, phase_type: &'static str) -> PhaseStatistics {
        let stats = PhaseStatistics {
            phase_index: self.phase_index,
            phase_type,
            duration: self.start_time.elapsed(),
            step_count: self.step_count,
            moves_evaluated: self.moves_evaluated,
            moves_accepted: self.moves_accepted,
            starting_score: self.starting_score,
            ending_score: self.solver_scope.score_director().score(),
        };
        self.solver_scope.statistics_mut().record_phase(stats.clone());
        stats
    }
}
