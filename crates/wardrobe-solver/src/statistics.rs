//! Solver statistics.
//!
//! Collected by the scopes while solving and returned with the result.

use std::time::Duration;

use wardrobe_core::HardSoftScore;

/// Statistics for one phase.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseStatistics {
    pub phase_index: usize,
    pub phase_type: &'static str,
    pub duration: Duration,
    pub step_count: u64,
    pub moves_evaluated: u64,
    pub moves_accepted: u64,
    pub starting_score: HardSoftScore,
    pub ending_score: HardSoftScore,
}

impl PhaseStatistics {
    /// Fraction of evaluated moves that were accepted.
    pub fn acceptance_rate(&self) -> f64 {
        if self.moves_evaluated == 0 {
            0.0
        } else {
            self.moves_accepted as f64 / self.moves_evaluated as f64
        }
    }
}

/// A point where the best score improved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreImprovement {
    /// Time since the run started.
    pub time_offset: Duration,
    /// Total steps at the time of improvement.
    pub step_count: u64,
    pub score: HardSoftScore,
}

/// Statistics for a whole run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SolverStatistics {
    pub total_duration: Duration,
    pub total_step_count: u64,
    pub total_moves_evaluated: u64,
    pub total_moves_accepted: u64,
    pub score_calculation_count: u64,
    pub phase_statistics: Vec<PhaseStatistics>,
    pub score_history: Vec<ScoreImprovement>,
}

impl SolverStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_move(&mut self, accepted: bool) {
        self.total_moves_evaluated += 1;
        if accepted {
            self.total_moves_accepted += 1;
        }
    }

    pub fn record_improvement(&mut self, time_offset: Duration, step_count: u64, score: HardSoftScore) {
        self.score_history.push(ScoreImprovement {
            time_offset,
            step_count,
            score,
        });
    }

    pub fn record_phase(&mut self, phase: PhaseStatistics) {
        self.phase_statistics.push(phase);
    }

    pub fn acceptance_rate(&self) -> f64 {
        if self.total_moves_evaluated == 0 {
            0.0
        } else {
            self.total_moves_accepted as f64 / self.total_moves_evaluated as f64
        }
    }

    pub fn improvement_count(&self) -> usize {
        self.score_history.len()
    }

    pub fn best_score(&self) -> Option<HardSoftScore> {
        self.score_history.last().map(|i| i.score)
    }

    /// Average steps per second over the whole run.
    pub fn steps_per_second(&self) -> u64 {
        let secs = self.total_duration.as_secs_f64();
        if secs > 0.0 {
            (self.total_step_count as f64 / secs) as u64
        } else {
            0
        }
    }
}
