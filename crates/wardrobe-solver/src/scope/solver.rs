//! Solver-level scope.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;
use wardrobe_config::EnvironmentMode;
use wardrobe_core::{HardSoftScore, Result, Selection};
use wardrobe_scoring::ScoreDirector;

use crate::event::BestSolutionEvent;
use crate::statistics::SolverStatistics;
use crate::termination::{Termination, TerminationController, TerminationReason};

/// Top-level scope for one solver run.
///
/// Owns the score director holding the working selection, the best selection
/// seen so far, the seeded random source, and the termination conditions.
pub struct SolverScope {
    score_director: ScoreDirector,
    termination: TerminationController,
    environment_mode: EnvironmentMode,
    rng: StdRng,
    seed: u64,
    best_selection: Option<Selection>,
    best_score: Option<HardSoftScore>,
    start_time: Option<Instant>,
    last_improvement_time: Option<Instant>,
    total_step_count: u64,
    statistics: SolverStatistics,
    best_solution_sender: Option<UnboundedSender<BestSolutionEvent>>,
}

impl SolverScope {
    pub fn new(score_director: ScoreDirector, seed: u64) -> Self {
        Self {
            score_director,
            termination: TerminationController::default(),
            environment_mode: EnvironmentMode::default(),
            rng: StdRng::seed_from_u64(seed),
            seed,
            best_selection: None,
            best_score: None,
            start_time: None,
            last_improvement_time: None,
            total_step_count: 0,
            statistics: SolverStatistics::new(),
            best_solution_sender: None,
        }
    }

    pub fn with_termination(mut self, termination: TerminationController) -> Self {
        self.termination = termination;
        self
    }

    pub fn with_environment_mode(mut self, mode: EnvironmentMode) -> Self {
        self.environment_mode = mode;
        self
    }

    /// Publishes every new best selection on `sender`.
    pub fn with_best_solution_sender(mut self, sender: UnboundedSender<BestSolutionEvent>) -> Self {
        self.best_solution_sender = Some(sender);
        self
    }

    /// Starts the clock and records the initial selection as the best.
    pub fn start_solving(&mut self) {
        let now = Instant::now();
        self.start_time = Some(now);
        self.last_improvement_time = Some(now);
        self.total_step_count = 0;
        self.score_director.calculate_score();
        self.update_best_solution();
    }

    pub fn score_director(&self) -> &ScoreDirector {
        &self.score_director
    }

    pub fn score_director_mut(&mut self) -> &mut ScoreDirector {
        &mut self.score_director
    }

    pub fn termination(&self) -> &TerminationController {
        &self.termination
    }

    pub fn environment_mode(&self) -> EnvironmentMode {
        self.environment_mode
    }

    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn best_score(&self) -> Option<HardSoftScore> {
        self.best_score
    }

    pub fn best_selection(&self) -> Option<&Selection> {
        self.best_selection.as_ref()
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map(|t| t.elapsed()).unwrap_or_default()
    }

    pub fn time_since_last_improvement(&self) -> Duration {
        self.last_improvement_time
            .map(|t| t.elapsed())
            .unwrap_or_default()
    }

    /// Fraction of the run used so far, in `[0, 1]`.
    ///
    /// Measured against the time limit, or against the step limit in
    /// reproducible modes so that repeated runs anneal identically.
    pub fn time_gradient(&self) -> f64 {
        if self.environment_mode.is_reproducible() {
            if let Some(limit) = self.termination.step_limit() {
                if limit == 0 {
                    return 1.0;
                }
                return (self.total_step_count as f64 / limit as f64).clamp(0.0, 1.0);
            }
        }
        let limit = self.termination.time_limit().as_secs_f64();
        if limit <= 0.0 {
            return 1.0;
        }
        (self.elapsed().as_secs_f64() / limit).clamp(0.0, 1.0)
    }

    pub fn total_step_count(&self) -> u64 {
        self.total_step_count
    }

    pub fn increment_step_count(&mut self) -> u64 {
        self.total_step_count += 1;
        self.total_step_count
    }

    pub fn statistics(&self) -> &SolverStatistics {
        &self.statistics
    }

    pub fn statistics_mut(&mut self) -> &mut SolverStatistics {
        &mut self.statistics
    }

    pub fn check_termination(&self) -> Option<TerminationReason> {
        self.termination.check(self)
    }

    pub fn is_terminated(&self) -> bool {
        self.check_termination().is_some()
    }

    /// In full-assert mode, verifies the incremental score against a full
    /// recompute.
    pub fn assert_score(&self) -> Result<()> {
        if self.environment_mode.is_asserted() {
            self.score_director.assert_incremental()?;
        }
        Ok(())
    }

    /// Snapshots the working selection if it beats the best so far.
    ///
    /// Returns true when the best selection changed.
    pub fn update_best_solution(&mut self) -> bool {
        let current = self.score_director.score();
        let improved = self.best_score.map_or(true, |best| current > best);
        if !improved {
            return false;
        }

        let selection = self.score_director.clone_selection();
        let elapsed = self.elapsed();
        self.best_score = Some(current);
        self.last_improvement_time = Some(Instant::now());
        self.statistics
            .record_improvement(elapsed, self.total_step_count, current);

        debug!(
            event = "new_best",
            step = self.total_step_count,
            score = %current,
            selected = selection.selected_count(),
        );

        if let Some(sender) = &self.best_solution_sender {
            let _ = sender.send(BestSolutionEvent {
                score: current,
                selection: selection.clone(),
                step_count: self.total_step_count,
                elapsed,
            });
        }
        self.best_selection = Some(selection);
        true
    }

    /// The best selection, or the working one if nothing was recorded yet.
    pub fn take_best_selection(&mut self) -> Selection {
        self.best_selection
            .take()
            .unwrap_or_else(|| self.score_director.clone_selection())
    }

    /// Final statistics for the run.
    pub fn finish_statistics(&mut self) -> SolverStatistics {
        self.statistics.total_duration = self.elapsed();
        self.statistics.total_step_count = self.total_step_count;
        self.statistics.score_calculation_count = self.score_director.score_calculation_count();
        self.statistics.clone()
    }
}

impl std::fmt::Debug for SolverScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SolverScope")
            .field("seed", &self.seed)
            .field("best_score", &self.best_score)
            .field("total_step_count", &self.total_step_count)
            .field("environment_mode", &self.environment_mode)
            .finish()
    }
}
