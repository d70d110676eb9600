//! The termination set a solver run checks between steps.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

use wardrobe_config::{SolverConfig, DEFAULT_TIME_LIMIT};
use wardrobe_core::{Result, WardrobeError};

use super::{
    BestScoreTermination, ExternalTermination, OrTermination, StepCountTermination, Termination,
    TerminationReason, TimeTermination, UnimprovedTimeTermination,
};
use crate::scope::SolverScope;

type Conditions = (
    Option<BestScoreTermination>,
    ExternalTermination,
    TimeTermination,
    Option<StepCountTermination>,
    Option<UnimprovedTimeTermination>,
);

/// All termination conditions of one run.
///
/// Priority when several hold at once: converged, cancelled, timed out, then
/// the step and unimproved limits.
#[derive(Debug, Clone)]
pub struct TerminationController {
    conditions: OrTermination<Conditions>,
}

impl TerminationController {
    /// Time limit plus cancellation, with no score target.
    pub fn new(time_limit: Duration, cancel_flag: Arc<AtomicBool>) -> Self {
        Self {
            conditions: OrTermination((
                None,
                ExternalTermination::new(cancel_flag),
                TimeTermination::new(time_limit),
                None,
                None,
            )),
        }
    }

    /// Builds the conditions from the solver configuration.
    ///
    /// An explicit `best_score_limit` takes precedence over `target_hard_zero`.
    pub fn from_config(config: &SolverConfig, cancel_flag: Arc<AtomicBool>) -> Result<Self> {
        let termination = config.termination_or_default();
        let best_score_limit = termination
            .best_score_limit()
            .map_err(|e| WardrobeError::Config(e.to_string()))?;

        let mut controller = Self::new(config.effective_time_limit(), cancel_flag);
        if let Some(target) = best_score_limit {
            controller = controller.with_best_score(BestScoreTermination::new(target));
        } else if termination.target_hard_zero() {
            controller = controller.with_best_score(BestScoreTermination::feasible());
        }
        if let Some(steps) = termination.step_count_limit {
            controller = controller.with_step_limit(steps);
        }
        if let Some(limit) = termination.unimproved_time_limit() {
            controller = controller.with_unimproved_time_limit(limit);
        }
        Ok(controller)
    }

    pub fn with_best_score(mut self, termination: BestScoreTermination) -> Self {
        self.conditions.0 .0 = Some(termination);
        self
    }

    pub fn with_step_limit(mut self, steps: u64) -> Self {
        self.conditions.0 .3 = Some(StepCountTermination::new(steps));
        self
    }

    pub fn with_unimproved_time_limit(mut self, limit: Duration) -> Self {
        self.conditions.0 .4 = Some(UnimprovedTimeTermination::new(limit));
        self
    }

    /// Hard time limit of the run; drives the annealing schedule.
    pub fn time_limit(&self) -> Duration {
        self.conditions.0 .2.limit()
    }

    pub fn step_limit(&self) -> Option<u64> {
        self.conditions.0 .3.map(|t| t.limit())
    }

    pub fn cancel_flag(&self) -> &Arc<AtomicBool> {
        self.conditions.0 .1.flag()
    }

    pub fn best_score(&self) -> Option<&BestScoreTermination> {
        self.conditions.0 .0.as_ref()
    }
}

impl Default for TerminationController {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_LIMIT, Arc::new(AtomicBool::new(false)))
    }
}

impl Termination for TerminationController {
    fn check(&self, solver_scope: &SolverScope) -> Option<TerminationReason> {
        self.conditions.check(solver_scope)
    }
}
