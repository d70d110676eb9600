//! Solver implementation.

use std::any::Any;
use std::fmt::Debug;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tracing::{info, warn};
use wardrobe_config::SolverConfig;
use wardrobe_core::{HardSoftScore, Item, Money, Result, Selection, WardrobeError, WardrobeProblem};
use wardrobe_scoring::{ScoreAnalysis, ScoreDirector};

use crate::builder::PhaseBuilder;
use crate::event::BestSolutionEvent;
use crate::phase::Phase;
use crate::scope::SolverScope;
use crate::statistics::SolverStatistics;
use crate::termination::{TerminationController, TerminationReason};

/// Lifecycle of a solver.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SolverStatus {
    #[default]
    Idle,
    Running,
    Terminated(TerminationReason),
}

/// Outcome of a run.
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// The best selection found.
    pub selection: Selection,
    /// The catalog items of `selection`, in catalog order.
    pub selected_items: Vec<Item>,
    pub score: HardSoftScore,
    /// Per-constraint breakdown of `score`.
    pub analysis: ScoreAnalysis,
    pub termination_reason: TerminationReason,
    pub elapsed: Duration,
    pub statistics: SolverStatistics,
    /// Seed of the random source; rerun with it to reproduce the run.
    pub seed: u64,
}

impl SolveResult {
    pub fn is_feasible(&self) -> bool {
        self.score.is_feasible()
    }

    pub fn total_price(&self) -> Money {
        self.selected_items.iter().map(|item| item.price()).sum()
    }

    pub fn selected_ids(&self) -> impl Iterator<Item = &str> {
        self.selected_items.iter().map(|item| item.id())
    }
}

/// Runs the configured phases over one problem.
///
/// The solver owns a cancellation flag that other threads may raise through
/// [`Solver::terminate_early_flag`] while [`Solver::solve`] is running.
pub struct Solver {
    phases: Vec<Box<dyn Phase>>,
    config: SolverConfig,
    terminate_early_flag: Arc<AtomicBool>,
    solving: Arc<AtomicBool>,
    status: SolverStatus,
    best_solution_sender: Option<UnboundedSender<BestSolutionEvent>>,
}

impl Solver {
    pub fn new(phases: Vec<Box<dyn Phase>>, config: SolverConfig) -> Self {
        Self {
            phases,
            config,
            terminate_early_flag: Arc::new(AtomicBool::new(false)),
            solving: Arc::new(AtomicBool::new(false)),
            status: SolverStatus::Idle,
            best_solution_sender: None,
        }
    }

    /// Validates the configuration and builds its phases.
    pub fn from_config(config: &SolverConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| WardrobeError::Config(e.to_string()))?;
        Ok(Self::new(PhaseBuilder::build_all(config), config.clone()))
    }

    /// Publishes every new best selection on `sender`.
    pub fn with_best_solution_sender(mut self, sender: UnboundedSender<BestSolutionEvent>) -> Self {
        self.best_solution_sender = Some(sender);
        self
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn status(&self) -> &SolverStatus {
        &self.status
    }

    pub fn is_solving(&self) -> bool {
        self.solving.load(Ordering::SeqCst)
    }

    /// Shared cancellation flag; raising it stops the run at the next step.
    pub fn terminate_early_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.terminate_early_flag)
    }

    /// Requests early termination of a running solve.
    ///
    /// Returns true if the solver was running.
    pub fn terminate_early(&self) -> bool {
        if self.is_solving() {
            self.terminate_early_flag.store(true, Ordering::SeqCst);
            true
        } else {
            false
        }
    }

    /// Solves `problem`.
    ///
    /// Only configuration problems are returned as errors. Failures during the
    /// run end it with [`TerminationReason::Failed`] and still return the best
    /// selection found before the failure.
    pub fn solve(&mut self, problem: &WardrobeProblem) -> Result<SolveResult> {
        let seed = resolve_seed(&self.config);
        let termination =
            TerminationController::from_config(&self.config, Arc::clone(&self.terminate_early_flag))?;
        let time_limit = termination.time_limit();

        let director = ScoreDirector::new(Arc::clone(problem.index()), problem.budget());
        let mut solver_scope = SolverScope::new(director, seed)
            .with_termination(termination)
            .with_environment_mode(self.config.environment_mode);
        if let Some(sender) = &self.best_solution_sender {
            solver_scope = solver_scope.with_best_solution_sender(sender.clone());
        }

        self.solving.store(true, Ordering::SeqCst);
        self.status = SolverStatus::Running;

        info!(
            event = "solve_start",
            items = problem.index().len(),
            budget = %problem.budget().limit(),
            preferred_styles = problem.preferences().len(),
            phases = self.phases.len(),
            seed = seed,
            time_limit_ms = u64::try_from(time_limit.as_millis()).unwrap_or(u64::MAX),
        );

        solver_scope.start_solving();

        let phases = &mut self.phases;
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            run_phases(phases, &mut solver_scope)
        }));
        let reason = match outcome {
            Ok(Ok(reason)) => reason,
            Ok(Err(e)) => {
                warn!(event = "solve_failed", error = %e);
                TerminationReason::Failed(e.to_string())
            }
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                warn!(event = "solve_failed", error = %message);
                TerminationReason::Failed(message)
            }
        };

        self.solving.store(false, Ordering::SeqCst);
        self.terminate_early_flag.store(false, Ordering::SeqCst);
        self.status = SolverStatus::Terminated(reason.clone());

        let result = build_result(problem, &mut solver_scope, reason)?;
        info!(
            event = "solve_end",
            score = %result.score,
            reason = result.termination_reason.as_str(),
            steps = result.statistics.total_step_count,
            moves_evaluated = result.statistics.total_moves_evaluated,
            duration_ms = result.elapsed.as_millis() as u64,
        );
        Ok(result)
    }
}

impl Debug for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Solver")
            .field("phases", &self.phases)
            .field("status", &self.status)
            .finish()
    }
}

fn run_phases(phases: &mut [Box<dyn Phase>], solver_scope: &mut SolverScope) -> Result<TerminationReason> {
    for (phase_index, phase) in phases.iter_mut().enumerate() {
        if let Some(reason) = solver_scope.check_termination() {
            return Ok(reason);
        }
        if let Some(reason) = phase.solve(solver_scope, phase_index)? {
            return Ok(reason);
        }
    }
    Ok(solver_scope
        .check_termination()
        .unwrap_or(TerminationReason::Exhausted))
}

/// Explicit seed, else 0 in reproducible mode, else a fresh random seed.
fn resolve_seed(config: &SolverConfig) -> u64 {
    match config.random_seed {
        Some(seed) => seed,
        None if config.environment_mode.is_reproducible() => 0,
        None => rand::random(),
    }
}

fn build_result(
    problem: &WardrobeProblem,
    solver_scope: &mut SolverScope,
    termination_reason: TerminationReason,
) -> Result<SolveResult> {
    let selection = solver_scope.take_best_selection();
    let statistics = solver_scope.finish_statistics();
    let index = problem.index();

    // Rescored from scratch: after a failure the counters may be stale.
    let director = ScoreDirector::new(Arc::clone(index), problem.budget())
        .with_selection(selection.clone())?;
    let analysis = director.analyze();
    let selected_items = selection
        .selected_indices()
        .map(|idx| index.item(idx).clone())
        .collect();

    Ok(SolveResult {
        score: analysis.score,
        selection,
        selected_items,
        analysis,
        termination_reason,
        elapsed: statistics.total_duration,
        statistics,
        seed: solver_scope.seed(),
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("solver panicked: {}", s)
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("solver panicked: {}", s)
    } else {
        "solver panicked".to_string()
    }
}
