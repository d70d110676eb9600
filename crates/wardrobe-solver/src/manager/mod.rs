//! Background solving and multi-seed batches.
//!
//! [`SolverManager`] starts each solve on its own thread and returns a
//! [`SolverJob`] handle. The handle streams best-solution events over a tokio
//! channel, accepts cancellation, and yields the final result on join.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use rayon::prelude::*;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::info;
use wardrobe_config::SolverConfig;
use wardrobe_core::{Result, WardrobeError, WardrobeProblem};

use crate::event::BestSolutionEvent;
use crate::solver::{SolveResult, Solver};

#[cfg(test)]
mod tests;

/// Starts solver runs from one configuration.
#[derive(Debug, Clone, Default)]
pub struct SolverManager {
    config: SolverConfig,
}

impl SolverManager {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Starts solving `problem` on a background thread.
    pub fn solve(&self, problem: WardrobeProblem) -> Result<SolverJob> {
        let (sender, receiver) = mpsc::unbounded_channel();
        let mut solver = Solver::from_config(&self.config)?.with_best_solution_sender(sender);
        let terminate_flag = solver.terminate_early_flag();

        let handle = thread::Builder::new()
            .name("wardrobe-solver".to_string())
            .spawn(move || solver.solve(&problem))
            .map_err(|e| WardrobeError::Internal(format!("failed to spawn solver thread: {}", e)))?;

        Ok(SolverJob {
            handle,
            terminate_flag,
            receiver,
        })
    }

    /// Solves `problem` once per seed, in parallel, and returns the results in
    /// seed order.
    pub fn solve_batch(&self, problem: &WardrobeProblem, seeds: &[u64]) -> Result<Vec<SolveResult>> {
        info!(event = "batch_start", runs = seeds.len());
        let results: Vec<SolveResult> = seeds
            .par_iter()
            .map(|&seed| {
                let config = self.config.clone().with_random_seed(seed);
                Solver::from_config(&config)?.solve(problem)
            })
            .collect::<Result<_>>()?;
        if let Some(best) = best_of(&results) {
            info!(event = "batch_end", runs = results.len(), best_seed = best.seed, score = %best.score);
        }
        Ok(results)
    }
}

/// The result with the highest score; earlier entries win ties.
pub fn best_of(results: &[SolveResult]) -> Option<&SolveResult> {
    results
        .iter()
        .reduce(|best, candidate| if candidate.score > best.score { candidate } else { best })
}

/// Handle to a solve running on a background thread.
#[derive(Debug)]
pub struct SolverJob {
    handle: JoinHandle<Result<SolveResult>>,
    terminate_flag: Arc<AtomicBool>,
    receiver: UnboundedReceiver<BestSolutionEvent>,
}

impl SolverJob {
    /// Asks the run to stop at the next step; the best selection so far is
    /// still returned by [`SolverJob::join`].
    pub fn terminate_early(&self) {
        self.terminate_flag.store(true, Ordering::SeqCst);
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Next pending best-solution event, without blocking.
    pub fn try_next_event(&mut self) -> Option<BestSolutionEvent> {
        self.receiver.try_recv().ok()
    }

    /// The event stream, for `recv().await` or `blocking_recv()`.
    pub fn events(&mut self) -> &mut UnboundedReceiver<BestSolutionEvent> {
        &mut self.receiver
    }

    /// Waits for the run to finish and returns its result.
    pub fn join(self) -> Result<SolveResult> {
        self.handle
            .join()
            .map_err(|_| WardrobeError::Internal("solver thread panicked".to_string()))?
    }
}
