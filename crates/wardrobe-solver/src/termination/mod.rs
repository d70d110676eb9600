//! Termination conditions for solver phases.
//!
//! A termination inspects the solver scope between steps and reports why the
//! run should stop, if it should.

mod best_score;
mod composite;
mod controller;
mod external;
mod step_count;
mod time;
mod unimproved;

#[cfg(test)]
mod tests;

use std::fmt::{self, Debug};

pub use best_score::BestScoreTermination;
pub use composite::OrTermination;
pub use controller::TerminationController;
pub use external::ExternalTermination;
pub use step_count::StepCountTermination;
pub use time::TimeTermination;
pub use unimproved::UnimprovedTimeTermination;

use crate::scope::SolverScope;

/// Why a run stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationReason {
    /// The best score reached the configured target.
    Converged,
    /// The time limit elapsed, or the best score stopped improving for too long.
    TimedOut,
    /// An external cancellation was observed.
    Cancelled,
    /// The configured step limit was reached.
    StepLimitReached,
    /// No move could be generated, or every phase ran to completion.
    Exhausted,
    /// The run aborted with an internal error; the best selection so far is kept.
    Failed(String),
}

impl TerminationReason {
    pub fn is_failure(&self) -> bool {
        matches!(self, TerminationReason::Failed(_))
    }

    /// Short identifier used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            TerminationReason::Converged => "converged",
            TerminationReason::TimedOut => "timed_out",
            TerminationReason::Cancelled => "cancelled",
            TerminationReason::StepLimitReached => "step_limit_reached",
            TerminationReason::Exhausted => "exhausted",
            TerminationReason::Failed(_) => "failed",
        }
    }
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminationReason::Failed(message) => write!(f, "failed: {}", message),
            other => f.write_str(other.as_str()),
        }
    }
}

/// Trait for determining when to stop solving.
pub trait Termination: Send + Debug {
    /// Returns the reason to stop, or `None` to keep going.
    fn check(&self, solver_scope: &SolverScope) -> Option<TerminationReason>;

    /// Returns true if solving should terminate.
    fn is_terminated(&self, solver_scope: &SolverScope) -> bool {
        self.check(solver_scope).is_some()
    }
}

impl<T: Termination> Termination for Option<T> {
    fn check(&self, solver_scope: &SolverScope) -> Option<TerminationReason> {
        self.as_ref().and_then(|t| t.check(solver_scope))
    }
}

impl<T: Termination + ?Sized> Termination for Box<T> {
    fn check(&self, solver_scope: &SolverScope) -> Option<TerminationReason> {
        (**self).check(solver_scope)
    }
}
