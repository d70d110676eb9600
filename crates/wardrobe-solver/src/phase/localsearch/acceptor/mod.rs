//! Acceptors for local search move acceptance.
//!
//! Acceptors decide whether a candidate move is kept. Every acceptor here
//! keeps moves that do not worsen the last step score; they differ in how
//! they treat worsening moves.

mod hill_climbing;
mod late_acceptance;
mod simulated_annealing;


use std::fmt::Debug;

use rand::RngCore;
use wardrobe_core::HardSoftScore;

pub use hill_climbing::HillClimbingAcceptor;
pub use late_acceptance::LateAcceptanceAcceptor;
pub use simulated_annealing::SimulatedAnnealingAcceptor;

/// Trait for accepting or rejecting moves in local search.
pub trait Acceptor: Send + Debug {
    /// Returns true if a move leading to `move_score` should be kept.
    fn is_accepted(
        &mut self,
        last_step_score: &HardSoftScore,
        move_score: &HardSoftScore,
        rng: &mut dyn RngCore,
    ) -> bool;

    /// Called when a phase starts.
    fn phase_started(&mut self, _initial_score: &HardSoftScore) {}

    /// Called when a phase ends.
    fn phase_ended(&mut self) {}

    /// Called before each step with the fraction of the time limit used.
    fn step_started(&mut self, _time_gradient: f64) {}

    /// Called after an accepted step.
    fn step_ended(&mut self, _step_score: &HardSoftScore) {}
}

impl<A: Acceptor + ?Sized> Acceptor for Box<A> {
    fn is_accepted(
        &mut self,
        last_step_score: &HardSoftScore,
        move_score: &HardSoftScore,
        rng: &mut dyn RngCore,
    ) -> bool {
        (**self).is_accepted(last_step_score, move_score, rng)
    }

    fn phase_started(&mut self, initial_score: &HardSoftScore) {
        (**self).phase_started(initial_score)
    }

    fn phase_ended(&mut self) {
        (**self).phase_ended()
    }

    fn step_started(&mut self, time_gradient: f64) {
        (**self).step_started(time_gradient)
    }

    fn step_ended(&mut self, step_score: &HardSoftScore) {
        (**self).step_ended(step_score)
    }
}

/// How much `candidate` worsens `last`: hard increase plus soft decrease.
///
/// Zero when the candidate is at least as good on both levels.
pub fn score_worsening(last: &HardSoftScore, candidate: &HardSoftScore) -> i64 {
    let hard_increase = (candidate.hard_violation() - last.hard_violation()).max(0);
    let soft_decrease = (last.soft_reward() - candidate.soft_reward()).max(0);
    hard_increase.saturating_add(soft_decrease)
}
