//! Simulated annealing acceptor.

use rand::{Rng, RngCore};
use wardrobe_core::HardSoftScore;

use super::{score_worsening, Acceptor};

/// Accepts worsening moves with probability `exp(-delta / T)`.
///
/// `delta` is the hard increase plus the soft decrease of the move. The
/// temperature falls linearly from the starting temperature to zero as the
/// time limit is used up; at zero only non-worsening moves pass.
#[derive(Debug, Clone)]
pub struct SimulatedAnnealingAcceptor {
    starting_temperature: f64,
    current_temperature: f64,
}

impl SimulatedAnnealingAcceptor {
    pub fn new(starting_temperature: f64) -> Self {
        Self {
            starting_temperature,
            current_temperature: starting_temperature,
        }
    }

    pub fn starting_temperature(&self) -> f64 {
        self.starting_temperature
    }

    pub fn current_temperature(&self) -> f64 {
        self.current_temperature
    }
}

impl Default for SimulatedAnnealingAcceptor {
    fn default() -> Self {
        Self::new(wardrobe_config::DEFAULT_STARTING_TEMPERATURE)
    }
}

impl Acceptor for SimulatedAnnealingAcceptor {
    fn is_accepted(
        &mut self,
        last_step_score: &HardSoftScore,
        move_score: &HardSoftScore,
        rng: &mut dyn RngCore,
    ) -> bool {
        if move_score >= last_step_score {
            return true;
        }
        if self.current_temperature <= 0.0 {
            return false;
        }
        let delta = score_worsening(last_step_score, move_score) as f64;
        let probability = (-delta / self.current_temperature).exp();
        rng.random::<f64>() < probability
    }

    fn phase_started(&mut self, _initial_score: &HardSoftScore) {
        self.current_temperature = self.starting_temperature;
    }

    fn step_started(&mut self, time_gradient: f64) {
        let gradient = time_gradient.clamp(0.0, 1.0);
        self.current_temperature = self.starting_temperature * (1.0 - gradient);
    }
}
