//! Late acceptance acceptor.

use rand::RngCore;
use wardrobe_core::HardSoftScore;

use super::Acceptor;

/// Accepts a move if it is at least as good as the last step score or the
/// step score from `late_acceptance_size` steps ago.
#[derive(Debug, Clone)]
pub struct LateAcceptanceAcceptor {
    late_acceptance_size: usize,
    score_history: Vec<HardSoftScore>,
    current_index: usize,
}

impl LateAcceptanceAcceptor {
    /// # Panics
    ///
    /// Panics if `late_acceptance_size` is 0.
    pub fn new(late_acceptance_size: usize) -> Self {
        assert!(
            late_acceptance_size > 0,
            "late_acceptance_size must be > 0, got 0"
        );
        Self {
            late_acceptance_size,
            score_history: Vec::with_capacity(late_acceptance_size),
            current_index: 0,
        }
    }

    pub fn late_acceptance_size(&self) -> usize {
        self.late_acceptance_size
    }
}

impl Default for LateAcceptanceAcceptor {
    fn default() -> Self {
        Self::new(wardrobe_config::DEFAULT_LATE_ACCEPTANCE_SIZE)
    }
}

impl Acceptor for LateAcceptanceAcceptor {
    fn is_accepted(
        &mut self,
        last_step_score: &HardSoftScore,
        move_score: &HardSoftScore,
        _rng: &mut dyn RngCore,
    ) -> bool {
        if move_score >= last_step_score {
            return true;
        }
        self.score_history
            .get(self.current_index)
            .is_some_and(|late| move_score >= late)
    }

    fn phase_started(&mut self, initial_score: &HardSoftScore) {
        self.score_history = vec![*initial_score; self.late_acceptance_size];
        self.current_index = 0;
    }

    fn phase_ended(&mut self) {
        self.score_history.clear();
    }

    fn step_ended(&mut self, step_score: &HardSoftScore) {
        if let Some(slot) = self.score_history.get_mut(self.current_index) {
            *slot = *step_score;
            self.current_index = (self.current_index + 1) % self.late_acceptance_size;
        }
    }
}
