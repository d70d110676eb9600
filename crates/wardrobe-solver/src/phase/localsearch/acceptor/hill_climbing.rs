//! Hill climbing acceptor.

use rand::RngCore;
use wardrobe_core::HardSoftScore;

use super::Acceptor;

/// Accepts only moves that do not worsen the score.
///
/// # Example
///
/// ```
/// use wardrobe_solver::{Acceptor, HillClimbingAcceptor};
/// use wardrobe_core::HardSoftScore;
///
/// let mut acceptor = HillClimbingAcceptor::new();
/// let mut rng = rand::rng();
/// let last = HardSoftScore::of(1000, 10);
/// assert!(acceptor.is_accepted(&last, &HardSoftScore::of(1000, 10), &mut rng));
/// assert!(acceptor.is_accepted(&last, &HardSoftScore::of(0, 0), &mut rng));
/// assert!(!acceptor.is_accepted(&last, &HardSoftScore::of(1000, 9), &mut rng));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct HillClimbingAcceptor;

impl HillClimbingAcceptor {
    pub fn new() -> Self {
        Self
    }
}

impl Acceptor for HillClimbingAcceptor {
    fn is_accepted(
        &mut self,
        last_step_score: &HardSoftScore,
        move_score: &HardSoftScore,
        _rng: &mut dyn RngCore,
    ) -> bool {
        move_score >= last_step_score
    }
}
