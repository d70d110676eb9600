//! Events published while solving.

use std::time::Duration;

use wardrobe_core::{HardSoftScore, Selection};

/// Sent whenever the best selection improves.
#[derive(Debug, Clone, PartialEq)]
pub struct BestSolutionEvent {
    pub score: HardSoftScore,
    pub selection: Selection,
    /// Total steps taken when the improvement was found.
    pub step_count: u64,
    /// Time since the run started.
    pub elapsed: Duration,
}
