//! Score director for wardrobe selections.
//!
//! The score director owns the working [`Selection`] and keeps its score in
//! step with every toggle through a set of running counters.
//!
//! - [`ScoreDirector`] - Incremental O(1)-per-toggle scoring
//! - [`full_recompute`] - From-scratch scoring for verification

mod full;
pub(crate) mod tally;


use std::sync::Arc;

use wardrobe_core::{
    Budget, CatalogIndex, HardSoftScore, ItemIdx, Result, Selection, WardrobeError,
};

use crate::analysis::ScoreAnalysis;
use tally::ConstraintTally;

pub use full::full_recompute;

/// Owns the working selection and its incremental score state.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use wardrobe_core::{Budget, CatalogIndex, Category, HardSoftScore, Item, Money};
/// use wardrobe_scoring::ScoreDirector;
///
/// let items = vec![
///     Item::new("t1", "Black tee", Category::Top, Money::from_major(50), "casual", "black", true),
///     Item::new("b1", "White jeans", Category::Bottom, Money::from_major(50), "casual", "white", true),
///     Item::new("s1", "Brown boots", Category::Shoes, Money::from_major(80), "casual", "brown", true),
/// ];
/// let budget = Budget::new(Money::from_major(200)).unwrap();
/// let mut director = ScoreDirector::new(Arc::new(CatalogIndex::new(items)), budget);
///
/// assert_eq!(director.score(), HardSoftScore::of(3000, 0));
/// director.toggle(0);
/// director.toggle(1);
/// assert_eq!(director.toggle(2), HardSoftScore::of(0, 40));
/// ```
#[derive(Debug, Clone)]
pub struct ScoreDirector {
    index: Arc<CatalogIndex>,
    budget: Budget,
    selection: Selection,
    tally: ConstraintTally,
    score_calculation_count: u64,
}

impl ScoreDirector {
    /// Creates a director over an empty selection.
    pub fn new(index: Arc<CatalogIndex>, budget: Budget) -> Self {
        let selection = Selection::new(index.len());
        let tally = ConstraintTally::new(&index);
        ScoreDirector {
            index,
            budget,
            selection,
            tally,
            score_calculation_count: 0,
        }
    }

    /// Replaces the working selection and recomputes the counters.
    pub fn with_selection(mut self, selection: Selection) -> Result<Self> {
        if selection.len() != self.index.len() {
            return Err(WardrobeError::Internal(format!(
                "selection has {} flags but the catalog has {} items",
                selection.len(),
                self.index.len()
            )));
        }
        self.selection = selection;
        self.calculate_score();
        Ok(self)
    }

    /// Flips the item at `idx` and returns the updated score.
    ///
    /// Touches only the counters of that item.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not a catalog position.
    #[inline]
    pub fn toggle(&mut self, idx: ItemIdx) -> HardSoftScore {
        let sign = if self.selection.toggle(idx) { 1 } else { -1 };
        self.tally.apply(&self.index, idx, sign);
        self.score_calculation_count += 1;
        self.score()
    }

    /// Current score of the working selection.
    #[inline]
    pub fn score(&self) -> HardSoftScore {
        self.tally.score(self.budget)
    }

    /// Rebuilds the counters from the working selection and returns the score.
    pub fn calculate_score(&mut self) -> HardSoftScore {
        let mut tally = ConstraintTally::new(&self.index);
        for idx in self.selection.selected_indices() {
            tally.apply(&self.index, idx, 1);
        }
        self.tally = tally;
        self.score_calculation_count += 1;
        self.score()
    }

    /// Compares the incremental score with a full recompute.
    ///
    /// Returns the verified score, or [`WardrobeError::ScoreCorruption`] on
    /// mismatch.
    pub fn assert_incremental(&self) -> Result<HardSoftScore> {
        let incremental = self.score();
        let recomputed = full_recompute(&self.index, self.budget, &self.selection);
        if incremental != recomputed {
            return Err(WardrobeError::ScoreCorruption {
                incremental,
                recomputed,
            });
        }
        Ok(incremental)
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Value copy of the working selection, for best-solution snapshots.
    pub fn clone_selection(&self) -> Selection {
        self.selection.clone()
    }

    pub fn index(&self) -> &Arc<CatalogIndex> {
        &self.index
    }

    pub fn budget(&self) -> Budget {
        self.budget
    }

    /// Number of score updates performed so far.
    pub fn score_calculation_count(&self) -> u64 {
        self.score_calculation_count
    }

    /// Per-constraint breakdown of the current score.
    pub fn analyze(&self) -> ScoreAnalysis {
        ScoreAnalysis::from_tally(&self.tally, self.budget)
    }
}
