//! Move system for modifying the working selection.
//!
//! Every move is a set of item flips. A flip is its own inverse, so undoing a
//! move replays it.

use std::fmt::{self, Debug};

use wardrobe_core::{HardSoftScore, ItemIdx};
use wardrobe_scoring::ScoreDirector;


/// A change to the working selection.
///
/// Moves are applied through the score director so that the incremental
/// counters stay in sync with the selection.
pub trait Move: Send + Sync + Debug {
    /// Returns true if this move can be executed against the current state.
    ///
    /// Moves that are not doable are skipped without counting as a step.
    fn is_doable(&self, score_director: &ScoreDirector) -> bool;

    /// Executes the move and returns the resulting score.
    fn do_move(&self, score_director: &mut ScoreDirector) -> HardSoftScore;

    /// Reverts a previous `do_move` and returns the restored score.
    fn undo_move(&self, score_director: &mut ScoreDirector) -> HardSoftScore {
        self.do_move(score_director)
    }

    /// Catalog positions touched by this move.
    fn item_indices(&self) -> &[ItemIdx];
}

/// Flips a single item in or out of the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleMove {
    items: [ItemIdx; 1],
}

impl ToggleMove {
    pub fn new(idx: ItemIdx) -> Self {
        Self { items: [idx] }
    }

    pub fn item(&self) -> ItemIdx {
        self.items[0]
    }
}

impl Move for ToggleMove {
    fn is_doable(&self, score_director: &ScoreDirector) -> bool {
        self.item() < score_director.selection().len()
    }

    fn do_move(&self, score_director: &mut ScoreDirector) -> HardSoftScore {
        score_director.toggle(self.item())
    }

    fn item_indices(&self) -> &[ItemIdx] {
        &self.items
    }
}

/// Flips two distinct items of the same category together.
///
/// When exactly one of them is selected this exchanges one item for the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapMove {
    items: [ItemIdx; 2],
}

impl SwapMove {
    pub fn new(left: ItemIdx, right: ItemIdx) -> Self {
        Self {
            items: [left, right],
        }
    }

    pub fn left(&self) -> ItemIdx {
        self.items[0]
    }

    pub fn right(&self) -> ItemIdx {
        self.items[1]
    }
}

impl Move for SwapMove {
    fn is_doable(&self, score_director: &ScoreDirector) -> bool {
        let (left, right) = (self.left(), self.right());
        let len = score_director.selection().len();
        if left == right || left >= len || right >= len {
            return false;
        }
        let index = score_director.index();
        index.item(left).category() == index.item(right).category()
    }

    fn do_move(&self, score_director: &mut ScoreDirector) -> HardSoftScore {
        score_director.toggle(self.left());
        score_director.toggle(self.right())
    }

    fn undo_move(&self, score_director: &mut ScoreDirector) -> HardSoftScore {
        score_director.toggle(self.right());
        score_director.toggle(self.left())
    }

    fn item_indices(&self) -> &[ItemIdx] {
        &self.items
    }
}

/// The moves drawn by the local search phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WardrobeMove {
    Toggle(ToggleMove),
    Swap(SwapMove),
}

impl WardrobeMove {
    pub fn toggle(idx: ItemIdx) -> Self {
        WardrobeMove::Toggle(ToggleMove::new(idx))
    }

    pub fn swap(left: ItemIdx, right: ItemIdx) -> Self {
        WardrobeMove::Swap(SwapMove::new(left, right))
    }

    /// Short name used in step logs.
    pub fn kind(&self) -> &'static str {
        match self {
            WardrobeMove::Toggle(_) => "toggle",
            WardrobeMove::Swap(_) => "swap",
        }
    }
}

impl Move for WardrobeMove {
    fn is_doable(&self, score_director: &ScoreDirector) -> bool {
        match self {
            WardrobeMove::Toggle(m) => m.is_doable(score_director),
            WardrobeMove::Swap(m) => m.is_doable(score_director),
        }
    }

    fn do_move(&self, score_director: &mut ScoreDirector) -> HardSoftScore {
        match self {
            WardrobeMove::Toggle(m) => m.do_move(score_director),
            WardrobeMove::Swap(m) => m.do_move(score_director),
        }
    }

    fn undo_move(&self, score_director: &mut ScoreDirector) -> HardSoftScore {
        match self {
            WardrobeMove::Toggle(m) => m.undo_move(score_director),
            WardrobeMove::Swap(m) => m.undo_move(score_director),
        }
    }

    fn item_indices(&self) -> &[ItemIdx] {
        match self {
            WardrobeMove::Toggle(m) => m.item_indices(),
            WardrobeMove::Swap(m) => m.item_indices(),
        }
    }
}

impl fmt::Display for WardrobeMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WardrobeMove::Toggle(m) => write!(f, "toggle({})", m.item()),
            WardrobeMove::Swap(m) => write!(f, "swap({}, {})", m.left(), m.right()),
        }
    }
}
