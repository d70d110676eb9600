//! The mutable planning state.

use super::ItemIdx;

/// One included flag per catalog item, indexed by catalog position.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    included: Vec<bool>,
}

impl Selection {
    /// Creates a selection over `len` items with nothing included.
    pub fn new(len: usize) -> Self {
        Selection {
            included: vec![false; len],
        }
    }

    pub fn from_flags(included: Vec<bool>) -> Self {
        Selection { included }
    }

    pub fn len(&self) -> usize {
        self.included.len()
    }

    pub fn is_empty(&self) -> bool {
        self.included.is_empty()
    }

    #[inline]
    pub fn is_included(&self, idx: ItemIdx) -> bool {
        self.included[idx]
    }

    #[inline]
    pub fn set(&mut self, idx: ItemIdx, included: bool) {
        self.included[idx] = included;
    }

    /// Flips the flag of `idx` and returns the new state.
    #[inline]
    pub fn toggle(&mut self, idx: ItemIdx) -> bool {
        let flag = &mut self.included[idx];
        *flag = !*flag;
        *flag
    }

    pub fn selected_indices(&self) -> impl Iterator<Item = ItemIdx> + '_ {
        self.included
            .iter()
            .enumerate()
            .filter_map(|(idx, &included)| included.then_some(idx))
    }

    pub fn selected_count(&self) -> usize {
        self.included.iter().filter(|&&included| included).count()
    }

    pub fn as_flags(&self) -> &[bool] {
        &self.included
    }
}
