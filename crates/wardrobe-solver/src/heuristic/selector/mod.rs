//! Move selectors.
//!
//! A selector turns a catalog and a random source into a lazy stream of
//! candidate moves. The local search phase pulls from it until termination.

use std::fmt::Debug;

use rand::Rng;
use wardrobe_core::{CatalogIndex, Category};

use super::r#move::WardrobeMove;

#[cfg(test)]
mod tests;

/// Produces candidate moves for a catalog.
///
/// The returned iterator ends when no move can be generated at all, which
/// the local search phase reports as exhaustion.
pub trait MoveSelector: Send + Debug {
    fn iter_moves<'a, R: Rng + 'a>(
        &'a self,
        index: &'a CatalogIndex,
        rng: R,
    ) -> impl Iterator<Item = WardrobeMove> + 'a;
}

/// Draws uniform random toggles, and with a configured probability a swap
/// between two items of one category.
#[derive(Debug, Clone, Copy)]
pub struct ToggleSwapMoveSelector {
    swap_probability: f64,
}

impl ToggleSwapMoveSelector {
    pub fn new(swap_probability: f64) -> Self {
        Self {
            swap_probability: if swap_probability.is_nan() {
                0.0
            } else {
                swap_probability.clamp(0.0, 1.0)
            },
        }
    }

    pub fn swap_probability(&self) -> f64 {
        self.swap_probability
    }
}

impl Default for ToggleSwapMoveSelector {
    fn default() -> Self {
        Self::new(wardrobe_config::DEFAULT_SWAP_PROBABILITY)
    }
}

impl MoveSelector for ToggleSwapMoveSelector {
    fn iter_moves<'a, R: Rng + 'a>(
        &'a self,
        index: &'a CatalogIndex,
        rng: R,
    ) -> impl Iterator<Item = WardrobeMove> + 'a {
        RandomMoveIter::new(index, self.swap_probability, rng)
    }
}

/// Endless random move stream over one catalog.
pub struct RandomMoveIter<'a, R> {
    index: &'a CatalogIndex,
    swappable: Vec<Category>,
    swap_probability: f64,
    rng: R,
}

impl<'a, R: Rng> RandomMoveIter<'a, R> {
    pub fn new(index: &'a CatalogIndex, swap_probability: f64, rng: R) -> Self {
        let swappable = Category::ALL
            .iter()
            .copied()
            .filter(|&category| index.category_count(category) >= 2)
            .collect();
        Self {
            index,
            swappable,
            swap_probability,
            rng,
        }
    }

    fn next_swap(&mut self) -> WardrobeMove {
        let category = self.swappable[self.rng.random_range(0..self.swappable.len())];
        let members = self.index.items_in_category(category);
        let first = self.rng.random_range(0..members.len());
        let mut second = self.rng.random_range(0..members.len() - 1);
        if second >= first {
            second += 1;
        }
        WardrobeMove::swap(members[first], members[second])
    }
}

impl<R: Rng> Iterator for RandomMoveIter<'_, R> {
    type Item = WardrobeMove;

    fn next(&mut self) -> Option<WardrobeMove> {
        if self.index.is_empty() {
            return None;
        }
        if !self.swappable.is_empty()
            && self.swap_probability > 0.0
            && self.rng.random_bool(self.swap_probability)
        {
            return Some(self.next_swap());
        }
        let idx = self.rng.random_range(0..self.index.len());
        Some(WardrobeMove::toggle(idx))
    }
}

impl<R> Debug for RandomMoveIter<'_, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RandomMoveIter")
            .field("catalog_len", &self.index.len())
            .field("swappable", &self.swappable)
            .field("swap_probability", &self.swap_probability)
            .finish()
    }
}
