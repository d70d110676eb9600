//! Running per-constraint counters for O(1) toggles.

use wardrobe_core::{Budget, CatalogIndex, Category, HardSoftScore, ItemIdx, Money};

use crate::constraint::*;

/// Counters over the selected items, sufficient to produce the score and
/// the per-constraint analysis without touching the rest of the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ConstraintTally {
    pub(crate) total_price: Money,
    pub(crate) selected: i64,
    pub(crate) category_counts: [i64; Category::COUNT],
    pub(crate) out_of_stock: i64,
    pub(crate) neutral: i64,
    pub(crate) top_bottom_clashes: i64,
    pub(crate) bottom_shoes_clashes: i64,
    color_count: usize,
    // Selected items per (category, color), row-major by category.
    category_colors: Vec<i64>,
}

impl ConstraintTally {
    pub(crate) fn new(index: &CatalogIndex) -> Self {
        let color_count = index.color_count();
        ConstraintTally {
            total_price: Money::ZERO,
            selected: 0,
            category_counts: [0; Category::COUNT],
            out_of_stock: 0,
            neutral: 0,
            top_bottom_clashes: 0,
            bottom_shoes_clashes: 0,
            color_count,
            category_colors: vec![0; Category::COUNT * color_count],
        }
    }

    #[inline]
    fn selected_of(&self, category: Category, color: usize) -> i64 {
        self.category_colors[category.index() * self.color_count + color]
    }

    /// Adds (`sign == 1`) or removes (`sign == -1`) the item at `idx`.
    ///
    /// Clash pairs are counted against the opposite categories before the
    /// item's own counter moves.
    pub(crate) fn apply(&mut self, index: &CatalogIndex, idx: ItemIdx, sign: i64) {
        let item = index.item(idx);
        let category = item.category();
        let color = index.color_id(idx);

        match category {
            Category::Top => {
                self.top_bottom_clashes += sign * self.selected_of(Category::Bottom, color);
            }
            Category::Bottom => {
                self.top_bottom_clashes += sign * self.selected_of(Category::Top, color);
                self.bottom_shoes_clashes += sign * self.selected_of(Category::Shoes, color);
            }
            Category::Shoes => {
                self.bottom_shoes_clashes += sign * self.selected_of(Category::Bottom, color);
            }
            Category::Outerwear | Category::Accessory => {}
        }
        self.category_colors[category.index() * self.color_count + color] += sign;

        self.category_counts[category.index()] += sign;
        self.selected += sign;
        self.total_price += Money::from_minor(sign * item.price().minor_units());
        if !item.in_stock() {
            self.out_of_stock += sign;
        }
        if item.has_neutral_color() {
            self.neutral += sign;
        }
    }

    #[inline]
    pub(crate) fn count(&self, category: Category) -> i64 {
        self.category_counts[category.index()]
    }

    #[inline]
    pub(crate) fn is_missing(&self, category: Category) -> bool {
        self.count(category) == 0
    }

    pub(crate) fn score(&self, budget: Budget) -> HardSoftScore {
        let missing = Category::ESSENTIAL
            .iter()
            .filter(|&&category| self.is_missing(category))
            .count() as i64;

        let hard = budget.overflow(self.total_price)
            + MISSING_CATEGORY_PENALTY * missing
            + COLOR_CLASH_PENALTY * (self.top_bottom_clashes + self.bottom_shoes_clashes)
            + OUT_OF_STOCK_PENALTY * self.out_of_stock;

        let soft = OUTFIT_COMBINATION_REWARD
            * (self.count(Category::Top) + self.count(Category::Bottom))
            + NEUTRAL_COLOR_REWARD * self.neutral
            + OTHER_COLOR_REWARD * (self.selected - self.neutral)
            + STYLE_REWARD * self.selected;

        HardSoftScore::of(hard, soft)
    }
}
