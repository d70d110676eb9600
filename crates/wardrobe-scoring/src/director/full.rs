//! From-scratch scoring, independent of the incremental counters.

use wardrobe_core::{Budget, CatalogIndex, Category, HardSoftScore, Money, Selection};

use crate::constraint::*;

/// Scores `selection` by walking the selected items and every selected
/// clash pair.
///
/// Pure and O(k²) in the number of selected items; used for verification
/// and for resynchronizing, never inside the search loop.
pub fn full_recompute(index: &CatalogIndex, budget: Budget, selection: &Selection) -> HardSoftScore {
    let selected: Vec<_> = selection.selected_indices().map(|idx| index.item(idx)).collect();

    let total_price: Money = selected.iter().map(|item| item.price()).sum();
    let mut hard = budget.overflow(total_price);

    for category in Category::ESSENTIAL {
        if !selected.iter().any(|item| item.category() == category) {
            hard += MISSING_CATEGORY_PENALTY;
        }
    }

    let out_of_stock = selected.iter().filter(|item| !item.in_stock()).count() as i64;
    hard += OUT_OF_STOCK_PENALTY * out_of_stock;

    for (i, a) in selected.iter().enumerate() {
        for b in &selected[i + 1..] {
            let clashing_categories = a.category().clashes_with().contains(&b.category());
            if clashing_categories && a.color().to_lowercase() == b.color().to_lowercase() {
                hard += COLOR_CLASH_PENALTY;
            }
        }
    }

    let mut soft = 0;
    for item in &selected {
        if matches!(item.category(), Category::Top | Category::Bottom) {
            soft += OUTFIT_COMBINATION_REWARD;
        }
        soft += if item.has_neutral_color() {
            NEUTRAL_COLOR_REWARD
        } else {
            OTHER_COLOR_REWARD
        };
        soft += STYLE_REWARD;
    }

    HardSoftScore::of(hard, soft)
}
