//! Per-constraint score breakdown.

use std::fmt;

use wardrobe_core::{Budget, Category, HardSoftScore, ScoreLevel};

use crate::constraint::*;
use crate::director::tally::ConstraintTally;

/// Contribution of a single constraint to the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstraintAnalysis {
    pub constraint: WardrobeConstraint,
    /// Number of matches (items, pairs or missing categories).
    pub match_count: u64,
    /// Total impact of this constraint.
    pub score: HardSoftScore,
}

impl ConstraintAnalysis {
    pub fn name(&self) -> &'static str {
        self.constraint.name()
    }

    pub fn level(&self) -> ScoreLevel {
        self.constraint.level()
    }

    pub fn is_hard(&self) -> bool {
        self.constraint.is_hard()
    }
}

/// Total score with its per-constraint breakdown, in constraint order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreAnalysis {
    pub score: HardSoftScore,
    pub constraints: Vec<ConstraintAnalysis>,
}

impl ScoreAnalysis {
    pub(crate) fn from_tally(tally: &ConstraintTally, budget: Budget) -> Self {
        let overflow = budget.overflow(tally.total_price);
        let missing = |category: Category| u64::from(tally.is_missing(category));
        let combos = tally.count(Category::Top) + tally.count(Category::Bottom);
        let others = tally.selected - tally.neutral;

        let rows = [
            (
                WardrobeConstraint::Budget,
                u64::from(overflow > 0),
                HardSoftScore::of_hard(overflow),
            ),
            missing_row(WardrobeConstraint::MissingTop, missing(Category::Top)),
            missing_row(WardrobeConstraint::MissingBottom, missing(Category::Bottom)),
            missing_row(WardrobeConstraint::MissingShoes, missing(Category::Shoes)),
            (
                WardrobeConstraint::InStock,
                tally.out_of_stock as u64,
                HardSoftScore::of_hard(OUT_OF_STOCK_PENALTY * tally.out_of_stock),
            ),
            (
                WardrobeConstraint::TopBottomColors,
                tally.top_bottom_clashes as u64,
                HardSoftScore::of_hard(COLOR_CLASH_PENALTY * tally.top_bottom_clashes),
            ),
            (
                WardrobeConstraint::BottomShoesColors,
                tally.bottom_shoes_clashes as u64,
                HardSoftScore::of_hard(COLOR_CLASH_PENALTY * tally.bottom_shoes_clashes),
            ),
            (
                WardrobeConstraint::OutfitCombinations,
                combos as u64,
                HardSoftScore::of_soft(OUTFIT_COMBINATION_REWARD * combos),
            ),
            (
                WardrobeConstraint::CoordinatedColors,
                tally.selected as u64,
                HardSoftScore::of_soft(
                    NEUTRAL_COLOR_REWARD * tally.neutral + OTHER_COLOR_REWARD * others,
                ),
            ),
            (
                WardrobeConstraint::StylePreferences,
                tally.selected as u64,
                HardSoftScore::of_soft(STYLE_REWARD * tally.selected),
            ),
        ];

        let constraints: Vec<_> = rows
            .into_iter()
            .map(|(constraint, match_count, score)| ConstraintAnalysis {
                constraint,
                match_count,
                score,
            })
            .collect();
        let score = constraints.iter().map(|c| c.score).sum();

        ScoreAnalysis { score, constraints }
    }

    /// Looks up the analysis of one constraint.
    pub fn get(&self, constraint: WardrobeConstraint) -> Option<&ConstraintAnalysis> {
        self.constraints.iter().find(|c| c.constraint == constraint)
    }

    /// Hard constraints with a non-zero violation; empty when feasible.
    pub fn violated_constraints(&self) -> impl Iterator<Item = &ConstraintAnalysis> {
        self.constraints
            .iter()
            .filter(|c| c.is_hard() && c.score.hard_violation() > 0)
    }

    /// Constraints that contributed anything to the score.
    pub fn non_zero_constraints(&self) -> impl Iterator<Item = &ConstraintAnalysis> {
        self.constraints
            .iter()
            .filter(|c| c.score != HardSoftScore::ZERO)
    }

    pub fn total_match_count(&self) -> u64 {
        self.constraints.iter().map(|c| c.match_count).sum()
    }
}

fn missing_row(
    constraint: WardrobeConstraint,
    missing: u64,
) -> (WardrobeConstraint, u64, HardSoftScore) {
    (
        constraint,
        missing,
        HardSoftScore::of_hard(MISSING_CATEGORY_PENALTY * missing as i64),
    )
}

impl fmt::Display for ScoreAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Score: {}", self.score)?;
        for c in self.non_zero_constraints() {
            writeln!(
                f,
                "  {}: {} ({} matches)",
                c.name(),
                c.score,
                c.match_count
            )?;
        }
        Ok(())
    }
}
