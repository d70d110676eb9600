//! The compiled-in wardrobe constraints and their weights.

use std::fmt;

use wardrobe_core::ScoreLevel;

/// Hard penalty per missing essential category.
pub const MISSING_CATEGORY_PENALTY: i64 = 1000;
/// Hard penalty per clashing color pair.
pub const COLOR_CLASH_PENALTY: i64 = 1000;
/// Hard penalty per selected out-of-stock item.
pub const OUT_OF_STOCK_PENALTY: i64 = 100;
/// Soft reward per selected top or bottom.
pub const OUTFIT_COMBINATION_REWARD: i64 = 10;
/// Soft reward per selected item in a neutral color.
pub const NEUTRAL_COLOR_REWARD: i64 = 5;
/// Soft reward per selected item in any other color.
pub const OTHER_COLOR_REWARD: i64 = 1;
/// Flat soft reward per selected item.
pub const STYLE_REWARD: i64 = 3;

/// One of the ten scored constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WardrobeConstraint {
    Budget,
    MissingTop,
    MissingBottom,
    MissingShoes,
    InStock,
    TopBottomColors,
    BottomShoesColors,
    OutfitCombinations,
    CoordinatedColors,
    StylePreferences,
}

impl WardrobeConstraint {
    pub const ALL: [WardrobeConstraint; 10] = [
        WardrobeConstraint::Budget,
        WardrobeConstraint::MissingTop,
        WardrobeConstraint::MissingBottom,
        WardrobeConstraint::MissingShoes,
        WardrobeConstraint::InStock,
        WardrobeConstraint::TopBottomColors,
        WardrobeConstraint::BottomShoesColors,
        WardrobeConstraint::OutfitCombinations,
        WardrobeConstraint::CoordinatedColors,
        WardrobeConstraint::StylePreferences,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            WardrobeConstraint::Budget => "Budget constraint",
            WardrobeConstraint::MissingTop => "Must have at least 1 TOP",
            WardrobeConstraint::MissingBottom => "Must have at least 1 BOTTOM",
            WardrobeConstraint::MissingShoes => "Must have at least 1 SHOES",
            WardrobeConstraint::InStock => "Items must be in stock",
            WardrobeConstraint::TopBottomColors => "Top and bottom must have different colors",
            WardrobeConstraint::BottomShoesColors => {
                "Bottom and shoes must have different colors"
            }
            WardrobeConstraint::OutfitCombinations => "Maximize outfit combinations",
            WardrobeConstraint::CoordinatedColors => "Coordinated colors",
            WardrobeConstraint::StylePreferences => "Match style preferences",
        }
    }

    pub const fn level(self) -> ScoreLevel {
        match self {
            WardrobeConstraint::OutfitCombinations
            | WardrobeConstraint::CoordinatedColors
            | WardrobeConstraint::StylePreferences => ScoreLevel::Soft,
            _ => ScoreLevel::Hard,
        }
    }

    pub const fn is_hard(self) -> bool {
        matches!(self.level(), ScoreLevel::Hard)
    }
}

impl fmt::Display for WardrobeConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
