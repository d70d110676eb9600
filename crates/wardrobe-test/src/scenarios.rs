//! Named catalogs with their budgets.

use std::sync::Arc;

use wardrobe_core::{Budget, CatalogIndex, Category, Item, Money, PreferenceSet, WardrobeProblem};

use crate::items::{accessory, bottom, out_of_stock, outerwear, shoes, top};

/// A catalog plus the budget it is meant to be solved under.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub items: Vec<Item>,
    pub budget: Money,
}

impl Scenario {
    pub fn index(&self) -> Arc<CatalogIndex> {
        Arc::new(CatalogIndex::new(self.items.clone()))
    }

    pub fn budget(&self) -> Budget {
        Budget::new(self.budget).expect("scenario budgets are non-negative")
    }

    pub fn problem(&self) -> WardrobeProblem {
        WardrobeProblem::new(self.index(), self.budget(), PreferenceSet::new(["casual"]))
    }
}

/// One black top, one white bottom, one brown pair of shoes; everything fits.
///
/// Selecting all three is feasible with a soft reward of 40.
pub fn scenario_a() -> Scenario {
    Scenario {
        items: vec![
            top("t1", 50, "black"),
            bottom("b1", 50, "white"),
            shoes("s1", 80, "brown"),
        ],
        budget: Money::from_major(200),
    }
}

/// The scenario A catalog under a budget no single essential fits in.
pub fn scenario_b() -> Scenario {
    Scenario {
        budget: Money::from_major(40),
        ..scenario_a()
    }
}

/// Two black tops and two black bottoms: four clashing pairs when all are selected.
pub fn clashing_pairs() -> Scenario {
    Scenario {
        items: vec![
            top("t1", 10, "black"),
            top("t2", 10, "Black"),
            bottom("b1", 10, "black"),
            bottom("b2", 10, "BLACK"),
        ],
        budget: Money::from_major(1000),
    }
}

/// Tops and bottoms only; no selection can ever be feasible.
pub fn no_shoes() -> Scenario {
    Scenario {
        items: vec![
            top("t1", 20, "red"),
            top("t2", 25, "navy"),
            bottom("b1", 30, "blue"),
        ],
        budget: Money::from_major(500),
    }
}

/// A mid-sized catalog with out-of-stock items, clashes, and extras in
/// every category.
pub fn mixed_catalog() -> Scenario {
    Scenario {
        items: vec![
            top("t1", 40, "white"),
            top("t2", 35, "red"),
            out_of_stock(top("t3", 20, "black")),
            top("t4", 60, "navy"),
            bottom("b1", 55, "blue"),
            bottom("b2", 45, "white"),
            bottom("b3", 70, "black"),
            shoes("s1", 90, "brown"),
            shoes("s2", 60, "blue"),
            out_of_stock(shoes("s3", 30, "black")),
            outerwear("o1", 120, "beige"),
            outerwear("o2", 80, "green"),
            accessory("a1", 15, "gray"),
            accessory("a2", 25, "gold"),
        ],
        budget: Money::from_major(300),
    }
}

/// A deterministic catalog of `len` items cycling through categories,
/// colors, prices and stock states.
pub fn generated_catalog(len: usize) -> Scenario {
    const COLORS: [&str; 6] = ["black", "White", "red", "navy", "green", "Blue"];
    let items = (0..len)
        .map(|i| {
            let category = Category::ALL[i % Category::COUNT];
            let color = COLORS[(i * 7 + i / 5) % COLORS.len()];
            let dollars = 10 + ((i * 37) % 90) as i64;
            let item = Item::new(
                format!("item-{i}"),
                format!("generated {i}"),
                category,
                Money::from_major(dollars),
                "casual",
                color,
                true,
            );
            if i % 11 == 10 {
                out_of_stock(item)
            } else {
                item
            }
        })
        .collect();
    Scenario {
        items,
        budget: Money::from_major(15 * len as i64),
    }
}
