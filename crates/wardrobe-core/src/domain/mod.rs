//! Domain model for the wardrobe bundle problem
//!
//! - `Item`: an immutable catalog fact
//! - `Category`: the apparel category of an item
//! - `Money`: prices and budgets in integer minor units
//! - `Selection`: the mutable planning state, one flag per catalog item
//! - `Budget`, `PreferenceSet`, `WardrobeProblem`: immutable run inputs

mod item;
mod money;
mod problem;
mod selection;


pub use item::{is_neutral_color, Category, Item, NEUTRAL_COLORS};
pub use money::Money;
pub use problem::{Budget, PreferenceSet, WardrobeProblem};
pub use selection::Selection;

/// Position of an item in the catalog; indexes the selection flags.
pub type ItemIdx = usize;
