//! Catalog items and their categories.

use std::fmt;

use super::Money;
use crate::error::{Result, WardrobeError};

/// Apparel category of a catalog item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum Category {
    Top,
    Bottom,
    Shoes,
    Outerwear,
    Accessory,
}

impl Category {
    /// Number of categories.
    pub const COUNT: usize = 5;

    /// All categories in index order.
    pub const ALL: [Category; Category::COUNT] = [
        Category::Top,
        Category::Bottom,
        Category::Shoes,
        Category::Outerwear,
        Category::Accessory,
    ];

    /// Categories every complete outfit needs at least one item of.
    pub const ESSENTIAL: [Category; 3] = [Category::Top, Category::Bottom, Category::Shoes];

    /// Dense index for per-category tables.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Category::Top => 0,
            Category::Bottom => 1,
            Category::Shoes => 2,
            Category::Outerwear => 3,
            Category::Accessory => 4,
        }
    }

    #[inline]
    pub const fn is_essential(self) -> bool {
        matches!(self, Category::Top | Category::Bottom | Category::Shoes)
    }

    /// Categories whose selected items must not share a color with this one.
    pub const fn clashes_with(self) -> &'static [Category] {
        match self {
            Category::Top => &[Category::Bottom],
            Category::Bottom => &[Category::Top, Category::Shoes],
            Category::Shoes => &[Category::Bottom],
            Category::Outerwear | Category::Accessory => &[],
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::Top => "TOP",
            Category::Bottom => "BOTTOM",
            Category::Shoes => "SHOES",
            Category::Outerwear => "OUTERWEAR",
            Category::Accessory => "ACCESSORY",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Colors that coordinate with anything.
pub const NEUTRAL_COLORS: [&str; 7] = ["black", "white", "gray", "grey", "navy", "beige", "brown"];

/// Returns true if `color` is neutral, ignoring case.
pub fn is_neutral_color(color: &str) -> bool {
    NEUTRAL_COLORS
        .iter()
        .any(|neutral| neutral.eq_ignore_ascii_case(color))
}

/// An immutable catalog item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: String,
    name: String,
    category: Category,
    price: Money,
    style: String,
    color: String,
    in_stock: bool,
}

impl Item {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: Category,
        price: Money,
        style: impl Into<String>,
        color: impl Into<String>,
        in_stock: bool,
    ) -> Self {
        Item {
            id: id.into(),
            name: name.into(),
            category,
            price,
            style: style.into(),
            color: color.into(),
            in_stock,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn style(&self) -> &str {
        &self.style
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn in_stock(&self) -> bool {
        self.in_stock
    }

    pub fn has_neutral_color(&self) -> bool {
        is_neutral_color(&self.color)
    }

    /// Checks the per-item boundary rules: non-empty id and color,
    /// non-negative price.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(WardrobeError::validation(
                self.id.clone(),
                format!("item '{}' has an empty id", self.name),
            ));
        }
        if self.price.is_negative() {
            return Err(WardrobeError::validation(
                self.id.clone(),
                format!("price {} is negative", self.price),
            ));
        }
        if self.color.trim().is_empty() {
            return Err(WardrobeError::validation(self.id.clone(), "color is empty"));
        }
        Ok(())
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} {}, {}, {})",
            self.name, self.color, self.category, self.style, self.price
        )
    }
}
