//! Catalog index: category and color lookups over an immutable item list.

use std::collections::HashMap;

use crate::domain::{Category, Item, ItemIdx};

/// Dense id of a lowercased color.
pub type ColorId = usize;

/// Read-only index over the catalog, built once per problem and shared by
/// concurrent runs behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    items: Vec<Item>,
    by_category: [Vec<ItemIdx>; Category::COUNT],
    item_colors: Vec<ColorId>,
    by_color: Vec<Vec<ItemIdx>>,
    color_lookup: HashMap<String, ColorId>,
}

impl CatalogIndex {
    pub fn new(items: Vec<Item>) -> Self {
        let mut by_category: [Vec<ItemIdx>; Category::COUNT] = Default::default();
        let mut item_colors = Vec::with_capacity(items.len());
        let mut by_color: Vec<Vec<ItemIdx>> = Vec::new();
        let mut color_lookup = HashMap::new();

        for (idx, item) in items.iter().enumerate() {
            by_category[item.category().index()].push(idx);

            let next_id = by_color.len();
            let color_id = *color_lookup
                .entry(normalize_color(item.color()))
                .or_insert(next_id);
            if color_id == next_id {
                by_color.push(Vec::new());
            }
            by_color[color_id].push(idx);
            item_colors.push(color_id);
        }

        CatalogIndex {
            items,
            by_category,
            item_colors,
            by_color,
            color_lookup,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[inline]
    pub fn item(&self, idx: ItemIdx) -> &Item {
        &self.items[idx]
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn items_in_category(&self, category: Category) -> &[ItemIdx] {
        &self.by_category[category.index()]
    }

    #[inline]
    pub fn category_count(&self, category: Category) -> usize {
        self.by_category[category.index()].len()
    }

    /// Items whose color matches `color`, ignoring case.
    pub fn items_of_color(&self, color: &str) -> &[ItemIdx] {
        self.color_lookup
            .get(&normalize_color(color))
            .map(|&id| self.by_color[id].as_slice())
            .unwrap_or(&[])
    }

    /// Interned color of the item at `idx`.
    #[inline]
    pub fn color_id(&self, idx: ItemIdx) -> ColorId {
        self.item_colors[idx]
    }

    /// Number of distinct normalized colors.
    pub fn color_count(&self) -> usize {
        self.by_color.len()
    }
}

fn normalize_color(color: &str) -> String {
    color.to_lowercase()
}
