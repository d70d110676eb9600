//! Terse item constructors. Prices are whole dollars.

use wardrobe_core::{Category, Item, Money};

fn item(id: &str, category: Category, dollars: i64, color: &str) -> Item {
    Item::new(
        id,
        format!("{} {}", color, category.name().to_lowercase()),
        category,
        Money::from_major(dollars),
        "casual",
        color,
        true,
    )
}

pub fn top(id: &str, dollars: i64, color: &str) -> Item {
    item(id, Category::Top, dollars, color)
}

pub fn bottom(id: &str, dollars: i64, color: &str) -> Item {
    item(id, Category::Bottom, dollars, color)
}

pub fn shoes(id: &str, dollars: i64, color: &str) -> Item {
    item(id, Category::Shoes, dollars, color)
}

pub fn outerwear(id: &str, dollars: i64, color: &str) -> Item {
    item(id, Category::Outerwear, dollars, color)
}

pub fn accessory(id: &str, dollars: i64, color: &str) -> Item {
    item(id, Category::Accessory, dollars, color)
}

/// Same item, marked as not in stock.
pub fn out_of_stock(item: Item) -> Item {
    Item::new(
        item.id(),
        item.name(),
        item.category(),
        item.price(),
        item.style(),
        item.color(),
        false,
    )
}
