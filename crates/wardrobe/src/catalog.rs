//! Catalog records as read from TOML or YAML files.
//!
//! ```toml
//! [[items]]
//! id = "t1"
//! name = "Black tee"
//! category = "TOP"
//! price = 49.99
//! style = "casual"
//! color = "black"
//! ```

use std::fs;
use std::path::Path;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use wardrobe_core::{Category, Item, Money, Result, WardrobeError};

/// One catalog entry before validation.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ItemRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: Option<Category>,
    /// Price in major units; rounded to cents, halves away from zero.
    pub price: Decimal,
    #[serde(default)]
    pub style: String,
    pub color: String,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
}

fn default_in_stock() -> bool {
    true
}

impl TryFrom<ItemRecord> for Item {
    type Error = WardrobeError;

    fn try_from(record: ItemRecord) -> Result<Item> {
        let category = record
            .category
            .ok_or_else(|| WardrobeError::validation(&record.id, "category is missing"))?;
        let price = price_to_money(&record.id, record.price)?;
        let name = if record.name.is_empty() {
            record.id.clone()
        } else {
            record.name
        };
        let item = Item::new(
            record.id,
            name,
            category,
            price,
            record.style,
            record.color,
            record.in_stock,
        );
        item.validate()?;
        Ok(item)
    }
}

fn price_to_money(item_id: &str, price: Decimal) -> Result<Money> {
    let cents = price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        * Decimal::ONE_HUNDRED;
    cents
        .to_i64()
        .map(Money::from_minor)
        .ok_or_else(|| WardrobeError::validation(item_id, format!("price {} is out of range", price)))
}

#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    items: Vec<ItemRecord>,
}

fn into_items(file: CatalogFile) -> Result<Vec<Item>> {
    file.items.into_iter().map(Item::try_from).collect()
}

/// Parses a TOML `[[items]]` list.
pub fn parse_catalog_toml(s: &str) -> Result<Vec<Item>> {
    let file: CatalogFile =
        toml::from_str(s).map_err(|e| WardrobeError::Config(format!("catalog TOML: {}", e)))?;
    into_items(file)
}

/// Parses a YAML `items:` list.
pub fn parse_catalog_yaml(s: &str) -> Result<Vec<Item>> {
    let file: CatalogFile = serde_yaml::from_str(s)
        .map_err(|e| WardrobeError::Config(format!("catalog YAML: {}", e)))?;
    into_items(file)
}

pub fn load_catalog_toml(path: impl AsRef<Path>) -> Result<Vec<Item>> {
    parse_catalog_toml(&read(path.as_ref())?)
}

pub fn load_catalog_yaml(path: impl AsRef<Path>) -> Result<Vec<Item>> {
    parse_catalog_yaml(&read(path.as_ref())?)
}

/// Loads a catalog, choosing the format by extension (`.yaml`/`.yml` or TOML).
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<Item>> {
    let path = path.as_ref();
    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => load_catalog_yaml(path),
        _ => load_catalog_toml(path),
    }
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| WardrobeError::Config(format!("reading catalog {}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn record(price: &str) -> ItemRecord {
        ItemRecord {
            id: "t1".into(),
            name: "Tee".into(),
            category: Some(Category::Top),
            price: Decimal::from_str(price).unwrap(),
            style: "casual".into(),
            color: "black".into(),
            in_stock: true,
        }
    }

    #[test]
    fn test_price_rounding() {
        let item = Item::try_from(record("49.99")).unwrap();
        assert_eq!(item.price(), Money::from_minor(4999));
        let item = Item::try_from(record("10.005")).unwrap();
        assert_eq!(item.price(), Money::from_minor(1001));
        let item = Item::try_from(record("10.004")).unwrap();
        assert_eq!(item.price(), Money::from_minor(1000));
    }

    #[test]
    fn test_missing_category_rejected() {
        let mut r = record("10");
        r.category = None;
        match Item::try_from(r) {
            Err(WardrobeError::Validation { item_id, reason }) => {
                assert_eq!(item_id, "t1");
                assert!(reason.contains("category"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_price_rejected() {
        assert!(matches!(
            Item::try_from(record("-0.01")),
            Err(WardrobeError::Validation { .. })
        ));
    }

    #[test]
    fn test_name_defaults_to_id() {
        let mut r = record("1");
        r.name.clear();
        assert_eq!(Item::try_from(r).unwrap().name(), "t1");
    }

    #[test]
    fn test_parse_toml() {
        let items = parse_catalog_toml(
            r#"
            [[items]]
            id = "t1"
            name = "Black tee"
            category = "TOP"
            price = 49.99
            style = "casual"
            color = "black"

            [[items]]
            id = "s1"
            category = "SHOES"
            price = 80
            color = "brown"
            in_stock = false
            "#,
        )
        .unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].category(), Category::Top);
        assert_eq!(items[0].price(), Money::from_minor(4999));
        assert_eq!(items[1].price(), Money::from_major(80));
        assert!(!items[1].in_stock());
        assert!(items[0].in_stock());
    }

    #[test]
    fn test_parse_yaml() {
        let items = parse_catalog_yaml(
            r#"
            items:
              - id: b1
                category: BOTTOM
                price: "55.50"
                color: White
            "#,
        )
        .unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].price(), Money::from_minor(5550));
        assert!(items[0].has_neutral_color());
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            parse_catalog_toml("[[items]]\nid = 3"),
            Err(WardrobeError::Config(_))
        ));
        assert!(matches!(
            parse_catalog_yaml("items: [ { id: a1, category: HAT, price: 1, color: red } ]"),
            Err(WardrobeError::Config(_))
        ));
    }

    #[test]
    fn test_empty_file_is_empty_catalog() {
        assert!(parse_catalog_toml("").unwrap().is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            load_catalog("/nonexistent/catalog.yml"),
            Err(WardrobeError::Config(_))
        ));
    }
}
