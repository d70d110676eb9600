//! Wardrobe Core - Core types for the wardrobe bundle optimizer
//!
//! This crate provides the fundamental building blocks shared by every
//! other wardrobe crate:
//! - [`HardSoftScore`] for representing selection quality
//! - Domain facts ([`Item`], [`Category`], [`Money`], [`Budget`]) and the
//!   mutable [`Selection`] planning state
//! - [`CatalogIndex`] for category and color lookups
//! - [`WardrobeError`] for fallible operations

pub mod catalog;
pub mod domain;
pub mod error;
pub mod score;

pub use catalog::{CatalogIndex, ColorId};
pub use domain::{
    is_neutral_color, Budget, Category, Item, ItemIdx, Money, PreferenceSet, Selection,
    WardrobeProblem, NEUTRAL_COLORS,
};
pub use error::{Result, WardrobeError};
pub use score::{HardSoftScore, ScoreLevel, ScoreParseError};
