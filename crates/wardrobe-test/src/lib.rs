//! Shared test fixtures for wardrobe crates.
//!
//! This crate provides catalogs and item builders for testing.
//! It depends only on `wardrobe-core` to avoid circular dependencies.
//!
//! - [`items`] - Terse item constructors
//! - [`scenarios`] - Named catalogs with their budgets
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! wardrobe-test = { workspace = true }
//! ```
//!
//! ```ignore
//! use wardrobe_test::scenarios::scenario_a;
//! ```

pub mod items;
pub mod scenarios;

pub use items::{accessory, bottom, out_of_stock, outerwear, shoes, top};
pub use scenarios::Scenario;
