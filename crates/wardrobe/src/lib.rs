//! Wardrobe - a bundle optimizer for clothing catalogs
//!
//! Picks a subset of catalog items that covers a top, a bottom and shoes,
//! stays within budget, and scores well on style and color harmony.
//!
//! # Example
//!
//! ```rust
//! use wardrobe::prelude::*;
//!
//! let score = HardSoftScore::of(1000, 18);
//! assert_eq!(score.hard_violation(), 1000);
//! assert!(!score.is_feasible());
//! ```

mod solver;
pub use solver::{build_problem, solve, solve_in_background, validate_items};

pub mod catalog;
pub use catalog::{
    load_catalog, load_catalog_toml, load_catalog_yaml, parse_catalog_toml, parse_catalog_yaml,
    ItemRecord,
};

#[cfg(feature = "console")]
pub mod console;

// Domain and score types
pub use wardrobe_core::{
    Budget, CatalogIndex, Category, HardSoftScore, Item, ItemIdx, Money, PreferenceSet, Result,
    Selection, WardrobeError, WardrobeProblem,
};

// Score analysis
pub use wardrobe_scoring::{ConstraintAnalysis, ScoreAnalysis, ScoreDirector, WardrobeConstraint};

// Configuration
pub use wardrobe_config::{
    AcceptorConfig, ConfigError, EnvironmentMode, PhaseConfig, SolverConfig, TerminationConfig,
};

// Engine
pub use wardrobe_solver::{
    best_of, BestSolutionEvent, SolveResult, Solver, SolverJob, SolverManager, SolverStatistics,
    SolverStatus, TerminationReason,
};

pub mod prelude {
    pub use super::{
        solve, solve_in_background, Budget, Category, EnvironmentMode, HardSoftScore, Item, Money,
        SolveResult, SolverConfig, SolverJob, SolverManager, TerminationReason, WardrobeError,
    };
}
