//! Incremental scoring for wardrobe selections.
//!
//! - [`ScoreDirector`] owns the working [`Selection`](wardrobe_core::Selection)
//!   and keeps its score current in O(1) per toggle
//! - [`full_recompute`] scores a selection from scratch
//! - [`ScoreAnalysis`] breaks a score down per [`WardrobeConstraint`]

pub mod analysis;
pub mod constraint;
pub mod director;

pub use analysis::{ConstraintAnalysis, ScoreAnalysis};
pub use constraint::WardrobeConstraint;
pub use director::{full_recompute, ScoreDirector};
