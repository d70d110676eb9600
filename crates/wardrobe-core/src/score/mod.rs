//! Score type for representing selection quality
//!
//! Scores are used to compare selections and guide the optimization process.

mod hard_soft;


pub use hard_soft::{HardSoftScore, ScoreParseError};

/// Score level a constraint contributes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScoreLevel {
    /// Hard constraints - must be satisfied for feasibility
    Hard,
    /// Soft constraints - optimization objectives
    Soft,
}
