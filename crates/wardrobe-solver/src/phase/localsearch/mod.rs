//! Local search phase.
//!
//! Draws random moves, applies them incrementally, and lets an acceptor decide
//! whether each move is kept or undone.

pub mod acceptor;
mod phase;


pub use acceptor::{
    score_worsening, Acceptor, HillClimbingAcceptor, LateAcceptanceAcceptor,
    SimulatedAnnealingAcceptor,
};
pub use phase::LocalSearchPhase;
