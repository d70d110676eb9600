//! Wardrobe Solver Engine
//!
//! This crate provides the local search engine including:
//! - Solver and SolverManager
//! - Phases (construction heuristic, local search)
//! - Move system (toggle and swap moves, random move selector)
//! - Acceptors (simulated annealing, hill climbing, late acceptance)
//! - Termination conditions
//!
//! Logging levels:
//! - **INFO**: Solver start/end, phase start/end
//! - **DEBUG**: New best solutions, per-second progress
//! - **TRACE**: Individual steps

pub mod builder;
pub mod event;
pub mod heuristic;
pub mod manager;
pub mod phase;
pub mod scope;
pub mod solver;
pub mod statistics;
pub mod termination;


pub use builder::{AcceptorBuilder, PhaseBuilder};
pub use event::BestSolutionEvent;
pub use heuristic::{
    Move, MoveSelector, RandomMoveIter, SwapMove, ToggleMove, ToggleSwapMoveSelector,
    WardrobeMove,
};
pub use manager::{best_of, SolverJob, SolverManager};
pub use phase::{
    construction::ConstructionHeuristicPhase,
    localsearch::{
        Acceptor, HillClimbingAcceptor, LateAcceptanceAcceptor, LocalSearchPhase,
        SimulatedAnnealingAcceptor,
    },
    Phase,
};
pub use scope::{PhaseScope, SolverScope};
pub use solver::{SolveResult, Solver, SolverStatus};
pub use statistics::{PhaseStatistics, ScoreImprovement, SolverStatistics};
pub use termination::{
    BestScoreTermination, ExternalTermination, OrTermination, StepCountTermination, Termination,
    TerminationController, TerminationReason, TimeTermination, UnimprovedTimeTermination,
};
