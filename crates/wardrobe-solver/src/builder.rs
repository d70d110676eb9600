//! Builders that turn configuration into phases and acceptors.

use wardrobe_config::{AcceptorConfig, LocalSearchConfig, PhaseConfig, SolverConfig};

use crate::heuristic::ToggleSwapMoveSelector;
use crate::phase::construction::ConstructionHeuristicPhase;
use crate::phase::localsearch::{
    Acceptor, HillClimbingAcceptor, LateAcceptanceAcceptor, LocalSearchPhase,
    SimulatedAnnealingAcceptor,
};
use crate::phase::Phase;

/// Builder for creating acceptors from configuration.
pub struct AcceptorBuilder;

impl AcceptorBuilder {
    pub fn build(config: &AcceptorConfig) -> Box<dyn Acceptor> {
        match config {
            AcceptorConfig::HillClimbing => Box::new(HillClimbingAcceptor::new()),
            AcceptorConfig::SimulatedAnnealing(sa) => {
                Box::new(SimulatedAnnealingAcceptor::new(sa.starting_temperature()))
            }
            AcceptorConfig::LateAcceptance(la) => {
                Box::new(LateAcceptanceAcceptor::new(la.late_acceptance_size()))
            }
        }
    }
}

/// Builder for creating phases from configuration.
pub struct PhaseBuilder;

impl PhaseBuilder {
    pub fn build(config: &PhaseConfig) -> Box<dyn Phase> {
        match config {
            PhaseConfig::ConstructionHeuristic(_) => Box::new(ConstructionHeuristicPhase::new()),
            PhaseConfig::LocalSearch(ls) => Self::build_local_search(ls),
        }
    }

    /// Builds the configured phases, or the default construction plus local
    /// search pair when none are configured.
    pub fn build_all(config: &SolverConfig) -> Vec<Box<dyn Phase>> {
        config.effective_phases().iter().map(Self::build).collect()
    }

    fn build_local_search(config: &LocalSearchConfig) -> Box<dyn Phase> {
        let acceptor = AcceptorBuilder::build(&config.acceptor.clone().unwrap_or_default());
        let swap_probability = config
            .move_selector
            .as_ref()
            .map(|ms| ms.swap_probability())
            .unwrap_or(wardrobe_config::DEFAULT_SWAP_PROBABILITY);
        Box::new(LocalSearchPhase::new(
            ToggleSwapMoveSelector::new(swap_probability),
            acceptor,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wardrobe_config::{LateAcceptanceConfig, SimulatedAnnealingConfig};

    #[test]
    fn test_acceptor_builder_hill_climbing() {
        let acceptor = AcceptorBuilder::build(&AcceptorConfig::HillClimbing);
        assert!(format!("{:?}", acceptor).contains("HillClimbing"));
    }

    #[test]
    fn test_acceptor_builder_simulated_annealing() {
        let config = AcceptorConfig::SimulatedAnnealing(SimulatedAnnealingConfig {
            starting_temperature: Some(5.0),
        });
        let acceptor = AcceptorBuilder::build(&config);
        let debug = format!("{:?}", acceptor);
        assert!(debug.contains("SimulatedAnnealing"));
        assert!(debug.contains("5.0"));
    }

    #[test]
    fn test_acceptor_builder_late_acceptance() {
        let config = AcceptorConfig::LateAcceptance(LateAcceptanceConfig {
            late_acceptance_size: Some(7),
        });
        let acceptor = AcceptorBuilder::build(&config);
        assert!(format!("{:?}", acceptor).contains("late_acceptance_size: 7"));
    }

    #[test]
    fn test_default_phases() {
        let phases = PhaseBuilder::build_all(&SolverConfig::default());
        let names: Vec<_> = phases.iter().map(|p| p.phase_type_name()).collect();
        assert_eq!(names, ["Construction Heuristic", "Local Search"]);
    }

    #[test]
    fn test_local_search_only() {
        let config = SolverConfig::new().with_phase(PhaseConfig::LocalSearch(LocalSearchConfig::default()));
        let phases = PhaseBuilder::build_all(&config);
        assert_eq!(phases.len(), 1);
        assert_eq!(phases[0].phase_type_name(), "Local Search");
        assert!(format!("{:?}", phases[0]).contains("swap_probability: 0.2"));
    }
}
