use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

use wardrobe_config::EnvironmentMode;
use wardrobe_core::HardSoftScore;
use wardrobe_scoring::ScoreDirector;
use wardrobe_test::scenarios::{mixed_catalog, scenario_a, scenario_b, Scenario};

use super::*;
use crate::termination::TerminationController;

fn started_scope(scenario: &Scenario) -> SolverScope {
    let mut scope = SolverScope::new(ScoreDirector::new(scenario.index(), scenario.budget()), 0)
        .with_environment_mode(EnvironmentMode::FullAssert);
    scope.start_solving();
    scope
}

#[test]
fn test_builds_complete_outfit() {
    let mut scope = started_scope(&scenario_a());
    let stopped = ConstructionHeuristicPhase::new().solve(&mut scope, 0).unwrap();
    assert_eq!(stopped, None);
    assert_eq!(scope.best_score(), Some(HardSoftScore::of(0, 40)));
    assert_eq!(scope.total_step_count(), 3);
    assert_eq!(scope.statistics().phase_statistics[0].moves_accepted, 3);
}

#[test]
fn test_reverts_worsening_flips() {
    let mut scope = started_scope(&scenario_b());
    ConstructionHeuristicPhase::new().solve(&mut scope, 0).unwrap();
    assert_eq!(scope.score_director().score(), HardSoftScore::of(3000, 18));
    let selection = scope.score_director().selection();
    assert!(selection.is_included(0));
    assert!(!selection.is_included(1));
    assert!(!selection.is_included(2));
    assert_eq!(scope.best_score(), Some(HardSoftScore::of(3000, 18)));
}

#[test]
fn test_best_never_worse_than_start() {
    let scenario = mixed_catalog();
    let mut scope = started_scope(&scenario);
    let initial = scope.best_score().unwrap();
    ConstructionHeuristicPhase::new().solve(&mut scope, 0).unwrap();
    let best = scope.best_score().unwrap();
    assert!(best >= initial);
    assert_eq!(best, scope.score_director().score());
    assert!(scope.score_director().assert_incremental().is_ok());
}

#[test]
fn test_stops_on_termination() {
    let scenario = mixed_catalog();
    let controller =
        TerminationController::new(Duration::from_secs(60), Arc::new(AtomicBool::new(true)));
    let mut scope = SolverScope::new(ScoreDirector::new(scenario.index(), scenario.budget()), 0)
        .with_termination(controller);
    scope.start_solving();
    let stopped = ConstructionHeuristicPhase::new().solve(&mut scope, 0).unwrap();
    assert_eq!(stopped, Some(TerminationReason::Cancelled));
    assert_eq!(scope.total_step_count(), 0);
}

#[test]
fn test_empty_catalog() {
    let scenario = Scenario {
        items: Vec::new(),
        ..scenario_a()
    };
    let mut scope = started_scope(&scenario);
    assert_eq!(ConstructionHeuristicPhase::new().solve(&mut scope, 0).unwrap(), None);
    assert_eq!(scope.best_score(), Some(HardSoftScore::of(3000, 0)));
}
