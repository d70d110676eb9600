use std::time::Duration;

use tokio::sync::mpsc;
use wardrobe_config::EnvironmentMode;
use wardrobe_core::HardSoftScore;
use wardrobe_scoring::ScoreDirector;
use wardrobe_test::scenarios::scenario_a;

use super::*;
use crate::termination::TerminationController;

fn scope() -> SolverScope {
    let scenario = scenario_a();
    SolverScope::new(ScoreDirector::new(scenario.index(), scenario.budget()), 42)
}

#[test]
fn test_start_solving_records_initial_best() {
    let mut scope = scope();
    assert_eq!(scope.best_score(), None);
    scope.start_solving();
    assert_eq!(scope.best_score(), Some(HardSoftScore::of(3000, 0)));
    assert_eq!(scope.best_selection().map(|s| s.selected_count()), Some(0));
    assert_eq!(scope.statistics().improvement_count(), 1);
}

#[test]
fn test_update_best_only_on_strict_improvement() {
    let mut scope = scope();
    scope.start_solving();

    scope.score_director_mut().toggle(0);
    assert!(scope.update_best_solution());
    assert_eq!(scope.best_score(), Some(HardSoftScore::of(2000, 18)));

    // Worse: best keeps the earlier selection.
    scope.score_director_mut().toggle(0);
    assert!(!scope.update_best_solution());
    assert_eq!(scope.best_score(), Some(HardSoftScore::of(2000, 18)));
    assert!(scope.best_selection().is_some_and(|s| s.is_included(0)));

    // Equal: not an improvement.
    scope.score_director_mut().toggle(0);
    assert!(!scope.update_best_solution());
}

#[test]
fn test_best_solution_events() {
    let (sender, mut receiver) = mpsc::unbounded_channel();
    let mut scope = scope().with_best_solution_sender(sender);
    scope.start_solving();
    scope.score_director_mut().toggle(0);
    scope.score_director_mut().toggle(1);
    scope.update_best_solution();

    let first = receiver.try_recv().unwrap();
    assert_eq!(first.score, HardSoftScore::of(3000, 0));
    let second = receiver.try_recv().unwrap();
    assert_eq!(second.score, HardSoftScore::of(1000, 36));
    assert_eq!(second.selection.selected_count(), 2);
    assert!(receiver.try_recv().is_err());
}

#[test]
fn test_time_gradient_is_bounded() {
    let mut fresh = scope();
    fresh.start_solving();
    assert!((0.0..1.0).contains(&fresh.time_gradient()));

    let expired = scope().with_termination(TerminationController::new(
        Duration::ZERO,
        Default::default(),
    ));
    assert_eq!(expired.time_gradient(), 1.0);
}

#[test]
fn test_phase_scope_counts() {
    let mut scope = scope();
    scope.start_solving();
    {
        let mut phase = PhaseScope::new(&mut scope, 1);
        assert_eq!(phase.starting_score(), HardSoftScore::of(3000, 0));
        phase.record_move(true);
        phase.record_move(false);
        phase.increment_step_count();
        phase.increment_step_count();
        let stats = phase.finish("Local Search");
        assert_eq!(stats.phase_index, 1);
        assert_eq!(stats.step_count, 2);
        assert_eq!(stats.moves_evaluated, 2);
        assert_eq!(stats.acceptance_rate(), 0.5);
    }
    assert_eq!(scope.total_step_count(), 2);
    assert_eq!(scope.statistics().phase_statistics.len(), 1);
    assert_eq!(scope.statistics().total_moves_accepted, 1);
}

#[test]
fn test_assert_score_only_in_full_assert() {
    let mut scope = scope().with_environment_mode(EnvironmentMode::FullAssert);
    scope.start_solving();
    scope.score_director_mut().toggle(2);
    assert!(scope.assert_score().is_ok());
}

#[test]
fn test_take_best_selection_falls_back_to_working() {
    let mut scope = scope();
    scope.score_director_mut().toggle(1);
    let selection = scope.take_best_selection();
    assert!(selection.is_included(1));
}

#[test]
fn test_finish_statistics() {
    let mut scope = scope();
    scope.start_solving();
    scope.increment_step_count();
    let stats = scope.finish_statistics();
    assert_eq!(stats.total_step_count, 1);
    assert!(stats.score_calculation_count >= 1);
}
