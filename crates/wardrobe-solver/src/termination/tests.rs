use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use wardrobe_config::SolverConfig;
use wardrobe_core::HardSoftScore;
use wardrobe_scoring::ScoreDirector;
use wardrobe_test::scenarios::scenario_a;

use super::*;
use crate::scope::SolverScope;

fn started_scope() -> SolverScope {
    let scenario = scenario_a();
    let mut scope = SolverScope::new(ScoreDirector::new(scenario.index(), scenario.budget()), 0);
    scope.start_solving();
    scope
}

fn select_all(scope: &mut SolverScope) {
    for idx in 0..3 {
        scope.score_director_mut().toggle(idx);
    }
    scope.update_best_solution();
}

#[test]
fn test_time_termination() {
    let scope = started_scope();
    assert_eq!(
        TimeTermination::new(Duration::ZERO).check(&scope),
        Some(TerminationReason::TimedOut)
    );
    assert!(!TimeTermination::seconds(60).is_terminated(&scope));
}

#[test]
fn test_best_score_feasible() {
    let mut scope = started_scope();
    let term = BestScoreTermination::feasible();
    assert_eq!(term.check(&scope), None);
    select_all(&mut scope);
    assert_eq!(term.check(&scope), Some(TerminationReason::Converged));
}

#[test]
fn test_best_score_explicit_target() {
    let mut scope = started_scope();
    select_all(&mut scope);
    assert!(BestScoreTermination::new(HardSoftScore::of(0, 40)).is_terminated(&scope));
    assert!(!BestScoreTermination::new(HardSoftScore::of(0, 41)).is_terminated(&scope));
    let wildcard = HardSoftScore::parse("0hard/*soft").unwrap();
    assert!(BestScoreTermination::new(wildcard).is_terminated(&scope));
}

#[test]
fn test_best_score_before_start() {
    let scenario = scenario_a();
    let scope = SolverScope::new(ScoreDirector::new(scenario.index(), scenario.budget()), 0);
    assert_eq!(BestScoreTermination::feasible().check(&scope), None);
}

#[test]
fn test_external_termination() {
    let scope = started_scope();
    let flag = Arc::new(AtomicBool::new(false));
    let term = ExternalTermination::new(Arc::clone(&flag));
    assert!(!term.is_terminated(&scope));
    flag.store(true, Ordering::SeqCst);
    assert_eq!(term.check(&scope), Some(TerminationReason::Cancelled));
}

#[test]
fn test_step_count_termination() {
    let mut scope = started_scope();
    let term = StepCountTermination::new(2);
    scope.increment_step_count();
    assert!(!term.is_terminated(&scope));
    scope.increment_step_count();
    assert_eq!(term.check(&scope), Some(TerminationReason::StepLimitReached));
}

#[test]
fn test_unimproved_time_termination() {
    let scope = started_scope();
    assert_eq!(
        UnimprovedTimeTermination::new(Duration::ZERO).check(&scope),
        Some(TerminationReason::TimedOut)
    );
    assert!(!UnimprovedTimeTermination::seconds(60).is_terminated(&scope));
}

#[test]
fn test_option_termination() {
    let scope = started_scope();
    let none: Option<TimeTermination> = None;
    assert!(!none.is_terminated(&scope));
    assert!(Some(TimeTermination::new(Duration::ZERO)).is_terminated(&scope));
}

#[test]
fn test_or_termination_reports_first_reason() {
    let mut scope = started_scope();
    select_all(&mut scope);
    let term = OrTermination((
        BestScoreTermination::feasible(),
        TimeTermination::new(Duration::ZERO),
    ));
    assert_eq!(term.check(&scope), Some(TerminationReason::Converged));

    let term = OrTermination((
        TimeTermination::seconds(60),
        StepCountTermination::new(10),
    ));
    assert_eq!(term.check(&scope), None);
}

#[test]
fn test_controller_priority() {
    let mut scope = started_scope();
    select_all(&mut scope);
    let flag = Arc::new(AtomicBool::new(true));
    let controller = TerminationController::new(Duration::ZERO, Arc::clone(&flag))
        .with_best_score(BestScoreTermination::feasible())
        .with_step_limit(0);
    assert_eq!(controller.check(&scope), Some(TerminationReason::Converged));

    let controller = TerminationController::new(Duration::ZERO, flag).with_step_limit(0);
    assert_eq!(controller.check(&scope), Some(TerminationReason::Cancelled));

    let controller =
        TerminationController::new(Duration::ZERO, Arc::new(AtomicBool::new(false)))
            .with_step_limit(0);
    assert_eq!(controller.check(&scope), Some(TerminationReason::TimedOut));
}

#[test]
fn test_controller_from_config() {
    let flag = Arc::new(AtomicBool::new(false));
    let config = SolverConfig::new().with_time_limit(Duration::from_millis(250));
    let controller = TerminationController::from_config(&config, Arc::clone(&flag)).unwrap();
    assert_eq!(controller.time_limit(), Duration::from_millis(250));
    assert!(controller.best_score().is_some_and(|t| t.target().is_none()));

    let config = SolverConfig::new().with_target_hard_zero(false);
    let controller = TerminationController::from_config(&config, Arc::clone(&flag)).unwrap();
    assert!(controller.best_score().is_none());
    assert_eq!(controller.time_limit(), wardrobe_config::DEFAULT_TIME_LIMIT);

    let config = SolverConfig::from_toml_str(
        r#"
        [termination]
        best_score_limit = "0hard/40soft"
        "#,
    )
    .unwrap();
    let controller = TerminationController::from_config(&config, flag).unwrap();
    assert_eq!(
        controller.best_score().and_then(|t| t.target()),
        Some(HardSoftScore::of(0, 40))
    );
}

#[test]
fn test_reason_display() {
    assert_eq!(TerminationReason::Converged.to_string(), "converged");
    assert_eq!(TerminationReason::StepLimitReached.as_str(), "step_limit_reached");
    let failed = TerminationReason::Failed("score corruption".into());
    assert!(failed.is_failure());
    assert_eq!(failed.to_string(), "failed: score corruption");
}
