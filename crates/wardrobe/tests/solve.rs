//! End-to-end runs through the public API.

use std::time::Duration;

use wardrobe::prelude::*;
use wardrobe_test::items::{bottom, shoes, top};
use wardrobe_test::scenarios::{generated_catalog, mixed_catalog, no_shoes, scenario_a};

fn quick_config(seed: u64) -> SolverConfig {
    SolverConfig::new()
        .with_random_seed(seed)
        .with_time_limit(Duration::from_secs(10))
}

#[test]
fn feasible_catalog_converges() {
    let scenario = scenario_a();
    let result = wardrobe::solve(scenario.items, scenario.budget, ["casual"], &quick_config(1))
        .unwrap();
    assert_eq!(result.termination_reason, TerminationReason::Converged);
    assert_eq!(result.score, HardSoftScore::of(0, 40));
    assert_eq!(result.total_price(), Money::from_major(180));
    assert_eq!(result.selected_ids().collect::<Vec<_>>(), ["t1", "b1", "s1"]);
}

#[test]
fn tight_budget_times_out_with_one_item() {
    let scenario = scenario_a();
    let config = SolverConfig::new()
        .with_random_seed(2)
        .with_time_limit(Duration::from_millis(150));
    let result = wardrobe::solve(scenario.items, Money::from_major(40), ["casual"], &config)
        .unwrap();
    assert_eq!(result.termination_reason, TerminationReason::TimedOut);
    assert_eq!(result.score.hard_violation(), 3000);
    assert_eq!(result.selected_items.len(), 1);
    assert!(!result.is_feasible());
}

#[test]
fn empty_catalog_is_not_an_error() {
    let result = wardrobe::solve(Vec::new(), Money::from_major(100), ["casual"], &quick_config(3))
        .unwrap();
    assert_eq!(result.termination_reason, TerminationReason::Exhausted);
    assert_eq!(result.score, HardSoftScore::of(3000, 0));
    assert!(result.selected_items.is_empty());
}

#[test]
fn missing_category_stays_infeasible() {
    let scenario = no_shoes();
    let config = quick_config(4).with_step_limit(1_000);
    let result = wardrobe::solve(scenario.items, scenario.budget, ["casual"], &config).unwrap();
    assert_eq!(result.termination_reason, TerminationReason::StepLimitReached);
    assert_eq!(result.score.hard_violation(), 1000);
    assert_eq!(result.analysis.score, result.score);
}

#[test]
fn negative_budget_rejected() {
    let err = wardrobe::solve(scenario_a().items, Money::from_minor(-1), ["casual"], &quick_config(5))
        .unwrap_err();
    assert!(matches!(err, WardrobeError::Config(_)));
}

#[test]
fn malformed_items_rejected() {
    let cases = vec![
        (top("t1", -1, "black"), "t1"),
        (top("", 10, "black"), ""),
        (bottom("b9", 10, "  "), "b9"),
    ];
    for (bad, expected_id) in cases {
        let mut items = scenario_a().items;
        items.push(bad);
        match wardrobe::solve(items, Money::from_major(200), ["casual"], &quick_config(6)) {
            Err(WardrobeError::Validation { item_id, .. }) => assert_eq!(item_id, expected_id),
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}

#[test]
fn duplicate_ids_rejected() {
    let mut items = scenario_a().items;
    items.push(shoes("s1", 20, "white"));
    match wardrobe::validate_items(&items) {
        Err(WardrobeError::Validation { item_id, reason }) => {
            assert_eq!(item_id, "s1");
            assert!(reason.contains("duplicate"));
        }
        other => panic!("expected duplicate id error, got {other:?}"),
    }
}

#[test]
fn oversized_catalog_total_rejected() {
    let huge = Money::from_minor(i64::MAX / 2 + 1);
    let items = vec![
        Item::new("t1", "Gold tee", Category::Top, huge, "casual", "gold", true),
        Item::new("t2", "Gold shirt", Category::Top, huge, "casual", "gold", true),
        bottom("b1", 10, "blue"),
        shoes("s1", 10, "brown"),
    ];
    match wardrobe::solve(items, Money::from_major(100), ["casual"], &quick_config(8)) {
        Err(WardrobeError::Validation { item_id, reason }) => {
            assert_eq!(item_id, "t1");
            assert!(reason.contains("total price"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }

    // At the limit the catalog is accepted and scored without overflow.
    let items = vec![
        Item::new("t1", "Gold tee", Category::Top, Money::MAX_CATALOG_TOTAL, "casual", "gold", true),
        bottom("b1", 0, "blue"),
        shoes("s1", 0, "brown"),
    ];
    let config = quick_config(8).with_step_limit(200);
    let result = wardrobe::solve(items, Money::from_major(100), ["casual"], &config).unwrap();
    assert!(!result.termination_reason.is_failure());
    assert_eq!(result.analysis.score, result.score);
}

#[test]
fn background_job_can_be_cancelled() {
    let scenario = no_shoes();
    let config = SolverConfig::new()
        .with_random_seed(7)
        .with_time_limit(Duration::from_secs(30));
    let job = wardrobe::solve_in_background(scenario.items, scenario.budget, ["casual"], &config)
        .unwrap();
    std::thread::sleep(Duration::from_millis(30));
    job.terminate_early();
    let result = job.join().unwrap();
    assert_eq!(result.termination_reason, TerminationReason::Cancelled);
    assert!(result.elapsed < Duration::from_secs(30));
}

#[test]
fn seeded_reproducible_runs_match() {
    let scenario = generated_catalog(30);
    let config = SolverConfig::new()
        .with_environment_mode(EnvironmentMode::Reproducible)
        .with_random_seed(1234)
        .with_target_hard_zero(false)
        .with_step_limit(800);
    let first = wardrobe::solve(scenario.items.clone(), scenario.budget, ["casual"], &config)
        .unwrap();
    let second = wardrobe::solve(scenario.items, scenario.budget, ["casual"], &config).unwrap();
    assert_eq!(first.seed, 1234);
    assert_eq!(first.selection, second.selection);
    assert_eq!(first.score, second.score);
}

#[test]
fn full_assert_run_keeps_score_consistent() {
    let scenario = mixed_catalog();
    let config = SolverConfig::new()
        .with_environment_mode(EnvironmentMode::FullAssert)
        .with_random_seed(9)
        .with_target_hard_zero(false)
        .with_step_limit(2_000);
    let result = wardrobe::solve(scenario.items, scenario.budget, ["casual"], &config).unwrap();
    assert_eq!(result.termination_reason, TerminationReason::StepLimitReached);
    assert!(!result.termination_reason.is_failure());
    assert_eq!(result.analysis.score, result.score);
}
