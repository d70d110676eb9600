use std::time::Duration;

use wardrobe_config::{EnvironmentMode, SolverConfig};
use wardrobe_core::HardSoftScore;
use wardrobe_test::scenarios::{mixed_catalog, no_shoes, scenario_a};

use super::*;
use crate::termination::TerminationReason;

#[test]
fn test_background_solve_converges() {
    let manager = SolverManager::new(SolverConfig::new().with_random_seed(1));
    let job = manager.solve(scenario_a().problem()).unwrap();
    let (result, events) = join_with_events(job);
    assert_eq!(result.termination_reason, TerminationReason::Converged);
    assert_eq!(result.score, HardSoftScore::of(0, 40));
    let scores: Vec<_> = events.iter().map(|e| e.score).collect();
    assert_eq!(scores.first(), Some(&HardSoftScore::of(3000, 0)));
    assert_eq!(scores.last(), Some(&HardSoftScore::of(0, 40)));
    assert!(scores.windows(2).all(|w| w[1] > w[0]));
}

#[test]
fn test_cancellation_returns_best_so_far() {
    let config = SolverConfig::new()
        .with_random_seed(3)
        .with_time_limit(Duration::from_secs(30));
    let manager = SolverManager::new(config);
    let job = manager.solve(no_shoes().problem()).unwrap();
    std::thread::sleep(Duration::from_millis(50));
    job.terminate_early();
    let result = job.join().unwrap();
    assert_eq!(result.termination_reason, TerminationReason::Cancelled);
    assert!(result.elapsed < Duration::from_secs(30));
    assert!(result.score.hard_violation() >= 1000);
}

#[test]
fn test_invalid_config_fails_fast() {
    let config = SolverConfig::new().with_time_limit(Duration::ZERO);
    let manager = SolverManager::new(config);
    assert!(matches!(
        manager.solve(scenario_a().problem()),
        Err(WardrobeError::Config(_))
    ));
}

#[test]
fn test_batch_is_in_seed_order() {
    let config = SolverConfig::new()
        .with_environment_mode(EnvironmentMode::Reproducible)
        .with_target_hard_zero(false)
        .with_step_limit(300);
    let manager = SolverManager::new(config);
    let problem = mixed_catalog().problem();
    let results = manager.solve_batch(&problem, &[5, 6, 7]).unwrap();
    let seeds: Vec<_> = results.iter().map(|r| r.seed).collect();
    assert_eq!(seeds, [5, 6, 7]);
    assert!(results
        .iter()
        .all(|r| r.termination_reason == TerminationReason::StepLimitReached));

    let best = best_of(&results).unwrap();
    assert!(results.iter().all(|r| r.score <= best.score));

    // Same seed, same run.
    let again = manager.solve_batch(&problem, &[6]).unwrap();
    assert_eq!(again[0].selection, results[1].selection);
}

#[test]
fn test_best_of_empty() {
    assert!(best_of(&[]).is_none());
}

fn join_with_events(mut job: SolverJob) -> (SolveResult, Vec<BestSolutionEvent>) {
    while !job.is_finished() {
        std::thread::sleep(Duration::from_millis(1));
    }
    let mut events = Vec::new();
    while let Some(event) = job.try_next_event() {
        events.push(event);
    }
    (job.join().unwrap(), events)
}
