use super::*;
use crate::heuristic::Move;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wardrobe_core::CatalogIndex;
use wardrobe_scoring::ScoreDirector;
use wardrobe_test::scenarios::{mixed_catalog, scenario_a};

#[test]
fn test_empty_catalog_yields_nothing() {
    let index = CatalogIndex::new(Vec::new());
    let selector = ToggleSwapMoveSelector::default();
    let mut moves = selector.iter_moves(&index, StdRng::seed_from_u64(1));
    assert_eq!(moves.next(), None);
}

#[test]
fn test_no_swaps_without_two_items_in_a_category() {
    let scenario = scenario_a();
    let index = scenario.index();
    let selector = ToggleSwapMoveSelector::new(1.0);
    let moves: Vec<_> = selector
        .iter_moves(&index, StdRng::seed_from_u64(7))
        .take(200)
        .collect();
    assert!(moves.iter().all(|m| matches!(m, WardrobeMove::Toggle(_))));
    assert!(moves.iter().all(|m| m.item_indices()[0] < 3));
}

#[test]
fn test_all_moves_doable() {
    let scenario = mixed_catalog();
    let director = ScoreDirector::new(scenario.index(), scenario.budget());
    let selector = ToggleSwapMoveSelector::new(0.5);
    let index = scenario.index();
    let moves: Vec<_> = selector
        .iter_moves(&index, StdRng::seed_from_u64(3))
        .take(1000)
        .collect();
    assert!(moves.iter().all(|m| m.is_doable(&director)));
    assert!(moves.iter().any(|m| matches!(m, WardrobeMove::Swap(_))));
    assert!(moves.iter().any(|m| matches!(m, WardrobeMove::Toggle(_))));
}

#[test]
fn test_zero_probability_never_swaps() {
    let scenario = mixed_catalog();
    let index = scenario.index();
    let selector = ToggleSwapMoveSelector::new(0.0);
    assert!(selector
        .iter_moves(&index, StdRng::seed_from_u64(11))
        .take(500)
        .all(|m| matches!(m, WardrobeMove::Toggle(_))));
}

#[test]
fn test_same_seed_same_moves() {
    let scenario = mixed_catalog();
    let index = scenario.index();
    let selector = ToggleSwapMoveSelector::default();
    let first: Vec<_> = selector
        .iter_moves(&index, StdRng::seed_from_u64(42))
        .take(100)
        .collect();
    let second: Vec<_> = selector
        .iter_moves(&index, StdRng::seed_from_u64(42))
        .take(100)
        .collect();
    assert_eq!(first, second);
}

#[test]
fn test_probability_is_clamped() {
    assert_eq!(ToggleSwapMoveSelector::new(3.0).swap_probability(), 1.0);
    assert_eq!(ToggleSwapMoveSelector::new(-1.0).swap_probability(), 0.0);
    assert_eq!(ToggleSwapMoveSelector::new(f64::NAN).swap_probability(), 0.0);
}
