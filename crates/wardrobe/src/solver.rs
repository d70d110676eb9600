//! Solver entry points that hide the engine wiring.

use std::collections::HashSet;

use tracing::debug;

use wardrobe_config::SolverConfig;
use wardrobe_core::{Budget, Item, Money, PreferenceSet, Result, WardrobeError, WardrobeProblem};
use wardrobe_solver::{SolveResult, Solver, SolverJob, SolverManager};

/// Solves one wardrobe problem on the calling thread.
///
/// Items and budget are validated before the run starts. An infeasible
/// catalog is not an error: the result carries the least-violating selection
/// found and its termination reason.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use wardrobe::prelude::*;
///
/// let items = vec![
///     Item::new("t1", "Tee", Category::Top, Money::from_major(50), "casual", "black", true),
///     Item::new("b1", "Chinos", Category::Bottom, Money::from_major(50), "casual", "white", true),
///     Item::new("s1", "Boots", Category::Shoes, Money::from_major(80), "casual", "brown", true),
/// ];
/// let config = SolverConfig::new()
///     .with_random_seed(7)
///     .with_time_limit(Duration::from_secs(5));
///
/// let result = wardrobe::solve(items, Money::from_major(200), ["casual"], &config).unwrap();
/// assert_eq!(result.termination_reason, TerminationReason::Converged);
/// assert_eq!(result.score, HardSoftScore::of(0, 40));
/// ```
pub fn solve<I, S>(
    items: Vec<Item>,
    budget: Money,
    preferred_styles: I,
    config: &SolverConfig,
) -> Result<SolveResult>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let problem = build_problem(items, budget, preferred_styles)?;
    let mut solver = Solver::from_config(config)?;
    solver.solve(&problem)
}

/// Starts solving on a background thread.
///
/// The returned job streams best-solution events and can be cancelled.
pub fn solve_in_background<I, S>(
    items: Vec<Item>,
    budget: Money,
    preferred_styles: I,
    config: &SolverConfig,
) -> Result<SolverJob>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let problem = build_problem(items, budget, preferred_styles)?;
    SolverManager::new(config.clone()).solve(problem)
}

/// Validates the inputs and assembles a problem.
pub fn build_problem<I, S>(
    items: Vec<Item>,
    budget: Money,
    preferred_styles: I,
) -> Result<WardrobeProblem>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let budget = Budget::new(budget)?;
    validate_items(&items)?;
    let preferences = PreferenceSet::new(preferred_styles);
    debug!(
        event = "problem_built",
        items = items.len(),
        budget = %budget.limit(),
        preferred_styles = preferences.len(),
    );
    Ok(WardrobeProblem::from_items(items, budget, preferences))
}

/// Checks every item, rejects duplicate ids and catalogs whose total price
/// exceeds [`Money::MAX_CATALOG_TOTAL`].
pub fn validate_items(items: &[Item]) -> Result<()> {
    let mut seen = HashSet::with_capacity(items.len());
    let mut total = Money::ZERO;
    for item in items {
        item.validate()?;
        if !seen.insert(item.id()) {
            return Err(WardrobeError::validation(item.id(), "duplicate id"));
        }
        total = total
            .checked_add(item.price())
            .filter(|total| *total <= Money::MAX_CATALOG_TOTAL)
            .ok_or_else(|| {
                WardrobeError::validation(
                    item.id(),
                    format!(
                        "catalog total price exceeds {}",
                        Money::MAX_CATALOG_TOTAL
                    ),
                )
            })?;
    }
    Ok(())
}
