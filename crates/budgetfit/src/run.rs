//! Search entry points that hide the wiring between config and engine.

use budgetfit_config::{ConfigError, SearchConfig};
use budgetfit_core::Solution;
use budgetfit_solver::BudgetSearch;

/// Builds an initialized search session from a configuration.
///
/// # Errors
///
/// Returns [`ConfigError::Invalid`] for a missing or inverted interval, a
/// constraint on an unknown item, or an inverted bound.
pub fn session_from_config(config: &SearchConfig) -> Result<BudgetSearch, ConfigError> {
    let setup = config.build()?;

    let mut search = BudgetSearch::new(setup.catalog, setup.interval)
        .with_constraints(setup.constraints)
        .map_err(|e| ConfigError::Invalid(e.to_string()))?;
    if let Some(cap) = setup.zero_price_cap {
        search = search.with_zero_price_cap(cap);
    }

    search.initialize();
    Ok(search)
}

/// Runs a configured search to exhaustion and returns every solution.
///
/// Convenience for callers that want the whole result set rather than the
/// pull-based iteration; large search spaces are better driven through
/// [`BudgetSearch::find_next`] directly.
pub fn run_search(config: &SearchConfig) -> Result<Vec<Solution>, ConfigError> {
    let mut search = session_from_config(config)?;
    let solutions: Vec<Solution> = search.by_ref().collect();

    tracing::info!(
        solutions = solutions.len(),
        nodes_popped = search.stats().nodes_popped,
        elapsed_ms = search.stats().elapsed().as_millis() as u64,
        "search exhausted"
    );
    Ok(solutions)
}
