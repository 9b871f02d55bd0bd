//! The budget-filling search engine.

use std::collections::HashSet;

use rust_decimal::prelude::ToPrimitive;
use smallvec::smallvec;
use tracing::{debug, trace};

use budgetfit_core::{
    BudgetFitError, Catalog, ConstraintTable, PriceInterval, QuantityBound, Result, Solution,
};

use crate::node::{QuantityVec, SearchNode};
use crate::stats::SearchStats;

/// Default quantity cap for a zero-priced item without an explicit bound.
///
/// A zero price makes the budget-derived ceiling unbounded, so some finite
/// cap is required for termination. The same cap applies when a sub-epsilon
/// price pushes the budget-derived ceiling past the quantity type. This
/// default is a policy knob, not an invariant; override it with
/// [`BudgetSearch::with_zero_price_cap`].
pub const DEFAULT_ZERO_PRICE_CAP: u32 = 100;

/// Depth-first enumerator of purchase combinations whose exact total falls
/// in a closed price interval.
///
/// The engine owns the catalog, the per-item constraint table, the target
/// interval, and an explicit work stack. It is single-threaded, synchronous,
/// and deterministic: each [`find_next`](Self::find_next) call pops candidate
/// states until it can return one previously-unseen feasible combination, or
/// `None` once the stack is exhausted. `None` is terminal for the session.
///
/// Branching follows the decision order of the catalog. Items with an
/// explicit bound iterate their range from `max` down to `min`;
/// unconstrained items derive their ceiling from the remaining budget on the
/// fly. Every child is pushed only if its running cost stays within the
/// interval's upper bound - costs only grow as later items are decided, so
/// an over-budget branch is provably infeasible.
///
/// # Example
///
/// ```
/// use budgetfit_core::{Catalog, Item, PriceInterval};
/// use budgetfit_solver::BudgetSearch;
///
/// let catalog = Catalog::new(vec![
///     Item::new("A", "10".parse().unwrap()),
///     Item::new("B", "15".parse().unwrap()),
/// ]).unwrap();
/// let interval = PriceInterval::new("20".parse().unwrap(), "30".parse().unwrap()).unwrap();
///
/// let mut search = BudgetSearch::new(catalog, interval);
/// search.initialize();
///
/// let mut found = 0;
/// while let Some(solution) = search.find_next() {
///     assert!(solution.total_cost >= "20".parse().unwrap());
///     assert!(solution.total_cost <= "30".parse().unwrap());
///     found += 1;
/// }
/// assert_eq!(found, 4); // emitted as [0,2], [1,1], [2,0], [3,0]
/// ```
#[derive(Debug)]
pub struct BudgetSearch {
    catalog: Catalog,
    interval: PriceInterval,
    constraints: ConstraintTable,
    zero_price_cap: u32,
    stack: Vec<SearchNode>,
    seen: HashSet<Vec<u32>>,
    stats: SearchStats,
    initialized: bool,
}

impl BudgetSearch {
    /// Creates an engine over `catalog` targeting `interval`, with every
    /// item unconstrained.
    pub fn new(catalog: Catalog, interval: PriceInterval) -> Self {
        let constraints = ConstraintTable::new(catalog.len());
        BudgetSearch {
            catalog,
            interval,
            constraints,
            zero_price_cap: DEFAULT_ZERO_PRICE_CAP,
            stack: Vec::new(),
            seen: HashSet::new(),
            stats: SearchStats::default(),
            initialized: false,
        }
    }

    /// Replaces the whole constraint table.
    ///
    /// # Errors
    ///
    /// Returns an error if the table's size does not match the catalog.
    pub fn with_constraints(mut self, constraints: ConstraintTable) -> Result<Self> {
        if constraints.len() != self.catalog.len() {
            return Err(BudgetFitError::Config(format!(
                "constraint table covers {} items, catalog has {}",
                constraints.len(),
                self.catalog.len()
            )));
        }
        self.constraints = constraints;
        Ok(self)
    }

    /// Sets the quantity cap for zero-priced unconstrained items.
    pub fn with_zero_price_cap(mut self, cap: u32) -> Self {
        self.zero_price_cap = cap;
        self
    }

    /// Sets the bound for one item.
    ///
    /// Constraints are part of the session configuration and must be
    /// finalized before the search starts.
    ///
    /// # Errors
    ///
    /// Returns [`BudgetFitError::InvalidState`] if the session is already
    /// initialized, [`BudgetFitError::InvalidBound`] if `min > max`, and
    /// [`BudgetFitError::IndexOutOfRange`] for a bad index.
    pub fn set_constraint(&mut self, index: usize, min: u32, max: u32) -> Result<()> {
        if self.initialized {
            return Err(BudgetFitError::InvalidState(
                "constraints cannot change after the search is initialized".into(),
            ));
        }
        self.constraints.set(index, min, max)
    }

    /// Returns the catalog this engine searches over.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns the target interval.
    pub fn interval(&self) -> PriceInterval {
        self.interval
    }

    /// Returns the statistics of the current session.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Starts a fresh session: seeds the stack with a single root state and
    /// clears the seen-set and statistics.
    ///
    /// The root applies each constrained item's minimum up front, which
    /// shrinks the tree whenever floors are present; unconstrained items
    /// seed at zero. Calling this again discards the running session and
    /// starts over with the same configuration.
    pub fn initialize(&mut self) {
        let len = self.catalog.len();
        let mut quantities: QuantityVec = smallvec![0; len];
        for (index, bound) in self.constraints.iter() {
            quantities[index] = bound.min();
        }
        let running_cost = self.catalog.total_cost(&quantities);

        self.stack.clear();
        self.seen.clear();
        self.stats = SearchStats::default();
        self.stats.start();
        self.stack.push(SearchNode::root(quantities, running_cost));
        self.initialized = true;

        debug!(
            items = len,
            min_total = %self.interval.min_total(),
            max_total = %self.interval.max_total(),
            seed_cost = %running_cost,
            "search session initialized"
        );
    }

    /// Returns the next previously-unseen feasible combination, or `None`
    /// once the search space is exhausted.
    ///
    /// Exhaustion is terminal and sticky: every later call also returns
    /// `None`. A session that was never explicitly initialized is
    /// initialized on the first call.
    pub fn find_next(&mut self) -> Option<Solution> {
        if !self.initialized {
            self.initialize();
        }

        while let Some(node) = self.stack.pop() {
            self.stats.record_pop();

            if node.is_complete(self.catalog.len()) {
                if let Some(solution) = self.accept(&node) {
                    return Some(solution);
                }
                continue;
            }

            self.branch(&node);
        }

        debug!(
            nodes_popped = self.stats.nodes_popped,
            branches_pruned = self.stats.branches_pruned,
            solutions_found = self.stats.solutions_found,
            "search space exhausted"
        );
        None
    }

    /// Checks a complete assignment: interval membership, explicit bounds,
    /// and the dedup set. Returns the solution if all three pass.
    fn accept(&mut self, node: &SearchNode) -> Option<Solution> {
        let total = node.running_cost();
        if !self.interval.contains(total) {
            return None;
        }
        if !self.constraints.admits(node.quantities()) {
            return None;
        }
        let key = node.quantities().to_vec();
        if !self.seen.insert(key.clone()) {
            self.stats.record_duplicate();
            return None;
        }
        self.stats.record_solution();
        trace!(total = %total, quantities = ?key, "solution found");
        Some(Solution::new(key, total))
    }

    /// Expands one node: pushes a child per feasible quantity choice of the
    /// next item, from the highest choice down.
    fn branch(&mut self, node: &SearchNode) {
        let index = node.next_item();
        let price = self.catalog.unit_price(index);

        let (min, max) = match self.constraints.get(index) {
            QuantityBound::Bounded { min, max } => (min, max),
            QuantityBound::Unconstrained => {
                let remaining = self.interval.max_total() - node.running_cost();
                let ceiling = if price.is_zero() {
                    self.zero_price_cap
                } else if remaining.is_sign_negative() {
                    // Dead branch; the push guard below rejects its one child.
                    0
                } else {
                    // Floor of remaining budget over unit price. A
                    // sub-epsilon price can push this past the quantity
                    // type; such items fall back to the same finite cap as
                    // a zero price.
                    (remaining / price)
                        .floor()
                        .to_u32()
                        .unwrap_or(self.zero_price_cap)
                };
                (0, ceiling)
            }
        };

        for qty in (min..=max).rev() {
            let child = node.decide_next(qty, price);
            if child.running_cost() <= self.interval.max_total() {
                self.stats.record_push();
                self.stack.push(child);
            } else {
                self.stats.record_prune();
            }
        }
    }
}

impl Iterator for BudgetSearch {
    type Item = Solution;

    fn next(&mut self) -> Option<Solution> {
        self.find_next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use budgetfit_core::Item;
    use rust_decimal::Decimal;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn catalog(prices: &[&str]) -> Catalog {
        let items = prices
            .iter()
            .enumerate()
            .map(|(i, p)| Item::new(format!("item-{i}"), dec(p)))
            .collect();
        Catalog::new(items).unwrap()
    }

    fn interval(min: &str, max: &str) -> PriceInterval {
        PriceInterval::new(dec(min), dec(max)).unwrap()
    }

    /// Independent brute-force enumeration over a 2-item catalog.
    fn brute_force_2(
        p0: &str,
        p1: &str,
        range0: std::ops::RangeInclusive<u32>,
        range1: std::ops::RangeInclusive<u32>,
        min: &str,
        max: &str,
    ) -> HashSet<Vec<u32>> {
        let (p0, p1) = (dec(p0), dec(p1));
        let (min, max) = (dec(min), dec(max));
        let mut expected = HashSet::new();
        for q0 in range0 {
            for q1 in range1.clone() {
                let total = p0 * Decimal::from(q0) + p1 * Decimal::from(q1);
                if min <= total && total <= max {
                    expected.insert(vec![q0, q1]);
                }
            }
        }
        expected
    }

    #[test]
    fn test_completeness_matches_brute_force() {
        let cat = catalog(&["10", "15"]);
        let mut search = BudgetSearch::new(cat.clone(), interval("20", "30"));
        search.initialize();

        let mut found = HashSet::new();
        while let Some(solution) = search.find_next() {
            assert_eq!(cat.total_cost(&solution.quantities), solution.total_cost);
            assert!(found.insert(solution.quantities));
        }

        let expected = brute_force_2("10", "15", 0..=3, 0..=2, "20", "30");
        assert_eq!(found, expected);
        assert_eq!(found.len(), 4);
    }

    #[test]
    fn test_interval_membership_is_exact() {
        let mut search = BudgetSearch::new(
            catalog(&["24.12", "22.83", "51.58"]),
            interval("495", "500"),
        );

        for solution in search.by_ref().take(50) {
            assert!(solution.total_cost >= dec("495"), "{solution}");
            assert!(solution.total_cost <= dec("500"), "{solution}");
        }
    }

    #[test]
    fn test_no_duplicates_across_session() {
        let mut search = BudgetSearch::new(catalog(&["1", "2", "3"]), interval("5", "6"));
        search.initialize();

        let mut seen = HashSet::new();
        while let Some(solution) = search.find_next() {
            assert!(
                seen.insert(solution.quantities.clone()),
                "duplicate vector {:?}",
                solution.quantities
            );
        }
        assert!(!seen.is_empty());
    }

    #[test]
    fn test_explicit_bounds_are_honored() {
        let mut search = BudgetSearch::new(catalog(&["10", "15"]), interval("20", "60"));
        search.set_constraint(0, 1, 2).unwrap();
        search.set_constraint(1, 0, 1).unwrap();
        search.initialize();

        let mut found = HashSet::new();
        while let Some(solution) = search.find_next() {
            assert!((1..=2).contains(&solution.quantities[0]));
            assert!(solution.quantities[1] <= 1);
            found.insert(solution.quantities);
        }

        let expected = brute_force_2("10", "15", 1..=2, 0..=1, "20", "60");
        assert_eq!(found, expected);
    }

    #[test]
    fn test_monotone_exhaustion() {
        let mut search = BudgetSearch::new(catalog(&["10"]), interval("10", "10"));
        search.initialize();

        assert!(search.find_next().is_some());
        assert!(search.find_next().is_none());
        for _ in 0..10 {
            assert!(search.find_next().is_none());
        }
    }

    #[test]
    fn test_bounded_termination_single_item() {
        // Catalog [24.12], interval [24.12, 48.24]: exactly q=1 and q=2.
        let mut search = BudgetSearch::new(catalog(&["24.12"]), interval("24.12", "48.24"));
        search.initialize();

        let first = search.find_next().unwrap();
        assert_eq!(first.quantities, vec![1]);
        assert_eq!(first.total_cost, dec("24.12"));

        let second = search.find_next().unwrap();
        assert_eq!(second.quantities, vec![2]);
        assert_eq!(second.total_cost, dec("48.24"));

        assert!(search.find_next().is_none());
        assert_eq!(search.stats().solutions_found, 2);
    }

    #[test]
    fn test_zero_price_item_terminates_at_cap() {
        let mut search = BudgetSearch::new(catalog(&["0"]), interval("0", "0"))
            .with_zero_price_cap(5);
        search.initialize();

        let mut count = 0;
        while let Some(solution) = search.find_next() {
            assert_eq!(solution.total_cost, Decimal::ZERO);
            assert!(solution.quantities[0] <= 5);
            count += 1;
        }
        // Quantities 0 through 5, each a distinct vector.
        assert_eq!(count, 6);
    }

    #[test]
    fn test_sub_epsilon_price_falls_back_to_cap() {
        // floor(5 / 0.000000001) is far past u32; the ceiling falls back to
        // the finite cap instead of collapsing to zero, so nonzero
        // quantities stay reachable.
        let mut search = BudgetSearch::new(catalog(&["0.000000001"]), interval("0", "5"))
            .with_zero_price_cap(5);
        search.initialize();

        let mut found = HashSet::new();
        while let Some(solution) = search.find_next() {
            found.insert(solution.quantities);
        }
        assert!(found.contains(&vec![1]));
        assert_eq!(found.len(), 6);
    }

    #[test]
    fn test_empty_result_reports_immediately() {
        let mut search = BudgetSearch::new(catalog(&["1", "2"]), interval("0.01", "0.02"));
        search.initialize();

        assert!(search.find_next().is_none());
        assert_eq!(search.stats().solutions_found, 0);
    }

    #[test]
    fn test_infeasible_minimum_is_a_dead_end_not_an_error() {
        // The mandatory floor alone exceeds the budget; the only branch is
        // pruned and the session exhausts without solutions.
        let mut search = BudgetSearch::new(catalog(&["10"]), interval("0", "50"));
        search.set_constraint(0, 10, 10).unwrap();
        search.initialize();

        assert!(search.find_next().is_none());
        assert_eq!(search.stats().branches_pruned, 1);
    }

    #[test]
    fn test_minimums_pre_applied_in_seed_cost() {
        let mut search = BudgetSearch::new(catalog(&["48.06", "39.49"]), interval("0", "1000"));
        search.set_constraint(0, 4, 4).unwrap();
        search.initialize();

        // Every solution carries the floor exactly.
        let mut found = 0;
        while let Some(solution) = search.find_next() {
            assert_eq!(solution.quantities[0], 4);
            assert_eq!(
                solution.total_cost,
                dec("192.24") + dec("39.49") * Decimal::from(solution.quantities[1])
            );
            found += 1;
        }
        // q1 in 0..=floor((1000 - 192.24) / 39.49) = 0..=20
        assert_eq!(found, 21);
    }

    #[test]
    fn test_constraints_frozen_after_initialization() {
        let mut search = BudgetSearch::new(catalog(&["10"]), interval("0", "30"));
        search.initialize();

        assert!(matches!(
            search.set_constraint(0, 0, 1),
            Err(BudgetFitError::InvalidState(_))
        ));
    }

    #[test]
    fn test_reinitialize_starts_a_fresh_session() {
        let mut search = BudgetSearch::new(catalog(&["10"]), interval("10", "20"));
        search.initialize();
        let first_run: Vec<_> = search.by_ref().map(|s| s.quantities).collect();
        assert_eq!(first_run.len(), 2);

        search.initialize();
        let second_run: Vec<_> = search.by_ref().map(|s| s.quantities).collect();
        assert_eq!(first_run, second_run);
    }

    #[test]
    fn test_emission_sequence_is_lowest_first() {
        // Descending pushes onto a LIFO stack put the lowest choice on top,
        // so solutions surface in ascending quantity order.
        let mut search = BudgetSearch::new(catalog(&["10", "15"]), interval("20", "30"));
        search.initialize();

        let order: Vec<_> = search.map(|s| s.quantities).collect();
        assert_eq!(
            order,
            vec![vec![0, 2], vec![1, 1], vec![2, 0], vec![3, 0]]
        );
    }

    #[test]
    fn test_deterministic_order() {
        let run = || {
            let mut search =
                BudgetSearch::new(catalog(&["10", "15", "7"]), interval("30", "45"));
            search.initialize();
            search.map(|s| s.quantities).collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_iterator_drives_the_pull_contract() {
        let search = BudgetSearch::new(catalog(&["10", "15"]), interval("20", "30"));
        let solutions: Vec<_> = search.collect();
        assert_eq!(solutions.len(), 4);
    }

    #[test]
    fn test_empty_catalog() {
        // Zero items: the root is already complete with cost zero.
        let mut search = BudgetSearch::new(catalog(&[]), interval("0", "10"));
        let solution = search.find_next().unwrap();
        assert!(solution.quantities.is_empty());
        assert_eq!(solution.total_cost, Decimal::ZERO);
        assert!(search.find_next().is_none());
    }

    #[test]
    fn test_stats_track_traversal() {
        let mut search = BudgetSearch::new(catalog(&["10"]), interval("10", "20"));
        search.initialize();
        while search.find_next().is_some() {}

        let stats = search.stats();
        assert_eq!(stats.solutions_found, 2);
        assert!(stats.nodes_popped > 0);
        assert!(stats.nodes_pushed > 0);
    }
}
