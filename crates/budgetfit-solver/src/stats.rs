//! Search session statistics.
//!
//! Stack-allocated counters for one search session, reset on
//! re-initialization.

use std::time::{Duration, Instant};

/// Session-level statistics.
///
/// Tracks how the search space was traversed across all `find_next` calls
/// of one session.
///
/// # Example
///
/// ```
/// use budgetfit_solver::stats::SearchStats;
///
/// let mut stats = SearchStats::default();
/// stats.start();
/// stats.record_pop();
/// stats.record_push();
/// stats.record_prune();
/// stats.record_solution();
///
/// assert_eq!(stats.nodes_popped, 1);
/// assert_eq!(stats.nodes_pushed, 1);
/// assert_eq!(stats.branches_pruned, 1);
/// assert_eq!(stats.solutions_found, 1);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct SearchStats {
    start_time: Option<Instant>,
    /// Nodes popped off the work stack.
    pub nodes_popped: u64,
    /// Nodes pushed onto the work stack.
    pub nodes_pushed: u64,
    /// Branches cut by the upper-bound check before being pushed.
    pub branches_pruned: u64,
    /// Complete assignments skipped because their vector was already emitted.
    pub duplicates_skipped: u64,
    /// Distinct feasible solutions returned to the caller.
    pub solutions_found: u64,
}

impl SearchStats {
    /// Marks the start of the session.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Returns the elapsed time since the session started.
    pub fn elapsed(&self) -> Duration {
        self.start_time.map(|t| t.elapsed()).unwrap_or_default()
    }

    /// Records a node pop.
    pub fn record_pop(&mut self) {
        self.nodes_popped += 1;
    }

    /// Records a node push.
    pub fn record_push(&mut self) {
        self.nodes_pushed += 1;
    }

    /// Records a pruned branch.
    pub fn record_prune(&mut self) {
        self.branches_pruned += 1;
    }

    /// Records a duplicate complete assignment.
    pub fn record_duplicate(&mut self) {
        self.duplicates_skipped += 1;
    }

    /// Records an emitted solution.
    pub fn record_solution(&mut self) {
        self.solutions_found += 1;
    }

    /// Returns the nodes-popped-per-second rate.
    pub fn nodes_per_second(&self) -> f64 {
        let secs = self.elapsed().as_secs_f64();
        if secs > 0.0 {
            self.nodes_popped as f64 / secs
        } else {
            0.0
        }
    }
}
