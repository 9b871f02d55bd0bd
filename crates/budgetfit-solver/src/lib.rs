//! BudgetFit Solver - Exhaustive enumeration of budget-filling combinations
//!
//! Depth-first search over per-item quantity assignments with upper-bound
//! pruning: a branch is cut as soon as its running cost exceeds the
//! interval's upper bound, since costs only grow as later items are decided.
//!
//! The engine is pull-based and resumable: [`BudgetSearch::find_next`]
//! returns one previously-unseen feasible combination per call and `None`
//! once the search space is exhausted. Every per-item choice set is finite
//! (bounded by an explicit constraint, the remaining budget, or the
//! zero-price cap), so exhaustion is structurally guaranteed.

pub mod node;
pub mod search;
pub mod stats;

pub use node::SearchNode;
pub use search::{BudgetSearch, DEFAULT_ZERO_PRICE_CAP};
pub use stats::SearchStats;
