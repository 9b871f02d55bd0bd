//! BudgetFit - Budget-Filling Combination Search in Rust
//!
//! Enumerates every distinct purchase-quantity combination over a fixed
//! catalog of priced items whose exact total falls in a closed price
//! interval, under per-item minimum/maximum quantity constraints.
//!
//! # Example
//!
//! ```rust
//! use budgetfit::prelude::*;
//!
//! let catalog = Catalog::new(vec![
//!     Item::new("Water", "10".parse().unwrap()),
//!     Item::new("Juice", "15".parse().unwrap()),
//! ]).unwrap();
//! let interval = PriceInterval::new("20".parse().unwrap(), "30".parse().unwrap()).unwrap();
//!
//! let mut search = BudgetSearch::new(catalog, interval);
//! search.initialize();
//!
//! let solutions: Vec<_> = search.collect();
//! assert_eq!(solutions.len(), 4);
//! ```

// Domain types
pub use budgetfit_core::{
    BudgetFitError, Catalog, ConstraintTable, Item, PriceInterval, QuantityBound, Solution,
};

// Configuration
pub use budgetfit_config::{ConfigError, ItemRef, SearchConfig, SearchSetup};

// The engine
pub use budgetfit_solver::{BudgetSearch, SearchStats, DEFAULT_ZERO_PRICE_CAP};

mod run;
pub use run::{run_search, session_from_config};

pub mod prelude {
    pub use super::{
        run_search, session_from_config, BudgetSearch, Catalog, ConstraintTable, Item,
        PriceInterval, QuantityBound, SearchConfig, Solution,
    };
}
