//! BudgetFit Core - Domain types for budget-filling combination search
//!
//! This crate provides the fundamental types shared by the BudgetFit crates:
//! - Catalog types for the fixed list of priced items
//! - Quantity bounds and the per-item constraint table
//! - The closed price interval a combination's total must fall in
//! - Solution types for finalized quantity assignments
//!
//! All monetary arithmetic uses [`rust_decimal::Decimal`]; the interval check
//! is an exact boundary comparison, so binary floating point is never used.

pub mod catalog;
pub mod constraint;
pub mod error;
pub mod interval;
pub mod solution;

pub use catalog::{Catalog, Item};
pub use constraint::{ConstraintTable, QuantityBound};
pub use error::{BudgetFitError, Result};
pub use interval::PriceInterval;
pub use solution::Solution;
