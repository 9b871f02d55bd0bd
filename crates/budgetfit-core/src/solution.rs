//! Finalized solutions: a full quantity vector plus its exact total cost.

use std::fmt;

use rust_decimal::Decimal;

use crate::catalog::Catalog;

/// One feasible purchase combination.
///
/// `quantities` has one entry per catalog item, in catalog order, and
/// `total_cost` is the exact weighted sum of the vector over the catalog.
/// Solutions compare equal when their quantity vectors are equal; the cost
/// is derived data.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Purchase quantity per catalog item, in catalog order.
    pub quantities: Vec<u32>,
    /// Exact total cost of the combination.
    pub total_cost: Decimal,
}

impl Solution {
    /// Creates a solution from a quantity vector and its total.
    pub fn new(quantities: Vec<u32>, total_cost: Decimal) -> Self {
        Solution {
            quantities,
            total_cost,
        }
    }

    /// Returns a displayable per-line-item breakdown against `catalog`.
    ///
    /// Zero-quantity items are omitted, matching how purchase lists are
    /// usually presented.
    ///
    /// # Examples
    ///
    /// ```
    /// use budgetfit_core::{Catalog, Item, Solution};
    ///
    /// let catalog = Catalog::new(vec![
    ///     Item::new("Water", "24.12".parse().unwrap()),
    ///     Item::new("Juice", "95.05".parse().unwrap()),
    /// ]).unwrap();
    ///
    /// let solution = Solution::new(vec![2, 0], "48.24".parse().unwrap());
    /// let text = solution.breakdown(&catalog).to_string();
    /// assert!(text.contains("Water: 2 x 24.12 = 48.24"));
    /// assert!(!text.contains("Juice"));
    /// assert!(text.contains("Total: 48.24"));
    /// ```
    pub fn breakdown<'a>(&'a self, catalog: &'a Catalog) -> SolutionBreakdown<'a> {
        SolutionBreakdown {
            solution: self,
            catalog,
        }
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} = {}", self.quantities, self.total_cost)
    }
}

/// Borrowing display adapter produced by [`Solution::breakdown`].
pub struct SolutionBreakdown<'a> {
    solution: &'a Solution,
    catalog: &'a Catalog,
}

impl fmt::Display for SolutionBreakdown<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, &qty) in self.solution.quantities.iter().enumerate() {
            if qty == 0 {
                continue;
            }
            if let Some(item) = self.catalog.get(index) {
                let line_cost = item.unit_price * Decimal::from(qty);
                writeln!(
                    f,
                    "- {}: {} x {} = {}",
                    item.name, qty, item.unit_price, line_cost
                )?;
            }
        }
        write!(f, "Total: {}", self.solution.total_cost)
    }
}
