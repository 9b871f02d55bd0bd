//! The closed price interval a feasible combination's total must fall in.

use rust_decimal::Decimal;

use crate::error::{BudgetFitError, Result};

/// A closed interval `[min_total, max_total]` of exact decimal totals.
///
/// The invariant `min_total <= max_total` is enforced at construction, so an
/// inverted interval is never observable by the engine.
///
/// # Examples
///
/// ```
/// use budgetfit_core::PriceInterval;
///
/// let interval = PriceInterval::new("495".parse().unwrap(), "500".parse().unwrap()).unwrap();
/// assert!(interval.contains("497.50".parse().unwrap()));
/// assert!(interval.contains("495".parse().unwrap()));
/// assert!(!interval.contains("500.01".parse().unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceInterval {
    min_total: Decimal,
    max_total: Decimal,
}

impl PriceInterval {
    /// Creates a new closed price interval.
    ///
    /// # Errors
    ///
    /// Returns [`BudgetFitError::InvalidInterval`] if `min_total > max_total`.
    pub fn new(min_total: Decimal, max_total: Decimal) -> Result<Self> {
        if min_total > max_total {
            return Err(BudgetFitError::InvalidInterval {
                min: min_total,
                max: max_total,
            });
        }
        Ok(PriceInterval {
            min_total,
            max_total,
        })
    }

    /// Returns the lower bound, inclusive.
    #[inline]
    pub fn min_total(&self) -> Decimal {
        self.min_total
    }

    /// Returns the upper bound, inclusive.
    #[inline]
    pub fn max_total(&self) -> Decimal {
        self.max_total
    }

    /// Returns whether `total` lies in the interval, boundaries included.
    ///
    /// This is an exact comparison; both boundaries are members.
    #[inline]
    pub fn contains(&self, total: Decimal) -> bool {
        self.min_total <= total && total <= self.max_total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_boundaries_included() {
        let interval = PriceInterval::new(dec("495"), dec("500")).unwrap();
        assert!(interval.contains(dec("495")));
        assert!(interval.contains(dec("500")));
        assert!(!interval.contains(dec("494.99")));
        assert!(!interval.contains(dec("500.01")));
    }

    #[test]
    fn test_degenerate_interval() {
        let interval = PriceInterval::new(dec("24.12"), dec("24.12")).unwrap();
        assert!(interval.contains(dec("24.12")));
        assert!(!interval.contains(dec("24.13")));
    }

    #[test]
    fn test_inverted_interval_rejected() {
        let result = PriceInterval::new(dec("500"), dec("495"));
        assert!(matches!(result, Err(BudgetFitError::InvalidInterval { .. })));
    }
}
