//! Per-item quantity bounds and the constraint table.
//!
//! Each catalog item either carries an explicit closed quantity range or is
//! unconstrained, in which case the engine derives its ceiling dynamically
//! from the remaining budget. The two cases are a tagged variant rather than
//! presence/absence in a sparse map, which removes a class of
//! accidental-default bugs when probing by index.

use crate::error::{BudgetFitError, Result};

/// The quantity range available to one item.
///
/// # Examples
///
/// ```
/// use budgetfit_core::QuantityBound;
///
/// let bound = QuantityBound::bounded(1, 5).unwrap();
/// assert_eq!(bound.min(), 1);
/// assert!(bound.admits(5));
/// assert!(!bound.admits(6));
///
/// // min > max is a configuration error, not a silent swap.
/// assert!(QuantityBound::bounded(5, 1).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QuantityBound {
    /// No explicit range; the engine caps the quantity by remaining budget.
    #[default]
    Unconstrained,

    /// Explicit closed range `[min, max]` with `min <= max`.
    Bounded { min: u32, max: u32 },
}

impl QuantityBound {
    /// Creates an explicit bound.
    ///
    /// # Errors
    ///
    /// Returns [`BudgetFitError::InvalidBound`] if `min > max`.
    pub fn bounded(min: u32, max: u32) -> Result<Self> {
        if min > max {
            return Err(BudgetFitError::InvalidBound { min, max });
        }
        Ok(QuantityBound::Bounded { min, max })
    }

    /// Creates an exact bound pinning the quantity to `qty`.
    pub fn exactly(qty: u32) -> Self {
        QuantityBound::Bounded { min: qty, max: qty }
    }

    /// Returns the minimum quantity this bound requires (0 if unconstrained).
    #[inline]
    pub fn min(&self) -> u32 {
        match self {
            QuantityBound::Unconstrained => 0,
            QuantityBound::Bounded { min, .. } => *min,
        }
    }

    /// Returns whether this is an explicit bound.
    #[inline]
    pub fn is_bounded(&self) -> bool {
        matches!(self, QuantityBound::Bounded { .. })
    }

    /// Returns whether `qty` satisfies this bound.
    ///
    /// Unconstrained bounds admit every quantity; the budget cap for those is
    /// applied during branching, not here.
    #[inline]
    pub fn admits(&self, qty: u32) -> bool {
        match self {
            QuantityBound::Unconstrained => true,
            QuantityBound::Bounded { min, max } => *min <= qty && qty <= *max,
        }
    }
}

/// A dense table of one [`QuantityBound`] per catalog item.
///
/// The table is sized to the catalog at construction and keeps that size for
/// its lifetime. Bounds can be set one at a time or replaced wholesale; both
/// paths validate the item index against the table size.
///
/// # Examples
///
/// ```
/// use budgetfit_core::{ConstraintTable, QuantityBound};
///
/// let mut table = ConstraintTable::new(3);
/// table.set(0, 4, 100).unwrap();
/// table.set(2, 0, 0).unwrap();
///
/// assert!(table.get(0).is_bounded());
/// assert_eq!(table.get(1), QuantityBound::Unconstrained);
/// assert_eq!(table.get(2), QuantityBound::exactly(0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintTable {
    bounds: Vec<QuantityBound>,
}

impl ConstraintTable {
    /// Creates a table of `len` unconstrained entries.
    pub fn new(len: usize) -> Self {
        ConstraintTable {
            bounds: vec![QuantityBound::Unconstrained; len],
        }
    }

    /// Sets the bound for one item.
    ///
    /// # Errors
    ///
    /// Returns [`BudgetFitError::InvalidBound`] if `min > max` and
    /// [`BudgetFitError::IndexOutOfRange`] if `index` is past the table.
    pub fn set(&mut self, index: usize, min: u32, max: u32) -> Result<()> {
        let bound = QuantityBound::bounded(min, max)?;
        self.set_bound(index, bound)
    }

    /// Sets a pre-built bound for one item.
    pub fn set_bound(&mut self, index: usize, bound: QuantityBound) -> Result<()> {
        let len = self.bounds.len();
        let slot = self
            .bounds
            .get_mut(index)
            .ok_or(BudgetFitError::IndexOutOfRange { index, len })?;
        *slot = bound;
        Ok(())
    }

    /// Replaces the whole table with `bounds`.
    ///
    /// # Errors
    ///
    /// Returns [`BudgetFitError::Config`] if `bounds` does not match the
    /// table's size.
    pub fn replace(&mut self, bounds: Vec<QuantityBound>) -> Result<()> {
        if bounds.len() != self.bounds.len() {
            return Err(BudgetFitError::Config(format!(
                "constraint table size mismatch: expected {}, got {}",
                self.bounds.len(),
                bounds.len()
            )));
        }
        self.bounds = bounds;
        Ok(())
    }

    /// Returns the bound for the item at `index`.
    ///
    /// Out-of-range indices read as unconstrained; writes are range-checked.
    #[inline]
    pub fn get(&self, index: usize) -> QuantityBound {
        self.bounds
            .get(index)
            .copied()
            .unwrap_or(QuantityBound::Unconstrained)
    }

    /// Returns the number of entries in the table.
    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    /// Returns whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    /// Returns an iterator over `(index, bound)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, QuantityBound)> + '_ {
        self.bounds.iter().copied().enumerate()
    }

    /// Returns whether `quantities` satisfies every explicit bound.
    pub fn admits(&self, quantities: &[u32]) -> bool {
        self.iter()
            .all(|(i, bound)| bound.admits(quantities.get(i).copied().unwrap_or(0)))
    }
}
