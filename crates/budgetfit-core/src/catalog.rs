//! The item catalog: a fixed, ordered list of priced items.
//!
//! Items are identified by their 0-based position in the catalog. The order
//! is significant - it defines the engine's decision order - but carries no
//! other meaning, and the catalog is never reordered once built.

use rust_decimal::Decimal;

use crate::error::{BudgetFitError, Result};

/// A purchasable item with an exact decimal unit price.
///
/// # Examples
///
/// ```
/// use budgetfit_core::Item;
///
/// let item = Item::new("Sparkling water 330ml x24", "65.26".parse().unwrap());
/// assert_eq!(item.name, "Sparkling water 330ml x24");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Display name of the item.
    pub name: String,
    /// Price per unit, exact decimal.
    pub unit_price: Decimal,
}

impl Item {
    /// Creates a new item.
    pub fn new(name: impl Into<String>, unit_price: Decimal) -> Self {
        Item {
            name: name.into(),
            unit_price,
        }
    }
}

/// An immutable, ordered catalog of items.
///
/// Construction validates that every unit price is non-negative; a catalog
/// that fails validation is never observable.
///
/// # Examples
///
/// ```
/// use budgetfit_core::{Catalog, Item};
///
/// let catalog = Catalog::new(vec![
///     Item::new("Water", "24.12".parse().unwrap()),
///     Item::new("Juice", "95.05".parse().unwrap()),
/// ]).unwrap();
///
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.index_of("Juice"), Some(1));
/// assert!(catalog.index_of("Tea").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Builds a catalog from an ordered sequence of items.
    ///
    /// # Errors
    ///
    /// Returns [`BudgetFitError::NegativePrice`] if any item has a negative
    /// unit price. A zero price is allowed; the engine caps the branching
    /// factor of zero-priced items separately.
    pub fn new(items: Vec<Item>) -> Result<Self> {
        for item in &items {
            if item.unit_price.is_sign_negative() && !item.unit_price.is_zero() {
                return Err(BudgetFitError::NegativePrice {
                    name: item.name.clone(),
                    price: item.unit_price,
                });
            }
        }
        Ok(Catalog { items })
    }

    /// Returns the number of items in the catalog.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the item at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Returns the index of the first item with the given name.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.name == name)
    }

    /// Returns the unit price of the item at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range; callers index with positions
    /// obtained from this catalog.
    pub fn unit_price(&self, index: usize) -> Decimal {
        self.items[index].unit_price
    }

    /// Returns an iterator over the items in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Returns the items as a slice.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Computes the exact total cost of a quantity vector over this catalog.
    ///
    /// Quantities past the end of the catalog are ignored; missing trailing
    /// quantities count as zero.
    pub fn total_cost(&self, quantities: &[u32]) -> Decimal {
        self.items
            .iter()
            .zip(quantities)
            .map(|(item, &qty)| item.unit_price * Decimal::from(qty))
            .sum()
    }
}
