//! Search node representation.
//!
//! Each node is a candidate state in the search tree: a partially-decided
//! quantity assignment plus its exact running cost.

use rust_decimal::Decimal;
use smallvec::SmallVec;

/// Inline capacity for the per-node quantity vector; catalogs of up to this
/// many items branch without heap allocation.
const INLINE_ITEMS: usize = 16;

/// Quantity vector stored inline for typical catalog sizes.
pub type QuantityVec = SmallVec<[u32; INLINE_ITEMS]>;

/// A node in the depth-first search tree.
///
/// Items at indices below `next_item` are finalized for this branch; items
/// at or past it still hold their seed quantity (the constrained minimum, or
/// zero). `running_cost` is always the exact weighted sum of the full
/// quantity vector. Nodes are value-semantic: branching copies the parent,
/// and a node is never mutated once pushed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode {
    /// Index of the next item to decide (catalog length = complete).
    next_item: usize,

    /// Quantity per catalog item; finalized below `next_item`.
    quantities: QuantityVec,

    /// Exact cost of the quantity vector so far.
    running_cost: Decimal,
}

impl SearchNode {
    /// Creates the root node from the seed quantities and their exact cost.
    pub fn root(quantities: QuantityVec, running_cost: Decimal) -> Self {
        Self {
            next_item: 0,
            quantities,
            running_cost,
        }
    }

    /// Returns the index of the next undecided item.
    #[inline]
    pub fn next_item(&self) -> usize {
        self.next_item
    }

    /// Returns the quantity vector.
    #[inline]
    pub fn quantities(&self) -> &[u32] {
        &self.quantities
    }

    /// Returns the exact running cost.
    #[inline]
    pub fn running_cost(&self) -> Decimal {
        self.running_cost
    }

    /// Returns whether all items have been decided.
    #[inline]
    pub fn is_complete(&self, catalog_len: usize) -> bool {
        self.next_item >= catalog_len
    }

    /// Returns the child node that decides the next item at quantity `qty`.
    ///
    /// The running cost is adjusted by the delta against the seed quantity
    /// already in the vector, so pre-applied constraint minimums are not
    /// double-counted.
    pub fn decide_next(&self, qty: u32, unit_price: Decimal) -> Self {
        let seed = self.quantities[self.next_item];
        let delta = Decimal::from(qty as i64 - seed as i64);
        let mut quantities = self.quantities.clone();
        quantities[self.next_item] = qty;
        Self {
            next_item: self.next_item + 1,
            quantities,
            running_cost: self.running_cost + delta * unit_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_root_node() {
        let node = SearchNode::root(smallvec![0, 0, 0], Decimal::ZERO);

        assert_eq!(node.next_item(), 0);
        assert_eq!(node.quantities(), &[0, 0, 0]);
        assert_eq!(node.running_cost(), Decimal::ZERO);
        assert!(!node.is_complete(3));
        assert!(node.is_complete(0));
    }

    #[test]
    fn test_decide_next_advances_and_prices() {
        let root = SearchNode::root(smallvec![0, 0], Decimal::ZERO);
        let child = root.decide_next(3, dec("24.12"));

        assert_eq!(child.next_item(), 1);
        assert_eq!(child.quantities(), &[3, 0]);
        assert_eq!(child.running_cost(), dec("72.36"));
        // Parent untouched: copy-on-branch.
        assert_eq!(root.quantities(), &[0, 0]);
        assert_eq!(root.running_cost(), Decimal::ZERO);
    }

    #[test]
    fn test_decide_next_delta_against_seed() {
        // Seed quantity 4 was pre-applied at cost 4 * 48.06 = 192.24.
        let root = SearchNode::root(smallvec![4, 0], dec("192.24"));

        // Keeping the seed quantity leaves the cost unchanged.
        let same = root.decide_next(4, dec("48.06"));
        assert_eq!(same.running_cost(), dec("192.24"));

        // Raising it adds only the delta.
        let more = root.decide_next(6, dec("48.06"));
        assert_eq!(more.running_cost(), dec("288.36"));

        // Lowering below the seed subtracts.
        let fewer = root.decide_next(3, dec("48.06"));
        assert_eq!(fewer.running_cost(), dec("144.18"));
    }
}
