//! Union-find over dense element ids.
//!
//! Path compression in [`DisjointSet::find`] and union by rank in
//! [`DisjointSet::union`] keep both operations amortised near-constant.

use std::cmp::Ordering;

/// Partition of the elements `0..len` into disjoint sets.
///
/// # Examples
/// ```
/// use graphkit_core::DisjointSet;
///
/// let mut sets = DisjointSet::new(4);
/// let (a, b) = (sets.find(1), sets.find(2));
/// sets.union(a, b);
/// assert!(sets.connected(1, 2));
/// assert!(!sets.connected(1, 3));
/// assert_eq!(sets.component_count(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parents: Vec<usize>,
    ranks: Vec<u32>,
    components: usize,
}

impl DisjointSet {
    /// Creates `len` singleton sets.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            parents: (0..len).collect(),
            ranks: vec![0; len],
            components: len,
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Returns `true` when the structure holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Returns the number of disjoint sets.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.components }

    /// Returns the representative of the set containing `element`, pointing
    /// every node on the walked path straight at it.
    ///
    /// # Panics
    /// Panics when `element >= self.len()`.
    pub fn find(&mut self, element: usize) -> usize {
        let mut root = element;
        while self.parents[root] != root {
            root = self.parents[root];
        }

        let mut current = element;
        while current != root {
            let next = self.parents[current];
            self.parents[current] = root;
            current = next;
        }
        root
    }

    /// Merges the sets represented by `left_root` and `right_root`.
    ///
    /// Both arguments must be representatives as returned by
    /// [`Self::find`]. Returns `false` when they already name the same set.
    ///
    /// # Panics
    /// Panics when either id is out of range. Debug builds also panic when an
    /// argument is not a representative.
    pub fn union(&mut self, left_root: usize, right_root: usize) -> bool {
        debug_assert_eq!(self.parents[left_root], left_root, "left must be a root");
        debug_assert_eq!(self.parents[right_root], right_root, "right must be a root");

        if left_root == right_root {
            return false;
        }

        let (parent, child) = choose_parent_child(
            left_root,
            right_root,
            self.ranks[left_root],
            self.ranks[right_root],
        );
        self.parents[child] = parent;
        if self.ranks[parent] == self.ranks[child] {
            self.ranks[parent] += 1;
        }
        self.components -= 1;
        true
    }

    /// Returns `true` when `left` and `right` belong to the same set.
    ///
    /// # Panics
    /// Panics when either id is out of range.
    pub fn connected(&mut self, left: usize, right: usize) -> bool {
        self.find(left) == self.find(right)
    }
}

/// Higher rank becomes the parent; on equal rank the lower id wins.
fn choose_parent_child(
    left_root: usize,
    right_root: usize,
    left_rank: u32,
    right_rank: u32,
) -> (usize, usize) {
    match left_rank.cmp(&right_rank) {
        Ordering::Greater => (left_root, right_root),
        Ordering::Less => (right_root, left_root),
        Ordering::Equal if left_root <= right_root => (left_root, right_root),
        Ordering::Equal => (right_root, left_root),
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rstest::rstest;

    use super::DisjointSet;
    use crate::test_utils::suite_proptest_config;

    fn join(sets: &mut DisjointSet, left: usize, right: usize) -> bool {
        let (left_root, right_root) = (sets.find(left), sets.find(right));
        sets.union(left_root, right_root)
    }

    #[test]
    fn starts_as_singletons() {
        let mut sets = DisjointSet::new(5);
        assert_eq!(sets.len(), 5);
        assert_eq!(sets.component_count(), 5);
        for element in 0..5 {
            assert_eq!(sets.find(element), element);
        }
    }

    #[test]
    fn union_of_same_root_is_a_no_op() {
        let mut sets = DisjointSet::new(3);
        assert!(join(&mut sets, 0, 1));
        assert!(!join(&mut sets, 1, 0));
        assert_eq!(sets.component_count(), 2);
    }

    #[rstest]
    #[case::equal_rank_prefers_lower_id(&[(3, 1)], 1, 1)]
    #[case::taller_tree_absorbs(&[(4, 5), (2, 4)], 2, 4)]
    fn picks_expected_representative(
        #[case] unions: &[(usize, usize)],
        #[case] probe: usize,
        #[case] expected: usize,
    ) {
        let mut sets = DisjointSet::new(6);
        for &(left, right) in unions {
            join(&mut sets, left, right);
        }
        assert_eq!(sets.find(probe), expected);
    }

    #[test]
    fn find_compresses_long_chains() {
        let mut sets = DisjointSet::new(8);
        for element in 1..8 {
            join(&mut sets, 0, element);
        }
        let root = sets.find(7);
        for element in 0..8 {
            assert_eq!(sets.find(element), root);
        }
        assert_eq!(sets.component_count(), 1);
    }

    /// Naive labelling oracle: relabel one whole class on each merge.
    fn oracle_labels(len: usize, unions: &[(usize, usize)]) -> Vec<usize> {
        let mut labels: Vec<usize> = (0..len).collect();
        for &(left, right) in unions {
            let (from, to) = (labels[right], labels[left]);
            for label in &mut labels {
                if *label == from {
                    *label = to;
                }
            }
        }
        labels
    }

    proptest! {
        #![proptest_config(suite_proptest_config(128))]

        #[test]
        fn find_agrees_with_union_chains(
            (len, unions) in (1usize..24).prop_flat_map(|len| {
                (Just(len), prop::collection::vec((0..len, 0..len), 0..32))
            })
        ) {
            let mut sets = DisjointSet::new(len);
            for &(left, right) in &unions {
                join(&mut sets, left, right);
            }
            let labels = oracle_labels(len, &unions);
            let mut classes = labels.clone();
            classes.sort_unstable();
            classes.dedup();
            prop_assert_eq!(sets.component_count(), classes.len());
            for x in 0..len {
                for y in 0..len {
                    prop_assert_eq!(sets.connected(x, y), labels[x] == labels[y]);
                }
            }
        }
    }
}
