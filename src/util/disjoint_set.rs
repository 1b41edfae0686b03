/// A [disjoint-set forest][forest] over `usize` elements in the range `0..len`.
///
/// Union by rank, with path halving during `find`.
///
/// [forest]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
pub struct DisjointSet {
    parents: Vec<usize>,
    ranks: Vec<u8>,
}

impl DisjointSet {
    pub fn new(len: usize) -> Self {
        Self {
            parents: (0_usize..len).collect(),
            ranks: vec![0_u8; len],
        }
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    pub fn find(&mut self, element: usize) -> usize {
        let mut element: usize = element;

        while self.parents[element] != element {
            self.parents[element] = self.parents[self.parents[element]];
            element = self.parents[element];
        }

        element
    }

    /// Merges the sets containing the two elements, returning `false` if they were already in the
    /// same set.
    pub fn union(&mut self, element_a: usize, element_b: usize) -> bool {
        let root_a: usize = self.find(element_a);
        let root_b: usize = self.find(element_b);

        if root_a == root_b {
            false
        } else {
            let (parent, child): (usize, usize) = if self.ranks[root_a] >= self.ranks[root_b] {
                (root_a, root_b)
            } else {
                (root_b, root_a)
            };

            self.parents[child] = parent;

            if self.ranks[parent] == self.ranks[child] {
                self.ranks[parent] += 1_u8;
            }

            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_find() {
        let mut disjoint_set: DisjointSet = DisjointSet::new(6_usize);

        assert_eq!(disjoint_set.len(), 6_usize);

        for element in 0_usize..6_usize {
            assert_eq!(disjoint_set.find(element), element);
        }

        assert!(disjoint_set.union(0_usize, 1_usize));
        assert!(disjoint_set.union(1_usize, 2_usize));
        assert!(!disjoint_set.union(0_usize, 2_usize));
        assert_eq!(disjoint_set.find(2_usize), disjoint_set.find(0_usize));

        assert!(disjoint_set.union(4_usize, 5_usize));
        assert_ne!(disjoint_set.find(4_usize), disjoint_set.find(0_usize));
        assert_eq!(disjoint_set.find(3_usize), 3_usize);

        assert!(disjoint_set.union(2_usize, 5_usize));
        assert_eq!(disjoint_set.find(5_usize), disjoint_set.find(1_usize));
    }
}
