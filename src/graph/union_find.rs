/// A node of the disjoint set forest.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Subset {
    pub parent: usize,
    pub rank: u32,
}

/// [Disjoint set](https://en.wikipedia.org/wiki/Disjoint-set_data_structure) with path compression and union by rank.
///
/// Indices must be in `0..len()`, anything else panics.
#[derive(Clone, Debug)]
pub struct UnionFind {
    subsets: Vec<Subset>,
}

impl UnionFind {
    /// Every element starts out as its own singleton set.
    pub fn new(n: usize) -> Self {
        Self {
            subsets: (0..n).map(|parent| Subset { parent, rank: 0 }).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.subsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subsets.is_empty()
    }

    /// The raw forest, indexed by element.
    pub fn subsets(&self) -> &[Subset] {
        &self.subsets
    }

    /// Find the root of the set containing `i`.
    ///
    /// Every node visited on the way up is repointed directly at the root.
    pub fn find(&mut self, i: usize) -> usize {
        let mut root = i;
        while self.subsets[root].parent != root {
            root = self.subsets[root].parent;
        }

        let mut current = i;
        while current != root {
            let next = self.subsets[current].parent;
            self.subsets[current].parent = root;
            current = next;
        }
        root
    }

    /// Merge the sets containing `x` and `y`, returning the root of the merged set.
    ///
    /// The shallower tree goes under the deeper one. On a tie, `x`'s root wins and its rank grows by one.
    pub fn union(&mut self, x: usize, y: usize) -> usize {
        let x_root = self.find(x);
        let y_root = self.find(y);
        if x_root == y_root {
            return x_root;
        }

        let x_rank = self.subsets[x_root].rank;
        let y_rank = self.subsets[y_root].rank;
        match x_rank.cmp(&y_rank) {
            std::cmp::Ordering::Less => {
                self.subsets[x_root].parent = y_root;
                y_root
            }
            std::cmp::Ordering::Greater => {
                self.subsets[y_root].parent = x_root;
                x_root
            }
            std::cmp::Ordering::Equal => {
                self.subsets[y_root].parent = x_root;
                self.subsets[x_root].rank += 1;
                x_root
            }
        }
    }
}
