// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Bitset-backed vertex sets for the search frames.

use fixedbitset::FixedBitSet;

use crate::graph::GraphQuery;

/// A set of vertex indices below a fixed bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexSet {
    bits: FixedBitSet,
}

impl VertexSet {
    /// An empty set able to hold vertices `0..bound`.
    pub fn with_bound(bound: usize) -> Self {
        Self {
            bits: FixedBitSet::with_capacity(bound),
        }
    }

    pub fn from_vertices<I: IntoIterator<Item = usize>>(bound: usize, vertices: I) -> Self {
        let mut set = Self::with_bound(bound);
        for v in vertices {
            set.insert(v);
        }
        set
    }

    /// The lowest member. Repeated calls without mutation return the same vertex.
    #[inline]
    pub fn peek(&self) -> Option<usize> {
        self.bits.ones().next()
    }

    #[inline]
    pub fn insert(&mut self, v: usize) {
        self.bits.insert(v);
    }

    #[inline]
    pub fn remove(&mut self, v: usize) {
        self.bits.set(v, false);
    }

    #[inline]
    pub fn contains(&self, v: usize) -> bool {
        self.bits.contains(v)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_clear()
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones(..)
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.ones()
    }

    /// `self ∩ N(v)` as a new set.
    #[inline]
    pub fn intersect_neighbors(&self, neighborhoods: &Neighborhoods, v: usize) -> Self {
        let mut bits = self.bits.clone();
        bits.intersect_with(neighborhoods.of(v));
        Self { bits }
    }

    /// `self \ N(v)` as a new set.
    pub fn without_neighbors(&self, neighborhoods: &Neighborhoods, v: usize) -> Self {
        let mut bits = self.bits.clone();
        bits.difference_with(neighborhoods.of(v));
        Self { bits }
    }

    /// Size of `self ∩ N(v)` without building it.
    pub fn count_neighbors(&self, neighborhoods: &Neighborhoods, v: usize) -> usize {
        self.bits.intersection(neighborhoods.of(v)).count()
    }

    pub fn is_subset(&self, other: &Self) -> bool {
        self.bits.is_subset(&other.bits)
    }
}

/// Neighbor bitsets for every vertex index below the graph's bound, built once
/// per enumeration.
#[derive(Debug, Clone)]
pub struct Neighborhoods {
    rows: Vec<FixedBitSet>,
}

impl Neighborhoods {
    pub fn from_graph<G: GraphQuery>(graph: &G) -> Self {
        let bound = graph.node_bound();
        let mut rows = vec![FixedBitSet::with_capacity(bound); bound];
        for v in graph.vertices() {
            for neighbor in graph.neighbors(v) {
                if neighbor == v || neighbor >= bound {
                    continue;
                }
                rows[v].insert(neighbor);
                rows[neighbor].insert(v);
            }
        }
        Self { rows }
    }

    pub fn bound(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    fn of(&self, v: usize) -> &FixedBitSet {
        &self.rows[v]
    }

    #[inline]
    pub fn adjacent(&self, u: usize, v: usize) -> bool {
        self.rows[u].contains(v)
    }

    /// Whether `f` is adjacent to every member of `set` (vacuously true for an empty set).
    #[inline]
    pub fn adjacent_to_all(&self, f: usize, set: &VertexSet) -> bool {
        set.bits.is_subset(self.of(f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::AdjacencyGraph;

    fn path() -> AdjacencyGraph {
        AdjacencyGraph::from_edges(4, [(0, 1), (1, 2), (2, 3)]).unwrap()
    }

    #[test]
    fn peek_remove_insert() {
        let mut set = VertexSet::from_vertices(8, [5, 2, 7]);
        assert_eq!(set.peek(), Some(2));
        assert_eq!(set.peek(), Some(2));
        set.remove(2);
        assert_eq!(set.peek(), Some(5));
        set.insert(1);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![1, 5, 7]);
        assert_eq!(set.len(), 3);
        assert!(set.contains(7));
        assert!(!set.contains(2));
        set.remove(1);
        set.remove(5);
        set.remove(7);
        assert!(set.is_empty());
        assert_eq!(set.peek(), None);
    }

    #[test]
    fn neighborhood_operations() {
        let neighborhoods = Neighborhoods::from_graph(&path());
        let all = VertexSet::from_vertices(4, 0..4);
        let around_one = all.intersect_neighbors(&neighborhoods, 1);
        assert_eq!(around_one.iter().collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(all.count_neighbors(&neighborhoods, 2), 2);
        assert_eq!(
            all.without_neighbors(&neighborhoods, 1)
                .iter()
                .collect::<Vec<_>>(),
            vec![1, 3]
        );
        assert!(neighborhoods.adjacent(2, 3));
        assert!(!neighborhoods.adjacent(0, 2));
    }

    #[test]
    fn adjacent_to_all_is_vacuous_on_empty_sets() {
        let neighborhoods = Neighborhoods::from_graph(&path());
        assert!(neighborhoods.adjacent_to_all(0, &VertexSet::with_bound(4)));
        assert!(neighborhoods.adjacent_to_all(1, &VertexSet::from_vertices(4, [0, 2])));
        assert!(!neighborhoods.adjacent_to_all(1, &VertexSet::from_vertices(4, [0, 3])));
    }
}
