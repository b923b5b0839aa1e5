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

//! Read-only graph access used by the clique enumeration.
//!
//! The enumeration never owns or mutates a graph. It borrows anything that
//! implements [`GraphQuery`] for as long as the iterator lives, so the borrow
//! checker rules out structural changes while a search is in progress.

use foldhash::{HashSet, HashSetExt};
use petgraph::graph::{IndexType, NodeIndex};
use petgraph::stable_graph::StableGraph;
use petgraph::{Graph, Undirected};

use crate::error::{GraphError, GraphResult};

/// Vertex enumeration, neighbor lookup and adjacency test over an undirected
/// simple graph whose vertices are identified by `usize` indices.
pub trait GraphQuery {
    /// Upper bound on vertex indices: every vertex `v` satisfies `v < node_bound()`.
    fn node_bound(&self) -> usize;

    /// All vertices of the graph.
    fn vertices(&self) -> impl Iterator<Item = usize> + '_;

    /// Neighbors of `v`. Implementations must not report `v` itself.
    fn neighbors(&self, v: usize) -> impl Iterator<Item = usize> + '_;

    /// Whether `u` and `v` are joined by an edge. Always `false` for `u == v`.
    fn contains_edge(&self, u: usize, v: usize) -> bool;

    /// Number of vertices.
    fn vertex_count(&self) -> usize {
        self.vertices().count()
    }
}

impl<N, E, Ix: IndexType> GraphQuery for Graph<N, E, Undirected, Ix> {
    fn node_bound(&self) -> usize {
        self.node_count()
    }

    fn vertices(&self) -> impl Iterator<Item = usize> + '_ {
        self.node_indices().map(|node| node.index())
    }

    fn neighbors(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        let node = (v < self.node_count()).then(|| NodeIndex::<Ix>::new(v));
        node.into_iter()
            .flat_map(move |node| Graph::neighbors(self, node))
            .map(|neighbor| neighbor.index())
            .filter(move |&neighbor| neighbor != v)
    }

    fn contains_edge(&self, u: usize, v: usize) -> bool {
        let bound = self.node_count();
        if u == v || u >= bound || v >= bound {
            return false;
        }
        self.find_edge(NodeIndex::new(u), NodeIndex::new(v))
            .is_some()
    }

    fn vertex_count(&self) -> usize {
        self.node_count()
    }
}

impl<N, E, Ix: IndexType> GraphQuery for StableGraph<N, E, Undirected, Ix> {
    fn node_bound(&self) -> usize {
        petgraph::visit::NodeIndexable::node_bound(self)
    }

    fn vertices(&self) -> impl Iterator<Item = usize> + '_ {
        self.node_indices().map(|node| node.index())
    }

    fn neighbors(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        let node = (v < petgraph::visit::NodeIndexable::node_bound(self)).then(|| NodeIndex::<Ix>::new(v));
        node.into_iter()
            .flat_map(move |node| StableGraph::neighbors(self, node))
            .map(|neighbor| neighbor.index())
            .filter(move |&neighbor| neighbor != v)
    }

    fn contains_edge(&self, u: usize, v: usize) -> bool {
        let bound = petgraph::visit::NodeIndexable::node_bound(self);
        if u == v || u >= bound || v >= bound {
            return false;
        }
        self.find_edge(NodeIndex::new(u), NodeIndex::new(v))
            .is_some()
    }

    fn vertex_count(&self) -> usize {
        self.node_count()
    }
}

/// A small owned simple graph on vertices `0..n`, stored as adjacency sets.
///
/// Useful when the caller has an edge list and no graph library at hand.
/// Malformed input (out-of-range endpoints, self-loops) is rejected here,
/// at construction time, so the enumeration never has to check for it.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyGraph {
    adjacency: Vec<HashSet<usize>>,
    edge_count: usize,
}

impl AdjacencyGraph {
    /// Creates an edgeless graph with `vertex_count` vertices.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![HashSet::new(); vertex_count],
            edge_count: 0,
        }
    }

    /// Builds a graph on `vertex_count` vertices from an edge list.
    ///
    /// Duplicate edges (in either orientation) are merged.
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut graph = Self::new(vertex_count);
        for (u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Adds the undirected edge `u - v`. Returns `false` if it was already present.
    pub fn add_edge(&mut self, u: usize, v: usize) -> GraphResult<bool> {
        let bound = self.adjacency.len();
        for vertex in [u, v] {
            if vertex >= bound {
                return Err(GraphError::VertexOutOfRange { vertex, bound });
            }
        }
        if u == v {
            return Err(GraphError::SelfLoop(u));
        }
        let inserted = self.adjacency[u].insert(v);
        self.adjacency[v].insert(u);
        if inserted {
            self.edge_count += 1;
        }
        Ok(inserted)
    }

    /// Number of distinct edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Number of neighbors of `v` (0 for an unknown vertex).
    pub fn degree(&self, v: usize) -> usize {
        self.adjacency.get(v).map_or(0, HashSet::len)
    }
}

impl GraphQuery for AdjacencyGraph {
    fn node_bound(&self) -> usize {
        self.adjacency.len()
    }

    fn vertices(&self) -> impl Iterator<Item = usize> + '_ {
        0..self.adjacency.len()
    }

    fn neighbors(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacency.get(v).into_iter().flatten().copied()
    }

    fn contains_edge(&self, u: usize, v: usize) -> bool {
        self.adjacency
            .get(u)
            .is_some_and(|neighbors| neighbors.contains(&v))
    }

    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }
}
