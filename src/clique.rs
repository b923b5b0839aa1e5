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

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::graph::GraphQuery;

/// An ordered sequence of pairwise-adjacent vertices.
///
/// Vertices are kept in the order they were added by the search. Use
/// [`Clique::sorted`] when a canonical order is needed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Clique {
    vertices: Vec<usize>,
}

impl Clique {
    /// The empty clique.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a vertex sequence without checking adjacency; see [`Clique::is_valid`].
    pub fn from_vertices(vertices: Vec<usize>) -> Self {
        Self { vertices }
    }

    /// Returns a new clique with `v` appended.
    pub fn extended(&self, v: usize) -> Self {
        let mut vertices = Vec::with_capacity(self.vertices.len() + 1);
        vertices.extend_from_slice(&self.vertices);
        vertices.push(v);
        Self { vertices }
    }

    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }

    pub fn size(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains(&self, v: usize) -> bool {
        self.vertices.contains(&v)
    }

    /// Checks that every pair of vertices is adjacent in `graph` and that no
    /// vertex repeats.
    pub fn is_valid<G: GraphQuery>(&self, graph: &G) -> bool {
        self.vertices.iter().enumerate().all(|(i, &u)| {
            self.vertices[i + 1..]
                .iter()
                .all(|&v| graph.contains_edge(u, v))
        })
    }

    /// The vertices in ascending order.
    pub fn sorted(&self) -> Vec<usize> {
        let mut vertices = self.vertices.clone();
        vertices.sort_unstable();
        vertices
    }

    pub fn into_vertices(self) -> Vec<usize> {
        self.vertices
    }
}

impl From<Vec<usize>> for Clique {
    fn from(vertices: Vec<usize>) -> Self {
        Self::from_vertices(vertices)
    }
}

impl From<Clique> for Vec<usize> {
    fn from(clique: Clique) -> Self {
        clique.vertices
    }
}

impl fmt::Display for Clique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{v}")?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::Clique;
    use crate::graph::AdjacencyGraph;

    #[test]
    fn extended_leaves_prefix_untouched() {
        let prefix = Clique::from_vertices(vec![3, 1]);
        let clique = prefix.extended(2);
        assert_eq!(prefix.vertices(), &[3, 1]);
        assert_eq!(clique.vertices(), &[3, 1, 2]);
        assert_eq!(clique.size(), 3);
        assert_eq!(clique.sorted(), vec![1, 2, 3]);
    }

    #[test]
    fn validity_requires_every_pair_adjacent() {
        let graph = AdjacencyGraph::from_edges(4, [(0, 1), (1, 2), (0, 2), (2, 3)]).unwrap();
        assert!(Clique::new().is_valid(&graph));
        assert!(Clique::from_vertices(vec![3]).is_valid(&graph));
        assert!(Clique::from_vertices(vec![0, 1, 2]).is_valid(&graph));
        assert!(!Clique::from_vertices(vec![1, 2, 3]).is_valid(&graph));
        assert!(!Clique::from_vertices(vec![1, 1]).is_valid(&graph));
    }

    #[test]
    fn display_and_serde_use_plain_sequences() {
        let clique = Clique::from_vertices(vec![4, 0, 7]);
        assert_eq!(clique.to_string(), "{4, 0, 7}");
        assert_eq!(Clique::new().to_string(), "{}");
        let json = serde_json::to_string(&clique).unwrap();
        assert_eq!(json, "[4,0,7]");
        let back: Clique = serde_json::from_str(&json).unwrap();
        assert_eq!(back, clique);
    }
}
