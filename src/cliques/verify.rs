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

//! Independent checks for enumeration output.
//!
//! These helpers do not share any code path with the Bron-Kerbosch search and
//! are meant for testing it on small graphs.

use crate::error::{CliqueError, CliqueResult};
use crate::graph::GraphQuery;

/// Largest graph accepted by [`brute_force_maximal_cliques`].
pub const BRUTE_FORCE_MAX_VERTICES: usize = 24;

/// Whether `clique` is a clique of `graph` that no other vertex can extend.
pub fn is_maximal<G: GraphQuery>(graph: &G, clique: &[usize]) -> bool {
    if clique.is_empty() {
        return graph.vertices().next().is_none();
    }
    for (i, &u) in clique.iter().enumerate() {
        if clique[i + 1..].iter().any(|&v| !graph.contains_edge(u, v)) {
            return false;
        }
    }
    // A vertex outside the clique that is connected to all clique vertices
    // means the clique is not maximal.
    !graph
        .neighbors(clique[0])
        .filter(|candidate| !clique.contains(candidate))
        .any(|candidate| clique[1..].iter().all(|&v| graph.contains_edge(candidate, v)))
}

/// Lists every maximal clique by testing all vertex subsets.
///
/// Each clique is sorted; the list is ordered by smallest vertex, then size,
/// then lexicographically (the same order as
/// [`find_maximal_cliques`](super::find_maximal_cliques)).
///
/// # Errors
/// [`CliqueError::GraphTooLarge`] for graphs with more than
/// [`BRUTE_FORCE_MAX_VERTICES`] vertices.
pub fn brute_force_maximal_cliques<G: GraphQuery>(graph: &G) -> CliqueResult<Vec<Vec<usize>>> {
    let mut vertices: Vec<usize> = graph.vertices().collect();
    vertices.sort_unstable();
    let n = vertices.len();
    if n > BRUTE_FORCE_MAX_VERTICES {
        return Err(CliqueError::GraphTooLarge {
            vertices: n,
            limit: BRUTE_FORCE_MAX_VERTICES,
        });
    }

    // Adjacency masks over dense positions 0..n.
    let adj: Vec<u32> = vertices
        .iter()
        .map(|&u| {
            vertices
                .iter()
                .enumerate()
                .filter(|&(_, &v)| graph.contains_edge(u, v))
                .fold(0u32, |mask, (j, _)| mask | (1 << j))
        })
        .collect();

    let is_clique = |mask: u32| {
        (0..n)
            .filter(|&i| mask & (1 << i) != 0)
            .all(|i| mask & !(1 << i) & !adj[i] == 0)
    };

    let mut cliques: Vec<Vec<usize>> = Vec::new();
    for mask in 1u32..(1u32 << n) {
        if !is_clique(mask) {
            continue;
        }
        let extendable = (0..n).any(|j| mask & (1 << j) == 0 && mask & !adj[j] == 0);
        if !extendable {
            cliques.push(
                (0..n)
                    .filter(|&i| mask & (1 << i) != 0)
                    .map(|i| vertices[i])
                    .collect(),
            );
        }
    }
    super::sort_cliques(&mut cliques);
    Ok(cliques)
}
