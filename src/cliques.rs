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

//! Maximal clique enumeration.

mod iterator;
pub mod options;
mod state;
pub mod verify;
pub mod vertex_set;

pub use iterator::{BronKerboschCliqueIterator, EnumerationStats};
pub use options::{CancelToken, EnumerationOptions, Pruning};

use crate::graph::GraphQuery;

/// Lazily iterates over the maximal cliques of `graph` with default options.
pub fn maximal_cliques<G: GraphQuery>(graph: &G) -> BronKerboschCliqueIterator<'_, G> {
    BronKerboschCliqueIterator::new(graph)
}

/// Find all maximal cliques in a graph.
///
/// These are the maximal complete subgraphs, i.e., subgraphs where all nodes
/// are connected to each other and no other node can be added without breaking
/// this property.
///
/// Each clique is returned sorted. Cliques are ordered by smallest node, then
/// size, then lexicographically, so the output does not depend on the search
/// order.
pub fn find_maximal_cliques<G: GraphQuery>(graph: &G) -> Vec<Vec<usize>> {
    find_maximal_cliques_with(graph, EnumerationOptions::default())
}

/// Like [`find_maximal_cliques`], with explicit enumeration options.
///
/// If the options carry a cancel token that fires, the cliques found so far
/// are returned.
pub fn find_maximal_cliques_with<G: GraphQuery>(
    graph: &G,
    options: EnumerationOptions,
) -> Vec<Vec<usize>> {
    let mut cliques: Vec<Vec<usize>> = BronKerboschCliqueIterator::with_options(graph, options)
        .map(|clique| clique.sorted())
        .collect();
    sort_cliques(&mut cliques);
    cliques
}

// Deterministic output order by smallest node then full lexicographic order.
pub(crate) fn sort_cliques(cliques: &mut [Vec<usize>]) {
    cliques.sort_by(|a, b| {
        a.first()
            .cmp(&b.first())
            .then_with(|| a.len().cmp(&b.len()))
            .then_with(|| a.cmp(b))
    });
}

#[cfg(test)]
mod tests {
    use foldhash::{HashSet, HashSetExt};
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64;

    use super::verify::{brute_force_maximal_cliques, is_maximal};
    use super::*;
    use crate::graph::AdjacencyGraph;

    fn random_graph(rng: &mut Pcg64, n: usize, p: f64) -> AdjacencyGraph {
        let mut graph = AdjacencyGraph::new(n);
        for u in 0..n {
            for v in (u + 1)..n {
                if rng.random_bool(p) {
                    graph.add_edge(u, v).unwrap();
                }
            }
        }
        graph
    }

    #[test]
    fn matches_brute_force_on_random_graphs() {
        let mut rng = Pcg64::seed_from_u64(42);
        for round in 0..60 {
            let n = 1 + round % 12;
            let p = [0.2, 0.5, 0.8][round % 3];
            let graph = random_graph(&mut rng, n, p);
            let expected = brute_force_maximal_cliques(&graph).unwrap();
            for pruning in [Pruning::Domination, Pruning::Pivot] {
                let options = EnumerationOptions::default().with_pruning(pruning);
                assert_eq!(
                    find_maximal_cliques_with(&graph, options),
                    expected,
                    "round {round}, n = {n}, p = {p}, {pruning:?}"
                );
            }
        }
    }

    #[test]
    fn outputs_are_valid_unique_and_incomparable() {
        let mut rng = Pcg64::seed_from_u64(7);
        let graph = random_graph(&mut rng, 30, 0.5);
        let cliques: Vec<_> = maximal_cliques(&graph).collect();
        assert!(!cliques.is_empty());

        let mut seen: HashSet<Vec<usize>> = HashSet::with_capacity(cliques.len());
        for clique in &cliques {
            assert!(clique.is_valid(&graph));
            assert!(is_maximal(&graph, clique.vertices()));
            assert!(seen.insert(clique.sorted()), "duplicate clique {clique}");
        }
        for a in &cliques {
            for b in &cliques {
                if a != b {
                    assert!(!a.vertices().iter().all(|&v| b.contains(v)));
                }
            }
        }
    }

    #[test]
    fn fresh_iterators_agree() {
        let mut rng = Pcg64::seed_from_u64(1234);
        let graph = random_graph(&mut rng, 25, 0.4);
        let first = find_maximal_cliques(&graph);
        let second = find_maximal_cliques(&graph);
        assert_eq!(first, second);
        let pivot = find_maximal_cliques_with(
            &graph,
            EnumerationOptions::default().with_pruning(Pruning::Pivot),
        );
        assert_eq!(first, pivot);
    }

    #[test]
    fn min_size_keeps_exactly_the_large_cliques() {
        let mut rng = Pcg64::seed_from_u64(99);
        let graph = random_graph(&mut rng, 20, 0.6);
        let all = find_maximal_cliques(&graph);
        for min_size in 1..6 {
            let expected: Vec<Vec<usize>> = all
                .iter()
                .filter(|clique| clique.len() >= min_size)
                .cloned()
                .collect();
            for pruning in [Pruning::Domination, Pruning::Pivot] {
                let options = EnumerationOptions::default()
                    .with_pruning(pruning)
                    .with_min_size(min_size);
                assert_eq!(find_maximal_cliques_with(&graph, options), expected);
            }
        }
    }

    #[test]
    fn pre_cancelled_enumeration_is_empty() {
        let graph = AdjacencyGraph::from_edges(3, [(0, 1), (1, 2)]).unwrap();
        let token = CancelToken::new();
        token.cancel();
        let options = EnumerationOptions::default().with_cancel_token(token);
        assert!(find_maximal_cliques_with(&graph, options).is_empty());
    }

    #[test]
    fn deterministic_order() {
        let graph = AdjacencyGraph::from_edges(5, [(3, 4), (0, 1), (1, 2), (0, 2), (2, 3)])
            .unwrap();
        assert_eq!(
            find_maximal_cliques(&graph),
            vec![vec![0, 1, 2], vec![2, 3], vec![3, 4]]
        );
    }
}
