// Licensed under the Apache License, Version 2.0 (the "License"); you may
// not use this file except in compliance with the License. You may obtain
// a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the
// License for the specific language governing permissions and limitations
// under the License.

//! Lazy enumeration of the maximal cliques of an undirected graph.
//!
//! The search is Bron-Kerbosch with candidate/finished bookkeeping, run on an
//! explicit stack so it can be driven one clique at a time:
//!
//! ```
//! use clique_iter::cliques::maximal_cliques;
//! use clique_iter::graph::AdjacencyGraph;
//!
//! // A triangle 0-1-2 with a pendant vertex 3.
//! let graph = AdjacencyGraph::from_edges(4, [(0, 1), (1, 2), (0, 2), (2, 3)]).unwrap();
//! let mut cliques: Vec<Vec<usize>> = maximal_cliques(&graph).map(|c| c.sorted()).collect();
//! cliques.sort();
//! assert_eq!(cliques, vec![vec![0, 1, 2], vec![2, 3]]);
//! ```
//!
//! Any `petgraph` undirected `Graph` or `StableGraph` can be searched directly:
//!
//! ```
//! use clique_iter::cliques::{find_maximal_cliques_with, EnumerationOptions, Pruning};
//! use petgraph::graph::UnGraph;
//!
//! let graph = UnGraph::<(), ()>::from_edges([(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 2)]);
//! let options = EnumerationOptions::default()
//!     .with_pruning(Pruning::Pivot)
//!     .with_min_size(3);
//! assert_eq!(
//!     find_maximal_cliques_with(&graph, options),
//!     vec![vec![0, 1, 2], vec![2, 3, 4]]
//! );
//! ```
//!
//! The number of maximal cliques can be exponential in the number of
//! vertices, so on dense graphs the search may run for a long time between
//! two cliques. [`cliques::CancelToken`] stops it cooperatively.

pub mod clique;
pub mod cliques;
pub mod error;
pub mod graph;

pub use clique::Clique;
pub use cliques::{find_maximal_cliques, maximal_cliques, BronKerboschCliqueIterator};
pub use error::{CliqueError, GraphError};
pub use graph::{AdjacencyGraph, GraphQuery};
