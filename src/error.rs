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

//! Error types for clique enumeration and graph construction.

use thiserror::Error;

/// Result type alias for clique enumeration operations.
pub type CliqueResult<T> = Result<T, CliqueError>;

/// Result type alias for graph construction operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors reported by the clique iterator and the verification helpers.
///
/// Running out of cliques is not an error: it is signaled by
/// [`has_next`](crate::cliques::BronKerboschCliqueIterator::has_next)
/// returning `false`. Only asking for a clique that does not exist is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CliqueError {
    /// `next_clique()` was called when no clique is left in the sequence.
    #[error("no more elements: the maximal clique sequence is exhausted")]
    NoSuchElement,

    /// The brute-force enumerator only handles small graphs.
    #[error("graph has {vertices} vertices, brute-force enumeration supports at most {limit}")]
    GraphTooLarge { vertices: usize, limit: usize },
}

/// Malformed input rejected while building an [`AdjacencyGraph`](crate::graph::AdjacencyGraph).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Vertex index is not below the graph's vertex bound.
    #[error("vertex {vertex} out of range for graph with {bound} vertices")]
    VertexOutOfRange { vertex: usize, bound: usize },

    /// Self-loops cannot take part in a simple undirected graph.
    #[error("self-loop on vertex {0} is not allowed")]
    SelfLoop(usize),
}
