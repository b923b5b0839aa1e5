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
// Bron, C.; Kerbosch, J. (1973). "Algorithm 457: finding all cliques of an undirected graph". Communications of the ACM. 16 (9): 575–577. doi:10.1145/362342.362367.

use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::options::EnumerationOptions;
use super::state::{EnumerationState, Frame};
use super::vertex_set::{Neighborhoods, VertexSet};
use crate::clique::Clique;
use crate::error::{CliqueError, CliqueResult};
use crate::graph::GraphQuery;

/// Counters describing how much of the search tree has been walked so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumerationStats {
    /// Child frames pushed (the root frame is not counted).
    pub frames_pushed: u64,
    /// Children skipped because a finished vertex dominated their candidates.
    pub dominated_branches: u64,
    /// Children skipped because they could not reach the minimum clique size.
    pub undersized_branches: u64,
    /// Frames popped without producing a clique.
    pub non_maximal_frames: u64,
    pub cliques_emitted: u64,
    /// Deepest stack seen, root frame included.
    pub max_depth: usize,
}

/// Lazily enumerates the maximal cliques of an undirected graph.
///
/// The Bron-Kerbosch recursion is kept on an explicit stack of frames, so the
/// caller pulls one clique at a time, may stop at any point, and the search
/// depth is not limited by the thread's call stack. Every maximal clique is
/// produced exactly once. The order of the cliques is deterministic for a
/// given graph but otherwise unspecified.
///
/// The iterator holds a shared borrow of the graph for its whole lifetime, so
/// the graph cannot be mutated while a search is in progress.
///
/// Both the explicit pull protocol and [`Iterator`] are supported:
///
/// ```
/// use clique_iter::cliques::BronKerboschCliqueIterator;
/// use clique_iter::graph::AdjacencyGraph;
///
/// let graph = AdjacencyGraph::from_edges(3, [(0, 1), (1, 2)]).unwrap();
/// let mut cliques = BronKerboschCliqueIterator::new(&graph);
/// while cliques.has_next() {
///     let clique = cliques.next_clique().unwrap();
///     assert_eq!(clique.size(), 2);
/// }
/// assert!(cliques.next_clique().is_err());
/// ```
pub struct BronKerboschCliqueIterator<'g, G: GraphQuery> {
    graph: &'g G,
    neighborhoods: Neighborhoods,
    state: EnumerationState,
    options: EnumerationOptions,
    buffered: Option<Clique>,
    stats: EnumerationStats,
    exhausted: bool,
    cancelled: bool,
}

impl<'g, G: GraphQuery> BronKerboschCliqueIterator<'g, G> {
    pub fn new(graph: &'g G) -> Self {
        Self::with_options(graph, EnumerationOptions::default())
    }

    pub fn with_options(graph: &'g G, options: EnumerationOptions) -> Self {
        let neighborhoods = Neighborhoods::from_graph(graph);
        let bound = neighborhoods.bound();
        let vertices = VertexSet::from_vertices(bound, graph.vertices());
        debug!(
            node_bound = bound,
            vertices = vertices.len(),
            pruning = ?options.pruning,
            min_size = options.min_size,
            "starting maximal clique enumeration"
        );
        let root = Frame::root(vertices, options.pruning, &neighborhoods);
        Self {
            graph,
            neighborhoods,
            state: EnumerationState::new(root, bound),
            options,
            buffered: None,
            stats: EnumerationStats {
                max_depth: 1,
                ..EnumerationStats::default()
            },
            exhausted: false,
            cancelled: false,
        }
    }

    /// Advances the search until a maximal clique is buffered.
    ///
    /// Returns `false` once every maximal clique has been produced (or the
    /// enumeration was cancelled). Calling it again while a clique is
    /// buffered does no work and returns `true`.
    pub fn has_next(&mut self) -> bool {
        if self.buffered.is_some() {
            return true;
        }
        while !self.state.is_empty() {
            if self.options.is_cancelled() {
                self.state.clear();
                self.cancelled = true;
                break;
            }
            let Some(top) = self.state.top_mut() else {
                break;
            };
            let Some(v) = top.next_branch() else {
                if let Some(frame) = self.state.pop() {
                    if self.accept(frame) {
                        return true;
                    }
                }
                continue;
            };

            let candidates = top.candidates.intersect_neighbors(&self.neighborhoods, v);
            let finished = top.finished.intersect_neighbors(&self.neighborhoods, v);

            // A finished vertex adjacent to every remaining candidate extends
            // every clique below this branch, so none of them is maximal.
            let dominated = finished
                .iter()
                .any(|f| self.neighborhoods.adjacent_to_all(f, &candidates));
            let child = if dominated {
                self.stats.dominated_branches += 1;
                None
            } else if self.options.min_size > 0
                && top.clique.size() + 1 + candidates.len() < self.options.min_size
            {
                self.stats.undersized_branches += 1;
                None
            } else {
                Some(Frame::new(
                    top.clique.extended(v),
                    candidates,
                    finished,
                    self.options.pruning,
                    &self.neighborhoods,
                ))
            };
            top.finish(v);

            if let Some(child) = child {
                self.state.push(child);
                self.stats.frames_pushed += 1;
                self.stats.max_depth = self.stats.max_depth.max(self.state.depth());
            }
        }
        if !self.exhausted {
            self.exhausted = true;
            debug!(
                cancelled = self.cancelled,
                stats = ?self.stats,
                "maximal clique enumeration finished"
            );
        }
        false
    }

    /// Returns the clique buffered by the last `has_next()` that returned `true`.
    ///
    /// # Errors
    /// [`CliqueError::NoSuchElement`] if no clique is buffered, i.e. `has_next()`
    /// was not called, returned `false`, or its clique was already taken.
    pub fn next_clique(&mut self) -> CliqueResult<Clique> {
        self.buffered.take().ok_or(CliqueError::NoSuchElement)
    }

    pub fn stats(&self) -> &EnumerationStats {
        &self.stats
    }

    pub fn options(&self) -> &EnumerationOptions {
        &self.options
    }

    /// Whether the enumeration stopped because its cancel token was set.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Buffers the clique of a popped frame if it is maximal and large enough.
    fn accept(&mut self, frame: Frame) -> bool {
        if !frame.is_maximal() {
            self.stats.non_maximal_frames += 1;
            return false;
        }
        if frame.clique.is_empty() || frame.clique.size() < self.options.min_size {
            return false;
        }
        debug_assert!(
            frame.clique.is_valid(self.graph),
            "produced a non-clique {}",
            frame.clique
        );
        trace!(
            size = frame.clique.size(),
            depth = self.state.depth(),
            "maximal clique"
        );
        self.stats.cliques_emitted += 1;
        self.buffered = Some(frame.clique);
        true
    }
}

impl<G: GraphQuery> Iterator for BronKerboschCliqueIterator<'_, G> {
    type Item = Clique;

    fn next(&mut self) -> Option<Clique> {
        if self.has_next() {
            self.buffered.take()
        } else {
            None
        }
    }
}

impl<G: GraphQuery> FusedIterator for BronKerboschCliqueIterator<'_, G> {}
