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

//! Explicit search stack replacing the recursive Bron-Kerbosch calls.
//!
//! Each [`Frame`] holds the locals of one recursive call: the clique prefix
//! `R`, the candidates `P` and the finished (excluded) vertices `X`. Resuming
//! a call means reading the top frame and continuing with its next branch.

use super::options::Pruning;
use super::vertex_set::{Neighborhoods, VertexSet};
use crate::clique::Clique;

/// One level of the search.
///
/// Invariants: `candidates ∩ finished = ∅`, every vertex of
/// `candidates ∪ finished` is adjacent to every vertex of `clique`, and the
/// branch set (when present) is a subset of `candidates`.
#[derive(Debug, Clone)]
pub(crate) struct Frame {
    pub(crate) clique: Clique,
    pub(crate) candidates: VertexSet,
    pub(crate) finished: VertexSet,
    // `None` means every candidate is branched on.
    branches: Option<VertexSet>,
}

impl Frame {
    pub(crate) fn new(
        clique: Clique,
        candidates: VertexSet,
        finished: VertexSet,
        pruning: Pruning,
        neighborhoods: &Neighborhoods,
    ) -> Self {
        debug_assert!(candidates.iter().all(|v| !finished.contains(v)));
        let branches = match pruning {
            Pruning::Domination => None,
            Pruning::Pivot => Some(match choose_pivot(&candidates, &finished, neighborhoods) {
                Some(pivot) => candidates.without_neighbors(neighborhoods, pivot),
                None => candidates.clone(),
            }),
        };
        Self {
            clique,
            candidates,
            finished,
            branches,
        }
    }

    /// The bottom frame: empty prefix, every vertex a candidate.
    pub(crate) fn root(vertices: VertexSet, pruning: Pruning, neighborhoods: &Neighborhoods) -> Self {
        let finished = VertexSet::with_bound(neighborhoods.bound());
        Self::new(Clique::new(), vertices, finished, pruning, neighborhoods)
    }

    /// The next vertex to branch on, if any is left.
    #[inline]
    pub(crate) fn next_branch(&self) -> Option<usize> {
        self.branches.as_ref().unwrap_or(&self.candidates).peek()
    }

    /// Moves `v` from the candidates to the finished set of this frame.
    pub(crate) fn finish(&mut self, v: usize) {
        self.candidates.remove(v);
        if let Some(branches) = self.branches.as_mut() {
            branches.remove(v);
        }
        self.finished.insert(v);
    }

    /// No vertex can extend the prefix, neither a pending nor an explored one.
    #[inline]
    pub(crate) fn is_maximal(&self) -> bool {
        self.candidates.is_empty() && self.finished.is_empty()
    }
}

fn choose_pivot(
    candidates: &VertexSet,
    finished: &VertexSet,
    neighborhoods: &Neighborhoods,
) -> Option<usize> {
    let mut pivot = None;
    let mut best = 0;
    for u in candidates.iter().chain(finished.iter()) {
        let count = candidates.count_neighbors(neighborhoods, u);
        if pivot.is_none() || count > best {
            pivot = Some(u);
            best = count;
        }
    }
    pivot
}

/// Stack of frames, bottom frame first.
#[derive(Debug, Default)]
pub(crate) struct EnumerationState {
    frames: Vec<Frame>,
}

impl EnumerationState {
    pub(crate) fn new(root: Frame, bound: usize) -> Self {
        let mut frames = Vec::with_capacity(bound + 1);
        frames.push(root);
        Self { frames }
    }

    #[inline]
    pub(crate) fn top_mut(&mut self) -> Option<&mut Frame> {
        self.frames.last_mut()
    }

    #[inline]
    pub(crate) fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    #[inline]
    pub(crate) fn pop(&mut self) -> Option<Frame> {
        self.frames.pop()
    }

    pub(crate) fn depth(&self) -> usize {
        self.frames.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.frames.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::AdjacencyGraph;

    fn star() -> Neighborhoods {
        // center 0, leaves 1..=3
        let graph = AdjacencyGraph::from_edges(4, [(0, 1), (0, 2), (0, 3)]).unwrap();
        Neighborhoods::from_graph(&graph)
    }

    #[test]
    fn domination_frames_branch_on_every_candidate() {
        let neighborhoods = star();
        let mut frame = Frame::root(
            VertexSet::from_vertices(4, 0..4),
            Pruning::Domination,
            &neighborhoods,
        );
        assert_eq!(frame.next_branch(), Some(0));
        frame.finish(0);
        assert_eq!(frame.next_branch(), Some(1));
        assert!(frame.finished.contains(0));
        assert!(!frame.candidates.contains(0));
        assert!(!frame.is_maximal());
    }

    #[test]
    fn pivot_frames_skip_pivot_neighbors() {
        let neighborhoods = star();
        let mut frame = Frame::root(
            VertexSet::from_vertices(4, 0..4),
            Pruning::Pivot,
            &neighborhoods,
        );
        // The center covers every leaf, so it is the only branch.
        assert_eq!(frame.next_branch(), Some(0));
        frame.finish(0);
        assert_eq!(frame.next_branch(), None);
        assert_eq!(frame.candidates.len(), 3);
    }

    #[test]
    fn stack_push_pop() {
        let neighborhoods = star();
        let root = Frame::root(VertexSet::with_bound(4), Pruning::Domination, &neighborhoods);
        assert!(root.is_maximal());
        let mut state = EnumerationState::new(root, 4);
        assert_eq!(state.depth(), 1);
        let child = Frame::new(
            Clique::new().extended(0),
            VertexSet::from_vertices(4, [1]),
            VertexSet::with_bound(4),
            Pruning::Domination,
            &neighborhoods,
        );
        state.push(child);
        assert_eq!(state.top_mut().map(|f| f.clique.size()), Some(1));
        assert_eq!(state.depth(), 2);
        assert!(state.pop().is_some());
        state.clear();
        assert!(state.is_empty());
        assert!(state.top_mut().is_none());
    }
}
