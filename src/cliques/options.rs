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

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// How the search decides which candidates to branch on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pruning {
    /// Branch on every candidate. A child is skipped only when a finished
    /// vertex is adjacent to all of its candidates.
    #[default]
    Domination,
    /// Pick the vertex of `candidates ∪ finished` with the most neighbors among
    /// the candidates and branch only on candidates outside its neighborhood
    /// (Tomita et al.). The domination test still applies.
    Pivot,
}

/// Shared flag used to stop an enumeration from another thread.
///
/// The iterator polls it once per step of its search loop, so cancellation
/// takes effect within one frame push or pop.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Configuration of one enumeration.
#[derive(Debug, Clone, Default)]
pub struct EnumerationOptions {
    pub pruning: Pruning,
    /// Only maximal cliques with at least this many vertices are produced.
    /// Subtrees that cannot reach the size are not searched.
    pub min_size: usize,
    pub cancel: Option<CancelToken>,
}

impl EnumerationOptions {
    pub fn with_pruning(mut self, pruning: Pruning) -> Self {
        self.pruning = pruning;
        self
    }

    pub fn with_min_size(mut self, min_size: usize) -> Self {
        self.min_size = min_size;
        self
    }

    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub(crate) fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelToken::is_cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_token_clones_share_the_flag() {
        let token = CancelToken::new();
        let options = EnumerationOptions::default().with_cancel_token(token.clone());
        assert!(!options.is_cancelled());
        token.cancel();
        assert!(options.is_cancelled());
    }

    #[test]
    fn defaults() {
        let options = EnumerationOptions::default();
        assert_eq!(options.pruning, Pruning::Domination);
        assert_eq!(options.min_size, 0);
        assert!(!options.is_cancelled());
    }
}
