//! Cost-ordered frontier expansion with explicit open and closed sets.
//!
//! The frontier and the explored set are insertion-ordered maps keyed by
//! cell. Selection scans the frontier linearly and replaces the candidate
//! only on strictly smaller priority, so ties go to the first inserted entry
//! and repeated runs visit cells in the same order. Removal shifts instead of
//! swapping, which keeps the insertion order intact.

use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use log::warn;
use num_traits::Zero;
use std::hash::Hash;

pub type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Parent id of the start node.
const NO_PARENT: usize = usize::MAX;

/// States of a search run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchState {
    /// No search has run yet.
    Initialized,
    /// The main loop is expanding the frontier.
    Searching,
    /// The goal was popped from the frontier.
    Found,
    /// The frontier emptied before the goal was reached.
    Unreachable,
    /// The expansion budget ran out.
    LimitReached,
}

struct FrontierEntry<C> {
    cost: C,
    priority: C,
    parent: usize,
}

/// Owns the frontier, the explored set and the expansion log of a search run.
/// Both maps live for a single [best_first](Self::best_first) call; a node
/// sits in at most one of them, and a node moved to the explored set keeps
/// its cost forever.
pub struct SearchContext<N, C> {
    frontier: FxIndexMap<N, FrontierEntry<C>>,
    explored: FxIndexMap<N, (usize, C)>,
    expansions: Vec<N>,
    state: SearchState,
}

impl<N, C> SearchContext<N, C>
where
    N: Copy + Eq + Hash,
    C: Zero + Copy + PartialOrd,
{
    pub fn new() -> SearchContext<N, C> {
        SearchContext {
            frontier: FxIndexMap::default(),
            explored: FxIndexMap::default(),
            expansions: Vec::new(),
            state: SearchState::Initialized,
        }
    }

    /// State the last run terminated in, [SearchState::Initialized] before
    /// any run.
    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Nodes popped from the frontier, in visitation order.
    pub fn expansions(&self) -> &[N] {
        &self.expansions
    }

    /// Finalized cost of an explored node.
    pub fn explored_cost(&self, node: &N) -> Option<C> {
        self.explored.get(node).map(|&(_, cost)| cost)
    }

    /// Runs a best-first search from `start` until a popped node satisfies
    /// `success`, ordering the frontier on accumulated cost plus `heuristic`.
    /// Returns the start-to-goal node path and its cost, or [None] with
    /// [state](Self::state) telling frontier exhaustion and a hit expansion
    /// budget apart.
    pub fn best_first<FN, IN, FH, FS>(
        &mut self,
        start: N,
        mut successors: FN,
        mut heuristic: FH,
        mut success: FS,
        max_expansions: Option<usize>,
    ) -> Option<(Vec<N>, C)>
    where
        FN: FnMut(&N) -> IN,
        IN: IntoIterator<Item = (N, C)>,
        FH: FnMut(&N) -> C,
        FS: FnMut(&N) -> bool,
    {
        self.frontier.clear();
        self.explored.clear();
        self.expansions.clear();
        self.state = SearchState::Searching;
        let start_h = heuristic(&start);
        self.frontier.insert(
            start,
            FrontierEntry {
                cost: C::zero(),
                priority: start_h,
                parent: NO_PARENT,
            },
        );
        loop {
            let Some(selected) = self.select_min() else {
                self.state = SearchState::Unreachable;
                warn!("frontier exhausted without reaching the goal");
                return None;
            };
            if max_expansions.map_or(false, |limit| self.expansions.len() >= limit) {
                self.state = SearchState::LimitReached;
                warn!(
                    "expansion budget hit after {} expansions",
                    self.expansions.len()
                );
                return None;
            }
            let (node, entry) = self.frontier.shift_remove_index(selected)?;
            self.expansions.push(node);
            self.explored.insert(node, (entry.parent, entry.cost));
            if success(&node) {
                self.state = SearchState::Found;
                let path = reverse_path(&self.explored, self.explored.len() - 1);
                return Some((path, entry.cost));
            }
            let node_ix = self.explored.len() - 1;
            for (successor, move_cost) in successors(&node) {
                if self.explored.contains_key(&successor) {
                    continue;
                }
                let new_cost = entry.cost + move_cost;
                match self.frontier.entry(successor) {
                    Vacant(e) => {
                        let h = heuristic(e.key());
                        e.insert(FrontierEntry {
                            cost: new_cost,
                            priority: new_cost + h,
                            parent: node_ix,
                        });
                    }
                    Occupied(mut e) => {
                        // Strict inequality: an equal-cost alternative keeps
                        // the earlier parent and insertion position.
                        if e.get().cost > new_cost {
                            let h = heuristic(e.key());
                            e.insert(FrontierEntry {
                                cost: new_cost,
                                priority: new_cost + h,
                                parent: node_ix,
                            });
                        }
                    }
                }
            }
        }
    }

    fn select_min(&self) -> Option<usize> {
        let mut best: Option<(usize, C)> = None;
        for (i, entry) in self.frontier.values().enumerate() {
            if best.map_or(true, |(_, p)| entry.priority < p) {
                best = Some((i, entry.priority));
            }
        }
        best.map(|(i, _)| i)
    }
}

impl<N, C> Default for SearchContext<N, C>
where
    N: Copy + Eq + Hash,
    C: Zero + Copy + PartialOrd,
{
    fn default() -> SearchContext<N, C> {
        SearchContext::new()
    }
}

fn reverse_path<N, C>(explored: &FxIndexMap<N, (usize, C)>, goal_ix: usize) -> Vec<N>
where
    N: Copy + Eq + Hash,
{
    let mut path: Vec<N> = itertools::unfold(goal_ix, |i| {
        explored.get_index(*i).map(|(node, &(parent, _))| {
            *i = parent;
            *node
        })
    })
    .collect();
    path.reverse();
    path
}
