//! Depth-first search, bounded and iteratively deepened.
//!
//! Both strategies share a recursive [Walk]. The walk always keeps
//! the states on the current branch, so a branch never revisits one
//! of its own ancestors. Under [CyclePolicy::MinimalDepth] it also
//! keeps a table of the shallowest depth each state was entered at.
//! Under [CyclePolicy::Simple] there is no global record: a state
//! left behind on one branch may be explored again on another.

use std::rc::Rc;

use tracing::{debug, trace};

use crate::algorithm::cycle::{CyclePolicy, DepthTable, PathSet};
use crate::algorithm::{
    sample_memory, Progress, SearchOptions, DEEPENING_LIMIT, DEPTH_LIMIT,
};
use crate::node::Node;
use crate::stats::SearchStats;
use crate::traits::{Recorder, SearchState, Strategy};

/// A single depth-bounded recursive traversal.
#[derive(Debug)]
struct Walk<S> {
    limit: usize,
    path: PathSet<S>,
    table: Option<DepthTable<S>>,
    progress: Progress,
}

impl<S> Walk<S>
where
    S: SearchState,
{
    fn new(limit: usize, policy: CyclePolicy, progress: Progress) -> Self {
        let table = match policy {
            CyclePolicy::Simple => None,
            CyclePolicy::MinimalDepth => Some(DepthTable::new()),
        };

        Self {
            limit,
            path: PathSet::new(),
            table,
            progress,
        }
    }

    /// Explore below `node`, returning true once a goal is found
    /// and recorded. Siblings are not explored after that.
    ///
    /// A node is counted as explored as soon as it is admitted,
    /// before the goal check, so the goal itself is counted. This
    /// keeps the count in line with the frontier strategies, which
    /// count the goal when it is taken off the frontier. A bound of
    /// iterative deepening that fails counts every node it entered.
    fn explore(
        &mut self,
        node: &Rc<Node<S, S::Action>>,
        recorder: &mut dyn Recorder<S::Action>,
    ) -> bool {
        if node.depth() > self.limit {
            recorder.increment_pruned();
            return false;
        }

        let state = node.state();
        if !self.path.enter(state) {
            recorder.increment_pruned();
            return false;
        }

        if let Some(table) = self.table.as_mut() {
            if !table.admit(state, node.depth()) {
                recorder.increment_pruned();
                self.path.leave(state);
                return false;
            }
        }

        recorder.increment_explored();

        if state.is_goal() {
            recorder.set_solution(node.path());
            self.path.leave(state);
            return true;
        }

        sample_memory(recorder);
        self.progress.tick(node.depth(), self.path.len());

        let mut found = false;
        for action in state.actions() {
            let next = state.apply(&action);
            let child = Node::child(node, action, next);
            if self.explore(&child, recorder) {
                found = true;
                break;
            }
        }

        self.path.leave(state);
        found
    }
}

/// Depth-first search with a hard depth cutoff.
///
/// Uses the least memory of the strategies, since only the current
/// branch is held, but the first goal found is not necessarily the
/// closest one.
#[derive(Debug, Clone)]
pub struct DepthFirst {
    options: SearchOptions,
}

impl DepthFirst {
    pub fn new(options: SearchOptions) -> Self {
        Self { options }
    }
}

impl Default for DepthFirst {
    fn default() -> Self {
        Self::new(SearchOptions {
            depth_limit: DEPTH_LIMIT,
            ..SearchOptions::default()
        })
    }
}

impl<S> Strategy<S> for DepthFirst
where
    S: SearchState,
{
    fn search(&self, origin: S, recorder: &mut dyn Recorder<S::Action>) {
        let progress = Progress::new("dfs", self.options.verbose);
        let mut walk = Walk::new(self.options.cutoff(), self.options.policy, progress);

        let found = walk.explore(&Node::root(origin), recorder);
        debug!(
            strategy = "dfs",
            found,
            expanded = walk.progress.expanded(),
            "walk finished"
        );
    }
}

/// Iterative deepening: depth-first searches with bounds 1, 2, 3, ...
///
/// Every bound starts from scratch, with no memory of earlier bounds.
/// The first bound that reaches a goal gives a shortest path, like
/// breadth-first search, at the price of repeating the shallow levels.
#[derive(Debug, Clone)]
pub struct IterativeDeepening {
    options: SearchOptions,
}

impl IterativeDeepening {
    pub fn new(options: SearchOptions) -> Self {
        Self { options }
    }
}

impl Default for IterativeDeepening {
    fn default() -> Self {
        Self::new(SearchOptions {
            depth_limit: DEEPENING_LIMIT,
            ..SearchOptions::default()
        })
    }
}

impl<S> Strategy<S> for IterativeDeepening
where
    S: SearchState,
{
    fn search(&self, origin: S, recorder: &mut dyn Recorder<S::Action>) {
        for bound in 1..=self.options.cutoff() {
            let progress = Progress::new("ids", self.options.verbose);
            let mut walk = Walk::new(bound, self.options.policy, progress);

            let root = Node::root(origin.clone());
            let found = walk.explore(&root, recorder);
            trace!(bound, expanded = walk.progress.expanded(), "bound finished");

            if found {
                debug!(strategy = "ids", bound, "goal reached");
                return;
            }
        }
        debug!(
            strategy = "ids",
            limit = self.options.cutoff(),
            "bounds exhausted"
        );
    }
}

/// Depth-first search with default options.
pub fn dfs<S>(origin: S) -> SearchStats<S::Action>
where
    S: SearchState,
{
    let mut stats = SearchStats::new();
    DepthFirst::default().search(origin, &mut stats);
    stats
}

/// Iterative deepening search with default options.
pub fn ids<S>(origin: S) -> SearchStats<S::Action>
where
    S: SearchState,
{
    let mut stats = SearchStats::new();
    IterativeDeepening::default().search(origin, &mut stats);
    stats
}
