//! Provides the building blocks for search algorithms

use std::default::Default;
use std::rc::Rc;

use tracing::{debug, info};

use self::cycle::{CycleGuard, CyclePolicy};
use crate::errors::{Result, SearchError};
use crate::memory;
use crate::node::Node;
use crate::traits::{Recorder, SearchState};

pub(crate) mod astar;
pub(crate) mod basic;
pub(crate) mod cycle;
pub(crate) mod depth;

/// Deepest node a depth-first search will expand.
pub const DEPTH_LIMIT: usize = 80;

/// Largest bound tried by iterative deepening.
pub const DEEPENING_LIMIT: usize = 80;

/// Settings shared by every strategy.
#[derive(Debug, Clone, Copy)]
pub struct SearchOptions {
    /// Which states are refused when reached again.
    pub policy: CyclePolicy,

    /// Depth cutoff for depth-first search, and the largest
    /// bound for iterative deepening. Clamped to `1..=DEPTH_LIMIT`.
    pub depth_limit: usize,

    /// Log progress every this many expansions.
    pub verbose: Option<usize>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            policy: CyclePolicy::Simple,
            depth_limit: DEPTH_LIMIT,
            verbose: None,
        }
    }
}

impl SearchOptions {
    pub fn with_policy(policy: CyclePolicy) -> Self {
        SearchOptions {
            policy,
            ..Self::default()
        }
    }

    /// Set the depth cutoff, refusing anything outside `1..=DEPTH_LIMIT`.
    pub fn with_depth_limit(self, depth_limit: usize) -> Result<Self> {
        if !(1..=DEPTH_LIMIT).contains(&depth_limit) {
            return Err(SearchError::DepthLimit(depth_limit));
        }
        Ok(SearchOptions {
            depth_limit,
            ..self
        })
    }

    /// The depth cutoff actually used, kept within `1..=DEPTH_LIMIT`
    /// so recursion stays bounded whatever was set on the field.
    pub fn cutoff(&self) -> usize {
        self.depth_limit.clamp(1, DEPTH_LIMIT)
    }
}

/// Trait used to implement the frontier of nodes waiting
/// to be expanded.
pub trait Frontier {
    type Item;

    fn pop(&mut self) -> Option<Self::Item>;

    fn push(&mut self, item: Self::Item);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Periodic progress reporting, every `interval` expansions.
#[derive(Debug)]
pub(crate) struct Progress {
    name: &'static str,
    interval: Option<usize>,
    expanded: usize,
}

impl Progress {
    pub(crate) fn new(name: &'static str, interval: Option<usize>) -> Self {
        Self {
            name,
            interval: interval.filter(|n| *n > 0),
            expanded: 0,
        }
    }

    pub(crate) fn tick(&mut self, depth: usize, pending: usize) {
        self.expanded += 1;
        if let Some(interval) = self.interval {
            if self.expanded % interval == 0 {
                info!(
                    strategy = self.name,
                    expanded = self.expanded,
                    depth,
                    pending,
                    "searching"
                );
            }
        }
    }

    pub(crate) fn expanded(&self) -> usize {
        self.expanded
    }
}

/// Take a memory sample and hand it to the recorder.
pub(crate) fn sample_memory<A>(recorder: &mut dyn Recorder<A>) {
    if let Some(bytes) = memory::sample() {
        recorder.update_peak_memory(bytes);
    }
}

/// Implementation of search over an explicit frontier.
///
/// Uses a generic frontier (F) to provide a single loop for
/// breadth-first and best-first search. Successors are checked
/// against the cycle guard when they are generated, so a
/// rejected state never enters the frontier.
#[derive(Debug)]
pub(crate) struct FrontierSearch<S, F>
where
    S: SearchState,
    F: Frontier<Item = Rc<Node<S, S::Action>>>,
{
    frontier: F,
    guard: CycleGuard<S>,
    progress: Progress,
}

impl<S, F> FrontierSearch<S, F>
where
    S: SearchState,
    F: Frontier<Item = Rc<Node<S, S::Action>>>,
{
    pub(crate) fn new(name: &'static str, frontier: F, options: &SearchOptions) -> Self {
        Self {
            frontier,
            guard: CycleGuard::new(options.policy),
            progress: Progress::new(name, options.verbose),
        }
    }

    /// Run the search to completion, returning the goal node.
    pub(crate) fn run(
        mut self,
        origin: S,
        recorder: &mut dyn Recorder<S::Action>,
    ) -> Option<Rc<Node<S, S::Action>>> {
        self.guard.admit(&origin, 0);
        self.frontier.push(Node::root(origin));

        while let Some(node) = self.frontier.pop() {
            recorder.increment_explored();

            if node.state().is_goal() {
                debug!(
                    strategy = self.progress.name,
                    depth = node.depth(),
                    pending = self.frontier.len(),
                    "goal reached"
                );
                return Some(node);
            }

            for action in node.state().actions() {
                let next = node.state().apply(&action);
                if self.guard.admit(&next, node.depth() + 1) {
                    self.frontier.push(Node::child(&node, action, next));
                } else {
                    recorder.increment_pruned();
                }
            }

            sample_memory(recorder);
            self.progress.tick(node.depth(), self.frontier.len());
        }

        debug!(
            strategy = self.progress.name,
            expanded = self.progress.expanded(),
            visited = self.guard.len(),
            "frontier exhausted"
        );
        None
    }
}
