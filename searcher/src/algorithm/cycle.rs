//! Cycle control, to avoid expanding states which were already reached.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use crate::errors::SearchError;

/// Which states a search refuses to revisit.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CyclePolicy {
    /// Reject every state seen before during the run.
    #[default]
    Simple,

    /// Reject a state unless it is reached at a strictly
    /// smaller depth than any time before.
    MinimalDepth,
}

impl FromStr for CyclePolicy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "simple" => Ok(CyclePolicy::Simple),
            "minimal-depth" => Ok(CyclePolicy::MinimalDepth),
            other => Err(SearchError::UnknownPolicy(other.to_string())),
        }
    }
}

impl fmt::Display for CyclePolicy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CyclePolicy::Simple => f.write_str("simple"),
            CyclePolicy::MinimalDepth => f.write_str("minimal-depth"),
        }
    }
}

/// Records the smallest depth at which each state was admitted.
#[derive(Debug)]
pub struct DepthTable<S> {
    table: HashMap<S, usize>,
}

impl<S> Default for DepthTable<S> {
    fn default() -> Self {
        DepthTable {
            table: HashMap::default(),
        }
    }
}

impl<S> DepthTable<S>
where
    S: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Admit the state if it is unseen, or if it was only seen
    /// deeper than `depth`. Admission lowers the recorded depth.
    pub fn admit(&mut self, state: &S, depth: usize) -> bool {
        match self.table.get_mut(state) {
            Some(minimum) if depth >= *minimum => false,
            Some(minimum) => {
                *minimum = depth;
                true
            }
            None => {
                self.table.insert(state.clone(), depth);
                true
            }
        }
    }

    /// The smallest depth recorded for a state.
    pub fn minimum(&self, state: &S) -> Option<usize> {
        self.table.get(state).copied()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

/// Global visited-state control for a single run.
///
/// The policy is chosen when the guard is built and
/// stays the same for the whole run.
#[derive(Debug)]
pub enum CycleGuard<S> {
    Simple(HashSet<S>),
    MinimalDepth(DepthTable<S>),
}

impl<S> CycleGuard<S>
where
    S: Eq + Hash + Clone,
{
    pub fn new(policy: CyclePolicy) -> Self {
        match policy {
            CyclePolicy::Simple => CycleGuard::Simple(HashSet::new()),
            CyclePolicy::MinimalDepth => CycleGuard::MinimalDepth(DepthTable::new()),
        }
    }

    pub fn policy(&self) -> CyclePolicy {
        match self {
            CycleGuard::Simple(_) => CyclePolicy::Simple,
            CycleGuard::MinimalDepth(_) => CyclePolicy::MinimalDepth,
        }
    }

    /// Should a state reached at `depth` be admitted to the search?
    ///
    /// The simple policy ignores `depth`.
    pub fn admit(&mut self, state: &S, depth: usize) -> bool {
        match self {
            CycleGuard::Simple(seen) => {
                if seen.contains(state) {
                    false
                } else {
                    seen.insert(state.clone())
                }
            }
            CycleGuard::MinimalDepth(table) => table.admit(state, depth),
        }
    }

    /// Number of distinct states recorded.
    pub fn len(&self) -> usize {
        match self {
            CycleGuard::Simple(seen) => seen.len(),
            CycleGuard::MinimalDepth(table) => table.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The states on the branch currently being explored by a
/// depth-first walk.
#[derive(Debug)]
pub struct PathSet<S> {
    states: HashSet<S>,
}

impl<S> Default for PathSet<S> {
    fn default() -> Self {
        PathSet {
            states: HashSet::default(),
        }
    }
}

impl<S> PathSet<S>
where
    S: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Step onto a state. Returns false if it is already on the path.
    pub fn enter(&mut self, state: &S) -> bool {
        if self.states.contains(state) {
            return false;
        }
        self.states.insert(state.clone())
    }

    /// Backtrack off a state.
    pub fn leave(&mut self, state: &S) {
        self.states.remove(state);
    }

    pub fn contains(&self, state: &S) -> bool {
        self.states.contains(state)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
