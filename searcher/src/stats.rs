//! Counters and the solution path collected during a search.

use std::fmt;

use tracing::warn;

use crate::errors::{Result, SearchError};
use crate::traits::Recorder;

/// The standard [Recorder], which keeps everything in memory.
#[derive(Debug, Clone)]
pub struct SearchStats<A> {
    explored: usize,
    pruned: usize,
    peak_memory: usize,
    solution: Option<Vec<A>>,
}

impl<A> Default for SearchStats<A> {
    fn default() -> Self {
        SearchStats {
            explored: 0,
            pruned: 0,
            peak_memory: 0,
            solution: None,
        }
    }
}

impl<A> SearchStats<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nodes expanded by the search.
    pub fn explored(&self) -> usize {
        self.explored
    }

    /// Candidates rejected by cycle control or depth limits.
    pub fn pruned(&self) -> usize {
        self.pruned
    }

    /// Largest memory sample seen, in bytes.
    pub fn peak_memory(&self) -> usize {
        self.peak_memory
    }

    pub fn is_solved(&self) -> bool {
        self.solution.is_some()
    }

    /// Number of actions in the solution, if any.
    pub fn path_len(&self) -> Option<usize> {
        self.solution.as_ref().map(|p| p.len())
    }

    /// Consume the statistics, returning the solution.
    pub fn into_solution(self) -> Result<Vec<A>> {
        self.solution.ok_or(SearchError::NoResultFound)
    }
}

impl<A> Recorder<A> for SearchStats<A> {
    fn increment_explored(&mut self) {
        self.explored += 1;
    }

    fn increment_pruned(&mut self) {
        self.pruned += 1;
    }

    fn update_peak_memory(&mut self, sample: usize) {
        self.peak_memory = self.peak_memory.max(sample);
    }

    fn set_solution(&mut self, path: Vec<A>) {
        if self.solution.is_some() {
            warn!(length = path.len(), "solution already recorded, ignoring");
            return;
        }
        self.solution = Some(path);
    }

    fn solution(&self) -> Option<&[A]> {
        self.solution.as_deref()
    }
}

impl<A> fmt::Display for SearchStats<A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Explored: {}", self.explored)?;
        writeln!(f, "  Pruned: {}", self.pruned)?;
        writeln!(f, "  Memory: {} KiB", self.peak_memory / 1024)?;
        match self.path_len() {
            Some(n) => write!(f, "  Length: {}", n),
            None => write!(f, "  Length: no solution"),
        }
    }
}
