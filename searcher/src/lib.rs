//! Generalized state-space search algorithms.
//!
//! To use these search algorithms, implement the trait [SearchState]
//! for the problem's configurations, then hand the initial state and
//! a [Recorder] (usually [SearchStats]) to one of the strategies:
//!
//! - [BreadthFirst]: shortest paths, remembers every frontier node.
//! - [DepthFirst]: bounded by [DEPTH_LIMIT], least memory, no optimality.
//! - [IterativeDeepening]: shortest paths at depth-first memory cost.
//! - [AStar]: shortest paths guided by an admissible [Heuristic].

pub mod algorithm;
mod errors;
pub mod memory;
pub mod node;
mod stats;
mod traits;

pub use errors::Result as SearchResult;
pub use errors::SearchError;
pub use stats::SearchStats;
pub use traits::Heuristic;
pub use traits::Recorder;
pub use traits::SearchState;
pub use traits::Strategy;

pub use algorithm::astar::{astar, AStar};
pub use algorithm::basic::{bfs, BreadthFirst};
pub use algorithm::cycle::{CycleGuard, CyclePolicy, DepthTable, PathSet};
pub use algorithm::depth::{dfs, ids, DepthFirst, IterativeDeepening};
pub use algorithm::{SearchOptions, DEEPENING_LIMIT, DEPTH_LIMIT};
