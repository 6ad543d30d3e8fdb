use std::fmt::Debug;
use std::hash::Hash;

/// Provides an interface for conducting searches.
///
/// A state is an immutable configuration of the problem. Two
/// states which describe the same configuration must compare
/// and hash equal, as they are used as keys to detect cycles.
pub trait SearchState: Debug + Clone + Eq + Hash {
    /// A unit-cost move from one state to the next.
    type Action: Debug + Clone;

    /// Indicates that this state satisfies the search, and
    /// causes the search algorithm to stop.
    fn is_goal(&self) -> bool;

    /// Actions which can be applied to this state. The order
    /// determines traversal order for every strategy.
    fn actions(&self) -> Vec<Self::Action>;

    /// Produce the state reached by taking an action. Must not
    /// modify the receiver.
    fn apply(&self, action: &Self::Action) -> Self;
}

/// An estimate of the number of moves left before reaching a goal.
///
/// For the A* strategy to return a shortest path, the estimate
/// must never exceed the true remaining cost, and must be zero
/// for goal states.
pub trait Heuristic<S> {
    fn estimate(&self, state: &S) -> usize;
}

impl<S, F> Heuristic<S> for F
where
    F: Fn(&S) -> usize,
{
    fn estimate(&self, state: &S) -> usize {
        self(state)
    }
}

/// Accumulates counters and the solution while a search runs.
pub trait Recorder<A> {
    /// A node was expanded.
    fn increment_explored(&mut self);

    /// A candidate node was rejected.
    fn increment_pruned(&mut self);

    /// Offer a memory sample, in bytes. Only the largest is kept.
    fn update_peak_memory(&mut self, sample: usize);

    /// Record the actions leading from the origin to a goal.
    /// Only the first solution recorded is kept.
    fn set_solution(&mut self, path: Vec<A>);

    /// The recorded solution, if one was found.
    fn solution(&self) -> Option<&[A]>;
}

/// A traversal algorithm.
///
/// Strategies own no state between runs: everything a run
/// needs is created in [Strategy::search] and dropped when
/// it returns.
pub trait Strategy<S: SearchState> {
    /// Search from the origin, reporting to the recorder.
    fn search(&self, origin: S, recorder: &mut dyn Recorder<S::Action>);
}
