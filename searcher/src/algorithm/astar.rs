use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd};
use std::collections::BinaryHeap;
use std::rc::Rc;

use super::{Frontier, FrontierSearch, SearchOptions};
use crate::node::Node;
use crate::stats::SearchStats;
use crate::traits::{Heuristic, Recorder, SearchState, Strategy};

/// The frontier ordering key: `(f, depth, order)`.
///
/// Lower `f = cost + estimate` first, then shallower depth, then
/// the node which was pushed first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Priority {
    f: usize,
    depth: usize,
    order: u64,
}

#[derive(Debug)]
struct Estimated<S, A> {
    priority: Priority,
    node: Rc<Node<S, A>>,
}

impl<S, A> PartialEq for Estimated<S, A> {
    fn eq(&self, other: &Self) -> bool {
        self.priority.eq(&other.priority)
    }
}

impl<S, A> Eq for Estimated<S, A> {}

impl<S, A> Ord for Estimated<S, A> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority.cmp(&other.priority).reverse()
    }
}

impl<S, A> PartialOrd for Estimated<S, A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A priority queue which always yields the node with the
/// lowest estimated total cost.
#[derive(Debug)]
pub struct AStarQueue<'h, S, H>
where
    S: SearchState,
{
    queue: BinaryHeap<Estimated<S, S::Action>>,
    heuristic: &'h H,
    pushed: u64,
}

impl<'h, S, H> AStarQueue<'h, S, H>
where
    S: SearchState,
    H: Heuristic<S>,
{
    fn new(heuristic: &'h H) -> Self {
        AStarQueue {
            queue: BinaryHeap::new(),
            heuristic,
            pushed: 0,
        }
    }
}

impl<'h, S, H> Frontier for AStarQueue<'h, S, H>
where
    S: SearchState,
    H: Heuristic<S>,
{
    type Item = Rc<Node<S, S::Action>>;

    fn pop(&mut self) -> Option<Self::Item> {
        self.queue.pop().map(|e| e.node)
    }

    fn push(&mut self, item: Self::Item) {
        let priority = Priority {
            f: item.cost() + self.heuristic.estimate(item.state()),
            depth: item.depth(),
            order: self.pushed,
        };
        self.pushed += 1;
        self.queue.push(Estimated {
            priority,
            node: item,
        });
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Best-first search ordered by cost so far plus a heuristic estimate.
///
/// Returns a shortest path when the heuristic never overestimates
/// the remaining number of moves. Cycle control is applied as
/// successors are generated, as in breadth-first search.
#[derive(Debug, Clone)]
pub struct AStar<H> {
    heuristic: H,
    options: SearchOptions,
}

impl<H> AStar<H> {
    pub fn new(heuristic: H, options: SearchOptions) -> Self {
        Self { heuristic, options }
    }

    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }
}

impl<S, H> Strategy<S> for AStar<H>
where
    S: SearchState,
    H: Heuristic<S>,
{
    fn search(&self, origin: S, recorder: &mut dyn Recorder<S::Action>) {
        let queue = AStarQueue::new(&self.heuristic);
        let search = FrontierSearch::new("astar", queue, &self.options);
        if let Some(goal) = search.run(origin, recorder) {
            recorder.set_solution(goal.path());
        }
    }
}

/// A* search with default options.
pub fn astar<S, H>(origin: S, heuristic: H) -> SearchStats<S::Action>
where
    S: SearchState,
    H: Heuristic<S>,
{
    let mut stats = SearchStats::new();
    AStar::new(heuristic, SearchOptions::default()).search(origin, &mut stats);
    stats
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algorithm::basic::bfs;
    use crate::algorithm::cycle::CyclePolicy;
    use crate::algorithm::test_support::{Graph, Line};

    #[test]
    fn priority_order() {
        let a = Priority {
            f: 1,
            depth: 5,
            order: 10,
        };
        let b = Priority {
            f: 2,
            depth: 1,
            order: 1,
        };
        assert!(a < b, "lower f should sort first");

        let c = Priority {
            f: 1,
            depth: 4,
            order: 11,
        };
        assert!(c < a, "shallower depth should sort first on f tie");

        let d = Priority {
            f: 1,
            depth: 4,
            order: 3,
        };
        assert!(d < c, "earlier push should sort first on f and depth tie");
    }

    #[test]
    fn queue_pops_lowest_estimate() {
        let heuristic = |line: &Line| -> usize {
            if line.is_goal() {
                0
            } else {
                10
            }
        };
        let mut queue = AStarQueue::new(&heuristic);
        let root = Node::root(Line::new(0, 1));
        let goal = Node::child(&root, 1, Line::new(1, 1));

        queue.push(Rc::clone(&root));
        queue.push(Rc::clone(&goal));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.pop().map(|n| n.depth()), Some(1));
        assert_eq!(queue.pop().map(|n| n.depth()), Some(0));
        assert!(queue.is_empty());
    }

    #[test]
    fn zero_heuristic_matches_bfs() {
        let stats = astar(Graph::ladder(), |_: &Graph| -> usize { 0 });
        assert_eq!(stats.solution(), bfs(Graph::ladder()).solution());
    }

    #[test]
    fn line_with_distance() {
        let heuristic = |line: &Line| -> usize { (6 - line.position()) as usize };

        for policy in [CyclePolicy::Simple, CyclePolicy::MinimalDepth].iter() {
            let mut stats = SearchStats::new();
            let strategy = AStar::new(heuristic, SearchOptions::with_policy(*policy));
            strategy.search(Line::new(0, 6), &mut stats);

            assert_eq!(stats.path_len(), Some(6));
            // A perfect estimate expands only the nodes on the path.
            assert_eq!(stats.explored(), 7);
        }
    }

    #[test]
    fn exhausted() {
        let stats = astar(Graph::cycle(), |_: &Graph| -> usize { 1 });
        assert!(stats.solution().is_none());
        assert_eq!(stats.explored(), 3);
    }
}
