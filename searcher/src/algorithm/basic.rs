pub use bfs::{bfs, BreadthFirst};

mod bfs {
    use std::collections::VecDeque;
    use std::default::Default;
    use std::rc::Rc;

    use crate::algorithm::{Frontier, FrontierSearch, SearchOptions};
    use crate::node::Node;
    use crate::stats::SearchStats;
    use crate::traits::{Recorder, SearchState, Strategy};

    #[derive(Debug)]
    pub struct BreadthQueue<S> {
        queue: VecDeque<S>,
    }

    impl<S> Frontier for BreadthQueue<S> {
        type Item = S;

        fn pop(&mut self) -> Option<Self::Item> {
            self.queue.pop_front()
        }

        fn push(&mut self, item: Self::Item) {
            self.queue.push_back(item);
        }

        fn len(&self) -> usize {
            self.queue.len()
        }
    }

    impl<S> Default for BreadthQueue<S> {
        fn default() -> Self {
            BreadthQueue {
                queue: VecDeque::new(),
            }
        }
    }

    /// Breadth-first search, expanding nodes in the order they
    /// were discovered.
    ///
    /// With unit-cost actions the first goal taken off the queue
    /// is a shallowest one, so the path returned is a shortest path.
    #[derive(Debug, Clone, Default)]
    pub struct BreadthFirst {
        options: SearchOptions,
    }

    impl BreadthFirst {
        pub fn new(options: SearchOptions) -> Self {
            Self { options }
        }
    }

    impl<S> Strategy<S> for BreadthFirst
    where
        S: SearchState,
    {
        fn search(&self, origin: S, recorder: &mut dyn Recorder<S::Action>) {
            let queue: BreadthQueue<Rc<Node<S, S::Action>>> = BreadthQueue::default();
            let search = FrontierSearch::new("bfs", queue, &self.options);
            if let Some(goal) = search.run(origin, recorder) {
                recorder.set_solution(goal.path());
            }
        }
    }

    /// Breadth-first search with default options, where the order is
    /// determined by the actions returned by [SearchState::actions].
    pub fn bfs<S>(origin: S) -> SearchStats<S::Action>
    where
        S: SearchState,
    {
        let mut stats = SearchStats::new();
        BreadthFirst::default().search(origin, &mut stats);
        stats
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algorithm::cycle::CyclePolicy;
    use crate::algorithm::test_support::{Graph, Line};
    use crate::algorithm::SearchOptions;
    use crate::stats::SearchStats;
    use crate::traits::{Recorder, Strategy};

    #[test]
    fn line() {
        let stats = bfs(Line::new(0, 4));
        assert_eq!(stats.solution(), Some(&[1, 1, 1, 1][..]));
        // 0, 1, 2, 3, 4: the walk back to the left is pruned at each step.
        assert_eq!(stats.explored(), 5);
        assert_eq!(stats.pruned(), 3);
    }

    #[test]
    fn already_at_goal() {
        let stats = bfs(Line::new(3, 3));
        assert_eq!(stats.solution(), Some(&[][..]));
        assert_eq!(stats.explored(), 1);
    }

    #[test]
    fn shortest_path_over_longer_first_branch() {
        for policy in [CyclePolicy::Simple, CyclePolicy::MinimalDepth].iter() {
            let mut stats = SearchStats::new();
            let strategy = BreadthFirst::new(SearchOptions::with_policy(*policy));
            strategy.search(Graph::ladder(), &mut stats);
            assert_eq!(stats.solution(), Some(&[4, 5][..]), "policy {}", policy);
        }
    }

    #[test]
    fn unreachable() {
        let stats = bfs(Line::bounded(0, 9, 5));
        assert!(stats.solution().is_none());
        assert_eq!(stats.explored(), 6);
    }
}
