use labyrinth::heuristic::{ExitAndKeys, ExitDistance, HeuristicKind};
use labyrinth::puzzle::{Labyrinth, Move};
use labyrinth::{algorithms, solve, Settings};

use searcher::{AStar, CyclePolicy, Recorder, SearchOptions, SearchState, SearchStats, Strategy};

const CORRIDOR: &str = include_str!("../maps/corridor.txt");
const DETOUR: &str = include_str!("../maps/detour.txt");
const OPEN: &str = include_str!("../maps/open.txt");
const PAIR: &str = include_str!("../maps/pair.txt");

const POLICIES: [CyclePolicy; 2] = [CyclePolicy::Simple, CyclePolicy::MinimalDepth];

fn settings(policy: CyclePolicy) -> Settings {
    Settings {
        options: SearchOptions::with_policy(policy),
        heuristic: HeuristicKind::Keys,
    }
}

fn run(map: &str, name: &str, policy: CyclePolicy) -> SearchStats<Move> {
    let labyrinth: Labyrinth = map.parse().unwrap();
    solve(labyrinth, name, &settings(policy)).unwrap()
}

fn run_astar<H>(map: &str, heuristic: H) -> SearchStats<Move>
where
    H: searcher::Heuristic<Labyrinth>,
{
    let labyrinth: Labyrinth = map.parse().unwrap();
    let mut stats = SearchStats::new();
    AStar::new(heuristic, SearchOptions::default()).search(labyrinth, &mut stats);
    stats
}

#[test]
fn corridor() {
    for policy in POLICIES.iter() {
        let stats = run(CORRIDOR, "bfs", *policy);
        assert_eq!(stats.path_len(), Some(2));
        assert_eq!(stats.explored(), 3);

        for name in algorithms() {
            let stats = run(CORRIDOR, name, *policy);
            assert_eq!(stats.path_len(), Some(2), "{} with {}", name, policy);
        }
    }
}

#[test]
fn optimal_strategies_agree() {
    for map in [CORRIDOR, DETOUR, OPEN, PAIR].iter() {
        for policy in POLICIES.iter() {
            let shortest = run(map, "bfs", *policy).path_len();
            assert!(shortest.is_some());

            assert_eq!(run(map, "ids", *policy).path_len(), shortest);
            assert_eq!(run(map, "astar", *policy).path_len(), shortest);

            let deep = run(map, "dfs", *policy).path_len();
            assert!(deep >= shortest, "dfs found a path shorter than bfs");
        }
    }
}

#[test]
fn paths_reach_the_exit() {
    for map in [CORRIDOR, DETOUR, OPEN, PAIR].iter() {
        let origin: Labyrinth = map.parse().unwrap();
        for name in algorithms() {
            for policy in POLICIES.iter() {
                let stats = run(map, name, *policy);
                let path = stats.into_solution().unwrap();
                let end = origin.replay(&path);
                assert!(end.is_goal(), "{} with {} ended at\n{}", name, policy, end);
            }
        }
    }
}

#[test]
fn dfs_wanders() {
    let bfs = run(OPEN, "bfs", CyclePolicy::Simple);
    let dfs = run(OPEN, "dfs", CyclePolicy::Simple);
    assert_eq!(bfs.path_len(), Some(7));
    assert_eq!(dfs.path_len(), Some(15));
}

#[test]
fn key_before_exit() {
    let origin: Labyrinth = DETOUR.parse().unwrap();
    let stats = run(DETOUR, "astar", CyclePolicy::Simple);
    let path = stats.solution().unwrap();
    assert_eq!(path.len(), 19);

    let keyed = origin.replay(&path[..1]);
    assert!(keyed.keys().contains(&'b'));
    assert!(!keyed.is_goal());
}

#[test]
fn key_heuristic_explores_less() {
    let exit = run_astar(DETOUR, ExitDistance);
    let keys = run_astar(DETOUR, ExitAndKeys);

    assert_eq!(exit.path_len(), Some(19));
    assert_eq!(keys.path_len(), Some(19));
    assert_eq!(exit.explored(), 35);
    assert_eq!(keys.explored(), 25);
}

#[test]
fn agents_cooperate() {
    let stats = run(PAIR, "astar", CyclePolicy::Simple);
    let path = stats.solution().unwrap();
    assert_eq!(path.len(), 8);
    assert!(path.iter().any(|m| m.agent == 1), "agent 1 holds the key");
}

#[test]
fn minimal_depth_prunes_deepening() {
    let simple = run(OPEN, "ids", CyclePolicy::Simple);
    let table = run(OPEN, "ids", CyclePolicy::MinimalDepth);

    assert_eq!(simple.explored(), 371);
    assert_eq!(table.explored(), 103);
}

#[test]
fn depth_limit_cuts_off() {
    let labyrinth: Labyrinth = DETOUR.parse().unwrap();
    let settings = Settings {
        options: SearchOptions {
            depth_limit: 10,
            ..SearchOptions::default()
        },
        heuristic: HeuristicKind::Keys,
    };

    for name in ["dfs", "ids"].iter() {
        let stats = solve(labyrinth.clone(), name, &settings).unwrap();
        assert!(stats.solution().is_none(), "{} went past the limit", name);
        assert!(stats.into_solution().is_err());
    }
}
