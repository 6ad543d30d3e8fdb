#![deny(clippy::all)]

use clap::{value_t, App, Arg};

use lazy_static::lazy_static;
use thiserror::Error;
use tracing::{debug, info};

use searcher::{
    AStar, BreadthFirst, CyclePolicy, DepthFirst, IterativeDeepening, Recorder, SearchError,
    SearchOptions, SearchStats, Strategy,
};

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, Read};
use std::time::Instant;

pub mod heuristic;
pub mod logging;
pub mod puzzle;

use heuristic::{ExitAndKeys, ExitDistance, HeuristicKind};
use puzzle::{Labyrinth, MapError, Move};

type Error = anyhow::Error;
type Builder = fn(&Settings) -> Box<dyn Strategy<Labyrinth>>;

/// Result type for labyrinth operations.
pub type Result<T> = std::result::Result<T, LabyrinthError>;

#[derive(Debug, Error)]
pub enum LabyrinthError {
    #[error("Unknown algorithm {0:?}, expected one of: bfs, dfs, ids, astar")]
    UnknownAlgorithm(String),

    #[error("Unknown heuristic {0:?}, expected one of: exit, keys")]
    UnknownHeuristic(String),

    #[error("Invalid map: {0}")]
    InvalidMap(#[from] MapError),

    #[error("Input not found")]
    InputNotFound(#[from] io::Error),

    #[error(transparent)]
    Search(#[from] SearchError),
}

/// Everything needed to build a strategy, besides its name.
#[derive(Debug, Clone, Copy, Default)]
pub struct Settings {
    pub options: SearchOptions,
    pub heuristic: HeuristicKind,
}

fn breadth_first(settings: &Settings) -> Box<dyn Strategy<Labyrinth>> {
    Box::new(BreadthFirst::new(settings.options))
}

fn depth_first(settings: &Settings) -> Box<dyn Strategy<Labyrinth>> {
    Box::new(DepthFirst::new(settings.options))
}

fn iterative_deepening(settings: &Settings) -> Box<dyn Strategy<Labyrinth>> {
    Box::new(IterativeDeepening::new(settings.options))
}

fn a_star(settings: &Settings) -> Box<dyn Strategy<Labyrinth>> {
    match settings.heuristic {
        HeuristicKind::Exit => Box::new(AStar::new(ExitDistance, settings.options)),
        HeuristicKind::Keys => Box::new(AStar::new(ExitAndKeys, settings.options)),
    }
}

lazy_static! {
    static ref ALGORITHMS: BTreeMap<&'static str, Builder> = {
        let mut a: BTreeMap<&'static str, Builder> = BTreeMap::new();
        a.insert("bfs", breadth_first);
        a.insert("dfs", depth_first);
        a.insert("ids", iterative_deepening);
        a.insert("astar", a_star);
        a
    };
}

/// Names accepted by [strategy].
pub fn algorithms() -> Vec<&'static str> {
    ALGORITHMS.keys().copied().collect()
}

/// Build the named strategy.
pub fn strategy(name: &str, settings: &Settings) -> Result<Box<dyn Strategy<Labyrinth>>> {
    ALGORITHMS
        .get(name)
        .map(|build| build(settings))
        .ok_or_else(|| LabyrinthError::UnknownAlgorithm(name.to_string()))
}

/// Run the named strategy on a labyrinth.
pub fn solve(labyrinth: Labyrinth, name: &str, settings: &Settings) -> Result<SearchStats<Move>> {
    let strategy = strategy(name, settings)?;
    debug!(algorithm = name, policy = %settings.options.policy, "starting search");

    let mut stats = SearchStats::new();
    strategy.search(labyrinth, &mut stats);

    info!(
        algorithm = name,
        explored = stats.explored(),
        pruned = stats.pruned(),
        solved = stats.is_solved(),
        "search finished"
    );
    Ok(stats)
}

pub fn read_labyrinth(mut input: BoxedRead) -> Result<Labyrinth> {
    let mut buf = String::new();
    input.read_to_string(&mut buf)?;
    Ok(buf.parse()?)
}

type BoxedRead = Box<dyn Read + 'static>;

pub fn get_input_reader(filename: &str) -> Result<BoxedRead> {
    let reader: BoxedRead = match filename {
        "-" => Box::new(io::stdin()),
        path => Box::new(File::open(path)?),
    };
    Ok(reader)
}

/// Accept only depth limits the depth-first strategies will honour.
fn valid_depth_limit(value: String) -> std::result::Result<(), String> {
    let limit: usize = value
        .parse()
        .map_err(|_| format!("{:?} is not a whole number", value))?;
    SearchOptions::default()
        .with_depth_limit(limit)
        .map(|_| ())
        .map_err(|e| e.to_string())
}

pub fn solver() -> std::result::Result<(), Error> {
    let names = algorithms();
    let matches = App::new("Labyrinth")
        .version("1.0")
        .about("Solve key-and-door labyrinths with classic search strategies")
        .arg(
            Arg::with_name("map")
                .value_name("MAP")
                .help("Map file, or - to read from stdin")
                .required(true)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("algorithm")
                .short("a")
                .long("algorithm")
                .takes_value(true)
                .possible_values(&names)
                .default_value("bfs"),
        )
        .arg(
            Arg::with_name("cycles")
                .short("c")
                .long("cycles")
                .help("How repeated states are pruned")
                .takes_value(true)
                .possible_values(&["simple", "minimal-depth"])
                .default_value("simple"),
        )
        .arg(
            Arg::with_name("heuristic")
                .short("H")
                .long("heuristic")
                .help("Distance estimate used by astar")
                .takes_value(true)
                .possible_values(&["exit", "keys"])
                .default_value("keys"),
        )
        .arg(
            Arg::with_name("depth-limit")
                .long("depth-limit")
                .help("Depth cutoff for dfs, largest bound for ids (1 to 80)")
                .takes_value(true)
                .validator(valid_depth_limit)
                .default_value("80"),
        )
        .arg(
            Arg::with_name("progress")
                .long("progress")
                .value_name("N")
                .help("Log progress every N expansions")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("Log more, may be repeated"),
        )
        .get_matches();

    logging::init(matches.occurrences_of("verbose"));

    let policy = value_t!(matches, "cycles", CyclePolicy).unwrap_or_else(|e| e.exit());
    let heuristic = value_t!(matches, "heuristic", HeuristicKind).unwrap_or_else(|e| e.exit());
    let depth_limit = value_t!(matches, "depth-limit", usize).unwrap_or_else(|e| e.exit());
    let verbose = if matches.is_present("progress") {
        Some(value_t!(matches, "progress", usize).unwrap_or_else(|e| e.exit()))
    } else {
        None
    };

    let options = SearchOptions {
        policy,
        verbose,
        ..SearchOptions::default()
    }
    .with_depth_limit(depth_limit)?;
    let settings = Settings { options, heuristic };
    let algorithm = matches.value_of("algorithm").unwrap_or("bfs");

    let reader = get_input_reader(matches.value_of("map").unwrap_or("-"))?;
    let labyrinth = read_labyrinth(reader)?;
    debug!("labyrinth:\n{}", labyrinth);

    let start = Instant::now();
    let stats = solve(labyrinth, algorithm, &settings)?;
    let elapsed = start.elapsed();

    if let Some(path) = stats.solution() {
        for action in path {
            println!("{}", action);
        }
    }
    println!("{}", stats);
    println!("    Time: {:.3}s", elapsed.as_secs_f64());

    stats.into_solution()?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn registry() {
        assert_eq!(algorithms(), vec!["astar", "bfs", "dfs", "ids"]);
        assert!(strategy("bfs", &Settings::default()).is_ok());
        assert!(matches!(
            strategy("dijkstra", &Settings::default()),
            Err(LabyrinthError::UnknownAlgorithm(_))
        ));
    }

    #[test]
    fn depth_limit_validation() {
        assert!(valid_depth_limit("80".to_string()).is_ok());
        assert!(valid_depth_limit("1".to_string()).is_ok());
        assert!(valid_depth_limit("0".to_string()).is_err());
        assert!(valid_depth_limit("81".to_string()).is_err());
        assert!(valid_depth_limit("deep".to_string()).is_err());
    }

    #[test]
    fn read_map() {
        let reader: BoxedRead = Box::new("#@.$#".as_bytes());
        let labyrinth = read_labyrinth(reader).unwrap();
        assert_eq!(labyrinth.agents().len(), 1);

        let reader: BoxedRead = Box::new("#@.#".as_bytes());
        assert!(matches!(
            read_labyrinth(reader),
            Err(LabyrinthError::InvalidMap(MapError::MissingExit))
        ));
    }

    #[test]
    fn solve_corridor() {
        for name in algorithms() {
            let labyrinth: Labyrinth = "#@.$#".parse().unwrap();
            let stats = solve(labyrinth, name, &Settings::default()).unwrap();
            assert_eq!(stats.path_len(), Some(2), "algorithm {}", name);
        }
    }
}
