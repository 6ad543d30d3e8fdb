//! Distance estimates for guiding A* through a labyrinth.

use geometry::coord2d::Point;
use searcher::{Heuristic, SearchState};

use std::fmt;
use std::str::FromStr;

use crate::puzzle::Labyrinth;
use crate::LabyrinthError;

/// Distance from the closest agent to `target`.
fn nearest(agents: &[Point], target: Point) -> usize {
    agents
        .iter()
        .map(|agent| agent.manhattan_distance(target) as usize)
        .min()
        .unwrap_or(0)
}

/// How far the closest agent is from the exit.
///
/// Never overestimates, since every move changes one agent's
/// position by one cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExitDistance;

impl Heuristic<Labyrinth> for ExitDistance {
    fn estimate(&self, state: &Labyrinth) -> usize {
        if state.is_goal() {
            return 0;
        }
        nearest(state.agents(), state.exit())
    }
}

/// Exit distance, plus the distance to each key which
/// hasn't been collected yet.
///
/// Steers the search towards keys, which usually cuts down on
/// the number of nodes explored. Not admissible in general: a key
/// the path never needs still adds its distance, so A* guided by
/// this estimate may return a path longer than the shortest one.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExitAndKeys;

impl Heuristic<Labyrinth> for ExitAndKeys {
    fn estimate(&self, state: &Labyrinth) -> usize {
        if state.is_goal() {
            return 0;
        }

        let agents = state.agents();
        let keys: usize = state
            .layout()
            .keys()
            .iter()
            .filter(|(_, key)| !state.keys().contains(key))
            .map(|(location, _)| nearest(agents, *location))
            .sum();

        nearest(agents, state.exit()) + keys
    }
}

/// Which heuristic to hand to A*.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum HeuristicKind {
    Exit,
    #[default]
    Keys,
}

impl FromStr for HeuristicKind {
    type Err = LabyrinthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exit" => Ok(HeuristicKind::Exit),
            "keys" => Ok(HeuristicKind::Keys),
            other => Err(LabyrinthError::UnknownHeuristic(other.to_string())),
        }
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            HeuristicKind::Exit => write!(f, "exit"),
            HeuristicKind::Keys => write!(f, "keys"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::puzzle::Move;
    use geometry::coord2d::Direction;

    #[test]
    fn exit_distance() {
        let labyrinth: Labyrinth = "
            #######
            #@....#
            #....$#
            #######"
            .parse()
            .unwrap();

        assert_eq!(ExitDistance.estimate(&labyrinth), 5);

        let closer = labyrinth.apply(&Move::new(0, Direction::Down));
        assert_eq!(ExitDistance.estimate(&closer), 4);
    }

    #[test]
    fn nearest_agent_counts() {
        let labyrinth: Labyrinth = "
            ########
            #@....@#
            #.....$#
            ########"
            .parse()
            .unwrap();

        assert_eq!(ExitDistance.estimate(&labyrinth), 1);
    }

    #[test]
    fn goal_is_zero() {
        let labyrinth: Labyrinth = "#a@$#".parse().unwrap();
        let goal = labyrinth.apply(&Move::new(0, Direction::Right));
        assert!(goal.is_goal());
        assert_eq!(ExitDistance.estimate(&goal), 0);
        assert_eq!(ExitAndKeys.estimate(&goal), 0, "key a is still out there");
    }

    #[test]
    fn keys_add_distance() {
        let labyrinth: Labyrinth = "
            ########
            #b@..a$#
            ########"
            .parse()
            .unwrap();

        // Exit is 4 away, key a is 3 away, key b is 1 away.
        assert_eq!(ExitDistance.estimate(&labyrinth), 4);
        assert_eq!(ExitAndKeys.estimate(&labyrinth), 8);

        let keyed = labyrinth.apply(&Move::new(0, Direction::Left));
        assert_eq!(ExitAndKeys.estimate(&keyed), 5 + 4);
    }

    #[test]
    fn stray_key_overestimates() {
        let labyrinth: Labyrinth = "#a@..$#".parse().unwrap();

        // No door needs the key, so the exit is three moves away.
        let shortest = searcher::bfs(labyrinth.clone()).path_len();
        assert_eq!(shortest, Some(3));
        assert_eq!(ExitDistance.estimate(&labyrinth), 3);
        assert_eq!(ExitAndKeys.estimate(&labyrinth), 4);
    }

    #[test]
    fn parse_kind() {
        assert_eq!("exit".parse::<HeuristicKind>().unwrap(), HeuristicKind::Exit);
        assert_eq!("keys".parse::<HeuristicKind>().unwrap(), HeuristicKind::Keys);
        assert!("manhattan".parse::<HeuristicKind>().is_err());
        assert_eq!(HeuristicKind::default().to_string(), "keys");
    }
}
