//! Labyrinths with agents, keys, doors and a single exit.
//!
//! Maps are drawn with `#` for walls, `.` for floor, `@` for each
//! agent, lowercase letters for keys, uppercase letters for the doors
//! they open, and `$` for the exit. Agents move one cell at a time;
//! a key is collected by stepping on it, and once collected it opens
//! the matching door for every agent. The puzzle is solved as soon
//! as any agent stands on the exit.

use geometry::coord2d::{Direction, Point};
use searcher::SearchState;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;
use std::str::FromStr;

pub mod map;

pub use map::{KeyRing, Layout, MapError, Tile};

/// Move one agent a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub agent: usize,
    pub direction: Direction,
}

impl Move {
    pub fn new(agent: usize, direction: Direction) -> Self {
        Self { agent, direction }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.agent, self.direction)
    }
}

/// A configuration of a labyrinth: where the agents are and
/// which keys have been picked up.
///
/// The layout is shared between every state derived from the
/// same parsed map.
#[derive(Debug, Clone)]
pub struct Labyrinth {
    layout: Rc<Layout>,
    agents: Vec<Point>,
    keys: KeyRing,
}

impl FromStr for Labyrinth {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (layout, agents) = Layout::parse(s)?;
        Ok(Labyrinth {
            layout: Rc::new(layout),
            agents,
            keys: KeyRing::default(),
        })
    }
}

impl PartialEq for Labyrinth {
    fn eq(&self, other: &Self) -> bool {
        self.agents == other.agents
            && self.keys == other.keys
            && (Rc::ptr_eq(&self.layout, &other.layout) || self.layout == other.layout)
    }
}

impl Eq for Labyrinth {}

impl Hash for Labyrinth {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.agents.hash(state);
        self.keys.hash(state);
    }
}

impl Labyrinth {
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Agent positions, indexed by agent number.
    pub fn agents(&self) -> &[Point] {
        &self.agents
    }

    pub fn keys(&self) -> &KeyRing {
        &self.keys
    }

    pub fn exit(&self) -> Point {
        self.layout.exit()
    }

    /// Can an agent stand here, given the keys collected?
    fn is_open(&self, location: Point) -> bool {
        match self.layout.get(location) {
            Some(Tile::Door(c)) => self.keys.contains(&c),
            Some(_) => true,
            None => false,
        }
    }

    fn is_occupied(&self, location: Point) -> bool {
        self.agents.contains(&location)
    }

    /// Replay a sequence of moves from this state.
    pub fn replay<'a, I>(&self, moves: I) -> Self
    where
        I: IntoIterator<Item = &'a Move>,
    {
        moves
            .into_iter()
            .fold(self.clone(), |state, action| state.apply(action))
    }
}

impl SearchState for Labyrinth {
    type Action = Move;

    fn is_goal(&self) -> bool {
        self.agents.contains(&self.layout.exit())
    }

    fn actions(&self) -> Vec<Move> {
        let mut actions = Vec::with_capacity(4 * self.agents.len());

        for (agent, location) in self.agents.iter().enumerate() {
            for direction in Direction::all() {
                let target = location.step(direction);
                if self.is_open(target) && !self.is_occupied(target) {
                    actions.push(Move::new(agent, direction));
                }
            }
        }

        actions
    }

    fn apply(&self, action: &Move) -> Self {
        let mut next = self.clone();
        if let Some(location) = next.agents.get_mut(action.agent) {
            *location = location.step(action.direction);
            if let Some(Tile::Key(c)) = self.layout.get(*location) {
                next.keys.insert(c);
            }
        }
        next
    }
}

impl fmt::Display for Labyrinth {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.layout.bounds().margin(1).printer(f, |f, point| {
            if self.is_occupied(*point) {
                return write!(f, "@");
            }
            match self.layout.get(*point) {
                None => write!(f, "#"),
                Some(Tile::Floor) => write!(f, "."),
                Some(Tile::Exit) => write!(f, "$"),
                Some(Tile::Key(c)) if self.keys.contains(&c) => write!(f, "."),
                Some(Tile::Key(c)) => write!(f, "{}", c),
                Some(Tile::Door(c)) if self.keys.contains(&c) => write!(f, "."),
                Some(Tile::Door(c)) => write!(f, "{}", c.to_ascii_uppercase()),
            }
        })
    }
}
