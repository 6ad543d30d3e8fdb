use geometry::coord2d::{BoundingBox, Point};

use std::collections::{BTreeMap, BTreeSet};
use std::convert::{TryFrom, TryInto};
use std::fmt;

use thiserror::Error;

/// Error produced when a map can't be read.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("Unexpected character {0:?} at {1}")]
    UnexpectedCharacter(char, Point),

    #[error("Map has no exit")]
    MissingExit,

    #[error("Map has more than one exit: {0} and {1}")]
    MultipleExits(Point, Point),

    #[error("Map has no agents")]
    NoAgents,
}

/// Anything an agent can stand on.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Tile {
    Floor,
    Exit,
    Door(char),
    Key(char),
}

impl TryFrom<char> for Tile {
    type Error = char;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '.' | '@' => Ok(Tile::Floor),
            '$' => Ok(Tile::Exit),
            c if c.is_ascii_lowercase() => Ok(Tile::Key(c)),
            c if c.is_ascii_uppercase() => Ok(Tile::Door(c.to_ascii_lowercase())),
            c => Err(c),
        }
    }
}

/// The keys collected so far, shared by all agents.
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash)]
pub struct KeyRing(BTreeSet<char>);

impl KeyRing {
    pub(crate) fn insert(&mut self, key: char) -> bool {
        self.0.insert(key)
    }

    pub fn contains(&self, key: &char) -> bool {
        self.0.contains(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for KeyRing {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for key in self.0.iter() {
            write!(f, "{}", key)?;
        }
        Ok(())
    }
}

/// The fixed part of a labyrinth: where the walls, keys, doors
/// and the exit are. Anything not in `tiles` is a wall.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    tiles: BTreeMap<Point, Tile>,
    keys: Vec<(Point, char)>,
    exit: Point,
    bounds: BoundingBox,
}

impl Layout {
    /// Parse a map, returning the layout and the agents' starting
    /// positions in reading order.
    pub(crate) fn parse(s: &str) -> Result<(Self, Vec<Point>), MapError> {
        let mut tiles = BTreeMap::new();
        let mut agents = Vec::new();
        let mut exit: Option<Point> = None;

        for (y, line) in s.lines().enumerate() {
            for (x, c) in line.trim().chars().enumerate() {
                let point: Point = (x, y).into();
                if c == '#' {
                    continue;
                }

                let tile: Tile = c
                    .try_into()
                    .map_err(|c| MapError::UnexpectedCharacter(c, point))?;

                match (tile, exit) {
                    (Tile::Exit, Some(first)) => return Err(MapError::MultipleExits(first, point)),
                    (Tile::Exit, None) => exit = Some(point),
                    _ => {}
                }

                if c == '@' {
                    agents.push(point);
                }
                tiles.insert(point, tile);
            }
        }

        let exit = exit.ok_or(MapError::MissingExit)?;
        if agents.is_empty() {
            return Err(MapError::NoAgents);
        }

        let keys = tiles
            .iter()
            .filter_map(|(p, t)| match t {
                Tile::Key(k) => Some((*p, *k)),
                _ => None,
            })
            .collect();
        let bounds = BoundingBox::from_points(tiles.keys());

        Ok((
            Layout {
                tiles,
                keys,
                exit,
                bounds,
            },
            agents,
        ))
    }

    pub fn get(&self, location: Point) -> Option<Tile> {
        self.tiles.get(&location).copied()
    }

    pub fn exit(&self) -> Point {
        self.exit
    }

    /// Every key cell, in reading order.
    pub fn keys(&self) -> &[(Point, char)] {
        &self.keys
    }

    /// The smallest box holding every open cell.
    pub fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn tiles() {
        assert_eq!(Tile::try_from('.'), Ok(Tile::Floor));
        assert_eq!(Tile::try_from('@'), Ok(Tile::Floor));
        assert_eq!(Tile::try_from('$'), Ok(Tile::Exit));
        assert_eq!(Tile::try_from('k'), Ok(Tile::Key('k')));
        assert_eq!(Tile::try_from('K'), Ok(Tile::Door('k')));
        assert_eq!(Tile::try_from('?'), Err('?'));
    }

    #[test]
    fn parse() {
        let (layout, agents) = Layout::parse(
            "
            #######
            #a@.A$#
            #.@b###
            #######",
        )
        .unwrap();

        assert_eq!(agents, vec![Point::new(2, 2), Point::new(2, 3)]);
        assert_eq!(layout.exit(), Point::new(5, 2));
        assert_eq!(
            layout.keys(),
            &[(Point::new(1, 2), 'a'), (Point::new(3, 3), 'b')][..]
        );
        assert_eq!(layout.get(Point::new(4, 2)), Some(Tile::Door('a')));
        assert_eq!(layout.get(Point::new(2, 2)), Some(Tile::Floor));
        assert_eq!(layout.get(Point::new(0, 2)), None);
        assert_eq!(layout.bounds().horizontal(), 1..=5);
        assert_eq!(layout.bounds().vertical(), 2..=3);
    }

    #[test]
    fn errors() {
        assert!(matches!(
            Layout::parse("#@.?$#"),
            Err(MapError::UnexpectedCharacter('?', _))
        ));
        assert!(matches!(Layout::parse("#@..#"), Err(MapError::MissingExit)));
        assert!(matches!(
            Layout::parse("#$@$#"),
            Err(MapError::MultipleExits(_, _))
        ));
        assert!(matches!(Layout::parse("#..$#"), Err(MapError::NoAgents)));
    }

    #[test]
    fn keyring() {
        let mut keys = KeyRing::default();
        assert!(keys.is_empty());
        assert!(keys.insert('c'));
        assert!(keys.insert('a'));
        assert!(!keys.insert('c'));
        assert!(keys.contains(&'a'));
        assert_eq!(keys.len(), 2);
        assert_eq!(keys.to_string(), "ac");
    }
}
