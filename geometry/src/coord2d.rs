//! Coordinate work in two dimensions.

use std::cmp;
use std::default::Default;
use std::fmt;
use std::ops::RangeInclusive;

use crate::Position;

/// A movement direction on the grid.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Left,
    Direction::Right,
    Direction::Down,
];

impl Direction {
    /// Enumerates all directions of movement in "reading order",
    /// i.e. such that the resulting points are in reading order
    /// from the current position.
    pub fn all() -> impl Iterator<Item = Self> {
        DIRECTIONS.iter().cloned()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
        };
        f.write_str(name)
    }
}

/// A cell on the grid.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: Position,
    pub y: Position,
}

impl Point {
    pub fn new(x: Position, y: Position) -> Self {
        Self { x, y }
    }

    /// Step one cell in a given direction. `y` grows downwards.
    pub fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::Left => Self::new(self.x - 1, self.y),
            Direction::Right => Self::new(self.x + 1, self.y),
            Direction::Up => Self::new(self.x, self.y - 1),
            Direction::Down => Self::new(self.x, self.y + 1),
        }
    }

    /// Manhattan distance between two points is the distance along
    /// each coordinate
    pub fn manhattan_distance(self, other: Point) -> Position {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

impl cmp::Ord for Point {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl cmp::PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl From<(Position, Position)> for Point {
    fn from(coordinates: (Position, Position)) -> Self {
        Self::new(coordinates.0, coordinates.1)
    }
}

impl From<(usize, usize)> for Point {
    fn from(coordinates: (usize, usize)) -> Self {
        Self::new(coordinates.0 as Position, coordinates.1 as Position)
    }
}

/// A rectangle which encloses points and is aligned
/// with the coordinate axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    left: Position,
    right: Position,
    top: Position,
    bottom: Position,
}

impl BoundingBox {
    /// Create a bounding box which covers no points.
    pub fn empty() -> Self {
        Self {
            left: Position::MAX,
            right: Position::MIN,
            top: Position::MAX,
            bottom: Position::MIN,
        }
    }

    /// Modify this bounding box to include a given point.
    pub fn include(&mut self, point: Point) -> bool {
        let mut updated = false;
        if point.x < self.left {
            self.left = point.x;
            updated = true;
        }
        if point.x > self.right {
            self.right = point.x;
            updated = true;
        }
        if point.y < self.top {
            self.top = point.y;
            updated = true;
        }
        if point.y > self.bottom {
            self.bottom = point.y;
            updated = true;
        }
        updated
    }

    /// Construct a bounding box from an iterator of points.
    pub fn from_points<'a>(points: impl Iterator<Item = &'a Point>) -> Self {
        let mut bbox = Self::empty();
        for point in points {
            bbox.include(*point);
        }
        bbox
    }

    /// Return a new bounding box with a margin
    /// added to all sides.
    pub fn margin(&self, size: Position) -> Self {
        Self {
            left: self.left - size,
            right: self.right + size,
            top: self.top - size,
            bottom: self.bottom + size,
        }
    }

    /// Range of vertical positions
    pub fn vertical(&self) -> RangeInclusive<Position> {
        self.top..=self.bottom
    }

    /// Range of horizontal positions
    pub fn horizontal(&self) -> RangeInclusive<Position> {
        self.left..=self.right
    }

    /// Call a function which should write a single character at every position
    /// in this bounding box.
    ///
    /// This function will handle newlines. The callback should print
    /// a single character for each point.
    pub fn printer<F>(&self, f: &mut fmt::Formatter, cb: F) -> fmt::Result
    where
        F: Fn(&mut fmt::Formatter, &Point) -> fmt::Result,
    {
        for y in self.vertical() {
            for x in self.horizontal() {
                let point = (x, y).into();
                cb(f, &point)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::empty()
    }
}
