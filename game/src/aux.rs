//! Auxiliary abstractions.

use crate::error::*;
use serde::{Deserialize, Serialize};
use std::{fmt, ops, str::FromStr};

/// Point on the game board.
///
/// Note that this coordinates system is same as on the screen, so (0, 0) point
/// is the top left corner of the board and Y-axis is going down.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub struct Point {
    /// Coordinate relative to the abscissa axis.
    pub x: i32,

    /// Coordinate relative to the ordinate axis.
    pub y: i32,
}

impl Point {
    /// The (0, 0) point.
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    /// Return a new [`Point`].
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return `true` if both axis distances to `other` are strictly less than
    /// `range`.
    pub fn within(self, other: Self, range: i32) -> bool {
        let d = self - other;
        let range = range.max(0).unsigned_abs();
        d.x.unsigned_abs() < range && d.y.unsigned_abs() < range
    }
}

/// Coordinates wrap around on `i32` overflow.
impl ops::Add for Point {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self::new(self.x.wrapping_add(other.x), self.y.wrapping_add(other.y))
    }
}

impl ops::Sub for Point {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Self::new(self.x.wrapping_sub(other.x), self.y.wrapping_sub(other.y))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Heading of the snake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Up.
    Up,

    /// Down.
    Down,

    /// Left.
    Left,

    /// Right.
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Return opposite direction.
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Return displacement of one move in this direction scaled by `step`.
    pub fn vector(self, step: i32) -> Point {
        match self {
            Self::Up => Point::new(0, -step),
            Self::Down => Point::new(0, step),
            Self::Left => Point::new(-step, 0),
            Self::Right => Point::new(step, 0),
        }
    }

    /// Return `true` if `other` points exactly backwards, i.e. both vector
    /// components sum up to zero.
    pub fn reverses(self, other: Self) -> bool {
        self.vector(1) + other.vector(1) == Point::ORIGIN
    }

    /// Map input key to a direction. Keys without a direction give `None`.
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Up => Some(Self::Up),
            Key::Down => Some(Self::Down),
            Key::Left => Some(Self::Left),
            Key::Right => Some(Self::Right),
            Key::Escape | Key::Char(_) => None,
        }
    }

    pub(crate) fn to_u8(self) -> u8 {
        match self {
            Self::Up => 0,
            Self::Down => 1,
            Self::Left => 2,
            Self::Right => 3,
        }
    }

    pub(crate) fn from_u8(n: u8) -> Self {
        match n {
            0 => Self::Up,
            1 => Self::Down,
            2 => Self::Left,
            _ => Self::Right,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lower_case = format!("{:?}", self).to_lowercase();
        write!(f, "{}", lower_case)
    }
}

impl ops::Neg for Direction {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.opposite()
    }
}

/// Key event delivered by an input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Arrow up.
    Up,

    /// Arrow down.
    Down,

    /// Arrow left.
    Left,

    /// Arrow right.
    Right,

    /// Escape.
    Escape,

    /// Any printable character, lower-cased if it's an ASCII letter.
    Char(char),
}

impl FromStr for Key {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_lowercase().as_str() {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "esc" | "escape" => Ok(Self::Escape),
            _ => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(Self::Char(c.to_ascii_lowercase())),
                    _ => Err(ParseKeyError(s.to_string())),
                }
            }
        }
    }
}

/// Size of the game board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSize {
    pub width: i32,
    pub height: i32,
}

impl BoardSize {
    /// Return a new [`BoardSize`].
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for BoardSize {
    type Err = ParseBoardSizeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let err = || ParseBoardSizeError(s.to_string());
        let (w, h) = s.split_once('x').ok_or_else(err)?;
        let width = w.trim().parse::<i32>().map_err(|_| err())?;
        let height = h.trim().parse::<i32>().map_err(|_| err())?;
        if width <= 0 || height <= 0 {
            return Err(err());
        }
        Ok(Self::new(width, height))
    }
}
