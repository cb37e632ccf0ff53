//! Errors returned by functions related to this crate.

use crate::aux::*;
use std::{error, fmt};

/// Error type returned when game [`Settings`](crate::Settings) can't be used
/// to start a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Board has zero or negative width or height.
    EmptyBoard(BoardSize),

    /// Snake step is zero or negative.
    ZeroStep(i32),

    /// Initial snake has less points than specified in variant argument. The
    /// snake needs a head and at least one body segment.
    ShortSnake(usize),

    /// Two neighbouring points of the initial snake are not one step apart.
    DisjointSnake(Point, Point),

    /// Apple hit range is zero or negative.
    InvalidHitRange(i32),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyBoard(size) => write!(f, "board of {} size has no cells", size),
            Self::ZeroStep(step) => write!(f, "snake step must be positive, got {}", step),
            Self::ShortSnake(len) => write!(f,
                "initial snake must have at least 2 points, got {}", len),
            Self::DisjointSnake(a, b) => write!(f,
                "initial snake points {} and {} are not one step apart", a, b),
            Self::InvalidHitRange(range) => write!(f,
                "apple hit range must be positive, got {}", range),
        }
    }
}

impl error::Error for GameError {}

/// Error returned if can't parse [`Key`] from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseKeyError(pub String);

impl fmt::Display for ParseKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,
"can't parse Key from {:?} because it's not \"up\", \"down\", \"left\", \"right\", \"esc\" or a single character", self.0)
    }
}

impl error::Error for ParseKeyError {}

/// Error returned if can't parse [`BoardSize`] from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBoardSizeError(pub String);

impl fmt::Display for ParseBoardSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "can't parse board size from {:?}, expected WIDTHxHEIGHT with positive numbers", self.0)
    }
}

impl error::Error for ParseBoardSizeError {}
