//! Apple abstractions.

use crate::aux::{BoardSize, Point};
use rand::Rng;
use std::collections::BTreeSet;

/// Apples which are going to be eaten by the snake. No two apples share a
/// point.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Apples {
    points: BTreeSet<Point>,
}

impl Apples {
    /// Return [`Apples`] placed at `points`. Duplicates are merged.
    pub fn new(points: impl IntoIterator<Item = Point>) -> Self {
        Self {
            points: points.into_iter().collect(),
        }
    }

    /// Return [`Apples`] with one apple at a random point of the board.
    pub(crate) fn random<R: Rng + ?Sized>(board: BoardSize, rng: &mut R) -> Self {
        Self::new([random_point(board, rng)])
    }

    /// Remove every apple closer than `range` to `head` on both axes and
    /// return how many were removed.
    pub(crate) fn eat(&mut self, head: Point, range: i32) -> usize {
        let before = self.points.len();
        self.points.retain(|apple| !head.within(*apple, range));
        before - self.points.len()
    }

    /// Spawn from zero to `max_new` apples at random points if there are no
    /// more than `limit` apples already. Spawning stops as soon as there are
    /// `limit + 1` apples. Return how many apples were added.
    pub(crate) fn grow<R: Rng + ?Sized>(
        &mut self,
        board: BoardSize,
        limit: usize,
        max_new: usize,
        rng: &mut R,
    ) -> usize {
        if self.points.len() > limit {
            return 0;
        }
        let before = self.points.len();
        let count = rng.gen_range(0..=max_new);
        for _ in 0..count {
            if self.points.len() > limit {
                break;
            }
            self.points.insert(random_point(board, rng));
        }
        self.points.len() - before
    }

    /// Return `true` if there's an apple at `point`.
    pub fn contains(&self, point: Point) -> bool {
        self.points.contains(&point)
    }

    /// Return apple positions ordered by coordinates.
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().copied()
    }

    /// Return number of apples.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Return `true` if there are no apples.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Generate random point framed by the board.
fn random_point<R: Rng + ?Sized>(board: BoardSize, rng: &mut R) -> Point {
    Point::new(rng.gen_range(0..board.width), rng.gen_range(0..board.height))
}
