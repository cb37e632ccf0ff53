//! Snake abstractions.

use crate::aux::*;
use std::{
    collections::VecDeque,
    sync::{
        atomic::{AtomicU8, Ordering},
        Arc,
    },
};

/// Shared handle to the snake heading.
///
/// Input handlers hold clones of it and turn the snake from any thread while
/// the tick path reads the heading once per tick.
#[derive(Debug, Clone)]
pub struct Steering(Arc<AtomicU8>);

impl Steering {
    /// Return a new [`Steering`] pointing in `direction`.
    pub fn new(direction: Direction) -> Self {
        Self(Arc::new(AtomicU8::new(direction.to_u8())))
    }

    /// Return current heading.
    pub fn heading(&self) -> Direction {
        Direction::from_u8(self.0.load(Ordering::Acquire))
    }

    /// Change heading to `direction` unless it reverses the current one.
    ///
    /// Return `true` if the heading is `direction` afterwards.
    pub fn turn(&self, direction: Direction) -> bool {
        let wanted = direction.to_u8();
        let turned = self
            .0
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| {
                if Direction::from_u8(current).reverses(direction) {
                    None
                } else {
                    Some(wanted)
                }
            });
        if turned.is_err() {
            log::trace!("turn to {} rejected, snake is heading {}", direction, -direction);
        }
        turned.is_ok()
    }
}

/// Snake abstraction structure.
#[derive(Debug)]
pub struct Snake {
    head: Point,

    /// Front is the most recently vacated head position, back is the tail.
    body: VecDeque<Point>,

    steering: Steering,
}

impl Snake {
    /// Return [`Snake`] built from `points` where the first one is the head,
    /// heading to `direction`.
    ///
    /// Return `None` if there are no points.
    pub(crate) fn new(points: &[Point], direction: Direction) -> Option<Self> {
        let (head, body) = points.split_first()?;
        Some(Self {
            head: *head,
            body: body.iter().copied().collect(),
            steering: Steering::new(direction),
        })
    }

    /// Move the head one `step` along `heading`. The old head becomes the
    /// first body segment and the tail segment is dropped.
    ///
    /// A head which went past the `board` right or bottom edge is moved to the
    /// zero coordinate on that axis instead. There's no wrapping past the left
    /// and top edges, coordinates only wrap around on `i32` overflow.
    pub(crate) fn step_move(&mut self, heading: Direction, step: i32, board: BoardSize) {
        let old = self.head;
        let moved = old + heading.vector(step);
        let x = if old.x > board.width { 0 } else { moved.x };
        let y = if old.y > board.height { 0 } else { moved.y };

        self.head = Point::new(x, y);
        self.body.push_front(old);
        self.body.pop_back();
    }

    /// Append a segment one `step` behind the tail, opposite to `heading`.
    pub(crate) fn grow(&mut self, heading: Direction, step: i32) {
        let tail = self.tail();
        self.body.push_back(tail - heading.vector(step));
    }

    /// Return `true` if the head overlaps any body segment.
    pub fn bitten(&self) -> bool {
        self.body.contains(&self.head)
    }

    /// Return head position.
    pub fn head(&self) -> Point {
        self.head
    }

    /// Return body segments from the neck to the tail.
    pub fn body(&self) -> impl Iterator<Item = Point> + '_ {
        self.body.iter().copied()
    }

    /// Return tail position. It's the head if the snake has no body.
    pub fn tail(&self) -> Point {
        self.body.back().copied().unwrap_or(self.head)
    }

    /// Return number of body segments, head excluded.
    pub fn body_len(&self) -> usize {
        self.body.len()
    }

    /// Return current heading.
    pub fn heading(&self) -> Direction {
        self.steering.heading()
    }

    /// Return handle which can turn this snake.
    pub fn steering(&self) -> Steering {
        self.steering.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    const BOARD: BoardSize = BoardSize::new(500, 500);

    fn line() -> Snake {
        let points = [
            Point::new(130, 100),
            Point::new(120, 100),
            Point::new(110, 100),
            Point::new(100, 100),
        ];
        Snake::new(&points, Direction::Right).unwrap()
    }

    #[test]
    fn empty_snake() {
        assert!(Snake::new(&[], Direction::Right).is_none());
    }

    #[test]
    fn move_drops_tail() {
        let mut snake = line();
        snake.step_move(Direction::Right, 10, BOARD);

        assert_eq!(snake.head(), Point::new(140, 100));
        assert_eq!(
            snake.body().collect::<Vec<_>>(),
            [Point::new(130, 100), Point::new(120, 100), Point::new(110, 100)]
        );
    }

    #[test]
    fn move_resets_coordinate_past_edge() {
        let points = [Point::new(510, 100), Point::new(500, 100)];
        let mut snake = Snake::new(&points, Direction::Right).unwrap();
        snake.step_move(Direction::Right, 10, BOARD);
        assert_eq!(snake.head(), Point::new(0, 100));

        // The reset happens only after the head has already crossed the edge.
        let points = [Point::new(500, 100), Point::new(490, 100)];
        let mut snake = Snake::new(&points, Direction::Right).unwrap();
        snake.step_move(Direction::Right, 10, BOARD);
        assert_eq!(snake.head(), Point::new(510, 100));

        let points = [Point::new(50, 501), Point::new(50, 491)];
        let mut snake = Snake::new(&points, Direction::Down).unwrap();
        snake.step_move(Direction::Left, 10, BOARD);
        assert_eq!(snake.head(), Point::new(40, 0));
    }

    #[test]
    fn move_goes_negative() {
        let points = [Point::new(0, 100), Point::new(10, 100)];
        let mut snake = Snake::new(&points, Direction::Left).unwrap();
        snake.step_move(Direction::Left, 10, BOARD);
        assert_eq!(snake.head(), Point::new(-10, 100));
    }

    #[test]
    fn move_wraps_past_i32_min() {
        let points = [Point::new(0, i32::MIN + 5), Point::new(0, i32::MIN + 15)];
        let mut snake = Snake::new(&points, Direction::Up).unwrap();
        snake.step_move(Direction::Up, 10, BOARD);
        assert_eq!(snake.head(), Point::new(0, i32::MAX - 4));

        snake.grow(Direction::Down, 10);
        assert_eq!(snake.tail(), Point::new(0, i32::MAX - 4));

        // Past the bottom edge now, so the next move resets to zero.
        snake.step_move(Direction::Up, 10, BOARD);
        assert_eq!(snake.head(), Point::new(0, 0));
    }

    #[test]
    fn grow_behind_tail() {
        let mut snake = line();
        snake.step_move(Direction::Right, 10, BOARD);
        snake.grow(Direction::Right, 10);

        assert_eq!(snake.body_len(), 4);
        assert_eq!(snake.tail(), Point::new(100, 100));
    }

    #[test]
    fn bitten() {
        let points = [
            Point::new(10, 10),
            Point::new(20, 10),
            Point::new(20, 20),
            Point::new(10, 20),
            Point::new(0, 20),
        ];
        let mut snake = Snake::new(&points, Direction::Left).unwrap();
        assert!(!snake.bitten());

        snake.step_move(Direction::Down, 10, BOARD);
        assert!(snake.bitten());
    }

    #[test]
    fn reverse_turn_rejected() {
        for d in Direction::ALL {
            let steering = Steering::new(Direction::Right);
            if steering.turn(d) {
                assert!(!steering.turn(-d));
                assert_eq!(steering.heading(), d);
            } else {
                assert_eq!(d, Direction::Left);
                assert_eq!(steering.heading(), Direction::Right);
            }
        }
    }

    #[test]
    fn turn_is_idempotent() {
        let steering = Steering::new(Direction::Up);
        assert!(steering.turn(Direction::Left));
        assert!(steering.turn(Direction::Left));
        assert_eq!(steering.heading(), Direction::Left);
    }

    #[test]
    fn steering_shared_across_threads() {
        let snake = line();
        let steering = snake.steering();

        thread::spawn(move || {
            steering.turn(Direction::Down);
            steering.turn(Direction::Up);
        })
        .join()
        .unwrap();

        assert_eq!(snake.heading(), Direction::Down);
    }
}
