//! Snake game abstractions crate.
//!
//! [`GameState`] owns a [`Snake`](snake::Snake) and a set of
//! [`Apples`](apple::Apples) and advances them one [`tick`](GameState::tick)
//! at a time. Any number of [`Steering`](snake::Steering) handles may turn the
//! snake between ticks from other threads. [`Ticker`](schedule::Ticker) calls
//! the tick at a fixed period until the game ends.

pub mod apple;
pub mod aux;
pub mod error;
pub mod schedule;
pub mod snake;

/// This is an alias for standart [`Result`](std::result::Result) type which
/// represents failure.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Common reexports in one place.
pub mod prelude {
	pub use crate::{
		apple::Apples,
		aux::*,
		schedule::{CancelHandle, Ticker},
		snake::Steering,
		GameState, Settings, Snapshot, SpawnPolicy,
	};
}

use apple::Apples;
use aux::{BoardSize, Direction, Point};
use error::GameError;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use snake::{Snake, Steering};
use std::{fmt, time::Duration};

/// Game state: the snake, apples, score and whether the snake is still alive.
///
/// `R` is the random number generator used to place apples. Pass a seeded one
/// to get a reproducible game.
#[derive(Debug)]
pub struct GameState<R = StdRng> {
	snake: Snake,
	apples: Apples,
	score: usize,
	alive: bool,
	settings: Settings,
	rng: R,
}

impl GameState<StdRng> {
	/// Return a new [`GameState`] with apples placed by [`StdRng`] seeded with
	/// `seed`.
	pub fn seeded(settings: Settings, seed: u64) -> Result<Self> {
		Self::new(settings, StdRng::seed_from_u64(seed))
	}
}

impl<R: Rng> GameState<R> {
	/// Return a new [`GameState`] with the initial snake from `settings` and
	/// one apple at a random point.
	pub fn new(settings: Settings, mut rng: R) -> Result<Self> {
		settings.validate()?;
		let apples = Apples::random(settings.board, &mut rng);
		Self::with_apples(settings, apples, rng)
	}

	/// Return a new [`GameState`] with the initial snake from `settings` and
	/// provided `apples`.
	pub fn with_apples(settings: Settings, apples: Apples, rng: R) -> Result<Self> {
		settings.validate()?;
		let snake = Snake::new(&settings.snake, settings.direction)
			.ok_or(GameError::ShortSnake(0))?;

		log::debug!(
			"new game on {} board, snake at {} heading {}",
			settings.board,
			snake.head(),
			snake.heading()
		);

		Ok(Self {
			snake,
			apples,
			score: 0,
			alive: true,
			settings,
			rng,
		})
	}

	/// Turn the snake to `direction` unless it's the reverse of the current
	/// heading or the game is over.
	///
	/// Return `true` if the snake is heading to `direction` afterwards.
	pub fn turn(&self, direction: Direction) -> bool {
		self.alive && self.snake.steering().turn(direction)
	}

	/// Advance the game by one step and return its state afterwards.
	///
	/// The snake moves one step along its heading, eats apples close to its new
	/// head and grows, new apples may be spawned, and the snake dies if its head
	/// hits its body. Ticks after death change nothing.
	pub fn tick(&mut self) -> Snapshot {
		if !self.alive {
			return self.snapshot();
		}

		let Settings {
			board,
			step,
			hit_range,
			apple_limit,
			max_new_apples,
			spawn,
			grow_per_apple,
			..
		} = self.settings;

		let heading = self.snake.heading();
		self.snake.step_move(heading, step, board);

		let eaten = self.apples.eat(self.snake.head(), hit_range);
		if eaten > 0 {
			let meals = if grow_per_apple { eaten } else { 1 };
			for _ in 0..meals {
				self.snake.grow(heading, step);
			}
			self.score += meals;
			log::debug!(
				"{} apple(s) eaten at {}, score is {}",
				eaten,
				self.snake.head(),
				self.score
			);
		}

		let spawn_now = match spawn {
			SpawnPolicy::EveryTick => true,
			SpawnPolicy::AfterMeal => eaten > 0,
		};
		if spawn_now {
			let added = self
				.apples
				.grow(board, apple_limit, max_new_apples, &mut self.rng);
			if added > 0 {
				log::trace!("{} apple(s) spawned, {} on board", added, self.apples.len());
			}
		}

		if self.snake.bitten() {
			self.alive = false;
			log::info!(
				"snake bit itself at {}, final score is {}",
				self.snake.head(),
				self.score
			);
		}

		self.snapshot()
	}

	/// Return a copy of the current state for rendering.
	pub fn snapshot(&self) -> Snapshot {
		Snapshot {
			head: self.snake.head(),
			body: self.snake.body().collect(),
			apples: self.apples.iter().collect(),
			heading: self.snake.heading(),
			alive: self.alive,
			score: self.score,
		}
	}

	/// Return `true` if the snake has bitten itself.
	pub fn is_dead(&self) -> bool {
		!self.alive
	}

	/// Return current score.
	pub fn score(&self) -> usize {
		self.score
	}

	/// Return the snake.
	pub fn snake(&self) -> &Snake {
		&self.snake
	}

	/// Return handle which turns the snake from other threads.
	pub fn steering(&self) -> Steering {
		self.snake.steering()
	}

	/// Return game [`settings`](Settings).
	pub fn settings(&self) -> &Settings {
		&self.settings
	}
}

/// When new apples are spawned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpawnPolicy {
	/// Spawn after every tick.
	EveryTick,

	/// Spawn only after ticks in which the snake ate.
	AfterMeal,
}

impl SpawnPolicy {
	/// Names accepted by [`from_name`](Self::from_name).
	pub const NAMES: [&'static str; 2] = ["every-tick", "after-meal"];

	/// Return a policy by its kebab-case name.
	pub fn from_name(name: &str) -> Option<Self> {
		match name {
			"every-tick" => Some(Self::EveryTick),
			"after-meal" => Some(Self::AfterMeal),
			_ => None,
		}
	}
}

impl Default for SpawnPolicy {
	fn default() -> Self {
		Self::EveryTick
	}
}

/// Game settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
	/// Board size. Heads which went past the right or bottom edge are moved
	/// to zero on that axis.
	pub board: BoardSize,

	/// How many points the snake goes per tick.
	pub step: i32,

	/// Apple is eaten if it's closer than this to the head on both axes.
	pub hit_range: i32,

	/// New apples are spawned only while there are no more than this amount of
	/// apples. There are never more than `apple_limit + 1` apples.
	pub apple_limit: usize,

	/// Maximum number of apples spawned at once.
	pub max_new_apples: usize,

	/// Initial snake points, head first.
	pub snake: Vec<Point>,

	/// Initial snake heading.
	pub direction: Direction,

	/// Delay between ticks.
	pub delay: Duration,

	/// When new apples are spawned.
	pub spawn: SpawnPolicy,

	/// If `true`, the snake grows and scores once per apple eaten. Otherwise
	/// once per tick in which it ate, however many apples it swallowed.
	pub grow_per_apple: bool,
}

impl Settings {
	/// Default board size.
	pub const BOARD: BoardSize = BoardSize::new(500, 500);

	/// Default snake step.
	pub const STEP: i32 = 10;

	/// Default apple hit range.
	pub const HIT_RANGE: i32 = 10;

	/// Default apple limit.
	pub const APPLE_LIMIT: usize = 10;

	/// Default maximum number of apples spawned at once.
	pub const MAX_NEW_APPLES: usize = 3;

	/// Default initial snake, a horizontal line with the head on the right.
	pub const SNAKE: [Point; 4] = [
		Point::new(130, 100),
		Point::new(120, 100),
		Point::new(110, 100),
		Point::new(100, 100),
	];

	/// Default initial snake heading.
	pub const DIRECTION: Direction = Direction::Right;

	/// Default delay between ticks.
	pub const DELAY: Duration = Duration::from_millis(100);

	/// Check that a game can be started with these settings.
	pub fn validate(&self) -> std::result::Result<(), GameError> {
		if self.board.width <= 0 || self.board.height <= 0 {
			return Err(GameError::EmptyBoard(self.board));
		}
		if self.step <= 0 {
			return Err(GameError::ZeroStep(self.step));
		}
		if self.hit_range <= 0 {
			return Err(GameError::InvalidHitRange(self.hit_range));
		}
		if self.snake.len() < 2 {
			return Err(GameError::ShortSnake(self.snake.len()));
		}
		for pair in self.snake.windows(2) {
			let d = pair[0] - pair[1];
			let one_step = (d.x.abs() == self.step && d.y == 0)
				|| (d.x == 0 && d.y.abs() == self.step);
			if !one_step {
				return Err(GameError::DisjointSnake(pair[0], pair[1]));
			}
		}
		Ok(())
	}
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			board: Self::BOARD,
			step: Self::STEP,
			hit_range: Self::HIT_RANGE,
			apple_limit: Self::APPLE_LIMIT,
			max_new_apples: Self::MAX_NEW_APPLES,
			snake: Self::SNAKE.to_vec(),
			direction: Self::DIRECTION,
			delay: Self::DELAY,
			spawn: SpawnPolicy::default(),
			grow_per_apple: false,
		}
	}
}

/// Read-only copy of the game state taken after a tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Snapshot {
	pub head: Point,

	/// Body segments from the neck to the tail.
	pub body: Vec<Point>,

	pub apples: Vec<Point>,
	pub heading: Direction,
	pub alive: bool,
	pub score: usize,
}

impl Snapshot {
	/// Convert [`Snapshot`] to a json string.
	pub fn to_json(&self) -> Result<String> {
		Ok(serde_json::to_string(self)?)
	}

	/// Convert json string to [`Snapshot`].
	pub fn from_json<T: AsRef<str>>(string: T) -> Result<Self> {
		Ok(serde_json::from_str(string.as_ref())?)
	}
}

impl fmt::Display for Snapshot {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let state = if self.alive { "alive" } else { "dead" };
		writeln!(
			f,
			"snake is {} with score {}, heading {}",
			state, self.score, self.heading
		)?;
		writeln!(f, "head at {}", self.head)?;
		for (i, part) in self.body.iter().enumerate() {
			writeln!(f, "body[{}] at {}", i, part)?;
		}
		for (i, apple) in self.apples.iter().enumerate() {
			writeln!(f, "apple[{}] at {}", i, apple)?;
		}
		Ok(())
	}
}
