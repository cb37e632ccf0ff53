//! Headless snake game runner.
//!
//! Ticks the game at a fixed period and turns the snake by key names read
//! from stdin on a separate thread. `esc` or `q` stops the game.

mod cli;

use cli::Options;
use game::prelude::*;
use logger::{debug, error, info, warn};
use std::{
	io::{self, BufRead, Write},
	ops::ControlFlow,
	process, thread,
};

fn main() {
	let matches = cli::app().get_matches();
	let options = match cli::options(&matches) {
		Ok(options) => options,
		Err(e) => {
			// Logger isn't initialized yet.
			eprintln!("error: {}", e);
			process::exit(2);
		}
	};

	logger::init_logger_with(options.log_level);

	let stdin = io::BufReader::new(io::stdin());
	if let Err(e) = run(options, stdin, io::stdout()) {
		error!("Error while running the game: {}", e);
		process::exit(1);
	}
}

/// Play one game until the snake dies, the tick limit is reached or `input`
/// asks to stop. Return the final score.
fn run<I, W>(options: Options, input: I, mut out: W) -> game::Result<usize>
where
	I: BufRead + Send + 'static,
	W: Write,
{
	info!("starting game with seed {}", options.seed);

	let mut game = GameState::seeded(options.settings, options.seed)?;
	let ticker = Ticker::new(game.settings().delay);

	spawn_input(input, game.steering(), ticker.cancel_handle());

	let mut write_error = None;
	let mut elapsed = 0;
	let ticks = ticker.run(|| {
		let snapshot = game.tick();
		elapsed += 1;
		debug!(
			"head at {}, {} apple(s), score {}",
			snapshot.head,
			snapshot.apples.len(),
			snapshot.score
		);

		if options.json {
			let written = snapshot
				.to_json()
				.and_then(|json| Ok(writeln!(out, "{}", json)?));
			if let Err(e) = written {
				write_error = Some(e);
				return ControlFlow::Break(());
			}
		}

		if !snapshot.alive {
			return ControlFlow::Break(());
		}
		match options.ticks {
			Some(limit) if elapsed >= limit => ControlFlow::Break(()),
			_ => ControlFlow::Continue(()),
		}
	});

	if let Some(e) = write_error {
		return Err(e);
	}

	let score = game.score();
	if game.is_dead() {
		writeln!(out, "Your score is {} !!", score)?;
	} else {
		info!("game stopped after {} ticks with score {}", ticks, score);
	}
	out.flush()?;

	Ok(score)
}

/// Read key names from `input` until it ends or asks to stop the game.
/// Unknown keys are ignored.
fn spawn_input<I>(input: I, steering: Steering, cancel: CancelHandle)
where
	I: BufRead + Send + 'static,
{
	thread::spawn(move || {
		for line in input.lines() {
			let line = match line {
				Ok(line) => line,
				Err(e) => {
					warn!("can't read input: {}", e);
					break;
				}
			};
			if line.trim().is_empty() {
				continue;
			}

			let key = match line.parse::<Key>() {
				Ok(key) => key,
				Err(e) => {
					warn!("ignoring input: {}", e);
					continue;
				}
			};

			match (Direction::from_key(key), key) {
				(Some(direction), _) => {
					steering.turn(direction);
				}
				(None, Key::Escape | Key::Char('q')) => {
					info!("stop requested");
					cancel.cancel();
					break;
				}
				(None, key) => debug!("ignoring {:?} key", key),
			}
		}
	});
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::{io::Cursor, time::Duration};

	fn options(settings: Settings, ticks: Option<u64>) -> Options {
		Options {
			settings: Settings {
				delay: Duration::from_millis(1),
				..settings
			},
			seed: 11,
			ticks,
			json: true,
			log_level: None,
		}
	}

	#[test]
	fn stops_after_tick_limit() -> game::Result<()> {
		let mut out = vec![];
		let score = run(options(Settings::default(), Some(3)), Cursor::new(""), &mut out)?;

		let out = String::from_utf8(out)?;
		let snapshots = out
			.lines()
			.map(Snapshot::from_json)
			.collect::<game::Result<Vec<_>>>()?;

		assert_eq!(snapshots.len(), 3);
		assert!(snapshots.iter().all(|s| s.alive));
		assert_eq!(snapshots[2].score, score);
		Ok(())
	}

	#[test]
	fn quit_key_stops_game() -> game::Result<()> {
		let mut out = vec![];
		let input = Cursor::new("sideways\nup\nq\n");
		run(options(Settings::default(), None), input, &mut out)?;

		assert!(!String::from_utf8(out)?.contains("Your score is"));
		Ok(())
	}

	#[test]
	fn upper_case_quit_key_stops_game() -> game::Result<()> {
		let mut out = vec![];
		run(options(Settings::default(), None), Cursor::new("Q\n"), &mut out)?;

		assert!(!String::from_utf8(out)?.contains("Your score is"));
		Ok(())
	}

	#[test]
	fn death_reports_score() -> game::Result<()> {
		// The head goes past the right edge onto its own tail on the first tick.
		let settings = Settings {
			board: BoardSize::new(20, 20),
			snake: vec![
				Point::new(30, 0),
				Point::new(20, 0),
				Point::new(10, 0),
				Point::new(0, 0),
				Point::new(-10, 0),
			],
			..Settings::default()
		};
		let mut out = vec![];
		run(options(settings, None), Cursor::new(""), &mut out)?;

		let out = String::from_utf8(out)?;
		let mut lines = out.lines();
		let snapshot = Snapshot::from_json(lines.next().unwrap_or_default())?;

		assert!(!snapshot.alive);
		assert_eq!(snapshot.head, Point::new(0, 0));
		assert_eq!(
			lines.next(),
			Some(format!("Your score is {} !!", snapshot.score).as_str())
		);
		Ok(())
	}
}
