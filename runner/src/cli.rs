//! Command line interface.

use clap::{App, Arg, ArgMatches};
use game::{aux::BoardSize, Settings, SpawnPolicy};

/// Options the game is run with.
#[derive(Debug, Clone)]
pub struct Options {
	pub settings: Settings,

	/// Seed of the apple placement generator.
	pub seed: u64,

	/// Stop after this many ticks even if the snake is alive.
	pub ticks: Option<u64>,

	/// Print a json snapshot to stdout after every tick.
	pub json: bool,

	/// Log level overriding the environment.
	pub log_level: Option<&'static str>,
}

pub fn app() -> App<'static, 'static> {
	App::new("Snake")
		.about("Headless snake game. Reads key names (up, down, left, right, esc, q) from stdin, one per line")
		.arg(
			Arg::with_name("board")
				.short("b")
				.long("board")
				.value_name("SIZE")
				.takes_value(true)
				.help("Board size as WIDTHxHEIGHT. Default is 500x500"),
		)
		.arg(
			Arg::with_name("delay")
				.short("d")
				.long("delay")
				.value_name("DURATION")
				.takes_value(true)
				.help("Delay between ticks, like 100ms or 1s. Default is 100ms"),
		)
		.arg(
			Arg::with_name("seed")
				.short("s")
				.long("seed")
				.value_name("NUMBER")
				.takes_value(true)
				.help("Seed for apple placement. Random by default"),
		)
		.arg(
			Arg::with_name("ticks")
				.short("t")
				.long("ticks")
				.value_name("NUMBER")
				.takes_value(true)
				.help("Stop after this many ticks"),
		)
		.arg(
			Arg::with_name("spawn")
				.long("spawn")
				.value_name("POLICY")
				.takes_value(true)
				.possible_values(&SpawnPolicy::NAMES)
				.help("When new apples appear. Default is every-tick"),
		)
		.arg(
			Arg::with_name("grow_per_apple")
				.long("grow-per-apple")
				.help("Grow and score once per apple when several are eaten in one tick"),
		)
		.arg(
			Arg::with_name("json")
				.short("j")
				.long("json")
				.help("Print a json snapshot after every tick"),
		)
		.arg(
			Arg::with_name("verbose")
				.short("v")
				.long("verbose")
				.conflicts_with("quiet")
				.help("Log everything"),
		)
		.arg(
			Arg::with_name("quiet")
				.short("q")
				.long("quiet")
				.help("Log only warnings and errors"),
		)
}

/// Build [`Options`] from parsed arguments.
pub fn options(matches: &ArgMatches) -> game::Result<Options> {
	let mut settings = Settings::default();

	if let Some(board) = matches.value_of("board") {
		settings.board = board.parse::<BoardSize>()?;
	}
	if let Some(delay) = matches.value_of("delay") {
		settings.delay = delay.parse::<humantime::Duration>()?.into();
	}
	if let Some(spawn) = matches.value_of("spawn") {
		settings.spawn = SpawnPolicy::from_name(spawn).unwrap_or_default();
	}
	settings.grow_per_apple = matches.is_present("grow_per_apple");

	let seed = match matches.value_of("seed") {
		Some(val) => val.parse::<u64>()?,
		None => rand::random(),
	};
	let ticks = match matches.value_of("ticks") {
		Some(val) => Some(val.parse::<u64>()?),
		None => None,
	};

	let log_level = if matches.is_present("verbose") {
		Some("trace")
	} else if matches.is_present("quiet") {
		Some("warn")
	} else {
		None
	};

	Ok(Options {
		settings,
		seed,
		ticks,
		json: matches.is_present("json"),
		log_level,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::time::Duration;

	fn parse(args: &[&str]) -> game::Result<Options> {
		let matches = app().get_matches_from_safe(std::iter::once("snake").chain(args.iter().copied()))?;
		options(&matches)
	}

	#[test]
	fn defaults() -> game::Result<()> {
		let opts = parse(&[])?;

		assert_eq!(opts.settings, Settings::default());
		assert_eq!(opts.ticks, None);
		assert!(!opts.json);
		assert_eq!(opts.log_level, None);
		Ok(())
	}

	#[test]
	fn all_flags() -> game::Result<()> {
		let opts = parse(&[
			"--board", "300x200",
			"--delay", "250ms",
			"--seed", "17",
			"--ticks", "40",
			"--spawn", "after-meal",
			"--grow-per-apple",
			"--json",
			"-v",
		])?;

		assert_eq!(opts.settings.board, BoardSize::new(300, 200));
		assert_eq!(opts.settings.delay, Duration::from_millis(250));
		assert_eq!(opts.settings.spawn, SpawnPolicy::AfterMeal);
		assert!(opts.settings.grow_per_apple);
		assert_eq!(opts.seed, 17);
		assert_eq!(opts.ticks, Some(40));
		assert!(opts.json);
		assert_eq!(opts.log_level, Some("trace"));
		Ok(())
	}

	#[test]
	fn bad_values() {
		assert!(parse(&["--board", "300"]).is_err());
		assert!(parse(&["--delay", "soon"]).is_err());
		assert!(parse(&["--seed", "-1"]).is_err());
		assert!(parse(&["--spawn", "never"]).is_err());
		assert!(parse(&["-v", "-q"]).is_err());
	}
}
