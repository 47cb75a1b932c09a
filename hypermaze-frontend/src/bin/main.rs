extern crate clap;
extern crate env_logger;
extern crate hypermaze;
extern crate hypermaze_frontend;
extern crate java_rand;
#[macro_use]
extern crate log;

use clap::{Arg, App};
use std::io;
use std::process;
use std::str::FromStr;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use java_rand::Random;
use hypermaze::MazeBuilder;
use hypermaze_frontend::output::{print_maze, write_maze};
use hypermaze_frontend::Error;

struct Options {
	size: usize,
	seed: u64,
	print: bool,
	output: Option<String>,
	verify: bool,
	quiet: bool
}

fn parse_seed(seed: &str) -> Option<u64> {
	if seed.starts_with('-') {
		i64::from_str(seed).map(|seed| seed as u64).ok()
	} else {
		u64::from_str(seed).ok()
	}
}

fn validate_seed(seed: String) -> Result<(), String> {
	match parse_seed(&seed) {
		Some(_) => Ok(()),
		None => Err(format!("{} is not a 64-bit integer", seed))
	}
}

fn validate_size(size: String) -> Result<(), String> {
	match size.parse::<usize>() {
		Ok(size) => hypermaze::error::cell_count(size).map(|_| ()).map_err(|e| e.to_string()),
		Err(parse) => Err(parse.to_string())
	}
}

fn clock_seed() -> u64 {
	SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.map(|time| time.as_nanos() as u64)
		.unwrap_or(0)
}

fn seconds_since(start: Instant) -> f64 {
	let time = start.elapsed();

	time.as_secs() as f64 + (time.subsec_nanos() as f64) / 1_000_000_000.0
}

fn main() {
	env_logger::init();

	let matches = App::new("hypermaze")
		.version("0.1.0")
		.about("Generates perfect mazes on a 4D hypercubic grid")
		.arg(Arg::with_name("size")
			.short("s")
			.long("size")
			.value_name("CELLS")
			.help("Sets the number of cells along each of the 4 axes")
			.default_value("5")
			.validator(validate_size)
		)
		.arg(Arg::with_name("seed")
			.long("seed")
			.value_name("SEED")
			.help("Configures the random seed, defaults to one derived from the system clock")
			.takes_value(true)
			.allow_hyphen_values(true)
			.validator(validate_seed)
		)
		.arg(Arg::with_name("print")
			.short("p")
			.long("print")
			.help("Prints the walls of every cell as an 8 digit binary number")
		)
		.arg(Arg::with_name("output")
			.short("o")
			.long("output")
			.value_name("FILE")
			.help("Writes the raw wall bytes, one per cell, to FILE")
			.takes_value(true)
		)
		.arg(Arg::with_name("verify")
			.long("verify")
			.help("Checks that the generated maze is a spanning tree of the grid")
		)
		.arg(Arg::with_name("quiet")
			.short("q")
			.long("quiet")
			.help("Suppresses timing output")
		)
		.get_matches();

	// Both values were checked by their validators.
	let options = Options {
		size: matches.value_of("size").and_then(|value| usize::from_str(value).ok()).unwrap_or(5),
		seed: matches.value_of("seed").and_then(parse_seed).unwrap_or_else(clock_seed),
		print: matches.is_present("print"),
		output: matches.value_of("output").map(str::to_owned),
		verify: matches.is_present("verify"),
		quiet: matches.is_present("quiet")
	};

	if let Err(e) = execute(options) {
		eprintln!("error: {}", e);
		process::exit(1);
	}
}

fn execute(options: Options) -> Result<(), Error> {
	let Options { size, seed, print, output, verify, quiet } = options;

	info!("Generating a {0}x{0}x{0}x{0} maze with a seed of {1}", size, seed);

	let init_start = Instant::now();
	let mut builder = MazeBuilder::new(size)?;
	let init_time = seconds_since(init_start);

	let run_start = Instant::now();
	let stats = builder.generate(&mut Random::new(seed));
	let run_time = seconds_since(run_start);

	if !quiet {
		println!("[=======] Init time: {:.4} s", init_time);
		println!("[=======] Run time: {:.4} s ({} merges, {} attempts)", run_time, stats.merges, stats.attempts);
	}

	let maze = builder.into_maze();

	if verify {
		maze.verify()?;
		info!("Verified {} cells form a spanning tree", maze.len());
	}

	if print || output.is_some() {
		let write_start = Instant::now();

		if print {
			let stdout = io::stdout();
			print_maze(&mut stdout.lock(), &maze)?;
		}

		if let Some(path) = output {
			write_maze(&path, &maze)?;
			info!("Wrote {} wall bytes to {}", maze.len(), path);
		}

		if !quiet {
			println!("[=======] Write time: {:.4} s", seconds_since(write_start));
		}
	}

	Ok(())
}
