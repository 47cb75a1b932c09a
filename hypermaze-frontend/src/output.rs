use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

use hypermaze::Maze;

use crate::Error;

/// Writes each cell's walls as an 8 character binary string, one cell per line.
pub fn print_maze<W: Write>(out: &mut W, maze: &Maze) -> io::Result<()> {
	for line in maze.binary_strings() {
		writeln!(out, "{}", line)?;
	}

	out.flush()
}

/// Writes the raw wall bytes, one per cell in linear index order.
pub fn write_maze<P: AsRef<Path>>(path: P, maze: &Maze) -> io::Result<()> {
	let mut file = BufWriter::new(File::create(path)?);

	file.write_all(maze.as_bytes())?;
	file.flush()
}

/// Reads back a wall byte file for a grid of the given size.
pub fn read_maze<P: AsRef<Path>>(path: P, size: usize) -> Result<Maze, Error> {
	let mut bytes = Vec::new();
	File::open(path)?.read_to_end(&mut bytes)?;

	Ok(Maze::from_bytes(size, bytes)?)
}
