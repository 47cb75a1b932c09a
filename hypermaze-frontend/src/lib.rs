extern crate hypermaze;

pub mod output;

use std::fmt::{self, Display, Formatter};
use std::io;

#[derive(Debug)]
pub enum Error {
	Maze(hypermaze::Error),
	Io(io::Error)
}

impl From<hypermaze::Error> for Error {
	fn from(from: hypermaze::Error) -> Self {
		Error::Maze(from)
	}
}

impl From<io::Error> for Error {
	fn from(from: io::Error) -> Self {
		Error::Io(from)
	}
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		match *self {
			Error::Maze(ref e) => write!(f, "{}", e),
			Error::Io(ref e) => write!(f, "I/O error: {}", e)
		}
	}
}

impl std::error::Error for Error {}
