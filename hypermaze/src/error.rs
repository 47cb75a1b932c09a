use std::fmt::{self, Display, Formatter};
use std::error;

use crate::position::AXES;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
	/// A grid side length of zero was requested.
	ZeroSize,
	/// `size^4` does not fit in the range of a random draw.
	TooLarge(usize),
	/// A wall byte stream did not hold one byte per cell.
	Length { expected: usize, actual: usize },
	/// A finished maze failed verification.
	Verify(String)
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		match *self {
			Error::ZeroSize => write!(f, "grid size must be at least 1"),
			Error::TooLarge(size) => write!(f, "grid size {} is too large: {}^4 cells exceeds {}", size, size, i32::MAX),
			Error::Length { expected, actual } => write!(f, "expected {} wall bytes, found {}", expected, actual),
			Error::Verify(ref reason) => write!(f, "maze verification failed: {}", reason)
		}
	}
}

impl error::Error for Error {}

/// Validates a grid side length and returns the number of cells, `size^4`.
///
/// The cell count is capped at `i32::MAX` so that every cell index is a valid bound
/// for a Java-compatible random draw.
pub fn cell_count(size: usize) -> Result<usize, Error> {
	if size == 0 {
		return Err(Error::ZeroSize);
	}

	size.checked_pow(AXES as u32)
		.filter(|&max| max <= i32::MAX as usize)
		.ok_or(Error::TooLarge(size))
}
