use std::fmt::{Debug, Display, Result, Formatter};
use crate::position::{Axis, Dir};

/// Returns the wall bit facing `dir` along `axis`.
///
/// Each axis owns two adjacent bits, the outermost axis (T) taking the high pair:
///
/// | axis | minus  | plus   |
/// |------|--------|--------|
/// | T    | `0x80` | `0x40` |
/// | Z    | `0x20` | `0x10` |
/// | Y    | `0x08` | `0x04` |
/// | X    | `0x02` | `0x01` |
pub fn wall_bit(axis: Axis, dir: Dir) -> u8 {
	let shift = (3 - axis.index()) * 2;

	match dir {
		Dir::Minus => 0b10 << shift,
		Dir::Plus  => 0b01 << shift
	}
}

/// The walls of a single cell, one bit per (axis, direction). A set bit is a standing wall.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Walls(u8);

impl Walls {
	/// Every wall present.
	pub const ENCLOSED: Walls = Walls(0xFF);

	pub fn from_bits(bits: u8) -> Self {
		Walls(bits)
	}

	pub fn bits(&self) -> u8 {
		self.0
	}

	/// Knocks down the walls in `bit`, leaving the others untouched.
	pub fn clear(&mut self, bit: u8) {
		self.0 &= !bit;
	}

	/// Returns true if the wall facing `dir` along `axis` is still standing.
	pub fn has(&self, axis: Axis, dir: Dir) -> bool {
		self.0 & wall_bit(axis, dir) != 0
	}

	/// Returns the number of walls that have been knocked down.
	pub fn open_count(&self) -> u32 {
		self.0.count_zeros()
	}

	pub fn is_enclosed(&self) -> bool {
		*self == Walls::ENCLOSED
	}
}

impl Default for Walls {
	fn default() -> Self {
		Walls::ENCLOSED
	}
}

/// Formats as an 8 character, zero padded binary string.
impl Display for Walls {
	fn fmt(&self, f: &mut Formatter) -> Result {
		write!(f, "{:08b}", self.0)
	}
}

impl Debug for Walls {
	fn fmt(&self, f: &mut Formatter) -> Result {
		write!(f, "Walls({:08b})", self.0)
	}
}
