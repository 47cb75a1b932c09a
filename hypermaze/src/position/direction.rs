/// Number of axes in the grid.
pub const AXES: usize = 4;

/// One of the four grid axes, ordered from the outermost (T) to the innermost (X)
/// component of the linear index.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Axis {
	T,
	Z,
	Y,
	X
}

impl Axis {
	pub const ALL: [Axis; AXES] = [Axis::T, Axis::Z, Axis::Y, Axis::X];

	/// Converts a random draw in `0..4` to an axis.
	/// ### Panics
	/// Panics if the draw is 4 or greater.
	pub fn from_draw(draw: u32) -> Axis {
		Axis::ALL[draw as usize]
	}

	/// Position of this axis in a coordinate tuple, 0 being the outermost.
	pub fn index(self) -> usize {
		match self {
			Axis::T => 0,
			Axis::Z => 1,
			Axis::Y => 2,
			Axis::X => 3
		}
	}
}

/// Direction of travel along an axis.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Dir {
	Minus,
	Plus
}

impl Dir {
	pub const ALL: [Dir; 2] = [Dir::Minus, Dir::Plus];

	/// Converts a random draw in `0..2` to a direction: 0 is Minus, anything else is Plus.
	pub fn from_draw(draw: u32) -> Dir {
		if draw == 0 { Dir::Minus } else { Dir::Plus }
	}

	pub fn opposite(self) -> Dir {
		match self {
			Dir::Minus => Dir::Plus,
			Dir::Plus  => Dir::Minus
		}
	}

	/// The coordinate delta of one step in this direction.
	pub fn offset(self) -> i32 {
		match self {
			Dir::Minus => -1,
			Dir::Plus  =>  1
		}
	}
}
