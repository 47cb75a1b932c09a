use std::fmt::{Debug, Display, Result, Formatter};
use crate::position::{Axis, Dir, AXES};

/// A cell coordinate in the 4D grid, stored as `[t, z, y, x]`.
///
/// Components are signed so that a probe one step past the edge of the grid is still
/// representable; use [`GridPosition::is_within_bounds`] before resolving such a probe.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct GridPosition([i32; AXES]);

impl GridPosition {
	pub fn new(t: i32, z: i32, y: i32, x: i32) -> Self {
		GridPosition([t, z, y, x])
	}

	/// Creates a GridPosition from a linear index, the inverse of [`GridPosition::index`].
	/// ### Out of bounds behavior
	/// If the index is `size^4` or greater, the T component is out of bounds.
	pub fn from_index(index: usize, size: usize) -> Self {
		let x = index % size;
		let y = (index / size) % size;
		let z = (index / (size * size)) % size;
		let t = index / (size * size * size);

		GridPosition([t as i32, z as i32, y as i32, x as i32])
	}

	// Component access

	pub fn t(&self) -> i32 {
		self.0[0]
	}

	pub fn z(&self) -> i32 {
		self.0[1]
	}

	pub fn y(&self) -> i32 {
		self.0[2]
	}

	pub fn x(&self) -> i32 {
		self.0[3]
	}

	/// Returns the component along the given axis.
	pub fn get(&self, axis: Axis) -> i32 {
		self.0[axis.index()]
	}

	pub fn coords(&self) -> [i32; AXES] {
		self.0
	}

	/// Returns the linear index `x + y*size + z*size^2 + t*size^3`.
	/// ### Out of bounds behavior
	/// No bounds checking is performed. The result for an out of bounds position is
	/// meaningless and must not be used to index cell storage.
	pub fn index(&self, size: usize) -> usize {
		let size = size as i64;
		let [t, z, y, x] = self.0;

		(x as i64 + size * (y as i64 + size * (z as i64 + size * t as i64))) as usize
	}

	/// Returns true if every component lies in `[0, size)`.
	pub fn is_within_bounds(&self, size: usize) -> bool {
		self.0.iter().all(|&c| c >= 0 && (c as i64) < size as i64)
	}

	/// Returns the position one step away along `axis`. The result may be out of bounds.
	pub fn neighbor(self, axis: Axis, dir: Dir) -> Self {
		let mut coords = self.0;
		coords[axis.index()] += dir.offset();

		GridPosition(coords)
	}

	/// Returns the neighbor along `axis`, or None if it falls outside a grid of `size`.
	pub fn offset(self, axis: Axis, dir: Dir, size: usize) -> Option<Self> {
		let neighbor = self.neighbor(axis, dir);

		if neighbor.is_within_bounds(size) {
			Some(neighbor)
		} else {
			None
		}
	}

	/// Iterates every position of a grid of `size` in linear index order.
	pub fn enumerate(size: usize) -> Enumerate {
		let max = size.checked_pow(AXES as u32).unwrap_or(usize::MAX);

		Enumerate { size, index: 0, max }
	}
}

impl Display for GridPosition {
	fn fmt(&self, f: &mut Formatter) -> Result {
		write!(f, "({}, {}, {}, {})", self.t(), self.z(), self.y(), self.x())
	}
}

impl Debug for GridPosition {
	fn fmt(&self, f: &mut Formatter) -> Result {
		write!(f, "GridPosition {{ t: {}, z: {}, y: {}, x: {} }}", self.t(), self.z(), self.y(), self.x())
	}
}

pub struct Enumerate {
	size: usize,
	index: usize,
	max: usize
}

impl Iterator for Enumerate {
	type Item = GridPosition;

	fn next(&mut self) -> Option<GridPosition> {
		if self.index >= self.max {
			return None;
		}

		let position = GridPosition::from_index(self.index, self.size);
		self.index += 1;

		Some(position)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let remaining = self.max - self.index;

		(remaining, Some(remaining))
	}
}

impl ExactSizeIterator for Enumerate {}
