use std::collections::VecDeque;
use bit_vec::BitVec;

use crate::error::{cell_count, Error};
use crate::position::{Axis, Dir, GridPosition};
use crate::walls::Walls;

/// A finished maze: one wall bitmask byte per cell, in linear index order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
	size: usize,
	bytes: Vec<u8>
}

impl Maze {
	pub(crate) fn from_walls(size: usize, walls: Vec<Walls>) -> Self {
		Maze { size, bytes: walls.into_iter().map(|walls| walls.bits()).collect() }
	}

	/// Rebuilds a maze from a raw wall byte stream, such as one written by [`Maze::as_bytes`].
	pub fn from_bytes(size: usize, bytes: Vec<u8>) -> Result<Self, Error> {
		let expected = cell_count(size)?;

		if bytes.len() != expected {
			return Err(Error::Length { expected, actual: bytes.len() });
		}

		Ok(Maze { size, bytes })
	}

	pub fn size(&self) -> usize {
		self.size
	}

	/// Number of cells, `size^4`.
	pub fn len(&self) -> usize {
		self.bytes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.bytes.is_empty()
	}

	/// Returns the walls of the cell at `position`.
	/// ### Panics
	/// Panics if `position` lies outside the grid.
	pub fn walls(&self, position: GridPosition) -> Walls {
		assert!(position.is_within_bounds(self.size), "{} is outside a grid of size {}", position, self.size);

		self.walls_at(position.index(self.size))
	}

	pub fn walls_at(&self, index: usize) -> Walls {
		Walls::from_bits(self.bytes[index])
	}

	pub fn as_bytes(&self) -> &[u8] {
		&self.bytes
	}

	pub fn into_bytes(self) -> Vec<u8> {
		self.bytes
	}

	/// Each cell's walls as an 8 character binary string, in linear index order.
	pub fn binary_strings<'a>(&'a self) -> impl Iterator<Item = String> + 'a {
		self.bytes.iter().map(|&bits| Walls::from_bits(bits).to_string())
	}

	/// Returns every open wall between two cells as a pair of linear indices, lower index first.
	pub fn passages(&self) -> Vec<(usize, usize)> {
		let mut passages = Vec::with_capacity(self.len().saturating_sub(1));

		for (index, position) in GridPosition::enumerate(self.size).enumerate() {
			let walls = self.walls_at(index);

			for &axis in Axis::ALL.iter() {
				if walls.has(axis, Dir::Plus) {
					continue;
				}

				if let Some(neighbor) = position.offset(axis, Dir::Plus, self.size) {
					passages.push((index, neighbor.index(self.size)));
				}
			}
		}

		passages
	}

	/// Checks that the walls describe a perfect maze.
	///
	/// Every open wall must lead to a cell inside the grid whose facing wall is also open,
	/// there must be exactly `size^4 - 1` passages, and every cell must be reachable.
	pub fn verify(&self) -> Result<(), Error> {
		for (index, position) in GridPosition::enumerate(self.size).enumerate() {
			let walls = self.walls_at(index);

			for &axis in Axis::ALL.iter() {
				for &dir in Dir::ALL.iter() {
					if walls.has(axis, dir) {
						continue;
					}

					let neighbor = position.offset(axis, dir, self.size)
						.ok_or_else(|| Error::Verify(format!("{} is open toward {:?} {:?} at the edge of the grid", position, axis, dir)))?;

					if self.walls(neighbor).has(axis, dir.opposite()) {
						return Err(Error::Verify(format!("passage from {} to {} is only open on one side", position, neighbor)));
					}
				}
			}
		}

		let passages = self.passages().len();

		if passages != self.len() - 1 {
			return Err(Error::Verify(format!("found {} passages, a spanning tree over {} cells has {}", passages, self.len(), self.len() - 1)));
		}

		let reached = self.reachable(0);

		if reached != self.len() {
			return Err(Error::Verify(format!("only {} of {} cells are reachable", reached, self.len())));
		}

		Ok(())
	}

	/// Counts the cells reachable from `start` through open walls.
	fn reachable(&self, start: usize) -> usize {
		let mut visited = BitVec::from_elem(self.len(), false);
		let mut queue = VecDeque::new();

		visited.set(start, true);
		queue.push_back(start);

		let mut count = 0;

		while let Some(index) = queue.pop_front() {
			count += 1;

			let position = GridPosition::from_index(index, self.size);
			let walls = self.walls_at(index);

			for &axis in Axis::ALL.iter() {
				for &dir in Dir::ALL.iter() {
					if walls.has(axis, dir) {
						continue;
					}

					if let Some(neighbor) = position.offset(axis, dir, self.size) {
						let neighbor = neighbor.index(self.size);

						if !visited[neighbor] {
							visited.set(neighbor, true);
							queue.push_back(neighbor);
						}
					}
				}
			}
		}

		count
	}
}
