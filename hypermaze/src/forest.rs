use crate::error::{cell_count, Error};
use crate::position::GridPosition;
use crate::walls::Walls;

/// One grid cell: its coordinate, its place in the disjoint-set forest, and its walls.
#[derive(Debug, Clone)]
pub struct Cell {
	position: GridPosition,
	parent: usize,
	rank: u8,
	walls: Walls
}

impl Cell {
	pub fn position(&self) -> GridPosition {
		self.position
	}

	/// Index of the parent cell. A root is its own parent.
	pub fn parent(&self) -> usize {
		self.parent
	}

	pub fn rank(&self) -> u8 {
		self.rank
	}

	pub fn walls(&self) -> Walls {
		self.walls
	}
}

/// Disjoint-set forest over every cell of the grid, stored as an arena indexed by the
/// linear cell index. Parent links are indices into the same arena.
#[derive(Debug, Clone)]
pub struct Forest {
	size: usize,
	cells: Vec<Cell>,
	roots: usize,
	merges: usize
}

impl Forest {
	/// Creates a forest of `size^4` singleton sets, each cell fully enclosed.
	pub fn new(size: usize) -> Result<Self, Error> {
		let max = cell_count(size)?;
		let mut cells = Vec::with_capacity(max);

		for (index, position) in GridPosition::enumerate(size).enumerate() {
			assert_eq!(position.index(size), index, "cell {} resolved to mismatching {:?}", index, position);

			cells.push(Cell {
				position,
				parent: index,
				rank: 0,
				walls: Walls::ENCLOSED
			});
		}

		Ok(Forest { size, cells, roots: max, merges: 0 })
	}

	pub fn size(&self) -> usize {
		self.size
	}

	pub fn len(&self) -> usize {
		self.cells.len()
	}

	pub fn is_empty(&self) -> bool {
		self.cells.is_empty()
	}

	/// Number of distinct sets remaining.
	pub fn roots(&self) -> usize {
		self.roots
	}

	/// Number of successful unions performed so far.
	pub fn merges(&self) -> usize {
		self.merges
	}

	pub fn cell(&self, index: usize) -> &Cell {
		&self.cells[index]
	}

	pub fn cells(&self) -> &[Cell] {
		&self.cells
	}

	/// Finds the root of the set containing `index`, pointing every cell on the path
	/// directly at the root.
	pub fn find(&mut self, index: usize) -> usize {
		let mut root = index;

		while self.cells[root].parent != root {
			root = self.cells[root].parent;
		}

		let mut current = index;

		while current != root {
			let next = self.cells[current].parent;
			self.cells[current].parent = root;
			current = next;
		}

		root
	}

	/// Finds the root of `index` without compressing the path.
	#[cfg(test)]
	pub(crate) fn find_immutable(&self, index: usize) -> usize {
		let mut root = index;

		while self.cells[root].parent != root {
			root = self.cells[root].parent;
		}

		root
	}

	#[cfg(test)]
	pub(crate) fn connected(&mut self, a: usize, b: usize) -> bool {
		self.find(a) == self.find(b)
	}

	/// Merges the sets containing `p` and `q`, knocking down `p_bit` on `p` and `q_bit` on `q`.
	///
	/// Returns false and changes nothing if the two cells are already in the same set.
	pub fn union(&mut self, p: usize, q: usize, p_bit: u8, q_bit: u8) -> bool {
		let proot = self.find(p);
		let qroot = self.find(q);

		if proot == qroot {
			return false;
		}

		if self.cells[proot].rank == self.cells[qroot].rank {
			self.cells[proot].rank += 1;
		}

		if self.cells[proot].rank > self.cells[qroot].rank {
			self.cells[qroot].parent = proot;
		} else {
			self.cells[proot].parent = qroot;
		}

		self.roots -= 1;
		self.merges += 1;

		// Walls belong to the cells on either side of the knocked down wall, not their roots.
		self.cells[p].walls.clear(p_bit);
		self.cells[q].walls.clear(q_bit);

		true
	}
}

#[cfg(test)]
mod test {
	use crate::error::Error;
	use crate::forest::Forest;
	use crate::position::{Axis, Dir, GridPosition};
	use crate::walls::{wall_bit, Walls};

	#[test]
	fn test_initial_state() {
		let forest = Forest::new(3).unwrap();

		assert_eq!(forest.len(), 81);
		assert_eq!(forest.roots(), 81);
		assert_eq!(forest.merges(), 0);

		for (index, cell) in forest.cells().iter().enumerate() {
			assert_eq!(cell.parent(), index, "Cell {} is not its own root", index);
			assert_eq!(cell.rank(), 0);
			assert_eq!(cell.walls(), Walls::ENCLOSED);
			assert_eq!(cell.position(), GridPosition::from_index(index, 3));
		}
	}

	#[test]
	fn test_zero_size() {
		assert_eq!(Forest::new(0).unwrap_err(), Error::ZeroSize);
	}

	#[test]
	fn test_union_by_rank() {
		let mut forest = Forest::new(2).unwrap();

		// Equal ranks: the first root gains a rank and adopts the second.
		assert!(forest.union(0, 1, 0x01, 0x02));
		assert_eq!(forest.find(1), 0);
		assert_eq!(forest.cell(0).rank(), 1);
		assert_eq!(forest.cell(1).rank(), 0);

		// Lower rank root goes under the higher rank root, whichever side it is on.
		assert!(forest.union(2, 1, 0x02, 0x01));
		assert_eq!(forest.cell(2).parent(), 0);
		assert_eq!(forest.cell(0).rank(), 1);

		assert_eq!(forest.roots(), 14);
		assert_eq!(forest.merges(), 2);
	}

	#[test]
	fn test_redundant_union() {
		let mut forest = Forest::new(2).unwrap();

		let p_bit = wall_bit(Axis::X, Dir::Plus);
		let q_bit = wall_bit(Axis::X, Dir::Minus);

		assert!(forest.union(0, 1, p_bit, q_bit));

		let before: Vec<Walls> = forest.cells().iter().map(|cell| cell.walls()).collect();

		assert!(!forest.union(1, 0, q_bit, p_bit));
		assert!(!forest.union(0, 1, 0xFF, 0xFF));

		let after: Vec<Walls> = forest.cells().iter().map(|cell| cell.walls()).collect();

		assert_eq!(before, after, "Redundant union modified walls");
		assert_eq!(forest.roots(), 15);
		assert_eq!(forest.merges(), 1);
	}

	#[test]
	fn test_walls_on_cells_not_roots() {
		let mut forest = Forest::new(2).unwrap();

		assert!(forest.union(0, 1, wall_bit(Axis::X, Dir::Plus), wall_bit(Axis::X, Dir::Minus)));
		assert!(forest.union(2, 3, wall_bit(Axis::X, Dir::Plus), wall_bit(Axis::X, Dir::Minus)));

		// Roots are 0 and 2, but the walls between 1 and 3 belong to 1 and 3.
		assert!(forest.union(1, 3, wall_bit(Axis::Y, Dir::Plus), wall_bit(Axis::Y, Dir::Minus)));

		assert_eq!(forest.cell(0).walls().bits(), 0xFE);
		assert_eq!(forest.cell(1).walls().bits(), 0xFD & 0xFB);
		assert_eq!(forest.cell(2).walls().bits(), 0xFE);
		assert_eq!(forest.cell(3).walls().bits(), 0xFD & 0xF7);
	}

	#[test]
	fn test_path_compression() {
		let mut forest = Forest::new(6).unwrap();
		let len = forest.len();

		// A single chain 0 -> 1 -> ... -> len - 1, far deeper than union by rank would build.
		for index in 0..len - 1 {
			forest.cells[index].parent = index + 1;
		}

		assert_eq!(forest.find_immutable(0), len - 1);
		assert_eq!(forest.cell(0).parent(), 1, "find_immutable compressed the path");

		assert_eq!(forest.find(0), len - 1);

		for index in 0..len {
			assert_eq!(forest.cell(index).parent(), len - 1, "Cell {} was not compressed", index);
		}
	}

	#[test]
	fn test_connected() {
		let mut forest = Forest::new(2).unwrap();

		assert!(forest.connected(5, 5));
		assert!(!forest.connected(0, 15));

		forest.union(0, 1, 0, 0);
		forest.union(1, 3, 0, 0);
		forest.union(3, 15, 0, 0);

		assert!(forest.connected(0, 15));
		assert!(!forest.connected(0, 2));
	}
}
