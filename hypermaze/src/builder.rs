use crate::error::Error;
use crate::forest::Forest;
use crate::maze::Maze;
use crate::position::{Axis, Dir, AXES};
use crate::random::RandomSource;
use crate::walls::wall_bit;

/// Counters describing one generation run.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct GenerationStats {
	/// Walls knocked down. Always `size^4 - 1` once generation completes.
	pub merges: usize,
	/// Union attempts, including those between already connected cells.
	pub attempts: usize,
	/// Neighbor probes that fell outside the grid and were redrawn.
	pub rejected_probes: usize
}

/// Randomized Kruskal maze generator over a `size^4` grid.
pub struct MazeBuilder {
	size: usize,
	forest: Forest,
	attempts: usize,
	rejected_probes: usize
}

impl MazeBuilder {
	/// Validates `size` and allocates a grid of fully enclosed, disconnected cells.
	pub fn new(size: usize) -> Result<Self, Error> {
		let forest = Forest::new(size)?;

		Ok(MazeBuilder { size, forest, attempts: 0, rejected_probes: 0 })
	}

	pub fn size(&self) -> usize {
		self.size
	}

	pub fn forest(&self) -> &Forest {
		&self.forest
	}

	pub fn stats(&self) -> GenerationStats {
		GenerationStats {
			merges: self.forest.merges(),
			attempts: self.attempts,
			rejected_probes: self.rejected_probes
		}
	}

	/// Returns true once every cell belongs to a single set.
	pub fn is_complete(&self) -> bool {
		self.forest.roots() == 1
	}

	/// Makes a single attempt at knocking down a random wall.
	///
	/// Draws a cell, then draws an axis and direction until the neighbor across that wall
	/// is inside the grid, and tries to join the two. Returns true if a wall came down.
	/// Does nothing once the maze is complete.
	pub fn step<R: RandomSource>(&mut self, rng: &mut R) -> bool {
		if self.is_complete() {
			return false;
		}

		let p = rng.next_bounded(self.forest.len() as u32) as usize;
		let origin = self.forest.cell(p).position();

		let (axis, dir, target) = loop {
			let axis = Axis::from_draw(rng.next_bounded(AXES as u32));
			let dir = Dir::from_draw(rng.next_bounded(2));
			let probe = origin.neighbor(axis, dir);

			if probe.is_within_bounds(self.size) {
				break (axis, dir, probe);
			}

			self.rejected_probes += 1;
		};

		let q = target.index(self.size);
		assert_eq!(self.forest.cell(q).position(), target, "probe index {} resolved to the wrong cell", q);

		self.attempts += 1;

		let merged = self.forest.union(p, q, wall_bit(axis, dir), wall_bit(axis, dir.opposite()));

		if merged {
			trace!("Opened {} -> {} along {:?} {:?}, {} sets remain", origin, target, axis, dir, self.forest.roots());
		}

		merged
	}

	/// Knocks down walls until every cell is connected.
	pub fn generate<R: RandomSource>(&mut self, rng: &mut R) -> GenerationStats {
		while !self.is_complete() {
			self.step(rng);
		}

		debug!(
			"Generated {} cell maze: {} merges in {} attempts, {} probes rejected",
			self.forest.len(),
			self.forest.merges(),
			self.attempts,
			self.rejected_probes
		);

		self.stats()
	}

	/// Reads out the current walls of every cell in linear index order.
	pub fn maze(&self) -> Maze {
		let walls = self.forest.cells().iter().map(|cell| cell.walls()).collect();

		Maze::from_walls(self.size, walls)
	}

	pub fn into_maze(self) -> Maze {
		self.maze()
	}
}

#[cfg(test)]
mod test {
	use java_rand::Random;
	use crate::builder::MazeBuilder;
	use crate::error::Error;
	use crate::position::GridPosition;
	use crate::random::Sequence;
	use crate::walls::Walls;

	#[test]
	fn test_invalid_size() {
		assert_eq!(MazeBuilder::new(0).err(), Some(Error::ZeroSize));
		assert_eq!(MazeBuilder::new(1000).err(), Some(Error::TooLarge(1000)));
	}

	#[test]
	fn test_single_cell() {
		let mut builder = MazeBuilder::new(1).unwrap();

		// An empty sequence panics if any draw is made.
		let stats = builder.generate(&mut Sequence::new(Vec::new()));

		assert_eq!(stats.merges, 0);
		assert_eq!(stats.attempts, 0);
		assert_eq!(builder.maze().as_bytes(), &[0xFF]);
	}

	#[test]
	fn test_scripted_steps() {
		let mut builder = MazeBuilder::new(2).unwrap();

		// Cell 0, X axis, plus direction: joins cell 0 with cell 1.
		assert!(builder.step(&mut Sequence::new(vec![0, 3, 1])));
		assert_eq!(builder.forest().cell(0).walls().bits(), 0xFE);
		assert_eq!(builder.forest().cell(1).walls().bits(), 0xFD);
		assert_eq!(builder.forest().roots(), 15);

		// Cell 1, X axis, minus direction: back to cell 0, already connected.
		assert!(!builder.step(&mut Sequence::new(vec![1, 3, 0])));
		assert_eq!(builder.forest().cell(0).walls().bits(), 0xFE);
		assert_eq!(builder.forest().cell(1).walls().bits(), 0xFD);
		assert_eq!(builder.forest().roots(), 15);

		// Cell 0, T axis minus is outside the grid and is redrawn as T axis plus: joins cell 8.
		let mut sequence = Sequence::new(vec![0, 0, 0, 0, 1]);
		assert!(builder.step(&mut sequence));
		assert_eq!(sequence.remaining(), 0);
		assert_eq!(builder.forest().cell(0).walls().bits(), 0xBE);
		assert_eq!(builder.forest().cell(8).walls().bits(), 0x7F);
		assert_eq!(builder.forest().cell(8).position(), GridPosition::new(1, 0, 0, 0));

		let stats = builder.stats();

		assert_eq!(stats.merges, 2);
		assert_eq!(stats.merges, builder.forest().merges());
		assert_eq!(stats.attempts, 3);
		assert_eq!(stats.rejected_probes, 1);
	}

	#[test]
	fn test_merge_clears_single_bits() {
		let mut builder = MazeBuilder::new(3).unwrap();
		let mut rng = Random::new(1234);

		while !builder.is_complete() {
			let before: Vec<Walls> = builder.forest().cells().iter().map(|cell| cell.walls()).collect();
			let roots = builder.forest().roots();

			let merged = builder.step(&mut rng);

			let changed: Vec<(Walls, Walls)> = builder.forest().cells().iter()
				.zip(before.iter())
				.map(|(cell, &old)| (old, cell.walls()))
				.filter(|&(old, new)| old != new)
				.collect();

			if merged {
				assert_eq!(builder.forest().roots(), roots - 1);
				assert_eq!(changed.len(), 2, "A merge must change exactly two cells");

				for &(old, new) in &changed {
					assert_eq!((old.bits() ^ new.bits()).count_ones(), 1, "{:?} -> {:?} is not a single bit", old, new);
					assert_eq!(old.bits() & new.bits(), new.bits(), "{:?} -> {:?} raised a wall", old, new);
				}
			} else {
				assert_eq!(builder.forest().roots(), roots);
				assert!(changed.is_empty(), "A rejected union changed walls");
			}
		}
	}

	#[test]
	fn test_generate_spans() {
		for size in 1..5 {
			let mut builder = MazeBuilder::new(size).unwrap();
			let stats = builder.generate(&mut Random::new(size as u64));
			let len = builder.forest().len();

			assert_eq!(builder.forest().roots(), 1);
			assert_eq!(stats.merges, len - 1, "Wrong merge count for size {}", size);
			assert_eq!(builder.forest().merges(), len - 1);
			assert!(stats.attempts >= stats.merges);

			let root = builder.forest().find_immutable(0);

			for index in 0..len {
				assert_eq!(builder.forest().find_immutable(index), root, "Cell {} is disconnected for size {}", index, size);
			}
		}
	}

	#[test]
	fn test_step_after_complete() {
		let mut builder = MazeBuilder::new(2).unwrap();
		builder.generate(&mut Random::new(7));

		let stats = builder.stats();

		assert!(!builder.step(&mut Sequence::new(Vec::new())));
		assert_eq!(builder.stats(), stats);
	}
}
