use java_rand::Random;

/// A source of uniformly distributed integers, the only input the generator consumes.
pub trait RandomSource {
	/// Returns a value uniformly distributed over `0..bound`. `bound` is never zero.
	fn next_bounded(&mut self, bound: u32) -> u32;
}

/// Draws exactly as `java.util.Random::nextInt(bound)` does for the same seed.
impl RandomSource for Random {
	fn next_bounded(&mut self, bound: u32) -> u32 {
		self.next_u32_bound(bound)
	}
}

impl<'a, R: RandomSource + ?Sized> RandomSource for &'a mut R {
	fn next_bounded(&mut self, bound: u32) -> u32 {
		(**self).next_bounded(bound)
	}
}

/// Replays a fixed list of draws, for reproducing a generation step by step.
///
/// Each stored draw is reduced modulo the requested bound.
/// ### Panics
/// Panics when more draws are requested than were provided.
#[derive(Debug, Clone)]
pub struct Sequence {
	draws: Vec<u32>,
	cursor: usize
}

impl Sequence {
	pub fn new(draws: Vec<u32>) -> Self {
		Sequence { draws, cursor: 0 }
	}

	/// Returns the number of draws not yet consumed.
	pub fn remaining(&self) -> usize {
		self.draws.len() - self.cursor
	}
}

impl RandomSource for Sequence {
	fn next_bounded(&mut self, bound: u32) -> u32 {
		let draw = match self.draws.get(self.cursor) {
			Some(&draw) => draw,
			None => panic!("random sequence exhausted after {} draws", self.cursor)
		};

		self.cursor += 1;

		draw % bound
	}
}

#[cfg(test)]
mod test {
	use java_rand::Random;
	use crate::random::{RandomSource, Sequence};

	#[test]
	fn test_sequence_replay() {
		let mut sequence = Sequence::new(vec![3, 1, 7]);

		assert_eq!(sequence.next_bounded(4), 3);
		assert_eq!(sequence.next_bounded(2), 1);
		assert_eq!(sequence.next_bounded(4), 3);
		assert_eq!(sequence.remaining(), 0);
	}

	#[test]
	#[should_panic]
	fn test_sequence_exhausted() {
		let mut sequence = Sequence::new(vec![0]);

		sequence.next_bounded(2);
		sequence.next_bounded(2);
	}

	#[test]
	fn test_java_bounded() {
		let mut a = Random::new(8399452073110208023);
		let mut b = Random::new(8399452073110208023);

		for bound in 1..200 {
			let draw = a.next_bounded(bound);

			assert!(draw < bound, "Draw {} exceeds bound {}", draw, bound);
			assert_eq!(draw, b.next_bounded(bound), "Identically seeded sources diverged");
		}
	}
}
