#![forbid(unsafe_code)]

//! # `hypermaze`: perfect mazes on a 4D grid
//!
//! Generates a maze over a hypercubic grid of `size^4` cells, `size` cells along each of
//! the T, Z, Y, and X axes. Every cell starts fully enclosed by 8 walls, two per axis.
//! Walls are then knocked down at random, Kruskal style: a wall only comes down if the
//! cells on either side are not yet connected, which is tracked by a disjoint-set forest
//! with union by rank and path compression. Generation stops once a single set remains,
//! leaving exactly one path between any two cells.
//!
//! The result is a [`Maze`](maze::Maze): one wall bitmask byte per cell, in linear index
//! order (T outermost, X innermost). See [`wall_bit`](walls::wall_bit) for the bit layout.
//!
//! Generation is fully determined by the random draws it consumes. With
//! [`java_rand::Random`] as the source, a given seed produces the same maze as
//! `java.util.Random` does with that seed.
//!
//! ```
//! use hypermaze::java_rand::Random;
//!
//! let (maze, stats) = hypermaze::generate(3, &mut Random::new(42)).unwrap();
//!
//! assert_eq!(maze.len(), 81);
//! assert_eq!(stats.merges, 80);
//! assert!(maze.verify().is_ok());
//! ```

// Bit sets for reachability checks
extern crate bit_vec;

// Java compatible LCG, the default random source
pub extern crate java_rand;

#[macro_use]
extern crate log;

/// Coordinates and linear indexing within the grid.
pub mod position;

/// The per-cell wall bitmask.
pub mod walls;

pub mod forest;
pub mod random;
pub mod builder;
pub mod maze;
pub mod error;

pub use crate::builder::{MazeBuilder, GenerationStats};
pub use crate::error::Error;
pub use crate::maze::Maze;
pub use crate::random::RandomSource;

/// Generates a complete maze with a side length of `size`.
pub fn generate<R: RandomSource>(size: usize, rng: &mut R) -> Result<(Maze, GenerationStats), Error> {
	let mut builder = MazeBuilder::new(size)?;
	let stats = builder.generate(rng);

	Ok((builder.into_maze(), stats))
}
