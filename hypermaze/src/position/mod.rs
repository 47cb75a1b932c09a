mod grid;
mod direction;

pub use self::grid::{GridPosition, Enumerate};
pub use self::direction::{Axis, Dir, AXES};
