//! Engine for producing fully-solved 9x9 Sudoku grids.
//!
//! The entry point is [`Maker`], which owns a [`Grid`] and fills it with a
//! randomized depth-first backtracking search. Every row, column, and 3x3
//! box of a finished grid contains each digit 1-9 exactly once, and the
//! candidate order is reshuffled at every search step, so repeated runs land
//! on different solutions.
//!
//! ```
//! use sudoku_maker_core::Maker;
//!
//! let mut maker = Maker::with_seed(42);
//! let grid = maker.generate().expect("an empty grid always has a solution");
//! assert!(grid.is_solved());
//! ```

mod grid;
mod maker;
mod rng;

pub use grid::{Grid, Position};
pub use maker::Maker;
pub use rng::Rng;
