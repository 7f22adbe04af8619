use crate::grid::Grid;
use crate::rng::Rng;

/// Builds fully-solved Sudoku grids.
///
/// Owns the grid being filled and the randomness driving candidate order.
/// The search is depth-first backtracking: find the first blank cell, try
/// the digits 1-9 in random order, and undo any placement whose subtree
/// cannot be completed. The candidate order is reshuffled at every step, so
/// successive grids from one `Maker` differ.
pub struct Maker {
    grid: Grid,
    rng: Rng,
}

impl Maker {
    /// A maker with an empty grid and OS-seeded randomness.
    pub fn new() -> Self {
        Self {
            grid: Grid::new(),
            rng: Rng::new(),
        }
    }

    /// A maker whose output is reproducible for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            grid: Grid::new(),
            rng: Rng::with_seed(seed),
        }
    }

    /// Start from an existing partial grid instead of an empty one.
    pub fn from_grid(grid: Grid) -> Self {
        Self {
            grid,
            rng: Rng::new(),
        }
    }

    /// The grid in its current state.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Give up the maker and keep the grid.
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Set every cell back to `0`.
    pub fn reset(&mut self) {
        self.grid.reset();
    }

    /// Reset and fill the grid, returning a copy of the finished solution.
    ///
    /// `None` is structurally possible but unreachable from an empty grid;
    /// a solution always exists.
    pub fn generate(&mut self) -> Option<Grid> {
        self.grid.reset();
        if self.solve() {
            Some(self.grid)
        } else {
            None
        }
    }

    /// Fill every remaining blank cell, returning whether the search
    /// succeeded.
    ///
    /// `true` means the grid is complete and valid. `false` means no
    /// completion is reachable from the current contents, and the grid is
    /// left exactly as it was when the call started. From an empty grid the
    /// search always succeeds, but callers that pre-place digits via
    /// [`Maker::from_grid`] can construct dead ends.
    pub fn solve(&mut self) -> bool {
        // Reshuffled on every activation, not once per grid. Which of the
        // valid solutions the search lands on depends on this.
        let candidates = self.rng.digit_permutation();

        let pos = match self.grid.first_blank() {
            Some(pos) => pos,
            None => return true,
        };

        for value in candidates {
            if self.grid.is_valid(pos, value) {
                self.grid.set(pos, value);
                if self.solve() {
                    return true;
                }
                self.grid.clear(pos);
            }
        }

        false
    }
}

impl Default for Maker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Position;
    use std::collections::HashSet;

    #[test]
    fn test_solve_fills_empty_grid() {
        let mut maker = Maker::with_seed(42);
        assert!(maker.solve());
        assert!(maker.grid().is_complete());
        assert!(maker.grid().is_solved());
    }

    #[test]
    fn test_generated_row_holds_every_digit() {
        let mut maker = Maker::with_seed(7);
        let grid = maker.generate().unwrap();
        let mut row: Vec<u8> = (0..9).map(|col| grid.get(Position::new(0, col))).collect();
        row.sort_unstable();
        assert_eq!(row, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_repeated_runs_valid_and_not_all_identical() {
        let mut maker = Maker::new();
        let mut seen = HashSet::new();
        for _ in 0..50 {
            let grid = maker.generate().expect("empty grid is always solvable");
            assert!(grid.is_solved());
            seen.insert(grid.to_line());
        }
        assert!(seen.len() > 1, "50 runs produced one identical grid");
    }

    #[test]
    fn test_seeded_runs_reproduce() {
        let mut a = Maker::with_seed(42);
        let mut b = Maker::with_seed(42);
        assert_eq!(a.generate(), b.generate());
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = Maker::with_seed(42);
        let mut b = Maker::with_seed(43);
        assert_ne!(a.generate(), b.generate());
    }

    #[test]
    fn test_solve_completes_partial_grid_keeping_givens() {
        let puzzle =
            "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
        let givens = Grid::from_string(puzzle).unwrap();
        let mut maker = Maker::from_grid(givens);
        assert!(maker.solve());
        assert!(maker.grid().is_solved());
        for pos in Position::all() {
            if !givens.is_blank(pos) {
                assert_eq!(maker.grid().get(pos), givens.get(pos));
            }
        }
    }

    #[test]
    fn test_solve_reports_dead_end_and_restores_grid() {
        // Row 0 forces a 9 into its last cell, but column 8 already has one.
        let mut grid = Grid::new();
        for col in 0..8 {
            grid.set(Position::new(0, col), col as u8 + 1);
        }
        grid.set(Position::new(1, 8), 9);

        let before = grid;
        let mut maker = Maker::from_grid(grid);
        assert!(!maker.solve());
        assert_eq!(*maker.grid(), before);
    }

    #[test]
    fn test_reset_empties_grid() {
        let mut maker = Maker::with_seed(42);
        assert!(maker.solve());
        maker.reset();
        assert_eq!(*maker.grid(), Grid::new());
    }

    #[test]
    fn test_into_grid_returns_solution() {
        let mut maker = Maker::with_seed(42);
        maker.generate().unwrap();
        assert!(maker.into_grid().is_solved());
    }
}
