//! Basic tour of the grid maker.

use sudoku_maker_core::{Grid, Maker};

fn main() {
    println!("Building a solved grid...\n");
    let mut maker = Maker::new();
    match maker.generate() {
        Some(grid) => println!("{grid}\n"),
        None => println!("search exhausted without a solution"),
    }

    println!("The same seed always yields the same grid:");
    let mut seeded = Maker::with_seed(42);
    if let Some(grid) = seeded.generate() {
        println!("{}\n", grid.to_line());
    }

    // Round-trip a grid through its compact 81-character form.
    let line = "534678912672195348198342567859761423426853791713924856961537284287419635345286179";
    if let Some(grid) = Grid::from_string(line) {
        println!("Parsed from a compact line (solved: {}):", grid.is_solved());
        println!("{grid}");
    }
}
