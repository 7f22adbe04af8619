mod render;

use clap::Parser;
use render::Format;
use std::io::{self, Write};
use sudoku_maker_core::Maker;

/// Generate fully-solved Sudoku grids and print them.
#[derive(Parser, Debug)]
#[command(name = "sudoku-maker", version, about = "Generates fully-solved Sudoku grids")]
struct Cli {
    /// Seed for reproducible output; random when omitted.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of grids to generate.
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let mut maker = match cli.seed {
        Some(seed) => Maker::with_seed(seed),
        None => Maker::new(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    for i in 0..cli.count {
        let Some(grid) = maker.generate() else {
            // Unreachable from an empty grid, but the search reports it.
            eprintln!("sudoku-maker: search exhausted without completing a grid");
            std::process::exit(1);
        };
        debug_assert!(grid.is_solved());

        render::write_grid(&mut out, &grid, cli.format, cli.seed)?;
        if cli.format == Format::Text && i + 1 < cli.count {
            writeln!(out)?;
        }
    }

    Ok(())
}
