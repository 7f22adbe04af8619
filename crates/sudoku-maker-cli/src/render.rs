use clap::ValueEnum;
use serde::Serialize;
use std::io::{self, Write};
use sudoku_maker_core::Grid;

/// Output format for a finished grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Bordered text, blanks printed as spaces.
    Text,
    /// Compact 81-character line.
    Line,
    /// One JSON object per grid.
    Json,
}

#[derive(Serialize)]
struct Record {
    seed: Option<u64>,
    grid: [[u8; 9]; 9],
}

/// Write one grid to `out` in the requested format.
pub fn write_grid(
    out: &mut impl Write,
    grid: &Grid,
    format: Format,
    seed: Option<u64>,
) -> io::Result<()> {
    match format {
        Format::Text => writeln!(out, "{grid}"),
        Format::Line => writeln!(out, "{}", grid.to_line()),
        Format::Json => {
            serde_json::to_writer(&mut *out, &Record { seed, grid: grid.rows() })?;
            writeln!(out)
        }
    }
}
