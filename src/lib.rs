use std::{
    error,
    fmt::Display,
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cycle;
mod grid;
mod neighbor;
mod sim;

pub use cycle::{CycleEngine, Rule, Traversal};
pub use grid::{Cell, Direction, Grid, GridBuilder, Position};
pub use neighbor::{Adjacent, LineOfSight, NeighborCounter};
pub use sim::{run, SimulationResult, Simulator};

pub const DEFAULT_MAX_CYCLES: usize = 1000;

#[derive(Debug)]
pub enum Error {
    IOError(io::Error),
    EmptyGrid,
    InconsistentRow(usize, usize, usize), // (row index, element count of this row, expect count of elements in earlier rows).
    InvalidCellChar(char, usize, usize),  // (character, row index, column index).
    NonConvergence(usize, Box<Grid>),     // (max count of cycles, grid after the last cycle).
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::IOError(ioe) => write!(f, "I/O error: {}", ioe),
            Error::EmptyGrid => write!(f, "Given seats layout has no row, expect one at least."),
            Error::InconsistentRow(row, this_col_n, expect_col_n) => write!(
                f,
                "Given row({}) has {} elements, expect {} elements as in earlier row(s).",
                row, this_col_n, expect_col_n
            ),
            Error::InvalidCellChar(c, row, col) => write!(
                f,
                "Invalid character({}) for seat at ({}, {}).",
                c, row, col
            ),
            Error::NonConvergence(max_cycles, last_grid) => write!(
                f,
                "Seats layout doesn't stabilize in {} cycle(s), {} seats are occupied after the last cycle.",
                max_cycles,
                last_grid.occupied_count()
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
    /// Give up if the seats layout hasn't stabilized after this many cycles.
    #[arg(long, default_value_t = DEFAULT_MAX_CYCLES)]
    pub max_cycles: usize,
    /// Print the seats layout after every cycle.
    #[arg(long)]
    pub show: bool,
    /// Update cells one by one on current thread.
    #[arg(long)]
    pub sequential: bool,
}

impl CLIArgs {
    pub fn traversal(&self) -> Traversal {
        if self.sequential {
            Traversal::RowMajor
        } else {
            Traversal::ParallelRows
        }
    }
}

/// Log to stderr, filtered by `RUST_LOG` (warnings only if unset).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

pub fn read_grid<P: AsRef<Path>>(path: P) -> Result<Grid, Error> {
    let file = File::open(path).map_err(Error::IOError)?;
    let reader = BufReader::new(file);
    let mut builder = GridBuilder::new();
    for line in reader.lines() {
        let s = line.map_err(Error::IOError)?;
        builder.add_row(&s)?;
    }

    builder.build()
}
