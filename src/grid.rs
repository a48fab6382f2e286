use std::{array, fmt::Display, str::FromStr};

use int_enum::IntEnum;
use once_cell::sync::Lazy;

use crate::Error;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntEnum)]
pub enum Cell {
    Occupied = 35, // ASCII of '#', '.' and 'L'.
    Floor = 46,
    Empty = 76,
}

impl Cell {
    pub fn is_seat(&self) -> bool {
        *self != Cell::Floor
    }
}

impl TryFrom<char> for Cell {
    type Error = char;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .and_then(|b| Cell::try_from(b).ok())
            .ok_or(value)
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", char::from(u8::from(*self)))
    }
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntEnum)]
pub enum Direction {
    North = 0,
    NorthEast = 1,
    East = 2,
    SouthEast = 3,
    South = 4,
    SouthWest = 5,
    West = 6,
    NorthWest = 7,
}

impl Direction {
    pub fn all() -> &'static [Direction] {
        static ALL_DIRS: Lazy<[Direction; 8]> =
            Lazy::new(|| array::from_fn(|ind| Direction::try_from(ind as u8).unwrap()));

        ALL_DIRS.as_ref()
    }

    pub fn offset(&self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    r: usize,
    c: usize,
}

impl Position {
    pub fn new(r: usize, c: usize) -> Self {
        Self { r, c }
    }

    pub fn r(&self) -> usize {
        self.r
    }

    pub fn c(&self) -> usize {
        self.c
    }

    pub fn along(&self, dir: Direction) -> Option<Self> {
        let (dr, dc) = dir.offset();
        let r = self.r.checked_add_signed(dr)?;
        let c = self.c.checked_add_signed(dc)?;
        Some(Self::new(r, c))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    row_n: usize,
    col_n: usize,
}

impl Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r_ind, row) in self.rows().enumerate() {
            if r_ind != 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell)?;
            }
        }

        Ok(())
    }
}

impl FromStr for Grid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Grid {
    pub fn parse(text: &str) -> Result<Self, Error> {
        let mut builder = GridBuilder::new();
        for line in text.lines() {
            builder.add_row(line)?;
        }

        builder.build()
    }

    pub fn at(&self, r: usize, c: usize) -> Cell {
        assert!(
            r < self.row_n && c < self.col_n,
            "Position({}, {}) is out of grid({} x {}).",
            r,
            c,
            self.row_n,
            self.col_n
        );
        self.cells[r * self.col_n + c]
    }

    pub fn get(&self, pos: &Position) -> Option<Cell> {
        self.pos_to_ind(pos).map(|ind| self.cells[ind])
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.row_n, self.col_n)
    }

    pub fn row_n(&self) -> usize {
        self.row_n
    }

    pub fn col_n(&self) -> usize {
        self.col_n
    }

    pub fn count(&self, target: Cell) -> usize {
        self.cells.iter().filter(|cell| **cell == target).count()
    }

    pub fn occupied_count(&self) -> usize {
        self.count(Cell::Occupied)
    }

    pub fn empty_count(&self) -> usize {
        self.count(Cell::Empty)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.col_n)
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    fn pos_to_ind(&self, pos: &Position) -> Option<usize> {
        if pos.r >= self.row_n || pos.c >= self.col_n {
            None
        } else {
            Some(pos.r * self.col_n + pos.c)
        }
    }
}

pub struct GridBuilder {
    cells: Vec<Cell>,
    row_n: usize,
    col_n: Option<usize>,
}

impl GridBuilder {
    pub fn new() -> Self {
        Self {
            cells: Vec::new(),
            row_n: 0,
            col_n: None,
        }
    }

    pub fn add_row(&mut self, row_text: &str) -> Result<(), Error> {
        let this_col_n = row_text.chars().count();
        if this_col_n == 0 {
            return Ok(());
        }

        let expect_col_n = *self.col_n.get_or_insert(this_col_n);
        if expect_col_n != this_col_n {
            return Err(Error::InconsistentRow(self.row_n, this_col_n, expect_col_n));
        }

        for (c_ind, c) in row_text.chars().enumerate() {
            let cell =
                Cell::try_from(c).map_err(|c| Error::InvalidCellChar(c, self.row_n, c_ind))?;
            self.cells.push(cell);
        }
        self.row_n += 1;

        Ok(())
    }

    pub fn build(self) -> Result<Grid, Error> {
        match self.col_n {
            Some(col_n) => Ok(Grid {
                cells: self.cells,
                row_n: self.row_n,
                col_n,
            }),
            None => Err(Error::EmptyGrid),
        }
    }
}
