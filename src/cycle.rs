use rayon::{
    iter::{IndexedParallelIterator, ParallelIterator},
    slice::ParallelSliceMut,
};

use crate::{
    grid::{Cell, Grid, Position},
    neighbor::{Adjacent, LineOfSight, NeighborCounter},
};

#[derive(Debug, Clone)]
pub struct Rule<C> {
    counter: C,
    threshold: usize,
}

impl Rule<Adjacent> {
    pub fn adjacent() -> Self {
        Self::new(Adjacent, 4)
    }
}

impl Rule<LineOfSight> {
    pub fn line_of_sight() -> Self {
        Self::new(LineOfSight, 5)
    }
}

impl<C: NeighborCounter> Rule<C> {
    pub fn new(counter: C, threshold: usize) -> Self {
        Self { counter, threshold }
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    // `cell` is the one at `pos` in `grid`.
    pub fn next_cell(&self, grid: &Grid, pos: &Position, cell: Cell) -> Cell {
        match cell {
            Cell::Empty if self.counter.count_occupied(grid, pos) == 0 => Cell::Occupied,
            Cell::Occupied if self.counter.count_occupied(grid, pos) >= self.threshold => {
                Cell::Empty
            }
            cell => cell,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Traversal {
    RowMajor,
    ColumnMajor,
    Reversed,
    #[default]
    ParallelRows,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CycleEngine {
    traversal: Traversal,
}

impl CycleEngine {
    pub fn new(traversal: Traversal) -> Self {
        Self { traversal }
    }

    pub fn traversal(&self) -> Traversal {
        self.traversal
    }

    pub fn apply<C: NeighborCounter>(&self, grid: &Grid, rule: &Rule<C>) -> Grid {
        let mut next = grid.clone();
        self.apply_into(grid, rule, &mut next);
        next
    }

    // Neighbors are only ever read from `src`, returns count of changed cells.
    pub fn apply_into<C: NeighborCounter>(
        &self,
        src: &Grid,
        rule: &Rule<C>,
        dst: &mut Grid,
    ) -> usize {
        if dst.dimensions() != src.dimensions() {
            *dst = src.clone();
        }

        let (row_n, col_n) = src.dimensions();
        match self.traversal {
            Traversal::RowMajor => update_along(
                src,
                rule,
                dst,
                (0..row_n).flat_map(|r| (0..col_n).map(move |c| Position::new(r, c))),
            ),
            Traversal::ColumnMajor => update_along(
                src,
                rule,
                dst,
                (0..col_n).flat_map(|c| (0..row_n).map(move |r| Position::new(r, c))),
            ),
            Traversal::Reversed => update_along(
                src,
                rule,
                dst,
                (0..(row_n * col_n))
                    .rev()
                    .map(|ind| Position::new(ind / col_n, ind % col_n)),
            ),
            Traversal::ParallelRows => dst
                .cells_mut()
                .par_chunks_mut(col_n)
                .enumerate()
                .map(|(r, row)| {
                    row.iter_mut()
                        .enumerate()
                        .map(|(c, cell)| update(src, rule, &Position::new(r, c), cell))
                        .filter(|changed| *changed)
                        .count()
                })
                .sum(),
        }
    }
}

fn update_along<C: NeighborCounter>(
    src: &Grid,
    rule: &Rule<C>,
    dst: &mut Grid,
    order: impl Iterator<Item = Position>,
) -> usize {
    let col_n = src.col_n();
    let cells = dst.cells_mut();
    order
        .map(|pos| update(src, rule, &pos, &mut cells[pos.r() * col_n + pos.c()]))
        .filter(|changed| *changed)
        .count()
}

// Returns whether the cell changes.
fn update<C: NeighborCounter>(
    src: &Grid,
    rule: &Rule<C>,
    pos: &Position,
    cell: &mut Cell,
) -> bool {
    let cur = src.at(pos.r(), pos.c());
    let next = rule.next_cell(src, pos, cur);
    *cell = next;
    next != cur
}
