use std::iter;

use crate::grid::{Cell, Direction, Grid, Position};

/// Counts occupied seats around a position, reading given grid only.
pub trait NeighborCounter: Sync {
    fn count_occupied(&self, grid: &Grid, pos: &Position) -> usize;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Adjacent;

impl NeighborCounter for Adjacent {
    fn count_occupied(&self, grid: &Grid, pos: &Position) -> usize {
        Direction::all()
            .iter()
            .filter_map(|dir| pos.along(*dir))
            .filter(|p| grid.get(p) == Some(Cell::Occupied))
            .count()
    }
}

/// First seat seen in each of the eight directions, floor is looked through.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineOfSight;

impl LineOfSight {
    pub fn first_seat(grid: &Grid, pos: &Position, dir: Direction) -> Option<Cell> {
        iter::successors(pos.along(dir), |p| p.along(dir))
            .map_while(|p| grid.get(&p))
            .find(Cell::is_seat)
    }
}

impl NeighborCounter for LineOfSight {
    fn count_occupied(&self, grid: &Grid, pos: &Position) -> usize {
        Direction::all()
            .iter()
            .filter(|dir| Self::first_seat(grid, pos, **dir) == Some(Cell::Occupied))
            .count()
    }
}
