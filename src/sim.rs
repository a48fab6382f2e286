use tracing::{debug, info, trace, warn};

use crate::{
    cycle::{CycleEngine, Rule},
    grid::Grid,
    neighbor::NeighborCounter,
    Error,
};

#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub final_grid: Grid,
    pub cycles_run: usize, // Count of cycles which changed the grid.
    pub occupied_count: usize,
}

type Observer<'a> = Box<dyn FnMut(usize, &Grid) + 'a>;

pub struct Simulator<'a, C> {
    rule: &'a Rule<C>,
    engine: CycleEngine,
    max_cycles: usize,
    observer: Option<Observer<'a>>,
}

impl<'a, C: NeighborCounter> Simulator<'a, C> {
    pub fn new(rule: &'a Rule<C>, max_cycles: usize) -> Self {
        Self {
            rule,
            engine: CycleEngine::default(),
            max_cycles,
            observer: None,
        }
    }

    pub fn with_engine(mut self, engine: CycleEngine) -> Self {
        self.engine = engine;
        self
    }

    pub fn with_observer<F: FnMut(usize, &Grid) + 'a>(mut self, observer: F) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    // The cycle which finds no change counts toward `max_cycles`, but not toward `cycles_run`.
    pub fn run(&mut self, initial: Grid) -> Result<SimulationResult, Error> {
        trace!(
            rows = initial.row_n(),
            cols = initial.col_n(),
            threshold = self.rule.threshold(),
            traversal = ?self.engine.traversal(),
            "simulation begins"
        );
        let mut bufs = GridBuffers::new(initial);
        let mut cycles_run = 0;
        for cycle in 1..=self.max_cycles {
            let (r_buf, w_buf) = bufs.rw_bufs();
            let chg_count = self.engine.apply_into(r_buf, self.rule, w_buf);
            let next: &Grid = w_buf;
            let is_stable = next == r_buf;
            debug_assert_eq!(is_stable, chg_count == 0);
            if let Some(observer) = self.observer.as_mut() {
                observer(cycle, next);
            }
            debug!(
                cycle,
                chg_count,
                occupied = next.occupied_count(),
                "cycle completed"
            );
            bufs.swap_bufs();

            if is_stable {
                let final_grid = bufs.into_cur();
                let occupied_count = final_grid.occupied_count();
                info!(cycles_run, occupied_count, "seats layout stabilized");
                return Ok(SimulationResult {
                    final_grid,
                    cycles_run,
                    occupied_count,
                });
            }
            cycles_run += 1;
        }

        warn!(max_cycles = self.max_cycles, "seats layout didn't stabilize");
        Err(Error::NonConvergence(self.max_cycles, Box::new(bufs.into_cur())))
    }
}

pub fn run<C: NeighborCounter>(
    initial: Grid,
    rule: &Rule<C>,
    max_cycles: usize,
) -> Result<SimulationResult, Error> {
    Simulator::new(rule, max_cycles).run(initial)
}

// Current grid and the one being written by next cycle.
struct GridBuffers {
    bufs: [Grid; 2],
    cur_buf_ind: usize,
}

impl GridBuffers {
    pub fn new(initial: Grid) -> Self {
        Self {
            bufs: [initial.clone(), initial],
            cur_buf_ind: 0,
        }
    }

    pub fn rw_bufs(&mut self) -> (&Grid, &mut Grid) {
        let (left, right) = self.bufs.split_at_mut(1);
        if self.cur_buf_ind == 0 {
            (&left[0], &mut right[0])
        } else {
            (&right[0], &mut left[0])
        }
    }

    pub fn swap_bufs(&mut self) {
        self.cur_buf_ind = 1 - self.cur_buf_ind;
    }

    pub fn into_cur(self) -> Grid {
        let [first, second] = self.bufs;
        if self.cur_buf_ind == 0 {
            first
        } else {
            second
        }
    }
}
