use crate::{BoardError, BoardObserver};

/// A finite `side x side` Game of Life field with a clipped (non-toroidal)
/// boundary.
///
/// The board owns the single authoritative copy of the simulation state and
/// reports every cell write to its observer, so a presentation layer stays
/// in sync without polling. Dimensions are fixed for the board's lifetime;
/// changing the side length means constructing a new board.
pub struct Board<O> {
    side: usize,
    cells: Vec<bool>,
    cells_next: Vec<bool>,
    observer: O,
}

impl<O: BoardObserver> Board<O> {
    /// Creates an all-dead board. The observer is not notified about the
    /// initial state; "everything dead" is the baseline it is assumed to
    /// already display.
    pub fn new(side: usize, observer: O) -> Self {
        assert!(side >= 1, "board side must be at least 1");
        Self {
            side,
            cells: vec![false; side * side],
            cells_next: vec![false; side * side],
            observer,
        }
    }

    /// Side length of the square field.
    pub fn side(&self) -> usize {
        self.side
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    fn index(&self, x: usize, y: usize) -> Result<usize, BoardError> {
        if x < self.side && y < self.side {
            Ok(x * self.side + y)
        } else {
            Err(BoardError::OutOfRangeCoordinate {
                x,
                y,
                side: self.side,
            })
        }
    }

    // Set semantics for coordinates already known to be in range:
    // notify first, then store, even when the value is unchanged.
    fn write_cell(&mut self, x: usize, y: usize, alive: bool) {
        self.observer.on_set(x, y, alive);
        self.cells[x * self.side + y] = alive;
    }

    /// Assigns a cell and notifies `on_set`, unconditionally. Re-setting a
    /// cell to its current value still fires the notification.
    pub fn set_cell(&mut self, x: usize, y: usize, alive: bool) -> Result<(), BoardError> {
        self.index(x, y)?;
        self.write_cell(x, y, alive);
        Ok(())
    }

    /// Flips a cell and notifies `on_toggle` (not `on_set`).
    pub fn toggle_cell(&mut self, x: usize, y: usize) -> Result<(), BoardError> {
        let idx = self.index(x, y)?;
        self.observer.on_toggle(x, y);
        self.cells[idx] = !self.cells[idx];
        Ok(())
    }

    /// Current state of a cell; `true` is alive.
    pub fn cell_state(&self, x: usize, y: usize) -> Result<bool, BoardError> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Kills every cell, visiting the field in row-major order (x ascending,
    /// y ascending within each x) with set semantics, so `on_set` fires once
    /// per cell.
    pub fn clear(&mut self) {
        for x in 0..self.side {
            for y in 0..self.side {
                self.write_cell(x, y, false);
            }
        }
    }

    /// Visits every coordinate exactly once in row-major order, passing the
    /// board itself, the coordinate and the cell state at visit time.
    ///
    /// The traversal sequence is fixed up front: `f` may freely mutate the
    /// board (the writes take effect immediately) without affecting which
    /// coordinates are still visited.
    pub fn for_each_cell(&mut self, mut f: impl FnMut(&mut Self, usize, usize, bool)) {
        let side = self.side;
        for x in 0..side {
            for y in 0..side {
                let state = self.cells[x * side + y];
                f(self, x, y, state);
            }
        }
    }

    // Alive cells in the Moore neighborhood, with out-of-field neighbors
    // excluded on both axes independently. Assumes (x, y) is in range.
    fn alive_neighbors(&self, x: usize, y: usize) -> usize {
        let mut alive = 0;
        for nx in x.saturating_sub(1)..=(x + 1).min(self.side - 1) {
            for ny in y.saturating_sub(1)..=(y + 1).min(self.side - 1) {
                if (nx, ny) != (x, y) && self.cells[nx * self.side + ny] {
                    alive += 1;
                }
            }
        }
        alive
    }

    /// Number of alive cells among the up-to-8 neighbors of `(x, y)`.
    /// Neighbors outside the field are excluded from the count, so a corner
    /// cell has at most 3 candidates and an edge cell at most 5.
    pub fn neighbor_count(&self, x: usize, y: usize) -> Result<usize, BoardError> {
        self.index(x, y)?;
        Ok(self.alive_neighbors(x, y))
    }

    /// Advances the simulation by one generation.
    ///
    /// The whole next generation is computed against the pre-step snapshot
    /// before anything is written back, then applied in row-major order with
    /// set semantics. `on_set` therefore fires for all `side * side` cells
    /// every generation, unchanged cells included, and the observer never
    /// sees a generation that mixes old and new values.
    pub fn step(&mut self) {
        let side = self.side;
        for x in 0..side {
            for y in 0..side {
                let neibs = self.alive_neighbors(x, y);
                let idx = x * side + y;
                self.cells_next[idx] = match neibs {
                    0 | 1 => false,
                    2 => self.cells[idx],
                    3 => true,
                    _ => false,
                };
            }
        }
        for x in 0..side {
            for y in 0..side {
                let alive = self.cells_next[x * side + y];
                self.write_cell(x, y, alive);
            }
        }
    }

    /// Fills the field with random cells, each alive with probability
    /// `fill_rate`. A fixed seed gives a reproducible soup. Writes go
    /// through set semantics, so the observer stays in sync.
    pub fn randomize(&mut self, seed: Option<u64>, fill_rate: f64) {
        use rand::{Rng, SeedableRng};
        use rand_chacha::ChaCha8Rng;

        let mut rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        for x in 0..self.side {
            for y in 0..self.side {
                self.write_cell(x, y, rng.gen_bool(fill_rate));
            }
        }
    }
}
