//! Dense cell grids: the live board and its padded previous-generation buffer.

use crate::error::{LifeError, Result};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Cell value for a dead cell
pub const DEAD: u8 = 0;
/// Cell value for a live cell
pub const ALIVE: u8 = 1;

/// The live board, `width × height`, indexed `[x][y]`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    /// cells[x][y], 0 or 1
    cells: Vec<Vec<u8>>,
}

impl Grid {
    /// Create an all-dead grid. Both dimensions must be positive.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 {
            return Err(LifeError::invalid_dimension("width", "must be > 0"));
        }
        if height == 0 {
            return Err(LifeError::invalid_dimension("height", "must be > 0"));
        }

        Ok(Self {
            width,
            height,
            cells: vec![vec![DEAD; height]; width],
        })
    }

    /// Create a grid where each cell is alive with probability `density`
    pub fn random(width: usize, height: usize, density: f64, seed: u64) -> Result<Self> {
        if !(0.0..=1.0).contains(&density) {
            return Err(LifeError::invalid_dimension(
                "density",
                format!("{} is not between 0.0 and 1.0", density),
            ));
        }

        let mut grid = Self::new(width, height)?;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        for row in &mut grid.cells {
            for cell in row {
                if rng.gen_bool(density) {
                    *cell = ALIVE;
                }
            }
        }

        Ok(grid)
    }

    /// Number of rows (range of x)
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of columns (range of y)
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether (x, y) lies on the board
    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Cell value at (x, y); off-board reads are dead
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        if self.contains(x, y) {
            self.cells[x][y]
        } else {
            DEAD
        }
    }

    /// Set a cell alive or dead. Off-board writes are ignored.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        if self.contains(x, y) {
            self.cells[x][y] = if alive { ALIVE } else { DEAD };
        }
    }

    #[inline]
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.get(x, y) == ALIVE
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        for row in &mut self.cells {
            row.fill(DEAD);
        }
    }

    /// Count live cells
    pub fn live_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == ALIVE).count()
    }

    /// Live cells in row-major order: all of row 0, then row 1, ...
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().enumerate().flat_map(|(x, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &c)| c == ALIVE)
                .map(move |(y, _)| (x, y))
        })
    }
}

/// Previous-generation buffer with a permanently dead one-cell border.
///
/// Sized `(width + 2) × (height + 2)`; the interior at offset (1, 1) mirrors
/// the live grid as it was when [`ShadowGrid::capture`] last ran.
#[derive(Clone, Debug)]
pub struct ShadowGrid {
    width: usize,
    height: usize,
    /// cells[i][j] in padded coordinates
    cells: Vec<Vec<u8>>,
}

impl ShadowGrid {
    /// Allocate a zeroed buffer for a `width × height` board
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![vec![DEAD; height + 2]; width + 2],
        }
    }

    /// Allocate a buffer matching `grid`
    pub fn for_grid(grid: &Grid) -> Self {
        Self::new(grid.width(), grid.height())
    }

    /// Unpadded board width
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Unpadded board height
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether this buffer was sized for `grid`
    pub fn matches(&self, grid: &Grid) -> bool {
        self.width == grid.width() && self.height == grid.height()
    }

    /// Copy `grid` into the interior. The border is never written.
    ///
    /// # Panics
    ///
    /// Panics unless [`ShadowGrid::matches`] holds for `grid`.
    pub fn capture(&mut self, grid: &Grid) {
        assert!(
            self.matches(grid),
            "shadow grid is {}x{}, board is {}x{}",
            self.width,
            self.height,
            grid.width(),
            grid.height()
        );

        for (x, row) in grid.cells.iter().enumerate() {
            self.cells[x + 1][1..=self.height].copy_from_slice(row);
        }
    }

    /// Value at padded position (i, j)
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> u8 {
        self.cells[i][j]
    }

    /// Sum of the 8 cells around padded position (i, j).
    /// Valid for interior positions `i ∈ [1, width]`, `j ∈ [1, height]`.
    #[inline]
    pub fn neighbors(&self, i: usize, j: usize) -> u8 {
        let above = &self.cells[i - 1];
        let row = &self.cells[i];
        let below = &self.cells[i + 1];

        above[j - 1] + above[j] + above[j + 1]
            + row[j - 1] + row[j + 1]
            + below[j - 1] + below[j] + below[j + 1]
    }

    /// Check that no padding cell has ever been set
    pub fn border_is_dead(&self) -> bool {
        let last_i = self.width + 1;
        let last_j = self.height + 1;

        let rows_dead = self.cells[0].iter().all(|&c| c == DEAD)
            && self.cells[last_i].iter().all(|&c| c == DEAD);
        let cols_dead = self
            .cells
            .iter()
            .all(|row| row[0] == DEAD && row[last_j] == DEAD);

        rows_dead && cols_dead
    }
}
